//! Counters for item mutations and list queries.

use metrics::{counter, describe_counter, describe_histogram, histogram};

pub(crate) fn describe() {
    describe_counter!("inventory_items_created_total", "Items created");
    describe_counter!("inventory_items_updated_total", "Items updated");
    describe_counter!("inventory_items_deleted_total", "Items deleted");
    describe_histogram!(
        "inventory_item_list_results",
        "Rows returned per list request"
    );
    describe_counter!(
        "inventory_item_searches_total",
        "List requests that carried a search term"
    );
}

pub struct ItemMetrics;

impl ItemMetrics {
    pub fn record_created() {
        counter!("inventory_items_created_total").increment(1);
    }

    pub fn record_updated() {
        counter!("inventory_items_updated_total").increment(1);
    }

    pub fn record_deleted() {
        counter!("inventory_items_deleted_total").increment(1);
    }

    pub fn record_list(returned: usize, searched: bool) {
        histogram!("inventory_item_list_results").record(returned as f64);
        if searched {
            counter!("inventory_item_searches_total").increment(1);
        }
    }
}
