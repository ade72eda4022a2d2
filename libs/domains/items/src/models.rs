use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 100;
/// Largest offset the database accepts (`OFFSET` is a signed bigint)
pub const MAX_SKIP: u64 = i64::MAX as u64;

/// A stocked inventory item as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Server-assigned, never reused
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Laptop")]
    pub name: String,
    pub description: Option<String>,
    /// Unit price, always greater than zero
    #[schema(example = 15000000.0)]
    pub price: f64,
    #[schema(example = 10)]
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    /// `null` until the first update
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for `POST /items`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateItem {
    #[validate(length(min = 1, max = 100))]
    #[schema(example = "Laptop", min_length = 1, max_length = 100)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[validate(range(exclusive_min = 0.0))]
    #[schema(example = 15000000.0, exclusive_minimum = 0.0)]
    pub price: f64,
    #[serde(default)]
    #[validate(range(min = 0))]
    #[schema(example = 10, minimum = 0, default = 0)]
    pub quantity: i32,
}

/// Payload for `PUT /items/{id}`. Absent fields are left untouched.
///
/// `description` distinguishes absent (keep) from `null` (clear).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateItem {
    #[validate(length(min = 1, max = 100))]
    #[schema(min_length = 1, max_length = 100)]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[validate(range(exclusive_min = 0.0))]
    #[schema(exclusive_minimum = 0.0)]
    pub price: Option<f64>,
    #[validate(range(min = 0))]
    #[schema(minimum = 0)]
    pub quantity: Option<i32>,
}

impl UpdateItem {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.quantity.is_none()
    }
}

// A present key always yields Some, so `"description": null` becomes Some(None).
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Query parameters for `GET /items`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ItemListQuery {
    /// Rows to skip
    #[serde(default)]
    #[validate(range(max = MAX_SKIP))]
    #[param(minimum = 0, maximum = 9223372036854775807_i64, default = 0)]
    pub skip: u64,
    /// Page size
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100))]
    #[param(minimum = 1, maximum = 100, default = 20)]
    pub limit: u64,
    /// Case-insensitive substring matched against name and description
    pub search: Option<String>,
}

fn default_limit() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl Default for ItemListQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_PAGE_SIZE,
            search: None,
        }
    }
}

impl ItemListQuery {
    pub fn page(skip: u64, limit: u64) -> Self {
        Self {
            skip,
            limit,
            search: None,
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// The search term, if one was given. A blank term means no filter;
    /// anything else is matched as given, surrounding spaces included.
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// One page of items plus the number of rows matching the filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemListResponse {
    /// Matching rows, ignoring `skip` and `limit`
    pub total: u64,
    pub items: Vec<Item>,
}

/// Aggregates over the whole table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemStats {
    pub total_items: u64,
    /// Sum of `quantity`
    pub total_quantity: i64,
    /// Sum of `quantity * price`
    pub total_value: f64,
    /// Mean unit price, 0 when there are no items
    pub average_price: f64,
    /// Items whose quantity is 0
    pub out_of_stock_items: u64,
}

impl ItemStats {
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a Item>) -> Self {
        let mut stats = Self::default();
        let mut price_sum = 0.0;

        for item in items {
            stats.total_items += 1;
            stats.total_quantity += i64::from(item.quantity);
            stats.total_value += f64::from(item.quantity) * item.price;
            price_sum += item.price;
            if item.quantity == 0 {
                stats.out_of_stock_items += 1;
            }
        }

        if stats.total_items > 0 {
            stats.average_price = price_sum / stats.total_items as f64;
        }
        stats
    }
}
