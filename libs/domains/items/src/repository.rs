use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, ItemListQuery, ItemListResponse, ItemStats, UpdateItem};

/// Data access interface for items.
///
/// Input is assumed to be validated. Lookups by an unknown id return
/// `Ok(None)` / `Ok(false)` rather than an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Insert a new item and return it with its assigned id and timestamps
    async fn create(&self, input: CreateItem) -> ItemResult<Item>;

    async fn get_by_id(&self, id: i32) -> ItemResult<Option<Item>>;

    /// One page of items ordered by id, plus the total matching the search
    async fn list(&self, query: ItemListQuery) -> ItemResult<ItemListResponse>;

    /// Apply the present fields and stamp `updated_at`
    async fn update(&self, id: i32, input: UpdateItem) -> ItemResult<Option<Item>>;

    /// Returns whether a row was removed
    async fn delete(&self, id: i32) -> ItemResult<bool>;

    async fn stats(&self) -> ItemResult<ItemStats>;
}

#[derive(Debug, Default)]
struct Store {
    items: BTreeMap<i32, Item>,
    last_id: i32,
}

/// In-process repository used for tests and local runs without Postgres.
///
/// Ids increase monotonically and are never reused after a delete.
#[derive(Debug, Clone, Default)]
pub struct InMemoryItemRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(item: &Item, needle: &str) -> bool {
    item.name.to_lowercase().contains(needle)
        || item
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(needle))
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, input: CreateItem) -> ItemResult<Item> {
        let mut store = self.store.write().await;
        store.last_id += 1;

        let item = Item {
            id: store.last_id,
            name: input.name,
            description: input.description,
            price: input.price,
            quantity: input.quantity,
            created_at: Utc::now(),
            updated_at: None,
        };
        store.items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn get_by_id(&self, id: i32) -> ItemResult<Option<Item>> {
        Ok(self.store.read().await.items.get(&id).cloned())
    }

    async fn list(&self, query: ItemListQuery) -> ItemResult<ItemListResponse> {
        let store = self.store.read().await;
        let needle = query.search_term().map(str::to_lowercase);

        let matching: Vec<&Item> = store
            .items
            .values()
            .filter(|item| needle.as_deref().is_none_or(|n| matches(item, n)))
            .collect();

        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(usize::try_from(query.skip).unwrap_or(usize::MAX))
            .take(usize::try_from(query.limit).unwrap_or(usize::MAX))
            .cloned()
            .collect();

        Ok(ItemListResponse { total, items })
    }

    async fn update(&self, id: i32, input: UpdateItem) -> ItemResult<Option<Item>> {
        let mut store = self.store.write().await;
        let Some(item) = store.items.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(name) = input.name {
            item.name = name;
        }
        if let Some(description) = input.description {
            item.description = description;
        }
        if let Some(price) = input.price {
            item.price = price;
        }
        if let Some(quantity) = input.quantity {
            item.quantity = quantity;
        }
        item.updated_at = Some(Utc::now());

        Ok(Some(item.clone()))
    }

    async fn delete(&self, id: i32) -> ItemResult<bool> {
        Ok(self.store.write().await.items.remove(&id).is_some())
    }

    async fn stats(&self) -> ItemResult<ItemStats> {
        Ok(ItemStats::from_items(self.store.read().await.items.values()))
    }
}
