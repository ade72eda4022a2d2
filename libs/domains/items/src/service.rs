//! Item Service - validation and orchestration over a repository

use observability::items::ItemMetrics;
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, ItemListQuery, ItemListResponse, ItemStats, UpdateItem};
use crate::repository::ItemRepository;

pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, input), fields(item_name = %input.name))]
    pub async fn create_item(&self, input: CreateItem) -> ItemResult<Item> {
        input.validate()?;

        let item = self.repository.create(input).await?;
        ItemMetrics::record_created();
        Ok(item)
    }

    #[instrument(skip(self))]
    pub async fn get_item(&self, id: i32) -> ItemResult<Item> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn list_items(&self, query: ItemListQuery) -> ItemResult<ItemListResponse> {
        query.validate()?;

        let searched = query.search_term().is_some();
        let page = self.repository.list(query).await?;
        ItemMetrics::record_list(page.items.len(), searched);
        Ok(page)
    }

    /// Partial update. An empty payload still refreshes `updated_at`.
    #[instrument(skip(self, input))]
    pub async fn update_item(&self, id: i32, input: UpdateItem) -> ItemResult<Item> {
        input.validate()?;

        let item = self
            .repository
            .update(id, input)
            .await?
            .ok_or(ItemError::NotFound(id))?;
        ItemMetrics::record_updated();
        Ok(item)
    }

    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: i32) -> ItemResult<()> {
        if !self.repository.delete(id).await? {
            return Err(ItemError::NotFound(id));
        }
        ItemMetrics::record_deleted();
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn get_stats(&self) -> ItemResult<ItemStats> {
        self.repository.stats().await
    }
}
