use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Condition, Expr};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbBackend, DbErr, EntityTrait, FromQueryResult,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Statement,
};

use crate::{
    entity,
    error::ItemResult,
    models::{CreateItem, Item, ItemListQuery, ItemListResponse, ItemStats, UpdateItem},
    repository::ItemRepository,
};

const STATS_SQL: &str = r#"
SELECT
    COUNT(*)::BIGINT                                  AS total_items,
    COALESCE(SUM(quantity), 0)::BIGINT                AS total_quantity,
    COALESCE(SUM(quantity * price), 0)::FLOAT8        AS total_value,
    COALESCE(AVG(price), 0)::FLOAT8                   AS average_price,
    COUNT(*) FILTER (WHERE quantity = 0)::BIGINT      AS out_of_stock_items
FROM items
"#;

#[derive(Debug, FromQueryResult)]
struct StatsRow {
    total_items: i64,
    total_quantity: i64,
    total_value: f64,
    average_price: f64,
    out_of_stock_items: i64,
}

impl From<StatsRow> for ItemStats {
    fn from(row: StatsRow) -> Self {
        Self {
            total_items: row.total_items.max(0) as u64,
            total_quantity: row.total_quantity,
            total_value: row.total_value,
            average_price: row.average_price,
            out_of_stock_items: row.out_of_stock_items.max(0) as u64,
        }
    }
}

/// Escape LIKE wildcards so the term matches literally.
pub(crate) fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn search_condition(term: &str) -> Condition {
    let pattern = format!("%{}%", escape_like(term));
    Condition::any()
        .add(Expr::col(entity::Column::Name).ilike(pattern.clone()))
        .add(Expr::col(entity::Column::Description).ilike(pattern))
}

pub struct PgItemRepository {
    db: DatabaseConnection,
}

impl PgItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    async fn create(&self, input: CreateItem) -> ItemResult<Item> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(item_id = model.id, "Created item");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> ItemResult<Option<Item>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self, query: ItemListQuery) -> ItemResult<ItemListResponse> {
        let mut select = entity::Entity::find();
        if let Some(term) = query.search_term() {
            select = select.filter(search_condition(term));
        }

        let total = select.clone().count(&self.db).await?;
        let models = select
            .order_by_asc(entity::Column::Id)
            .offset(query.skip)
            .limit(query.limit)
            .all(&self.db)
            .await?;

        Ok(ItemListResponse {
            total,
            items: models.into_iter().map(Into::into).collect(),
        })
    }

    async fn update(&self, id: i32, input: UpdateItem) -> ItemResult<Option<Item>> {
        let Some(model) = entity::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::ActiveModel = model.into();
        if let Some(name) = input.name {
            active_model.name = Set(name);
        }
        if let Some(description) = input.description {
            active_model.description = Set(description);
        }
        if let Some(price) = input.price {
            active_model.price = Set(price);
        }
        if let Some(quantity) = input.quantity {
            active_model.quantity = Set(quantity);
        }
        active_model.updated_at = Set(Some(chrono::Utc::now().into()));

        match active_model.update(&self.db).await {
            Ok(updated) => {
                tracing::info!(item_id = id, "Updated item");
                Ok(Some(updated.into()))
            }
            // Deleted between the read and the write
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: i32) -> ItemResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(item_id = id, "Deleted item");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn stats(&self) -> ItemResult<ItemStats> {
        let row = StatsRow::find_by_statement(Statement::from_string(
            DbBackend::Postgres,
            STATS_SQL,
        ))
        .one(&self.db)
        .await?;

        Ok(row.map(ItemStats::from).unwrap_or_default())
    }
}
