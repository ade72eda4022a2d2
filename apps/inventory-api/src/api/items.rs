//! Wires the items domain onto Postgres.

use axum::Router;
use domain_items::{ItemService, PgItemRepository, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = PgItemRepository::new(state.db.clone());
    handlers::router(ItemService::new(repository))
}
