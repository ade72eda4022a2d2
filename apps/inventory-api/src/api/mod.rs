//! API routes
//!
//! Everything is served at the root: `/items/...`, `/`, `/team`, `/ready`
//! and `/metrics`. `/health` is merged separately in `main`.

pub mod health;
pub mod info;
pub mod items;

use axum::{Router, routing::get};
use observability::metrics_handler;

use crate::state::AppState;

pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/items", items::router(state))
        .merge(info::router(state.config.app))
        .merge(health::router(state.clone()))
        .route("/metrics", get(metrics_handler))
}
