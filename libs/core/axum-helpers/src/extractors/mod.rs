//! Custom extractors for Axum handlers.
//!
//! All of them reject with [`AppError`](crate::AppError), so a malformed
//! request always gets the standard JSON error body and a 422 status.

pub mod id_path;
pub mod validated_json;
pub mod validated_query;

pub use id_path::IdPath;
pub use validated_json::ValidatedJson;
pub use validated_query::ValidatedQuery;
