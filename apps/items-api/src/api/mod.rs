//! API routes module

pub mod health;
pub mod items;

use axum::Router;

/// Create all API routes that live under the configurable prefix.
pub fn routes() -> Router {
    Router::new().nest("/items", items::router())
}
