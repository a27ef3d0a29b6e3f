//! Items API routes

use axum::Router;
use domain_items::{handlers, InMemoryItemRepository, ItemService};

/// Create the items router.
///
/// The store is constructed here, once, during startup; handlers only see
/// the service that owns it.
pub fn router() -> Router {
    let repository = InMemoryItemRepository::new();
    let service = ItemService::new(repository);
    handlers::router(service)
}
