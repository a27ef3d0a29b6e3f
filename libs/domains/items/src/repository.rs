use async_trait::async_trait;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, UpdateItem};

/// Repository trait for the item collection.
///
/// This trait defines the storage primitives used by the service layer.
/// The canonical implementation is the in-memory store; tests substitute
/// a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// All items in insertion order
    async fn list(&self) -> ItemResult<Vec<Item>>;

    /// Find an item by id
    async fn find(&self, id: u64) -> ItemResult<Option<Item>>;

    /// Assign the next id, stamp timestamps, and append a new item
    async fn insert(&self, input: CreateItem) -> ItemResult<Item>;

    /// Overwrite provided fields and refresh `updated_at`
    async fn update(&self, id: u64, input: UpdateItem) -> ItemResult<Item>;

    /// Remove an item by id
    async fn remove(&self, id: u64) -> ItemResult<()>;
}
