//! In-memory implementation of ItemRepository

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, UpdateItem};
use crate::repository::ItemRepository;

/// Volatile, process-lifetime item store.
///
/// Holds the authoritative collection plus the id counter behind an async
/// `RwLock`: handlers run on a multithreaded runtime, so every mutation
/// (insert/update/remove) takes the write lock, keeping the id counter
/// consistent and updates lossless. Ids are assigned monotonically and
/// never reused, even after deletion.
///
/// Constructed once at startup and injected into the service; nothing else
/// holds references to the collection across calls.
pub struct InMemoryItemRepository {
    inner: RwLock<StoreState>,
}

struct StoreState {
    items: Vec<Item>,
    next_id: u64,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreState {
                items: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> ItemResult<Vec<Item>> {
        let state = self.inner.read().await;
        Ok(state.items.clone())
    }

    #[instrument(skip(self))]
    async fn find(&self, id: u64) -> ItemResult<Option<Item>> {
        let state = self.inner.read().await;
        Ok(state.items.iter().find(|item| item.id == id).cloned())
    }

    #[instrument(skip(self, input), fields(item_name = %input.name))]
    async fn insert(&self, input: CreateItem) -> ItemResult<Item> {
        let mut state = self.inner.write().await;
        let id = state.next_id;
        state.next_id += 1;

        let item = Item::new(id, input);
        state.items.push(item.clone());

        tracing::info!(item_id = id, "Item created");
        Ok(item)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: u64, input: UpdateItem) -> ItemResult<Item> {
        let mut state = self.inner.write().await;
        let item = state
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(ItemError::NotFound)?;

        item.apply_update(input);

        tracing::info!(item_id = id, "Item updated");
        Ok(item.clone())
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: u64) -> ItemResult<()> {
        let mut state = self.inner.write().await;
        let index = state
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(ItemError::NotFound)?;

        state.items.remove(index);

        tracing::info!(item_id = id, "Item deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input(name: &str) -> CreateItem {
        CreateItem {
            name: name.to_string(),
            description: "A basic widget for testing".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let repo = InMemoryItemRepository::new();
        let first = repo.insert(create_input("Widget A")).await.unwrap();
        let second = repo.insert(create_input("Widget B")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_insert_sets_equal_timestamps() {
        let repo = InMemoryItemRepository::new();
        let item = repo.insert(create_input("Widget A")).await.unwrap();
        assert_eq!(item.created_at, item.updated_at);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryItemRepository::new();
        let first = repo.insert(create_input("Widget A")).await.unwrap();
        repo.remove(first.id).await.unwrap();

        let second = repo.insert(create_input("Widget B")).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_find_after_remove_is_none() {
        let repo = InMemoryItemRepository::new();
        let item = repo.insert(create_input("Widget A")).await.unwrap();
        repo.remove(item.id).await.unwrap();
        assert!(repo.find(item.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_remove_missing_is_not_found() {
        let repo = InMemoryItemRepository::new();
        assert!(matches!(
            repo.remove(42).await,
            Err(ItemError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_update_overwrites_provided_fields_only() {
        let repo = InMemoryItemRepository::new();
        let item = repo.insert(create_input("Widget A")).await.unwrap();

        let updated = repo
            .update(
                item.id,
                UpdateItem {
                    name: Some("Widget B".to_string()),
                    description: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Widget B");
        assert_eq!(updated.description, item.description);
        assert!(updated.updated_at >= item.updated_at);
        assert_eq!(updated.created_at, item.created_at);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = InMemoryItemRepository::new();
        let result = repo.update(7, UpdateItem::default()).await;
        assert!(matches!(result, Err(ItemError::NotFound)));
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let repo = InMemoryItemRepository::new();
        repo.insert(create_input("Widget A")).await.unwrap();
        repo.insert(create_input("Widget B")).await.unwrap();
        repo.insert(create_input("Widget C")).await.unwrap();

        let names: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(names, vec!["Widget A", "Widget B", "Widget C"]);
    }
}
