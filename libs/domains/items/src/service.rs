//! Item Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, ItemPage, ListItemsQuery, Pagination, UpdateItem};
use crate::repository::ItemRepository;

/// Default page number when the caller does not specify one.
pub const DEFAULT_PAGE: u32 = 1;
/// Default page size when the caller does not specify one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Item service orchestrating store operations, search filtering, and
/// pagination.
///
/// Input is validated before it reaches this layer (the validated
/// extractors short-circuit invalid requests), so the service only deals
/// with well-formed values.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List one page of items.
    ///
    /// When `search` is present the full collection is filtered first:
    /// an item matches when its name or description contains the term,
    /// compared case-insensitively as a plain substring. The page slice
    /// and the pagination metadata are computed over the filtered
    /// collection; a page past the end yields an empty slice, not an
    /// error.
    #[instrument(skip(self))]
    pub async fn list_items(&self, query: ListItemsQuery) -> ItemResult<ItemPage> {
        let page = query.page.unwrap_or(DEFAULT_PAGE);
        let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE);

        let items = self.repository.list().await?;

        let filtered: Vec<Item> = match query.search.as_deref() {
            Some(term) => {
                let needle = term.to_lowercase();
                items
                    .into_iter()
                    .filter(|item| {
                        item.name.to_lowercase().contains(&needle)
                            || item.description.to_lowercase().contains(&needle)
                    })
                    .collect()
            }
            None => items,
        };

        let total_items = filtered.len() as u64;
        let total_pages = total_items.div_ceil(u64::from(limit));
        let start = u64::from(page - 1) * u64::from(limit);

        let items: Vec<Item> = filtered
            .into_iter()
            .skip(start as usize)
            .take(limit as usize)
            .collect();

        Ok(ItemPage {
            items,
            pagination: Pagination {
                current_page: page,
                items_per_page: limit,
                total_items,
                total_pages,
            },
        })
    }

    /// Get an item by id
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: u64) -> ItemResult<Item> {
        self.repository
            .find(id)
            .await?
            .ok_or(ItemError::NotFound)
    }

    /// Create a new item
    #[instrument(skip(self, input), fields(item_name = %input.name))]
    pub async fn create_item(&self, input: CreateItem) -> ItemResult<Item> {
        self.repository.insert(input).await
    }

    /// Partially update an existing item
    #[instrument(skip(self, input))]
    pub async fn update_item(&self, id: u64, input: UpdateItem) -> ItemResult<Item> {
        self.repository.update(id, input).await
    }

    /// Delete an item
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: u64) -> ItemResult<()> {
        self.repository.remove(id).await
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockItemRepository;
    use chrono::Utc;

    fn item(id: u64, name: &str, description: &str) -> Item {
        let now = Utc::now();
        Item {
            id,
            name: name.to_string(),
            description: description.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn fixture() -> Vec<Item> {
        vec![
            item(1, "Widget A", "A basic widget for testing"),
            item(2, "Gadget B", "A fancy gadget for production"),
            item(3, "WIDGET C", "Another widget, uppercase name"),
        ]
    }

    #[tokio::test]
    async fn test_list_defaults_page_and_limit() {
        let mut repo = MockItemRepository::new();
        repo.expect_list().returning(|| Ok(fixture()));

        let service = ItemService::new(repo);
        let page = service.list_items(ListItemsQuery::default()).await.unwrap();

        assert_eq!(page.pagination.current_page, 1);
        assert_eq!(page.pagination.items_per_page, 10);
        assert_eq!(page.pagination.total_items, 3);
        assert_eq!(page.pagination.total_pages, 1);
        assert_eq!(page.items.len(), 3);
    }

    #[tokio::test]
    async fn test_list_search_is_case_insensitive_over_both_fields() {
        let mut repo = MockItemRepository::new();
        repo.expect_list().returning(|| Ok(fixture()));

        let service = ItemService::new(repo);
        let page = service
            .list_items(ListItemsQuery {
                search: Some("widget".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        // matches "Widget A" (name), "A basic widget..." is the same item,
        // and "WIDGET C" (uppercase name)
        assert_eq!(page.pagination.total_items, 2);
        let ids: Vec<u64> = page.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_list_search_matches_description() {
        let mut repo = MockItemRepository::new();
        repo.expect_list().returning(|| Ok(fixture()));

        let service = ItemService::new(repo);
        let page = service
            .list_items(ListItemsQuery {
                search: Some("PRODUCTION".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(page.pagination.total_items, 1);
        assert_eq!(page.items[0].id, 2);
    }

    #[tokio::test]
    async fn test_list_search_without_matches_is_empty_not_error() {
        let mut repo = MockItemRepository::new();
        repo.expect_list().returning(|| Ok(fixture()));

        let service = ItemService::new(repo);
        let page = service
            .list_items(ListItemsQuery {
                search: Some("zzz".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.pagination.total_items, 0);
        assert_eq!(page.pagination.total_pages, 0);
    }

    #[tokio::test]
    async fn test_list_pagination_slices_and_counts() {
        let mut repo = MockItemRepository::new();
        repo.expect_list().returning(|| {
            Ok((1..=25)
                .map(|i| item(i, &format!("Widget {i}"), "A basic widget for testing"))
                .collect())
        });

        let service = ItemService::new(repo);
        let page = service
            .list_items(ListItemsQuery {
                page: Some(3),
                limit: Some(10),
                search: None,
            })
            .await
            .unwrap();

        assert_eq!(page.items.len(), 5);
        assert_eq!(page.items[0].id, 21);
        assert_eq!(page.pagination.total_items, 25);
        assert_eq!(page.pagination.total_pages, 3);
    }

    #[tokio::test]
    async fn test_list_page_beyond_range_is_empty() {
        let mut repo = MockItemRepository::new();
        repo.expect_list().returning(|| Ok(fixture()));

        let service = ItemService::new(repo);
        let page = service
            .list_items(ListItemsQuery {
                page: Some(99),
                limit: Some(10),
                search: None,
            })
            .await
            .unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.pagination.total_items, 3);
        assert_eq!(page.pagination.current_page, 99);
    }

    #[tokio::test]
    async fn test_get_item_not_found() {
        let mut repo = MockItemRepository::new();
        repo.expect_find().returning(|_| Ok(None));

        let service = ItemService::new(repo);
        let result = service.get_item(42).await;
        assert!(matches!(result, Err(ItemError::NotFound)));
    }

    #[tokio::test]
    async fn test_get_item_found() {
        let mut repo = MockItemRepository::new();
        repo.expect_find()
            .returning(|id| Ok(Some(item(id, "Widget A", "A basic widget for testing"))));

        let service = ItemService::new(repo);
        let found = service.get_item(1).await.unwrap();
        assert_eq!(found.id, 1);
    }
}
