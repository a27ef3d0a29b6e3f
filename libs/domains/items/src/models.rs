use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Item entity - a row in the volatile in-memory collection.
///
/// Serialized camelCase on the wire (`createdAt`, `updatedAt`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier, sequentially assigned and never reused
    pub id: u64,
    /// Item name, 3-100 characters after trimming
    pub name: String,
    /// Item description, 10-500 characters after trimming
    pub description: String,
    /// Creation timestamp, immutable after creation
    pub created_at: DateTime<Utc>,
    /// Last update timestamp, refreshed on every successful update
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new item.
///
/// Values are trimmed at deserialization, so the length rules below apply
/// to the trimmed text.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateItem {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 3, max = 100, message = "name must be between 3 and 100 characters"))]
    pub name: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(
        min = 10,
        max = 500,
        message = "description must be between 10 and 500 characters"
    ))]
    pub description: String,
}

/// DTO for partially updating an existing item.
///
/// Omitted fields keep their prior value. A field that is empty after
/// trimming deserializes to `None` and therefore also keeps the prior
/// value, matching the observed update semantics.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateItem {
    #[serde(default, deserialize_with = "trimmed_non_empty")]
    #[validate(length(min = 3, max = 100, message = "name must be between 3 and 100 characters"))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "trimmed_non_empty")]
    #[validate(length(
        min = 10,
        max = 500,
        message = "description must be between 10 and 500 characters"
    ))]
    pub description: Option<String>,
}

/// Query parameters for listing items.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema, IntoParams)]
pub struct ListItemsQuery {
    /// Page number, starting at 1
    #[validate(range(min = 1, message = "page must be a positive integer"))]
    pub page: Option<u32>,
    /// Page size, at most 100
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<u32>,
    /// Case-insensitive substring matched against name and description
    #[serde(default, deserialize_with = "trimmed_non_empty")]
    #[validate(length(max = 100, message = "search must be at most 100 characters"))]
    pub search: Option<String>,
}

/// Pagination metadata accompanying every list response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub items_per_page: u32,
    /// Item count after search filtering
    pub total_items: u64,
    /// `ceil(total_items / items_per_page)`
    pub total_pages: u64,
}

/// One page of items plus its pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemPage {
    pub items: Vec<Item>,
    pub pagination: Pagination,
}

impl Item {
    /// Create a new item with the given id; both timestamps are set from
    /// the same instant.
    pub fn new(id: u64, input: CreateItem) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: input.name,
            description: input.description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update. Provided fields overwrite; `updated_at` is
    /// always refreshed, even when no field is provided.
    pub fn apply_update(&mut self, update: UpdateItem) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        self.updated_at = Utc::now();
    }
}

fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}

fn trimmed_non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}
