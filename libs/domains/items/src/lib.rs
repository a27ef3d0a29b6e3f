//! Items Domain
//!
//! A complete domain implementation for managing items in a volatile
//! in-memory store.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, validated extractors
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Search filtering, pagination, orchestration
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │ Repository  │  ← Storage primitives (trait + in-memory implementation)
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, DTOs, declarative validation rules
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_items::{handlers, InMemoryItemRepository, ItemService};
//!
//! // Construct the store once at startup and inject it
//! let repository = InMemoryItemRepository::new();
//! let service = ItemService::new(repository);
//!
//! // Create the Axum router
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ItemError, ItemResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryItemRepository;
pub use models::{CreateItem, Item, ItemPage, ListItemsQuery, Pagination, UpdateItem};
pub use repository::ItemRepository;
pub use service::ItemService;
