use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum::extract::State;
use axum_helpers::{ApiResponse, IdPath, ValidatedBody, ValidatedQuery};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, ItemPage, ListItemsQuery, Pagination, UpdateItem};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// OpenAPI documentation for the Items API
#[derive(OpenApi)]
#[openapi(
    paths(list_items, create_item, get_item, update_item, delete_item),
    components(schemas(Item, CreateItem, UpdateItem, ItemPage, Pagination)),
    tags(
        (name = "Items", description = "Item management endpoints (in-memory)")
    )
)]
pub struct ApiDoc;

/// Create the items router with all HTTP endpoints
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_items).post(create_item))
        .route(
            "/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .with_state(shared_service)
}

/// List items with pagination and optional search
#[utoipa::path(
    get,
    path = "",
    tag = "Items",
    params(ListItemsQuery),
    responses(
        (status = 200, description = "One page of items with pagination metadata", body = ItemPage),
        (status = 400, description = "Invalid query parameters")
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ValidatedQuery(query): ValidatedQuery<ListItemsQuery>,
) -> ItemResult<ApiResponse<ItemPage>> {
    let page = service.list_items(query).await?;
    Ok(ApiResponse::success("Items retrieved successfully", page))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "",
    tag = "Items",
    request_body = CreateItem,
    responses(
        (status = 201, description = "Item created successfully", body = Item),
        (status = 400, description = "Invalid request body")
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ValidatedBody(input): ValidatedBody<CreateItem>,
) -> ItemResult<impl IntoResponse> {
    let item = service.create_item(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Item created successfully", item)),
    ))
}

/// Get an item by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = u64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Item not found")
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
) -> ItemResult<ApiResponse<Item>> {
    let item = service.get_item(id).await?;
    Ok(ApiResponse::success("Item retrieved successfully", item))
}

/// Partially update an item
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = u64, Path, description = "Item ID")
    ),
    request_body = UpdateItem,
    responses(
        (status = 200, description = "Item updated successfully", body = Item),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Item not found")
    )
)]
async fn update_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
    ValidatedBody(input): ValidatedBody<UpdateItem>,
) -> ItemResult<ApiResponse<Item>> {
    let item = service.update_item(id, input).await?;
    Ok(ApiResponse::success("Item updated successfully", item))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = u64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item deleted successfully; data is null"),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Item not found")
    )
)]
async fn delete_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
) -> ItemResult<ApiResponse<serde_json::Value>> {
    service.delete_item(id).await?;
    Ok(ApiResponse::no_data("Item deleted successfully"))
}
