//! HTTP handlers for the item collection.

use crate::error::AppError;
use crate::item::{TodoItem, TodoItemRequest};
use crate::repository::ItemRepository;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

/// Shared handler state
pub struct AppState<R> {
    /// Where items are stored
    pub repository: Arc<R>,
}

impl<R> AppState<R> {
    /// State over `repository`
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

fn parse_body(body: Result<Json<TodoItemRequest>, JsonRejection>) -> Result<TodoItemRequest, AppError> {
    body.map(|Json(request)| request)
        .map_err(|rejection| AppError::bad_request(rejection.body_text()))
}

/// List every item.
///
/// ```text
/// GET /todos
/// ```
///
/// 200 with a JSON array, ordered by id.
pub async fn list_items<R: ItemRepository>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<TodoItem>>, AppError> {
    Ok(Json(state.repository.find_all().await?))
}

/// Fetch one item.
///
/// ```text
/// GET /todos/:id
/// ```
///
/// 200 with the item, 404 if there is none.
pub async fn get_item<R: ItemRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
) -> Result<Json<TodoItem>, AppError> {
    Ok(Json(state.repository.find_by_id(id).await?))
}

/// Create an item. Any id in the body is ignored.
///
/// ```text
/// POST /todos
/// {"description": "Do it", "completed": false}
/// ```
///
/// 201 with the stored item, 400 if the body is invalid or the description
/// is too long.
pub async fn create_item<R: ItemRepository>(
    State(state): State<AppState<R>>,
    body: Result<Json<TodoItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TodoItem>), AppError> {
    let request = parse_body(body)?;
    let item = state
        .repository
        .insert(request.description, request.completed)
        .await?;

    tracing::info!(id = item.id, "Created item");
    Ok((StatusCode::CREATED, Json(item)))
}

/// Store an item under the id in the path, creating it if needed.
///
/// ```text
/// PUT /todos/:id
/// {"id": 3, "description": "Do it", "completed": true}
/// ```
///
/// 200 with the stored item, 400 if the body is invalid or the description
/// is too long.
pub async fn update_item<R: ItemRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
    body: Result<Json<TodoItemRequest>, JsonRejection>,
) -> Result<Json<TodoItem>, AppError> {
    let request = parse_body(body)?;
    if request.id.is_some_and(|body_id| body_id != id) {
        tracing::debug!(id, body_id = ?request.id, "Ignoring id in body, using the path id");
    }

    let item = state.repository.save(request.into_item(id)).await?;

    tracing::info!(id, "Updated item");
    Ok(Json(item))
}

/// Delete an item.
///
/// ```text
/// DELETE /todos/:id
/// ```
///
/// 200 with an empty body, 404 if there is none.
pub async fn delete_item<R: ItemRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.repository.delete_by_id(id).await?;

    tracing::info!(id, "Deleted item");
    Ok(StatusCode::OK)
}
