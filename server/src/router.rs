//! Item router.

use crate::handlers::{self, AppState};
use crate::repository::ItemRepository;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the item router.
///
/// # Routes
///
/// - `GET /todos` - List items
/// - `POST /todos` - Create an item
/// - `GET /todos/:id` - Get one item
/// - `PUT /todos/:id` - Create or replace an item
/// - `DELETE /todos/:id` - Delete an item
///
/// The collection is also served at `/todos/`. Requests are traced, and any
/// origin may call the API.
pub fn build_router<R>(repository: Arc<R>) -> Router
where
    R: ItemRepository + 'static,
{
    let collection = get(handlers::list_items::<R>).post(handlers::create_item::<R>);

    Router::new()
        .route("/todos", collection.clone())
        .route("/todos/", collection)
        .route(
            "/todos/:id",
            get(handlers::get_item::<R>)
                .put(handlers::update_item::<R>)
                .delete(handlers::delete_item::<R>),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState::new(repository))
}
