//! # Todo Server
//!
//! REST backend for the to-do list: an item collection under `/todos`
//! backed by an [`ItemRepository`].
//!
//! ```no_run
//! use std::sync::Arc;
//! use todo_server::{build_router, InMemoryItemRepository};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let app = build_router(Arc::new(InMemoryItemRepository::new()));
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod item;
pub mod repository;
pub mod router;

pub use config::ServerConfig;
pub use error::AppError;
pub use item::{TodoItem, TodoItemRequest};
pub use repository::{InMemoryItemRepository, ItemRepository, RepositoryError, MAX_DESCRIPTION_LENGTH};
pub use router::build_router;
