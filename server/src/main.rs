//! To-do REST server.
//!
//! # Usage
//!
//! ```bash
//! PORT=8080 RUST_LOG=todo_server=debug cargo run --bin todo-server
//! ```
//!
//! # API Endpoints
//!
//! - `GET    /todos`     - List items
//! - `POST   /todos`     - Create an item
//! - `GET    /todos/:id` - Get one item
//! - `PUT    /todos/:id` - Create or replace an item
//! - `DELETE /todos/:id` - Delete an item

use std::sync::Arc;
use todo_server::{build_router, InMemoryItemRepository, ServerConfig};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_level))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = build_router(Arc::new(InMemoryItemRepository::new()));

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
