//! # Todo Client
//!
//! A to-do list backed by a REST item service.
//!
//! - [`item`]: items and the completion filter
//! - [`list`]: the pure list reducer ([`ListReducer`])
//! - [`service`]: the [`ItemService`] trait and its HTTP implementation
//! - [`app`]: the application reducer turning user intents into service calls
//! - [`view`]: the view-controller ([`TodoView`]) and its [`ViewModel`]
//! - [`command`]: terminal commands for the `todo` binary
//! - [`mocks`]: an in-memory [`ItemService`] for tests and demos
//!
//! ## Example
//!
//! ```no_run
//! use todo_client::{ClientConfig, HttpItemService, TodoView};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let service = HttpItemService::new(&ClientConfig::from_env())?;
//! let view = TodoView::new(service);
//!
//! view.mount().await?.wait().await;
//! view.submit_new_item("Do the other thing").await?.wait().await;
//!
//! println!("{}", view.render().await);
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod command;
pub mod config;
pub mod item;
pub mod list;
pub mod mocks;
pub mod service;
pub mod view;

pub use app::{TodoAction, TodoEnvironment, TodoReducer, TodoState};
pub use config::ClientConfig;
pub use item::{Item, ItemFilter, ItemId, NewItem};
pub use list::{ListAction, ListReducer, ListState};
pub use service::{HttpItemService, ItemService, ServiceError, ServiceOperation};
pub use view::{items_left_label, TodoView, ViewModel};
