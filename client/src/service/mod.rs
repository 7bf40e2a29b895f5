//! Remote item service.
//!
//! The client never stores items itself. Every mutation is a request to the
//! backend, and the list only changes once the backend has answered.

mod error;
mod http;

pub use error::ServiceError;
pub use http::HttpItemService;

use crate::item::{Item, ItemId, NewItem};
use std::fmt;
use std::future::Future;

/// Backend operations on to-do items
///
/// Implementations must be cheap to clone: effects take their own copy of
/// the service so the futures they return are `'static`.
pub trait ItemService: Send + Sync {
    /// Store a new item and return it with its assigned id
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if the request fails or is rejected.
    fn create(&self, item: NewItem) -> impl Future<Output = Result<Item, ServiceError>> + Send;

    /// Fetch every item
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if the request fails or is rejected.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Item>, ServiceError>> + Send;

    /// Replace the item with the same id and return the stored version
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if the request fails or is rejected.
    fn update(&self, item: Item) -> impl Future<Output = Result<Item, ServiceError>> + Send;

    /// Delete the item with this id
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if the request fails or is rejected.
    fn delete_by_id(&self, id: ItemId) -> impl Future<Output = Result<(), ServiceError>> + Send;
}

/// The service call an error or a recorded call belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ServiceOperation {
    /// [`ItemService::create`]
    Create,
    /// [`ItemService::get_all`]
    GetAll,
    /// [`ItemService::update`]
    Update,
    /// [`ItemService::delete_by_id`]
    Delete,
}

impl ServiceOperation {
    /// Name used in logs and error messages
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::GetAll => "get_all",
            Self::Update => "update",
            Self::Delete => "delete_by_id",
        }
    }
}

impl fmt::Display for ServiceOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
