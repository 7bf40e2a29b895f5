//! Item storage.
//!
//! [`ItemRepository`] is the seam between the handlers and wherever items
//! live. The only implementation kept here is in memory; items are lost
//! when the process exits.

use crate::item::TodoItem;
use std::collections::BTreeMap;
use std::future::Future;
use thiserror::Error;
use tokio::sync::RwLock;

/// Longest accepted description, in characters
pub const MAX_DESCRIPTION_LENGTH: usize = 1024;

/// Repository errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// No item with this id
    #[error("To-do item with id {0} not found")]
    NotFound(i64),

    /// Description longer than [`MAX_DESCRIPTION_LENGTH`] characters
    #[error("Description is {length} characters long, the limit is {MAX_DESCRIPTION_LENGTH}")]
    DescriptionTooLong {
        /// Actual length in characters
        length: usize,
    },

    /// Every id up to `i64::MAX` has been handed out
    #[error("No item ids left to assign")]
    IdsExhausted,
}

/// Check an item before it is stored
///
/// # Errors
///
/// Returns [`RepositoryError::DescriptionTooLong`] if the description
/// exceeds [`MAX_DESCRIPTION_LENGTH`] characters.
pub fn validate_description(description: &str) -> Result<(), RepositoryError> {
    let length = description.chars().count();
    if length > MAX_DESCRIPTION_LENGTH {
        return Err(RepositoryError::DescriptionTooLong { length });
    }
    Ok(())
}

/// Storage of to-do items
pub trait ItemRepository: Send + Sync {
    /// Every item, ordered by id
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if storage is unavailable.
    fn find_all(&self) -> impl Future<Output = Result<Vec<TodoItem>, RepositoryError>> + Send;

    /// The item with `id`
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if there is none.
    fn find_by_id(&self, id: i64) -> impl Future<Output = Result<TodoItem, RepositoryError>> + Send;

    /// Store a new item under a fresh id
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DescriptionTooLong`] if validation fails,
    /// or [`RepositoryError::IdsExhausted`] if no fresh id is left.
    fn insert(
        &self,
        description: String,
        completed: bool,
    ) -> impl Future<Output = Result<TodoItem, RepositoryError>> + Send;

    /// Store `item` under its id, replacing any existing item
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DescriptionTooLong`] if validation fails.
    fn save(&self, item: TodoItem) -> impl Future<Output = Result<TodoItem, RepositoryError>> + Send;

    /// Remove the item with `id`
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if there is none.
    fn delete_by_id(&self, id: i64) -> impl Future<Output = Result<(), RepositoryError>> + Send;
}

#[derive(Debug, Default)]
struct Items {
    by_id: BTreeMap<i64, TodoItem>,
    last_id: i64,
}

/// In-memory repository.
///
/// Ids start at 1 and only grow; an id saved explicitly through
/// [`save`](ItemRepository::save) is never handed out by a later insert.
#[derive(Debug, Default)]
pub struct InMemoryItemRepository {
    items: RwLock<Items>,
}

impl InMemoryItemRepository {
    /// Empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored items
    pub async fn len(&self) -> usize {
        self.items.read().await.by_id.len()
    }

    /// Whether nothing is stored
    pub async fn is_empty(&self) -> bool {
        self.items.read().await.by_id.is_empty()
    }
}

impl ItemRepository for InMemoryItemRepository {
    async fn find_all(&self) -> Result<Vec<TodoItem>, RepositoryError> {
        Ok(self.items.read().await.by_id.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<TodoItem, RepositoryError> {
        self.items
            .read()
            .await
            .by_id
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn insert(&self, description: String, completed: bool) -> Result<TodoItem, RepositoryError> {
        validate_description(&description)?;

        let mut items = self.items.write().await;
        let id = items.last_id.checked_add(1).ok_or(RepositoryError::IdsExhausted)?;
        items.last_id = id;
        let item = TodoItem {
            id,
            description,
            completed,
        };
        items.by_id.insert(item.id, item.clone());

        tracing::debug!(id = item.id, "Inserted item");
        Ok(item)
    }

    async fn save(&self, item: TodoItem) -> Result<TodoItem, RepositoryError> {
        validate_description(&item.description)?;

        let mut items = self.items.write().await;
        let last_id = items.last_id.max(item.id);
        items.last_id = last_id;
        if items.by_id.insert(item.id, item.clone()).is_none() {
            tracing::debug!(id = item.id, "Saved item under a new id");
        }
        Ok(item)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        self.items
            .write()
            .await
            .by_id
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound(id))
    }
}
