//! Wire and storage representation of items.

use serde::{Deserialize, Serialize};

/// A stored to-do item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Server-assigned id
    pub id: i64,
    /// What needs doing
    pub description: String,
    /// Whether the item is done
    pub completed: bool,
}

/// Body of POST and PUT requests
///
/// Every field is optional: a missing description is empty, a missing
/// completion flag is `false`. The id is ignored; the path (PUT) or the
/// repository (POST) decides it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TodoItemRequest {
    /// Ignored
    pub id: Option<i64>,
    /// What needs doing
    pub description: String,
    /// Whether the item is done
    pub completed: bool,
}

impl TodoItemRequest {
    /// The item to store under `id`
    #[must_use]
    pub fn into_item(self, id: i64) -> TodoItem {
        TodoItem {
            id,
            description: self.description,
            completed: self.completed,
        }
    }
}
