//! To-do items and the completion filter.
//!
//! Items are owned by the backend: the client never invents an id, it only
//! ever holds what the service returned.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Server-assigned identifier of a to-do item
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i64);

impl ItemId {
    /// Wraps a raw id as returned by the backend
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw id
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ItemId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// A single to-do item, as represented by the backend
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier (assigned by the server)
    pub id: ItemId,
    /// What needs doing
    pub description: String,
    /// Whether the item is done
    pub completed: bool,
}

impl Item {
    /// Creates an item
    #[must_use]
    pub fn new(id: ItemId, description: impl Into<String>, completed: bool) -> Self {
        Self {
            id,
            description: description.into(),
            completed,
        }
    }
}

/// An item that has not been stored yet (no id)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    /// What needs doing
    pub description: String,
    /// Whether the item is done
    pub completed: bool,
}

impl NewItem {
    /// A new, not yet completed item
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            completed: false,
        }
    }

    /// Attach the id the server assigned
    #[must_use]
    pub fn with_id(self, id: ItemId) -> Item {
        Item {
            id,
            description: self.description,
            completed: self.completed,
        }
    }
}

/// Which items the list shows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ItemFilter {
    /// Every item
    #[default]
    All,
    /// Items not completed yet
    Active,
    /// Completed items
    Completed,
}

impl ItemFilter {
    /// All filters, in the order the filter buttons are shown
    pub const ALL: [Self; 3] = [Self::All, Self::Active, Self::Completed];

    /// Whether `item` passes this filter
    #[must_use]
    pub const fn matches(self, item: &Item) -> bool {
        match self {
            Self::All => true,
            Self::Active => !item.completed,
            Self::Completed => item.completed,
        }
    }

    /// Button label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for ItemFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown filter name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter {0:?} (expected all, active or completed)")]
pub struct UnknownFilter(pub String);

impl FromStr for ItemFilter {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            _ => Err(UnknownFilter(s.to_string())),
        }
    }
}
