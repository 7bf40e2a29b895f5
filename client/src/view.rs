//! View-controller for the to-do list.
//!
//! [`TodoView`] owns the store, turns user gestures into [`TodoAction`]s and
//! renders the current state as a [`ViewModel`]. The view model is plain
//! data; its `Display` impl is the terminal rendering.

use crate::app::{TodoAction, TodoEnvironment, TodoReducer, TodoState};
use crate::item::{ItemFilter, ItemId};
use crate::list::ListAction;
use crate::service::ItemService;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use todo_runtime::{EffectHandle, Store, StoreError};

/// Store type driving the to-do view
pub type TodoStore<S> = Store<TodoState, TodoAction, TodoEnvironment<S>, TodoReducer<S>>;

/// Status text for `count` items left
#[must_use]
pub fn items_left_label(count: usize) -> String {
    if count == 1 {
        "1 item left".to_string()
    } else {
        format!("{count} items left")
    }
}

/// One visible row
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemRow {
    /// Item id
    pub id: ItemId,
    /// Description text
    pub description: String,
    /// Checkbox state
    pub completed: bool,
    /// Whether the description is being edited
    pub editing: bool,
}

/// One filter button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterButton {
    /// Filter applied when clicked
    pub filter: ItemFilter,
    /// Whether this is the active filter
    pub selected: bool,
}

/// Everything the view shows, derived from [`TodoState`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewModel {
    /// Rows for the filtered items, in list order
    pub rows: Vec<ItemRow>,
    /// Incomplete items across the whole list
    pub items_left: usize,
    /// All, Active and Completed buttons
    pub filters: [FilterButton; 3],
    /// Last request failure, if any
    pub error: Option<String>,
}

impl ViewModel {
    /// Project `state` for display
    #[must_use]
    pub fn from_state(state: &TodoState) -> Self {
        let rows = state
            .list
            .filtered_items()
            .iter()
            .map(|item| ItemRow {
                id: item.id,
                description: item.description.clone(),
                completed: item.completed,
                editing: state.editing == Some(item.id),
            })
            .collect();

        let active = state.list.filter_type();
        let filters = ItemFilter::ALL.map(|filter| FilterButton {
            filter,
            selected: filter == active,
        });

        Self {
            rows,
            items_left: state.list.items_left(),
            filters,
            error: state.last_error.clone(),
        }
    }

    /// "N items left" line
    #[must_use]
    pub fn status_line(&self) -> String {
        items_left_label(self.items_left)
    }

    /// Descriptions of the visible rows
    #[must_use]
    pub fn descriptions(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.description.as_str()).collect()
    }

    /// The selected filter
    #[must_use]
    pub fn selected_filter(&self) -> ItemFilter {
        self.filters
            .iter()
            .find(|button| button.selected)
            .map_or(ItemFilter::All, |button| button.filter)
    }
}

impl fmt::Display for ViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "todos")?;
        writeln!(f, "  > Add to-do item")?;

        for row in &self.rows {
            let check = if row.completed { "[x]" } else { "[ ]" };
            let editing = if row.editing { "  (editing)" } else { "" };
            writeln!(f, "  {check} {:>4}  {}{editing}", row.id, row.description)?;
        }

        write!(f, "{}   ", self.status_line())?;
        for button in &self.filters {
            if button.selected {
                write!(f, " [{}]", button.filter)?;
            } else {
                write!(f, "  {} ", button.filter)?;
            }
        }

        if let Some(error) = &self.error {
            write!(f, "\n! {error}")?;
        }
        Ok(())
    }
}

/// Controller of the to-do list
///
/// Each gesture method sends one action and returns the store's
/// [`EffectHandle`]; wait on it to observe the backend's answer.
pub struct TodoView<S>
where
    S: ItemService + Clone + 'static,
{
    store: TodoStore<S>,
    mounted: AtomicBool,
}

impl<S> TodoView<S>
where
    S: ItemService + Clone + 'static,
{
    /// View backed by `service`, showing an empty list until mounted
    #[must_use]
    pub fn new(service: S) -> Self {
        Self::with_state(service, TodoState::default())
    }

    /// View backed by `service`, starting from `state`
    #[must_use]
    pub fn with_state(service: S, state: TodoState) -> Self {
        Self {
            store: Store::new(state, TodoReducer::new(), TodoEnvironment::new(service)),
            mounted: AtomicBool::new(false),
        }
    }

    /// The underlying store
    #[must_use]
    pub const fn store(&self) -> &TodoStore<S> {
        &self.store
    }

    /// Load the items. Only the first call sends a request.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] after [`shutdown`](Self::shutdown).
    pub async fn mount(&self) -> Result<EffectHandle, StoreError> {
        if self.mounted.swap(true, Ordering::AcqRel) {
            tracing::debug!("View already mounted");
            return Ok(EffectHandle::completed());
        }
        self.store.send(TodoAction::Mount).await
    }

    /// Add a new item with `text`. Empty text is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] after [`shutdown`](Self::shutdown).
    pub async fn submit_new_item(&self, text: &str) -> Result<EffectHandle, StoreError> {
        if text.is_empty() {
            return Ok(EffectHandle::completed());
        }
        self.store
            .send(TodoAction::SubmitNewItem {
                description: text.to_string(),
            })
            .await
    }

    /// Flip the completion of item `id`
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] after [`shutdown`](Self::shutdown).
    pub async fn toggle(&self, id: ItemId) -> Result<EffectHandle, StoreError> {
        self.store.send(TodoAction::ToggleItem { id }).await
    }

    /// Start editing item `id`
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] after [`shutdown`](Self::shutdown).
    pub async fn begin_edit(&self, id: ItemId) -> Result<EffectHandle, StoreError> {
        self.store.send(TodoAction::BeginEdit { id }).await
    }

    /// Save `text` as the description of item `id`
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] after [`shutdown`](Self::shutdown).
    pub async fn commit_edit(&self, id: ItemId, text: &str) -> Result<EffectHandle, StoreError> {
        self.store
            .send(TodoAction::CommitEdit {
                id,
                description: text.to_string(),
            })
            .await
    }

    /// Delete item `id`
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] after [`shutdown`](Self::shutdown).
    pub async fn delete(&self, id: ItemId) -> Result<EffectHandle, StoreError> {
        self.store.send(TodoAction::RemoveItem { id }).await
    }

    /// Show only items passing `filter`
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] after [`shutdown`](Self::shutdown).
    pub async fn select_filter(&self, filter: ItemFilter) -> Result<EffectHandle, StoreError> {
        self.store
            .send(TodoAction::List(ListAction::SetItemFilter(filter)))
            .await
    }

    /// Current view model
    pub async fn render(&self) -> ViewModel {
        self.store.state(ViewModel::from_state).await
    }

    /// Stop accepting gestures and wait for in-flight requests
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownTimeout`] if requests are still running
    /// after `timeout`.
    pub async fn shutdown(&self, timeout: Duration) -> Result<(), StoreError> {
        self.store.shutdown(timeout).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;
    use crate::list::ListState;

    fn state(filter: ItemFilter) -> TodoState {
        TodoState::with_list(ListState::with_items(
            vec![
                Item::new(ItemId::new(3), "Do 1", true),
                Item::new(ItemId::new(7), "Do 2", false),
            ],
            filter,
        ))
    }

    #[test]
    fn items_left_label_pluralizes() {
        assert_eq!(items_left_label(0), "0 items left");
        assert_eq!(items_left_label(1), "1 item left");
        assert_eq!(items_left_label(2), "2 items left");
    }

    #[test]
    fn view_model_marks_selected_filter() {
        let view = ViewModel::from_state(&state(ItemFilter::Completed));

        assert_eq!(view.selected_filter(), ItemFilter::Completed);
        assert_eq!(view.filters.iter().filter(|button| button.selected).count(), 1);
        assert_eq!(view.descriptions(), vec!["Do 1"]);
        assert_eq!(view.status_line(), "1 item left");
    }

    #[test]
    fn view_model_marks_edited_row() {
        let mut todo = state(ItemFilter::All);
        todo.editing = Some(ItemId::new(7));

        let view = ViewModel::from_state(&todo);
        assert!(!view.rows[0].editing);
        assert!(view.rows[1].editing);
    }

    #[test]
    fn display_renders_rows_status_and_filters() {
        let mut todo = state(ItemFilter::All);
        todo.last_error = Some("Could not load the items".to_string());

        let text = ViewModel::from_state(&todo).to_string();

        assert!(text.contains("[x]    3  Do 1"));
        assert!(text.contains("[ ]    7  Do 2"));
        assert!(text.contains("1 item left"));
        assert!(text.contains("[All]"));
        assert!(text.ends_with("! Could not load the items"));
    }
}
