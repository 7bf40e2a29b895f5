//! Application reducer: user intents, service calls and the list.
//!
//! User intents never touch the list directly. They become requests to the
//! [`ItemService`], and only the service's answer is fed back as a
//! [`ListAction`]. A failed request leaves the list as it was and is
//! reported through [`TodoState::last_error`].

use crate::item::{Item, ItemId, NewItem};
use crate::list::{ListAction, ListReducer, ListState};
use crate::service::{ItemService, ServiceError, ServiceOperation};
use std::marker::PhantomData;
use todo_core::{async_effect, effect::Effect, reducer::Reducer, smallvec, SmallVec};

/// Everything the to-do view shows
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoState {
    /// Items and filter
    pub list: ListState,
    /// Item whose description is being edited
    pub editing: Option<ItemId>,
    /// Last failed request, cleared by the next list change
    pub last_error: Option<String>,
}

impl TodoState {
    /// State showing `list`
    #[must_use]
    pub fn with_list(list: ListState) -> Self {
        Self {
            list,
            ..Self::default()
        }
    }
}

/// Actions of the to-do view
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoAction {
    // Intents
    /// The view appeared: load every item
    Mount,
    /// The user entered a new item
    SubmitNewItem {
        /// Text of the new item
        description: String,
    },
    /// The user clicked an item's checkbox
    ToggleItem {
        /// Item to toggle
        id: ItemId,
    },
    /// The user started editing an item's description
    BeginEdit {
        /// Item to edit
        id: ItemId,
    },
    /// The user confirmed an edited description
    CommitEdit {
        /// Edited item
        id: ItemId,
        /// New description
        description: String,
    },
    /// The user clicked an item's delete button
    RemoveItem {
        /// Item to delete
        id: ItemId,
    },

    // Results
    /// A list transition, either a service answer or a filter change
    List(ListAction),
    /// A service request failed
    RequestFailed {
        /// Failed operation
        operation: ServiceOperation,
        /// Error description
        message: String,
    },
}

impl TodoAction {
    fn failed(operation: ServiceOperation, error: &ServiceError) -> Self {
        tracing::error!(%operation, %error, "Item service request failed");
        Self::RequestFailed {
            operation,
            message: error.to_string(),
        }
    }
}

impl From<ListAction> for TodoAction {
    fn from(action: ListAction) -> Self {
        Self::List(action)
    }
}

/// Dependencies of [`TodoReducer`]
#[derive(Clone, Debug)]
pub struct TodoEnvironment<S> {
    /// Backend the items live in
    pub service: S,
}

impl<S> TodoEnvironment<S> {
    /// Environment using `service`
    #[must_use]
    pub const fn new(service: S) -> Self {
        Self { service }
    }
}

/// Reducer of [`TodoState`], generic over the item service
pub struct TodoReducer<S> {
    list: ListReducer,
    _service: PhantomData<fn() -> S>,
}

impl<S> TodoReducer<S> {
    /// Create the reducer
    #[must_use]
    pub const fn new() -> Self {
        Self {
            list: ListReducer,
            _service: PhantomData,
        }
    }
}

impl<S> Default for TodoReducer<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for TodoReducer<S> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<S> std::fmt::Debug for TodoReducer<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoReducer").finish_non_exhaustive()
    }
}

fn fetch_all<S: ItemService + Clone + 'static>(service: &S) -> Effect<TodoAction> {
    let service = service.clone();
    async_effect! {
        Some(match service.get_all().await {
            Ok(items) => TodoAction::List(ListAction::FetchItems(items)),
            Err(error) => TodoAction::failed(ServiceOperation::GetAll, &error),
        })
    }
}

fn create<S: ItemService + Clone + 'static>(service: &S, item: NewItem) -> Effect<TodoAction> {
    let service = service.clone();
    async_effect! {
        Some(match service.create(item).await {
            Ok(created) => TodoAction::List(ListAction::CreateItem(created)),
            Err(error) => TodoAction::failed(ServiceOperation::Create, &error),
        })
    }
}

fn update<S: ItemService + Clone + 'static>(service: &S, item: Item) -> Effect<TodoAction> {
    let service = service.clone();
    async_effect! {
        Some(match service.update(item).await {
            Ok(stored) => TodoAction::List(ListAction::UpdateItem(stored)),
            Err(error) => TodoAction::failed(ServiceOperation::Update, &error),
        })
    }
}

fn delete<S: ItemService + Clone + 'static>(service: &S, id: ItemId) -> Effect<TodoAction> {
    let service = service.clone();
    async_effect! {
        Some(match service.delete_by_id(id).await {
            Ok(()) => TodoAction::List(ListAction::DeleteItem(id)),
            Err(error) => TodoAction::failed(ServiceOperation::Delete, &error),
        })
    }
}

impl<S> Reducer for TodoReducer<S>
where
    S: ItemService + Clone + 'static,
{
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment<S>;

    fn reduce(
        &self,
        state: &mut TodoState,
        action: TodoAction,
        env: &TodoEnvironment<S>,
    ) -> SmallVec<[Effect<TodoAction>; 4]> {
        match action {
            TodoAction::Mount => smallvec![fetch_all(&env.service)],

            TodoAction::SubmitNewItem { description } => {
                if description.is_empty() {
                    tracing::debug!("Ignoring empty new item");
                    return smallvec![Effect::None];
                }
                smallvec![create(&env.service, NewItem::new(description))]
            },

            TodoAction::ToggleItem { id } => {
                let Some(item) = state.list.get(id) else {
                    tracing::warn!(%id, "Toggle for an item not in the list");
                    return smallvec![Effect::None];
                };
                let toggled = Item {
                    completed: !item.completed,
                    ..item.clone()
                };
                smallvec![update(&env.service, toggled)]
            },

            TodoAction::BeginEdit { id } => {
                if state.list.get(id).is_some() {
                    state.editing = Some(id);
                } else {
                    tracing::warn!(%id, "Edit for an item not in the list");
                }
                smallvec![Effect::None]
            },

            TodoAction::CommitEdit { id, description } => {
                if state.editing == Some(id) {
                    state.editing = None;
                }
                let Some(item) = state.list.get(id) else {
                    tracing::warn!(%id, "Edit committed for an item not in the list");
                    return smallvec![Effect::None];
                };
                let edited = Item {
                    description,
                    ..item.clone()
                };
                smallvec![update(&env.service, edited)]
            },

            TodoAction::RemoveItem { id } => smallvec![delete(&env.service, id)],

            TodoAction::List(list_action) => {
                if let ListAction::DeleteItem(id) = &list_action {
                    if state.editing == Some(*id) {
                        state.editing = None;
                    }
                }
                state.last_error = None;

                self.list
                    .reduce(&mut state.list, list_action, &())
                    .into_iter()
                    .map(|effect| effect.map(TodoAction::List))
                    .collect()
            },

            TodoAction::RequestFailed { operation, message } => {
                state.last_error = Some(format!("Could not {}: {message}", operation_verb(operation)));
                smallvec![Effect::None]
            },
        }
    }
}

const fn operation_verb(operation: ServiceOperation) -> &'static str {
    match operation {
        ServiceOperation::Create => "add the item",
        ServiceOperation::GetAll => "load the items",
        ServiceOperation::Update => "save the item",
        ServiceOperation::Delete => "delete the item",
    }
}
