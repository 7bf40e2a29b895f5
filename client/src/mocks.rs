//! In-memory item service for tests and offline demos.

use crate::item::{Item, ItemId, NewItem};
use crate::service::{ItemService, ServiceError, ServiceOperation};
use std::collections::HashSet;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A call received by [`MockItemService`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ServiceCall {
    /// `create(item)`
    Create(NewItem),
    /// `get_all()`
    GetAll,
    /// `update(item)`
    Update(Item),
    /// `delete_by_id(id)`
    DeleteById(ItemId),
}

impl ServiceCall {
    /// Which operation this call was
    #[must_use]
    pub const fn operation(&self) -> ServiceOperation {
        match self {
            Self::Create(_) => ServiceOperation::Create,
            Self::GetAll => ServiceOperation::GetAll,
            Self::Update(_) => ServiceOperation::Update,
            Self::DeleteById(_) => ServiceOperation::Delete,
        }
    }
}

#[derive(Debug)]
struct MockState {
    items: Vec<Item>,
    next_item_id: i64,
    calls: Vec<ServiceCall>,
    failing: HashSet<ServiceOperation>,
}

/// Mock item service.
///
/// Behaves like a well-behaved backend: `create` assigns increasing ids
/// starting at 1, `update` stores and echoes its input, `delete_by_id`
/// forgets the item. Every call is recorded, and any operation can be told
/// to fail.
///
/// Clones share the same storage.
#[derive(Debug, Clone)]
pub struct MockItemService {
    state: Arc<Mutex<MockState>>,
}

impl MockItemService {
    /// Empty mock service
    #[must_use]
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Mock service returning `items` from `get_all`
    ///
    /// New ids continue after the largest seeded id.
    #[must_use]
    pub fn with_items(items: Vec<Item>) -> Self {
        let next_item_id = items.iter().map(|item| item.id.get()).max().map_or(1, |max| max + 1);

        Self {
            state: Arc::new(Mutex::new(MockState {
                items,
                next_item_id,
                calls: Vec::new(),
                failing: HashSet::new(),
            })),
        }
    }

    /// Set the id the next `create` assigns
    #[must_use]
    pub fn with_next_item_id(self, id: i64) -> Self {
        self.lock().next_item_id = id;
        self
    }

    /// Make every later call of `operation` fail
    pub fn fail(&self, operation: ServiceOperation) {
        self.lock().failing.insert(operation);
    }

    /// Undo [`fail`](Self::fail)
    pub fn recover(&self, operation: ServiceOperation) {
        self.lock().failing.remove(&operation);
    }

    /// Every call received so far, in order
    #[must_use]
    pub fn calls(&self) -> Vec<ServiceCall> {
        self.lock().calls.clone()
    }

    /// Number of calls of `operation` received so far
    #[must_use]
    pub fn call_count(&self, operation: ServiceOperation) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|call| call.operation() == operation)
            .count()
    }

    /// Items currently stored
    #[must_use]
    pub fn items(&self) -> Vec<Item> {
        self.lock().items.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        lock(&self.state)
    }
}

impl Default for MockItemService {
    fn default() -> Self {
        Self::new()
    }
}

// A panicking test must not hide the calls recorded before it.
fn lock(state: &Mutex<MockState>) -> MutexGuard<'_, MockState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockState {
    fn record(&mut self, call: ServiceCall) -> Result<(), ServiceError> {
        let operation = call.operation();
        self.calls.push(call);

        if self.failing.contains(&operation) {
            return Err(ServiceError::Request {
                operation,
                message: "connection refused".to_string(),
            });
        }
        Ok(())
    }
}

impl ItemService for MockItemService {
    fn create(&self, item: NewItem) -> impl Future<Output = Result<Item, ServiceError>> + Send {
        let shared = Arc::clone(&self.state);

        async move {
            let mut state = lock(&shared);
            state.record(ServiceCall::Create(item.clone()))?;

            let created = item.with_id(ItemId::new(state.next_item_id));
            state.next_item_id += 1;
            state.items.push(created.clone());
            Ok(created)
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Item>, ServiceError>> + Send {
        let shared = Arc::clone(&self.state);

        async move {
            let mut state = lock(&shared);
            state.record(ServiceCall::GetAll)?;
            Ok(state.items.clone())
        }
    }

    fn update(&self, item: Item) -> impl Future<Output = Result<Item, ServiceError>> + Send {
        let shared = Arc::clone(&self.state);

        async move {
            let mut state = lock(&shared);
            state.record(ServiceCall::Update(item.clone()))?;

            if let Some(index) = state.items.iter().position(|stored| stored.id == item.id) {
                state.items[index] = item.clone();
            } else {
                state.items.push(item.clone());
            }
            Ok(item)
        }
    }

    fn delete_by_id(&self, id: ItemId) -> impl Future<Output = Result<(), ServiceError>> + Send {
        let shared = Arc::clone(&self.state);

        async move {
            let mut state = lock(&shared);
            state.record(ServiceCall::DeleteById(id))?;
            state.items.retain(|item| item.id != id);
            Ok(())
        }
    }
}
