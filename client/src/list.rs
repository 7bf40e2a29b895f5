//! The item list and its reducer.
//!
//! [`ListState`] keeps the full list, the active filter and the filtered
//! view together. Every transition goes through [`ListReducer`], which
//! recomputes the filtered view afterwards, so `filtered_items` is always
//! `items` passed through `filter_type` (order preserved).

use crate::item::{Item, ItemFilter, ItemId};
use todo_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};

/// Items as last reported by the backend, plus the filtered view
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListState {
    items: Vec<Item>,
    filter_type: ItemFilter,
    filtered_items: Vec<Item>,
}

impl ListState {
    /// Empty list showing all items
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// State holding `items` under `filter_type`
    #[must_use]
    pub fn with_items(items: Vec<Item>, filter_type: ItemFilter) -> Self {
        let mut state = Self {
            items,
            filter_type,
            filtered_items: Vec::new(),
        };
        state.refilter();
        state
    }

    /// Every item, newest first for locally created ones
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The active filter
    #[must_use]
    pub const fn filter_type(&self) -> ItemFilter {
        self.filter_type
    }

    /// Items passing the active filter
    #[must_use]
    pub fn filtered_items(&self) -> &[Item] {
        &self.filtered_items
    }

    /// Looks an item up by id, regardless of the filter
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of items not completed yet, over the whole list
    #[must_use]
    pub fn items_left(&self) -> usize {
        self.items.iter().filter(|item| !item.completed).count()
    }

    fn refilter(&mut self) {
        self.filtered_items = filter_items(&self.items, self.filter_type);
    }
}

/// Items matching `filter`, in their original order
#[must_use]
pub fn filter_items(items: &[Item], filter: ItemFilter) -> Vec<Item> {
    items
        .iter()
        .filter(|item| filter.matches(item))
        .cloned()
        .collect()
}

/// Transitions of the item list
///
/// These are results, not requests: `CreateItem` carries an item the backend
/// has already stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListAction {
    /// A stored item to show at the top of the list
    CreateItem(Item),
    /// Replace the item with the same id
    UpdateItem(Item),
    /// Remove the item with this id
    DeleteItem(ItemId),
    /// Replace the whole list
    FetchItems(Vec<Item>),
    /// Change the active filter
    SetItemFilter(ItemFilter),
}

/// Pure reducer for [`ListState`]. Never returns work to do.
#[derive(Clone, Copy, Debug, Default)]
pub struct ListReducer;

impl Reducer for ListReducer {
    type State = ListState;
    type Action = ListAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut ListState,
        action: ListAction,
        _env: &(),
    ) -> SmallVec<[Effect<ListAction>; 4]> {
        match action {
            ListAction::CreateItem(item) => {
                state.items.insert(0, item);
            },
            ListAction::UpdateItem(item) => {
                if let Some(slot) = state.items.iter_mut().find(|slot| slot.id == item.id) {
                    *slot = item;
                } else {
                    tracing::debug!(id = %item.id, "Ignoring update for an item not in the list");
                }
            },
            ListAction::DeleteItem(id) => {
                if let Some(index) = state.items.iter().position(|item| item.id == id) {
                    state.items.remove(index);
                } else {
                    tracing::debug!(%id, "Ignoring delete for an item not in the list");
                }
            },
            ListAction::FetchItems(items) => {
                state.items = items;
            },
            ListAction::SetItemFilter(filter) => {
                state.filter_type = filter;
            },
        }

        state.refilter();
        smallvec![Effect::None]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use todo_testing::{assertions, ReducerTest};

    fn item(id: i64, description: &str, completed: bool) -> Item {
        Item::new(ItemId::new(id), description, completed)
    }

    fn sample() -> Vec<Item> {
        vec![item(3, "Do 1", true), item(7, "Do 2", false)]
    }

    fn descriptions(items: &[Item]) -> Vec<&str> {
        items.iter().map(|item| item.description.as_str()).collect()
    }

    #[test]
    fn test_initial_state() {
        let state = ListState::new();

        assert!(state.items().is_empty());
        assert!(state.filtered_items().is_empty());
        assert_eq!(state.filter_type(), ItemFilter::All);
    }

    #[test]
    fn test_with_items_computes_filtered_view() {
        let state = ListState::with_items(sample(), ItemFilter::Active);

        assert_eq!(descriptions(state.filtered_items()), vec!["Do 2"]);
    }

    #[test]
    fn test_fetch_items() {
        ReducerTest::new(ListReducer)
            .with_env(())
            .given_state(ListState::new())
            .when_action(ListAction::FetchItems(sample()))
            .then_state(|state| {
                assert_eq!(state.items(), sample().as_slice());
                assert_eq!(state.filtered_items(), sample().as_slice());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_fetch_items_keeps_existing_filter() {
        ReducerTest::new(ListReducer)
            .with_env(())
            .given_state(ListState::with_items(Vec::new(), ItemFilter::Active))
            .when_action(ListAction::FetchItems(sample()))
            .then_state(|state| {
                assert_eq!(state.filter_type(), ItemFilter::Active);
                assert_eq!(state.items(), sample().as_slice());
                assert_eq!(descriptions(state.filtered_items()), vec!["Do 2"]);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_create_item_prepends() {
        ReducerTest::new(ListReducer)
            .with_env(())
            .given_state(ListState::with_items(sample(), ItemFilter::All))
            .when_action(ListAction::CreateItem(item(8, "Do the other thing", false)))
            .then_state(|state| {
                assert_eq!(
                    descriptions(state.items()),
                    vec!["Do the other thing", "Do 1", "Do 2"]
                );
                assert_eq!(state.items(), state.filtered_items());
            })
            .run();
    }

    #[test]
    fn test_create_item_respects_active_filter() {
        ReducerTest::new(ListReducer)
            .with_env(())
            .given_state(ListState::with_items(sample(), ItemFilter::Completed))
            .when_action(ListAction::CreateItem(item(8, "open", false)))
            .then_state(|state| {
                assert_eq!(state.items().len(), 3);
                assert_eq!(descriptions(state.filtered_items()), vec!["Do 1"]);
            })
            .run();
    }

    #[test]
    fn test_update_item_replaces_in_place() {
        ReducerTest::new(ListReducer)
            .with_env(())
            .given_state(ListState::with_items(sample(), ItemFilter::All))
            .when_action(ListAction::UpdateItem(item(7, "Do 2", true)))
            .then_state(|state| {
                assert_eq!(state.items()[1], item(7, "Do 2", true));
                assert_eq!(state.items_left(), 0);
            })
            .run();
    }

    #[test]
    fn test_update_moves_item_between_filters() {
        ReducerTest::new(ListReducer)
            .with_env(())
            .given_state(ListState::with_items(sample(), ItemFilter::Active))
            .when_action(ListAction::UpdateItem(item(7, "Do 2", true)))
            .then_state(|state| assert!(state.filtered_items().is_empty()))
            .run();
    }

    #[test]
    fn test_update_unknown_item_is_a_no_op() {
        ReducerTest::new(ListReducer)
            .with_env(())
            .given_state(ListState::with_items(sample(), ItemFilter::All))
            .when_action(ListAction::UpdateItem(item(99, "ghost", true)))
            .then_state(|state| assert_eq!(state.items(), sample().as_slice()))
            .run();
    }

    #[test]
    fn test_delete_item() {
        ReducerTest::new(ListReducer)
            .with_env(())
            .given_state(ListState::with_items(sample(), ItemFilter::All))
            .when_action(ListAction::DeleteItem(ItemId::new(3)))
            .then_state(|state| {
                assert_eq!(descriptions(state.items()), vec!["Do 2"]);
                assert_eq!(descriptions(state.filtered_items()), vec!["Do 2"]);
            })
            .run();
    }

    #[test]
    fn test_delete_unknown_item_is_a_no_op() {
        ReducerTest::new(ListReducer)
            .with_env(())
            .given_state(ListState::with_items(sample(), ItemFilter::All))
            .when_action(ListAction::DeleteItem(ItemId::new(42)))
            .then_state(|state| assert_eq!(state.items().len(), 2))
            .run();
    }

    #[test]
    fn test_set_item_filter() {
        ReducerTest::new(ListReducer)
            .with_env(())
            .given_state(ListState::with_items(sample(), ItemFilter::All))
            .when_action(ListAction::SetItemFilter(ItemFilter::Completed))
            .then_state(|state| {
                assert_eq!(state.filter_type(), ItemFilter::Completed);
                assert_eq!(descriptions(state.filtered_items()), vec!["Do 1"]);
                assert_eq!(state.items().len(), 2);
            })
            .run();
    }

    #[test]
    fn test_items_left_ignores_filter() {
        let state = ListState::with_items(sample(), ItemFilter::Completed);
        assert_eq!(state.items_left(), 1);
    }

    fn arb_filter() -> impl Strategy<Value = ItemFilter> {
        prop_oneof![
            Just(ItemFilter::All),
            Just(ItemFilter::Active),
            Just(ItemFilter::Completed),
        ]
    }

    fn arb_item() -> impl Strategy<Value = Item> {
        (0i64..16, "[a-z]{0,8}", any::<bool>())
            .prop_map(|(id, description, completed)| Item::new(ItemId::new(id), description, completed))
    }

    fn arb_action() -> impl Strategy<Value = ListAction> {
        prop_oneof![
            arb_item().prop_map(ListAction::CreateItem),
            arb_item().prop_map(ListAction::UpdateItem),
            (0i64..16).prop_map(|id| ListAction::DeleteItem(ItemId::new(id))),
            prop::collection::vec(arb_item(), 0..6).prop_map(ListAction::FetchItems),
            arb_filter().prop_map(ListAction::SetItemFilter),
        ]
    }

    proptest! {
        #[test]
        fn filtered_items_always_match_filter(actions in prop::collection::vec(arb_action(), 1..24)) {
            let mut state = ListState::new();

            for action in actions {
                let _ = ListReducer.reduce(&mut state, action, &());
                let expected = filter_items(state.items(), state.filter_type());
                prop_assert_eq!(state.filtered_items(), expected.as_slice());
            }
        }

        #[test]
        fn reducer_is_deterministic(
            items in prop::collection::vec(arb_item(), 0..6),
            action in arb_action(),
        ) {
            let mut first = ListState::with_items(items.clone(), ItemFilter::All);
            let mut second = ListState::with_items(items, ItemFilter::All);

            let _ = ListReducer.reduce(&mut first, action.clone(), &());
            let _ = ListReducer.reduce(&mut second, action, &());

            prop_assert_eq!(first, second);
        }
    }
}
