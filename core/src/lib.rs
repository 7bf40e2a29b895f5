//! # Todo Core
//!
//! Core traits and types shared by the todo client crates.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature (the item list, the active filter)
//! - **Action**: All possible inputs to a reducer (user intents and service results)
//! - **Reducer**: Function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Description of asynchronous work, executed by the runtime
//! - **Environment**: Injected dependencies (the item service)
//!
//! Reducers never perform I/O themselves. Anything that talks to the
//! backend is returned as an [`Effect`](effect::Effect) and executed by
//! the store in `todo-runtime`, which feeds the resulting action back into
//! the reducer.
//!
//! ## Example
//!
//! ```
//! use todo_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! #[derive(Clone, Debug, Default)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut CounterState,
//!         action: CounterAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<CounterAction>; 4]> {
//!         match action {
//!             CounterAction::Increment => state.count += 1,
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! let mut state = CounterState::default();
//! let _ = CounterReducer.reduce(&mut state, CounterAction::Increment, &());
//! assert_eq!(state.count, 1);
//! ```

pub use smallvec::{smallvec, SmallVec};

/// Declarative macros for building effects
pub mod effect_macros;

/// Reducer module - The core trait for state transitions
///
/// Reducers are deterministic: given the same state and action they make the
/// same state change and describe the same effects. They are the only code
/// allowed to mutate store-held state.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for state transitions
    ///
    /// # Type Parameters
    ///
    /// - `State`: The state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// Updates `state` in place and returns descriptions of the
        /// asynchronous work to run afterwards. Returning no effects (or only
        /// [`Effect::None`]) means the transition is purely synchronous.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects are values, not execution. The store decides when and where to run
/// them.
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;

    /// Boxed future produced by an [`Effect::Future`]
    pub type EffectFuture<Action> = Pin<Box<dyn Future<Output = Option<Action>> + Send>>;

    /// Effect type - describes a side effect to be executed
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Arbitrary async computation
        ///
        /// Returns `Option<Action>` - if `Some`, the action is fed back into the reducer
        Future(EffectFuture<Action>),
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Returns `true` for [`Effect::None`]
        #[must_use]
        pub const fn is_none(&self) -> bool {
            matches!(self, Effect::None)
        }

        /// Lift an effect of a child reducer into a parent's action type
        ///
        /// The action produced by a [`Effect::Future`] (if any) is passed
        /// through `f`. This is how a parent reducer embeds a child reducer
        /// whose actions are one variant of the parent's action enum.
        #[must_use]
        pub fn map<B, F>(self, f: F) -> Effect<B>
        where
            Action: Send + 'static,
            B: Send + 'static,
            F: FnOnce(Action) -> B + Send + 'static,
        {
            match self {
                Effect::None => Effect::None,
                Effect::Future(fut) => Effect::Future(Box::pin(async move { fut.await.map(f) })),
            }
        }
    }
}
