//! # Todo Testing
//!
//! Testing utilities and helpers for the todo client.
//!
//! This crate provides:
//! - [`ReducerTest`]: Given-When-Then harness for reducers
//! - [`assertions`]: helpers for the effects a reducer returns
//! - [`effects`]: drives `Effect::Future`s to completion without a store
//! - [`init_test_tracing`]: log output captured by the test harness
//!
//! ## Example
//!
//! ```ignore
//! use todo_testing::{assertions, ReducerTest};
//!
//! ReducerTest::new(ListReducer)
//!     .with_env(())
//!     .given_state(ListState::default())
//!     .when_action(ListAction::SetItemFilter(ItemFilter::Active))
//!     .then_state(|state| assert_eq!(state.filter_type(), ItemFilter::Active))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

pub mod effects;

pub use effects::run_effects;
pub use reducer_test::{assertions, ReducerTest};

/// Install a `tracing` subscriber that writes through the test harness
///
/// Safe to call from every test; only the first call installs the
/// subscriber. The filter honours `RUST_LOG` and defaults to `debug`.
pub fn init_test_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_test_tracing_is_idempotent() {
        init_test_tracing();
        init_test_tracing();
    }
}
