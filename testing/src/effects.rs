//! Run effects outside a store
//!
//! Reducer tests usually stop at "an `Effect::Future` was returned". When the
//! environment is a mock, it is more useful to await those futures and look
//! at the actions they would feed back.

use todo_core::effect::Effect;

/// Await every `Effect::Future` in order and collect the produced actions
///
/// `Effect::None` and futures resolving to `None` contribute nothing.
pub async fn run_effects<A, I>(effects: I) -> Vec<A>
where
    I: IntoIterator<Item = Effect<A>>,
{
    let mut actions = Vec::new();

    for effect in effects {
        match effect {
            Effect::None => {},
            Effect::Future(fut) => {
                if let Some(action) = fut.await {
                    actions.push(action);
                }
            },
        }
    }

    actions
}

/// Blocking variant of [`run_effects`] for synchronous tests
///
/// Only suitable for effects that do not need a tokio reactor (mocks that
/// never touch sockets or timers).
pub fn block_on_effects<A, I>(effects: I) -> Vec<A>
where
    I: IntoIterator<Item = Effect<A>>,
{
    futures::executor::block_on(run_effects(effects))
}
