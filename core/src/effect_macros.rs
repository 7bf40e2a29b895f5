//! Declarative macros for ergonomic effect construction

/// Create an `Effect::Future` from an async block
///
/// # Example
///
/// ```
/// use todo_core::{async_effect, effect::Effect};
///
/// #[derive(Debug)]
/// enum Action {
///     Loaded(Vec<String>),
/// }
///
/// let effect: Effect<Action> = async_effect! {
///     Some(Action::Loaded(vec!["Buy milk".to_string()]))
/// };
/// assert!(matches!(effect, Effect::Future(_)));
/// ```
#[macro_export]
macro_rules! async_effect {
    ($($body:tt)*) => {
        $crate::effect::Effect::Future(
            ::std::boxed::Box::pin(async move { $($body)* })
        )
    };
}
