//! Lifecycle of a single asynchronous operation.

use crate::core::{LifecycleState, Resolution, StateError};
use std::fmt::Display;

/// State of a single asynchronous operation.
///
/// The value is a snapshot: a producer builds a new `AsyncState` each time
/// the operation progresses, and consumers read it through [`match_all`],
/// [`matcher`], or plain `match`.
///
/// [`match_all`]: AsyncState::match_all
/// [`matcher`]: AsyncState::matcher
///
/// # Example
///
/// ```rust
/// use statekit::AsyncState;
///
/// let state = AsyncState::success("Hello".to_string());
///
/// let text = state.match_all(
///     || "State: Initial (idle)".to_string(),
///     || "State: Loading...".to_string(),
///     |data| format!("State: Success with data: {data}"),
///     |message| format!("State: Failure with error: {message}"),
/// );
///
/// assert_eq!(text, "State: Success with data: Hello");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AsyncState<T> {
    /// Nothing has been started
    Initial,
    /// The operation is running
    Loading,
    /// The operation completed with data
    Success { data: T },
    /// The operation failed
    Failure { error_message: String },
}

impl<T> Default for AsyncState<T> {
    fn default() -> Self {
        Self::Initial
    }
}

impl<T> AsyncState<T> {
    /// Build a `Success` carrying `data`.
    pub fn success(data: T) -> Self {
        Self::Success { data }
    }

    /// Build a `Failure` carrying `error_message`.
    pub fn failure(error_message: impl Into<String>) -> Self {
        Self::Failure {
            error_message: error_message.into(),
        }
    }

    /// Exhaustive match: one handler per variant, all mandatory.
    ///
    /// Only the handler of the active variant is invoked.
    pub fn match_all<R>(
        &self,
        initial: impl FnOnce() -> R,
        loading: impl FnOnce() -> R,
        success: impl FnOnce(&T) -> R,
        failure: impl FnOnce(&str) -> R,
    ) -> R {
        match self {
            Self::Initial => initial(),
            Self::Loading => loading(),
            Self::Success { data } => success(data),
            Self::Failure { error_message } => failure(error_message),
        }
    }

    /// Start a partial match.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statekit::AsyncState;
    ///
    /// let state: AsyncState<u32> = AsyncState::Loading;
    ///
    /// let spinner = state.matcher().loading(|| true).or_else(|| false);
    /// assert!(spinner);
    ///
    /// let data = state.matcher().success(|data| *data).or_none();
    /// assert_eq!(data, None);
    /// ```
    pub fn matcher<R>(&self) -> AsyncMatcher<'_, T, R> {
        AsyncMatcher {
            state: self,
            resolution: Resolution::new(),
        }
    }

    /// Data of a `Success`.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data } => Some(data),
            _ => None,
        }
    }

    /// Borrow the data, keeping the variant.
    ///
    /// A failure message is copied into the new state.
    pub fn as_ref(&self) -> AsyncState<&T> {
        match self {
            Self::Initial => AsyncState::Initial,
            Self::Loading => AsyncState::Loading,
            Self::Success { data } => AsyncState::Success { data },
            Self::Failure { error_message } => AsyncState::Failure {
                error_message: error_message.clone(),
            },
        }
    }

    /// Transform the data of a `Success`; other variants carry over unchanged.
    pub fn map<U, F>(self, f: F) -> AsyncState<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Initial => AsyncState::Initial,
            Self::Loading => AsyncState::Loading,
            Self::Success { data } => AsyncState::Success { data: f(data) },
            Self::Failure { error_message } => AsyncState::Failure { error_message },
        }
    }

    /// Convert into a `Result`, failing for states without data.
    pub fn into_result(self) -> Result<T, StateError> {
        match self {
            Self::Success { data } => Ok(data),
            Self::Failure { error_message } => Err(StateError::Failed {
                message: error_message,
            }),
            other => Err(StateError::NotSettled { state: other.name() }),
        }
    }
}

impl<T> LifecycleState for AsyncState<T> {
    fn name(&self) -> &'static str {
        match self {
            Self::Initial => "Initial",
            Self::Loading => "Loading",
            Self::Success { .. } => "Success",
            Self::Failure { .. } => "Failure",
        }
    }

    fn is_initial(&self) -> bool {
        matches!(self, Self::Initial)
    }

    fn is_in_progress(&self) -> bool {
        matches!(self, Self::Loading)
    }

    fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failure { error_message } => Some(error_message),
            _ => None,
        }
    }
}

impl<T, E: Display> From<Result<T, E>> for AsyncState<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(err) => Self::failure(err.to_string()),
        }
    }
}

/// Partial match over an [`AsyncState`].
///
/// Each method offers the handler for one variant. Finish with
/// [`or_else`](AsyncMatcher::or_else) or [`or_none`](AsyncMatcher::or_none).
///
/// The handler for the active variant runs as soon as it is offered, not
/// when the matcher is resolved, so dropping an unresolved matcher still
/// runs that handler's side effects.
#[must_use = "the handler result is lost unless resolved with `or_else` or `or_none`"]
pub struct AsyncMatcher<'a, T, R> {
    state: &'a AsyncState<T>,
    resolution: Resolution<R>,
}

impl<'a, T, R> AsyncMatcher<'a, T, R> {
    /// Handler for `Initial`.
    pub fn initial(mut self, handler: impl FnOnce() -> R) -> Self {
        if let AsyncState::Initial = self.state {
            self.resolution.offer(handler);
        }
        self
    }

    /// Handler for `Loading`.
    pub fn loading(mut self, handler: impl FnOnce() -> R) -> Self {
        if let AsyncState::Loading = self.state {
            self.resolution.offer(handler);
        }
        self
    }

    /// Handler for `Success`.
    pub fn success(mut self, handler: impl FnOnce(&'a T) -> R) -> Self {
        if let AsyncState::Success { data } = self.state {
            self.resolution.offer(|| handler(data));
        }
        self
    }

    /// Handler for `Failure`.
    pub fn failure(mut self, handler: impl FnOnce(&'a str) -> R) -> Self {
        if let AsyncState::Failure { error_message } = self.state {
            self.resolution.offer(|| handler(error_message));
        }
        self
    }

    /// Resolve, calling `fallback` if no handler matched the active variant.
    pub fn or_else(self, fallback: impl FnOnce() -> R) -> R {
        self.resolution.or_else(self.state.name(), fallback)
    }

    /// Resolve to `None` if no handler matched the active variant.
    pub fn or_none(self) -> Option<R> {
        self.resolution.or_none(self.state.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(state: &AsyncState<String>) -> String {
        state.match_all(
            || "State: Initial (idle)".to_string(),
            || "State: Loading...".to_string(),
            |data| format!("State: Success with data: {data}"),
            |message| format!("State: Failure with error: {message}"),
        )
    }

    #[test]
    fn default_is_initial() {
        let state: AsyncState<u8> = AsyncState::default();
        assert_eq!(state, AsyncState::Initial);
    }

    #[test]
    fn match_all_renders_each_step() {
        let mut state = AsyncState::Initial;
        assert_eq!(render(&state), "State: Initial (idle)");

        state = AsyncState::Loading;
        assert_eq!(render(&state), "State: Loading...");

        state = AsyncState::success("Hello".to_string());
        assert_eq!(render(&state), "State: Success with data: Hello");

        state = AsyncState::failure("boom");
        assert_eq!(render(&state), "State: Failure with error: boom");
    }

    #[test]
    fn matcher_uses_supplied_handler() {
        let state = AsyncState::success(21);
        let doubled = state.matcher().success(|data| data * 2).or_else(|| 0);
        assert_eq!(doubled, 42);
    }

    #[test]
    fn matcher_falls_back_for_empty_variants() {
        let state: AsyncState<i32> = AsyncState::Initial;
        let value = state
            .matcher()
            .loading(|| 1)
            .success(|_| 2)
            .failure(|_| 3)
            .or_else(|| 0);
        assert_eq!(value, 0);
    }

    #[test]
    fn matcher_or_none_is_absent_without_handler() {
        let state: AsyncState<i32> = AsyncState::failure("offline");
        assert_eq!(state.matcher().success(|data| *data).or_none(), None);
        assert_eq!(
            state.matcher().failure(|message| message.len()).or_none(),
            Some(7)
        );
    }

    #[test]
    fn handler_runs_when_offered() {
        let calls = std::cell::Cell::new(0);
        let state: AsyncState<u8> = AsyncState::Loading;

        // Never resolved: the handler has already run.
        let _ = state.matcher().loading(|| calls.set(calls.get() + 1));
        assert_eq!(calls.get(), 1);

        let resolved = state
            .matcher()
            .loading(|| calls.set(calls.get() + 1))
            .or_none();
        assert_eq!(resolved, Some(()));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn lifecycle_predicates() {
        assert!(AsyncState::<()>::Initial.is_initial());
        assert!(AsyncState::<()>::Loading.is_in_progress());
        assert!(!AsyncState::success(()).is_failure());
        assert!(AsyncState::<()>::failure("x").is_failure());
        assert_eq!(AsyncState::<()>::failure("x").error_message(), Some("x"));
    }

    #[test]
    fn map_transforms_only_success() {
        assert_eq!(AsyncState::success(2).map(|n| n + 1), AsyncState::success(3));
        assert_eq!(
            AsyncState::<i32>::failure("bad").map(|n| n + 1),
            AsyncState::failure("bad")
        );
        assert_eq!(AsyncState::<i32>::Loading.map(|n| n + 1), AsyncState::Loading);
    }

    #[test]
    fn as_ref_borrows_payload() {
        let state = AsyncState::success(vec![1, 2]);
        assert_eq!(state.as_ref().data(), Some(&&vec![1, 2]));
    }

    #[test]
    fn converts_from_result() {
        let ok: Result<u8, String> = Ok(5);
        assert_eq!(AsyncState::from(ok), AsyncState::success(5));

        let err: Result<u8, String> = Err("refused".to_string());
        assert_eq!(AsyncState::from(err), AsyncState::failure("refused"));
    }

    #[test]
    fn into_result_reports_unsettled_states() {
        assert_eq!(AsyncState::success(1).into_result(), Ok(1));
        assert_eq!(
            AsyncState::<u8>::Loading.into_result(),
            Err(StateError::NotSettled { state: "Loading" })
        );
        assert_eq!(
            AsyncState::<u8>::failure("gone").into_result(),
            Err(StateError::Failed {
                message: "gone".to_string()
            })
        );
    }
}
