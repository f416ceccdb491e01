//! Lifecycle of a form submission.

use crate::core::{LifecycleState, Resolution, StateError};
use std::fmt::Display;

/// State of a form submission.
///
/// Shaped like [`AsyncState`](crate::AsyncState), with `Submitting` as the
/// in-progress variant.
///
/// # Example
///
/// ```rust
/// use statekit::FormState;
///
/// let state: FormState<u64> = FormState::Submitting;
///
/// let label = state
///     .matcher()
///     .submitting(|| "Saving...")
///     .failure(|_| "Retry")
///     .or_else(|| "Save");
///
/// assert_eq!(label, "Saving...");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FormState<T> {
    /// The form has not been submitted
    Initial,
    /// Submission is in flight
    Submitting,
    /// Submission was accepted
    Success { data: T },
    /// Submission was rejected or could not be sent
    Failure { error_message: String },
}

impl<T> Default for FormState<T> {
    fn default() -> Self {
        Self::Initial
    }
}

impl<T> FormState<T> {
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
    pub fn match_all<R>(
        &self,
        initial: impl FnOnce() -> R,
        submitting: impl FnOnce() -> R,
        success: impl FnOnce(&T) -> R,
        failure: impl FnOnce(&str) -> R,
    ) -> R {
        match self {
            Self::Initial => initial(),
            Self::Submitting => submitting(),
            Self::Success { data } => success(data),
            Self::Failure { error_message } => failure(error_message),
        }
    }

    /// Start a partial match.
    pub fn matcher<R>(&self) -> FormMatcher<'_, T, R> {
        FormMatcher {
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
    pub fn as_ref(&self) -> FormState<&T> {
        match self {
            Self::Initial => FormState::Initial,
            Self::Submitting => FormState::Submitting,
            Self::Success { data } => FormState::Success { data },
            Self::Failure { error_message } => FormState::Failure {
                error_message: error_message.clone(),
            },
        }
    }

    /// Transform the data of a `Success`; other variants carry over unchanged.
    pub fn map<U, F>(self, f: F) -> FormState<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Initial => FormState::Initial,
            Self::Submitting => FormState::Submitting,
            Self::Success { data } => FormState::Success { data: f(data) },
            Self::Failure { error_message } => FormState::Failure { error_message },
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

impl<T> LifecycleState for FormState<T> {
    fn name(&self) -> &'static str {
        match self {
            Self::Initial => "Initial",
            Self::Submitting => "Submitting",
            Self::Success { .. } => "Success",
            Self::Failure { .. } => "Failure",
        }
    }

    fn is_initial(&self) -> bool {
        matches!(self, Self::Initial)
    }

    fn is_in_progress(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failure { error_message } => Some(error_message),
            _ => None,
        }
    }
}

impl<T, E: Display> From<Result<T, E>> for FormState<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(err) => Self::failure(err.to_string()),
        }
    }
}

/// Partial match over a [`FormState`].
///
/// The handler for the active variant runs as soon as it is offered, not
/// when the matcher is resolved, so dropping an unresolved matcher still
/// runs that handler's side effects.
#[must_use = "the handler result is lost unless resolved with `or_else` or `or_none`"]
pub struct FormMatcher<'a, T, R> {
    state: &'a FormState<T>,
    resolution: Resolution<R>,
}

impl<'a, T, R> FormMatcher<'a, T, R> {
    /// Handler for `Initial`.
    pub fn initial(mut self, handler: impl FnOnce() -> R) -> Self {
        if let FormState::Initial = self.state {
            self.resolution.offer(handler);
        }
        self
    }

    /// Handler for `Submitting`.
    pub fn submitting(mut self, handler: impl FnOnce() -> R) -> Self {
        if let FormState::Submitting = self.state {
            self.resolution.offer(handler);
        }
        self
    }

    /// Handler for `Success`.
    pub fn success(mut self, handler: impl FnOnce(&'a T) -> R) -> Self {
        if let FormState::Success { data } = self.state {
            self.resolution.offer(|| handler(data));
        }
        self
    }

    /// Handler for `Failure`.
    pub fn failure(mut self, handler: impl FnOnce(&'a str) -> R) -> Self {
        if let FormState::Failure { error_message } = self.state {
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
    use std::collections::HashSet;

    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    struct Receipt {
        id: u32,
    }

    #[test]
    fn failures_compare_by_value() {
        assert_eq!(FormState::<()>::failure("same"), FormState::failure("same"));
        assert_ne!(FormState::<()>::failure("a"), FormState::failure("b"));
    }

    #[test]
    fn different_variants_are_never_equal() {
        let success: FormState<String> = FormState::success("x".to_string());
        let failure: FormState<String> = FormState::failure("x");
        assert_ne!(success, failure);
    }

    #[test]
    fn equal_states_hash_alike() {
        let mut seen = HashSet::new();
        seen.insert(FormState::success(Receipt { id: 1 }));
        seen.insert(FormState::success(Receipt { id: 1 }));
        seen.insert(FormState::success(Receipt { id: 2 }));
        seen.insert(FormState::Submitting);

        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn match_all_passes_success_data() {
        let state = FormState::success(Receipt { id: 9 });
        let id = state.match_all(|| 0, || 0, |receipt| receipt.id, |_| 0);
        assert_eq!(id, 9);
    }

    #[test]
    fn submitting_is_in_progress() {
        let state: FormState<Receipt> = FormState::Submitting;
        assert!(state.is_in_progress());
        assert_eq!(state.name(), "Submitting");
        assert_eq!(state.matcher().submitting(|| ()).or_none(), Some(()));
    }

    #[test]
    fn matcher_without_handlers_uses_fallback() {
        let state = FormState::success(Receipt { id: 4 });
        assert_eq!(state.matcher().or_else(|| "idle"), "idle");
        assert_eq!(state.matcher::<u32>().or_none(), None);
    }

    #[test]
    fn into_result_and_back() {
        let state: FormState<u32> = Err::<u32, _>("invalid email").into();
        assert_eq!(state.error_message(), Some("invalid email"));
        assert_eq!(
            state.into_result(),
            Err(StateError::Failed {
                message: "invalid email".to_string()
            })
        );
        assert_eq!(
            FormState::<u32>::Initial.into_result(),
            Err(StateError::NotSettled { state: "Initial" })
        );
    }

    #[test]
    fn map_keeps_failure_message() {
        let state: FormState<u32> = FormState::failure("conflict");
        assert_eq!(state.map(|n| n.to_string()), FormState::failure("conflict"));
        assert_eq!(
            FormState::success(Receipt { id: 3 }).as_ref().map(|r| r.id),
            FormState::success(3)
        );
    }
}
