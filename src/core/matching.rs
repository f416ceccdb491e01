//! Result slot shared by the partial matchers of every state family.
//!
//! A partial matcher is offered handlers one variant at a time. Only the
//! handler for the active variant is ever invoked, and only the first one
//! offered for it. The outcome is then resolved either with a fallback
//! (`or_else`) or as an optional value (`or_none`).

use tracing::trace;

/// Outcome of a partial match that may or may not have found its handler.
///
/// # Example
///
/// ```rust
/// use statekit::core::Resolution;
///
/// let mut resolution = Resolution::new();
/// resolution.offer(|| 1);
/// resolution.offer(|| 2); // already resolved, never invoked
///
/// assert_eq!(resolution.or_none("Loaded"), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "the handler result is lost unless resolved with `or_else` or `or_none`"]
pub struct Resolution<R> {
    value: Option<R>,
}

impl<R> Default for Resolution<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Resolution<R> {
    /// Create an unresolved slot.
    pub fn new() -> Self {
        Self { value: None }
    }

    /// Invoke `handler` unless a result is already held.
    ///
    /// Callers only offer the handler that belongs to the active variant.
    pub fn offer<F>(&mut self, handler: F)
    where
        F: FnOnce() -> R,
    {
        if self.value.is_none() {
            self.value = Some(handler());
        }
    }

    /// Return the handler's result, or the fallback's when none matched.
    ///
    /// `state` is the active variant's name, used for tracing only.
    pub fn or_else<F>(self, state: &'static str, fallback: F) -> R
    where
        F: FnOnce() -> R,
    {
        match self.value {
            Some(value) => value,
            None => {
                trace!(state, "no handler for active variant, using fallback");
                fallback()
            }
        }
    }

    /// Return the handler's result, or `None` when none matched.
    pub fn or_none(self, state: &'static str) -> Option<R> {
        if self.value.is_none() {
            trace!(state, "no handler for active variant");
        }
        self.value
    }
}
