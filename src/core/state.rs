//! Core trait shared by every lifecycle state family.
//!
//! The trait offers pure inspection of a state value. It does not describe
//! transitions: which state may follow which is decided by the caller.

/// Inspection methods common to all lifecycle state families.
///
/// All methods are pure - no side effects. A state value is an immutable
/// snapshot of an external process, so repeated calls always agree.
///
/// # Example
///
/// ```rust
/// use statekit::core::LifecycleState;
/// use statekit::AsyncState;
///
/// let state: AsyncState<u32> = AsyncState::failure("timeout");
///
/// assert_eq!(state.name(), "Failure");
/// assert!(state.is_failure());
/// assert!(!state.is_in_progress());
/// assert_eq!(state.error_message(), Some("timeout"));
/// ```
pub trait LifecycleState {
    /// Name of the active variant, for display and logging.
    fn name(&self) -> &'static str;

    /// Check if this is the idle state nothing has been started from.
    fn is_initial(&self) -> bool;

    /// Check if an operation is currently running.
    ///
    /// For pagination this covers both the first page load and follow-up
    /// page loads.
    fn is_in_progress(&self) -> bool;

    /// Message of the failure, if the active variant is a failure.
    fn error_message(&self) -> Option<&str>;

    /// Check if this is a failure state.
    ///
    /// Default implementation checks for an error message.
    fn is_failure(&self) -> bool {
        self.error_message().is_some()
    }
}
