//! Errors raised when a settled value is demanded from a state.

use thiserror::Error;

/// Errors that can occur when converting a state into a `Result`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StateError {
    /// The state holds neither data nor a failure yet
    #[error("State is not settled yet (current: {state})")]
    NotSettled { state: &'static str },

    /// The state is a failure
    #[error("Operation failed: {message}")]
    Failed { message: String },
}
