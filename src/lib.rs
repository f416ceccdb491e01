//! Statekit: closed lifecycle states with safe matching
//!
//! Statekit models the snapshots a UI or service layer renders while some
//! external process runs: an asynchronous operation, a form submission, or a
//! paginated list load. Each family is a plain enum whose values are
//! immutable and are replaced, never mutated, as the process progresses.
//!
//! # Core Concepts
//!
//! - **States**: `AsyncState`, `FormState` and `PaginationState`
//! - **Exhaustive matching**: `match_all` requires a handler for every variant,
//!   so adding a variant breaks every call site at compile time
//! - **Partial matching**: `matcher()` accepts any subset of handlers and is
//!   resolved with a fallback (`or_else`) or as an `Option` (`or_none`)
//! - **Inspection**: the `LifecycleState` trait
//!
//! # Example
//!
//! ```rust
//! use statekit::AsyncState;
//!
//! fn render(state: &AsyncState<String>) -> String {
//!     state.match_all(
//!         || "State: Initial (idle)".to_string(),
//!         || "State: Loading...".to_string(),
//!         |data| format!("State: Success with data: {data}"),
//!         |message| format!("State: Failure with error: {message}"),
//!     )
//! }
//!
//! let mut state = AsyncState::Initial;
//! assert_eq!(render(&state), "State: Initial (idle)");
//!
//! state = AsyncState::Loading;
//! assert_eq!(render(&state), "State: Loading...");
//!
//! state = AsyncState::success("Hello".to_string());
//! assert_eq!(render(&state), "State: Success with data: Hello");
//!
//! let banner = state.matcher().failure(|message| message.to_string()).or_none();
//! assert_eq!(banner, None);
//! ```

pub mod core;
pub mod states;

// Re-export commonly used types
pub use crate::core::{LifecycleState, StateError};
pub use states::{
    AsyncMatcher, AsyncState, FormMatcher, FormState, PaginationMatcher, PaginationState,
};
