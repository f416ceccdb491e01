//! Family-independent building blocks.
//!
//! This module contains the pieces every state family shares:
//! - Inspection via the `LifecycleState` trait
//! - The `Resolution` slot behind partial matching
//! - `StateError` for converting states into results
//!
//! Nothing here performs I/O or holds mutable shared state.

mod error;
mod matching;
mod state;

pub use error::StateError;
pub use matching::Resolution;
pub use state::LifecycleState;
