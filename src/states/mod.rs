//! The three lifecycle state families.
//!
//! Each family is a closed enum with the same matching contract:
//! - `match_all` takes one mandatory handler per variant
//! - `matcher()` starts a partial match resolved with `or_else` or `or_none`
//!
//! The families do not interact and no transition is ever enforced: any
//! state may replace any other.

mod async_state;
mod form;
mod pagination;

pub use async_state::{AsyncMatcher, AsyncState};
pub use form::{FormMatcher, FormState};
pub use pagination::{PaginationMatcher, PaginationState};
