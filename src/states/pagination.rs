//! Lifecycle of a paginated list load.
//!
//! `LoadingMore` and `Failure` keep the items and page that were on screen
//! before the follow-up request started. The producer copies them forward
//! when it builds the next state; nothing here derives or defaults them, so a
//! consumer can keep rendering existing content while the next page loads or
//! after it failed.

use crate::core::{LifecycleState, Resolution};

/// State of a paginated list load.
///
/// # Example
///
/// ```rust
/// use statekit::PaginationState;
///
/// let loaded = PaginationState::loaded(vec!["a", "b"], 1, true);
///
/// // Producer carries items and page forward into the next state.
/// let next = match &loaded {
///     PaginationState::Loaded { items, page, .. } => {
///         PaginationState::loading_more(items.clone(), *page)
///     }
///     _ => PaginationState::Loading,
/// };
///
/// let shown = next
///     .matcher()
///     .loading_more(|items, _page| items.len())
///     .or_else(|| 0);
///
/// assert_eq!(shown, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PaginationState<T> {
    /// Nothing has been requested
    Initial,
    /// The first page is loading
    Loading,
    /// A page has arrived
    Loaded {
        items: Vec<T>,
        page: u32,
        has_more: bool,
    },
    /// A follow-up page is loading; `items` and `page` are what was loaded so far
    LoadingMore { items: Vec<T>, page: u32 },
    /// A load failed; `items` and `page` are what was loaded before the failure
    Failure {
        error_message: String,
        items: Vec<T>,
        page: u32,
    },
}

impl<T> Default for PaginationState<T> {
    fn default() -> Self {
        Self::Initial
    }
}

impl<T> PaginationState<T> {
    /// Build a `Loaded` state.
    pub fn loaded(items: Vec<T>, page: u32, has_more: bool) -> Self {
        Self::Loaded {
            items,
            page,
            has_more,
        }
    }

    /// Build a `LoadingMore` state from the items and page loaded so far.
    pub fn loading_more(items: Vec<T>, page: u32) -> Self {
        Self::LoadingMore { items, page }
    }

    /// Build a `Failure` state, keeping the items and page loaded so far.
    ///
    /// A failure of the first page passes an empty `items` and page `0`.
    pub fn failure(error_message: impl Into<String>, items: Vec<T>, page: u32) -> Self {
        Self::Failure {
            error_message: error_message.into(),
            items,
            page,
        }
    }

    /// Exhaustive match: one handler per variant, all mandatory.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statekit::PaginationState;
    ///
    /// let state = PaginationState::failure("net error", vec!["x", "y"], 2);
    ///
    /// let summary = state.match_all(
    ///     || "empty".to_string(),
    ///     || "loading".to_string(),
    ///     |items, page, has_more| format!("{} items, page {page}, more: {has_more}", items.len()),
    ///     |items, page| format!("{} items, loading page {}", items.len(), page + 1),
    ///     |message, items, page| format!("{message} after {} items on page {page}", items.len()),
    /// );
    ///
    /// assert_eq!(summary, "net error after 2 items on page 2");
    /// ```
    pub fn match_all<R>(
        &self,
        initial: impl FnOnce() -> R,
        loading: impl FnOnce() -> R,
        loaded: impl FnOnce(&[T], u32, bool) -> R,
        loading_more: impl FnOnce(&[T], u32) -> R,
        failure: impl FnOnce(&str, &[T], u32) -> R,
    ) -> R {
        match self {
            Self::Initial => initial(),
            Self::Loading => loading(),
            Self::Loaded {
                items,
                page,
                has_more,
            } => loaded(items, *page, *has_more),
            Self::LoadingMore { items, page } => loading_more(items, *page),
            Self::Failure {
                error_message,
                items,
                page,
            } => failure(error_message, items, *page),
        }
    }

    /// Start a partial match.
    pub fn matcher<R>(&self) -> PaginationMatcher<'_, T, R> {
        PaginationMatcher {
            state: self,
            resolution: Resolution::new(),
        }
    }

    /// Items carried by the active variant.
    ///
    /// `None` for `Initial` and `Loading`, which carry no items.
    pub fn items(&self) -> Option<&[T]> {
        match self {
            Self::Loaded { items, .. }
            | Self::LoadingMore { items, .. }
            | Self::Failure { items, .. } => Some(items),
            Self::Initial | Self::Loading => None,
        }
    }

    /// Page carried by the active variant.
    pub fn page(&self) -> Option<u32> {
        match self {
            Self::Loaded { page, .. }
            | Self::LoadingMore { page, .. }
            | Self::Failure { page, .. } => Some(*page),
            Self::Initial | Self::Loading => None,
        }
    }

    /// Check if a `Loaded` state reported further pages.
    pub fn has_more(&self) -> bool {
        matches!(self, Self::Loaded { has_more: true, .. })
    }

    /// Transform every item; pages, flags and messages carry over unchanged.
    pub fn map<U, F>(self, f: F) -> PaginationState<U>
    where
        F: FnMut(T) -> U,
    {
        match self {
            Self::Initial => PaginationState::Initial,
            Self::Loading => PaginationState::Loading,
            Self::Loaded {
                items,
                page,
                has_more,
            } => PaginationState::Loaded {
                items: items.into_iter().map(f).collect(),
                page,
                has_more,
            },
            Self::LoadingMore { items, page } => PaginationState::LoadingMore {
                items: items.into_iter().map(f).collect(),
                page,
            },
            Self::Failure {
                error_message,
                items,
                page,
            } => PaginationState::Failure {
                error_message,
                items: items.into_iter().map(f).collect(),
                page,
            },
        }
    }
}

impl<T> LifecycleState for PaginationState<T> {
    fn name(&self) -> &'static str {
        match self {
            Self::Initial => "Initial",
            Self::Loading => "Loading",
            Self::Loaded { .. } => "Loaded",
            Self::LoadingMore { .. } => "LoadingMore",
            Self::Failure { .. } => "Failure",
        }
    }

    fn is_initial(&self) -> bool {
        matches!(self, Self::Initial)
    }

    fn is_in_progress(&self) -> bool {
        matches!(self, Self::Loading | Self::LoadingMore { .. })
    }

    fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failure { error_message, .. } => Some(error_message),
            _ => None,
        }
    }
}

/// Partial match over a [`PaginationState`].
///
/// The handler for the active variant runs as soon as it is offered, not
/// when the matcher is resolved, so dropping an unresolved matcher still
/// runs that handler's side effects.
///
/// # Example
///
/// ```rust
/// use statekit::PaginationState;
///
/// let state: PaginationState<u8> = PaginationState::Initial;
///
/// let count = state
///     .matcher()
///     .loaded(|items, _, _| items.len())
///     .or_none();
///
/// assert_eq!(count, None);
/// ```
#[must_use = "the handler result is lost unless resolved with `or_else` or `or_none`"]
pub struct PaginationMatcher<'a, T, R> {
    state: &'a PaginationState<T>,
    resolution: Resolution<R>,
}

impl<'a, T, R> PaginationMatcher<'a, T, R> {
    /// Handler for `Initial`.
    pub fn initial(mut self, handler: impl FnOnce() -> R) -> Self {
        if let PaginationState::Initial = self.state {
            self.resolution.offer(handler);
        }
        self
    }

    /// Handler for `Loading`.
    pub fn loading(mut self, handler: impl FnOnce() -> R) -> Self {
        if let PaginationState::Loading = self.state {
            self.resolution.offer(handler);
        }
        self
    }

    /// Handler for `Loaded`, receiving items, page and the more-pages flag.
    pub fn loaded(mut self, handler: impl FnOnce(&'a [T], u32, bool) -> R) -> Self {
        if let PaginationState::Loaded {
            items,
            page,
            has_more,
        } = self.state
        {
            self.resolution.offer(|| handler(items, *page, *has_more));
        }
        self
    }

    /// Handler for `LoadingMore`, receiving the preserved items and page.
    pub fn loading_more(mut self, handler: impl FnOnce(&'a [T], u32) -> R) -> Self {
        if let PaginationState::LoadingMore { items, page } = self.state {
            self.resolution.offer(|| handler(items, *page));
        }
        self
    }

    /// Handler for `Failure`, receiving the message and the preserved items and page.
    pub fn failure(mut self, handler: impl FnOnce(&'a str, &'a [T], u32) -> R) -> Self {
        if let PaginationState::Failure {
            error_message,
            items,
            page,
        } = self.state
        {
            self.resolution.offer(|| handler(error_message, items, *page));
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
