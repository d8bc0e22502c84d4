use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Half-open index range `[start, start + length)` over a sequence.
///
/// A window only stores positions; it never owns or borrows the elements.
/// Use [`SequenceView::window`](crate::SequenceView::window) to read them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Window {
    start: usize,
    length: usize,
}

impl Window {
    /// Creates a window starting at `start` covering `length` elements.
    ///
    /// # Errors
    /// Returns `WindowError::InvalidWindowLength` when `length` is zero.
    pub fn new(start: usize, length: usize) -> Result<Self, WindowError> {
        if length == 0 {
            return Err(WindowError::InvalidWindowLength(length));
        }
        Ok(Window { start, length })
    }

    /// Creates a window from inclusive bounds `first..=last`.
    pub(crate) fn spanning(first: usize, last: usize) -> Self {
        debug_assert!(first <= last);
        Window {
            start: first,
            length: last - first + 1,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// One past the last index covered by the window.
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }
}

/// A window paired with the aggregate computed over it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowResult<V> {
    pub window: Window,
    pub value: V,
}

impl<V> WindowResult<V> {
    pub fn new(window: Window, value: V) -> Self {
        WindowResult { window, value }
    }
}

/// Outcome of a window search. `NotFound` is a normal result, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchResult {
    Found(Window),
    NotFound,
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found(_))
    }

    /// Length of the window that was found.
    pub fn length(&self) -> Option<usize> {
        self.window().map(|window| window.length())
    }

    pub fn window(&self) -> Option<Window> {
        match self {
            SearchResult::Found(window) => Some(*window),
            SearchResult::NotFound => None,
        }
    }
}

/// Longest contiguous run without a repeated element.
///
/// An empty sequence produces `length == 0` and `start == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueRun {
    pub length: usize,
    pub start: usize,
}

impl UniqueRun {
    pub fn new(length: usize, start: usize) -> Self {
        UniqueRun { length, start }
    }

    /// Converts the run into a search result; an empty run is `NotFound`.
    pub fn to_search_result(&self) -> SearchResult {
        match Window::new(self.start, self.length) {
            Ok(window) => SearchResult::Found(window),
            Err(_) => SearchResult::NotFound,
        }
    }
}

/// Errors produced by windowed queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// A window length below 1 was requested
    InvalidWindowLength(usize),
    /// A step below 1 was requested
    InvalidStep(usize),
    /// A reduction was applied to a window with no elements
    EmptyWindow,
    /// The two-pointer search requires non-negative elements
    NegativeElement { index: usize },
    /// The two-pointer search requires an exact (integer) accumulator
    InexactAccumulator,
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::InvalidWindowLength(length) => {
                write!(f, "Invalid window length: {} (must be at least 1)", length)
            }
            WindowError::InvalidStep(step) => {
                write!(f, "Invalid window step: {} (must be at least 1)", step)
            }
            WindowError::EmptyWindow => write!(f, "Cannot reduce an empty window"),
            WindowError::NegativeElement { index } => write!(
                f,
                "Negative element at index {}: two-pointer search requires non-negative input",
                index
            ),
            WindowError::InexactAccumulator => write!(
                f,
                "Two-pointer search requires exact integer sums; use the naive scan for floats"
            ),
        }
    }
}

impl std::error::Error for WindowError {}
