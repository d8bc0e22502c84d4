//! Variable-length window search against a sum threshold.
//!
//! Two queries are supported:
//! - the shortest contiguous window whose sum reaches a target
//! - the number of contiguous windows whose sum stays below a target
//!
//! Each has a naive O(n^2) scan that restarts from every start index and an
//! O(n) two-pointer variant. The two-pointer variants rely on prefix sums
//! being monotonic, so they are only valid when no element is negative. They
//! also subtract leaving elements from a running sum, which is only exact for
//! integer accumulators. They reject negative input and float element types.
//! The default entry points check both conditions once and pick the
//! two-pointer path when it is valid, falling back to the naive scan
//! otherwise. Results therefore match the naive scan for every input.

use crate::analytics::accumulate::Accumulate;
use crate::config::SearchStrategy;
use crate::sequence::SequenceView;
use crate::window::{SearchResult, Window, WindowError};
use tracing::debug;

/// Checks that the two-pointer scan gives the naive answer for `data`.
fn ensure_two_pointer_valid<T: Accumulate>(data: &[T]) -> Result<(), WindowError> {
    if !T::EXACT {
        return Err(WindowError::InexactAccumulator);
    }
    match data.iter().position(|value| value.is_negative()) {
        Some(index) => Err(WindowError::NegativeElement { index }),
        None => Ok(()),
    }
}

fn keep_shorter(best: &mut Option<Window>, first: usize, last: usize) {
    let length = last - first + 1;
    if best.map_or(true, |window| length < window.length()) {
        *best = Some(Window::spanning(first, last));
    }
}

fn into_search_result(best: Option<Window>) -> SearchResult {
    match best {
        Some(window) => SearchResult::Found(window),
        None => SearchResult::NotFound,
    }
}

/// Shortest window with `sum >= target`.
///
/// Uses the two-pointer search for non-negative integer input and the naive
/// scan for negative or float input. When several windows share the minimal
/// length, which one is reported depends on the path taken.
///
/// # Examples
/// ```
/// use window_analytics::{minimal_window_at_least, SequenceView};
///
/// let data = [2i32, 3, 1, 2, 4, 3];
/// let result = minimal_window_at_least(SequenceView::from(&data), 7);
/// assert_eq!(result.length(), Some(2));
/// ```
pub fn minimal_window_at_least<T: Accumulate>(
    sequence: SequenceView<'_, T>,
    target: T::Sum,
) -> SearchResult {
    let data = sequence.as_slice();
    match ensure_two_pointer_valid(data) {
        Ok(()) => {
            debug!(len = data.len(), "minimal_window_at_least: two-pointer path");
            min_window_two_pointer(data, target)
        }
        Err(reason) => {
            debug!(
                len = data.len(),
                reason = %reason,
                "minimal_window_at_least: naive path"
            );
            min_window_naive(data, target)
        }
    }
}

/// Shortest window with `sum >= target`, restarting the accumulation at every
/// start index. Valid for any input, O(n^2).
pub fn minimal_window_at_least_naive<T: Accumulate>(
    sequence: SequenceView<'_, T>,
    target: T::Sum,
) -> SearchResult {
    min_window_naive(sequence.as_slice(), target)
}

/// Shortest window with `sum >= target` in O(n).
///
/// # Errors
/// Returns `InexactAccumulator` for float element types and `NegativeElement`
/// for the first negative element found.
pub fn minimal_window_at_least_two_pointer<T: Accumulate>(
    sequence: SequenceView<'_, T>,
    target: T::Sum,
) -> Result<SearchResult, WindowError> {
    let data = sequence.as_slice();
    ensure_two_pointer_valid(data)?;
    Ok(min_window_two_pointer(data, target))
}

/// Runs the minimal-window search with an explicit strategy.
pub fn minimal_window_at_least_with<T: Accumulate>(
    sequence: SequenceView<'_, T>,
    target: T::Sum,
    strategy: SearchStrategy,
) -> Result<SearchResult, WindowError> {
    match strategy {
        SearchStrategy::Auto => Ok(minimal_window_at_least(sequence, target)),
        SearchStrategy::TwoPointer => minimal_window_at_least_two_pointer(sequence, target),
        SearchStrategy::Naive => Ok(minimal_window_at_least_naive(sequence, target)),
    }
}

fn min_window_naive<T: Accumulate>(data: &[T], target: T::Sum) -> SearchResult {
    let mut best: Option<Window> = None;
    for start in 0..data.len() {
        let mut sum = T::zero();
        for (end, value) in data.iter().enumerate().skip(start) {
            sum += value.widen();
            if sum >= target {
                keep_shorter(&mut best, start, end);
                break;
            }
        }
    }
    into_search_result(best)
}

fn min_window_two_pointer<T: Accumulate>(data: &[T], target: T::Sum) -> SearchResult {
    let mut best: Option<Window> = None;
    let mut left = 0;
    let mut sum = T::zero();
    for (right, value) in data.iter().enumerate() {
        sum += value.widen();
        while left <= right && sum >= target {
            keep_shorter(&mut best, left, right);
            sum -= data[left].widen();
            left += 1;
        }
    }
    into_search_result(best)
}

/// Number of windows with `sum < target`.
///
/// For every start index the window is extended while the running sum stays
/// below `target`; the first extension that reaches it ends that start and is
/// not counted. Uses the two-pointer count for non-negative integer input and
/// the naive scan otherwise.
///
/// # Examples
/// ```
/// use window_analytics::{count_windows_below, SequenceView};
///
/// let data = [2i32, 1, 3, 4];
/// assert_eq!(count_windows_below(SequenceView::from(&data), 7), 7);
/// ```
pub fn count_windows_below<T: Accumulate>(
    sequence: SequenceView<'_, T>,
    target: T::Sum,
) -> usize {
    let data = sequence.as_slice();
    match ensure_two_pointer_valid(data) {
        Ok(()) => {
            debug!(len = data.len(), "count_windows_below: two-pointer path");
            count_below_two_pointer(data, target)
        }
        Err(reason) => {
            debug!(
                len = data.len(),
                reason = %reason,
                "count_windows_below: naive path"
            );
            count_below_naive(data, target)
        }
    }
}

/// Counts windows with `sum < target` by restarting at every start index.
/// Valid for any input, O(n^2).
pub fn count_windows_below_naive<T: Accumulate>(
    sequence: SequenceView<'_, T>,
    target: T::Sum,
) -> usize {
    count_below_naive(sequence.as_slice(), target)
}

/// Counts windows with `sum < target` in O(n).
///
/// # Errors
/// Returns `InexactAccumulator` for float element types and `NegativeElement`
/// for the first negative element found.
pub fn count_windows_below_two_pointer<T: Accumulate>(
    sequence: SequenceView<'_, T>,
    target: T::Sum,
) -> Result<usize, WindowError> {
    let data = sequence.as_slice();
    ensure_two_pointer_valid(data)?;
    Ok(count_below_two_pointer(data, target))
}

/// Runs the below-target count with an explicit strategy.
pub fn count_windows_below_with<T: Accumulate>(
    sequence: SequenceView<'_, T>,
    target: T::Sum,
    strategy: SearchStrategy,
) -> Result<usize, WindowError> {
    match strategy {
        SearchStrategy::Auto => Ok(count_windows_below(sequence, target)),
        SearchStrategy::TwoPointer => count_windows_below_two_pointer(sequence, target),
        SearchStrategy::Naive => Ok(count_windows_below_naive(sequence, target)),
    }
}

fn count_below_naive<T: Accumulate>(data: &[T], target: T::Sum) -> usize {
    let mut count = 0;
    for start in 0..data.len() {
        let mut sum = T::zero();
        for value in &data[start..] {
            sum += value.widen();
            if sum < target {
                count += 1;
            } else {
                break;
            }
        }
    }
    count
}

fn count_below_two_pointer<T: Accumulate>(data: &[T], target: T::Sum) -> usize {
    let mut count = 0;
    let mut left = 0;
    let mut sum = T::zero();
    for (right, value) in data.iter().enumerate() {
        sum += value.widen();
        while left <= right && sum >= target {
            sum -= data[left].widen();
            left += 1;
        }
        // Every start in left..=right now has a sum below target.
        count += right + 1 - left;
    }
    count
}
