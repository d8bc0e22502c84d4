//! Windowed aggregates
//!
//! Fixed-size window enumeration, incremental window sums, and the direct-scan
//! reductions they are validated against. Every function borrows the caller's
//! sequence read-only through a [`SequenceView`] and returns fresh results.

pub mod accumulate;
pub mod primitives;
pub mod rolling;
pub mod windows;

use crate::sequence::SequenceView;
use crate::window::{WindowError, WindowResult};
use accumulate::Accumulate;
use primitives::{reduce_window, window_all_unique, window_sum, ReduceKind, WindowValue};
use rolling::RollingSum;
use std::hash::Hash;
use windows::FixedWindows;

/// Enumerates every window of `length` elements starting at `0, step, 2 * step, ...`.
///
/// # Arguments
/// * `sequence` - Sequence to window over
/// * `length` - Number of elements per window (at least 1)
/// * `step` - Distance between consecutive window starts (at least 1)
///
/// # Returns
/// A restartable lazy enumeration. When `length` exceeds the sequence length
/// it is empty.
///
/// # Examples
/// ```
/// use window_analytics::{enumerate_windows, SequenceView};
///
/// let data = [1, 2, 3, 4, 5];
/// let windows = enumerate_windows(SequenceView::from(&data), 2, 2).unwrap();
/// let starts: Vec<usize> = windows.iter().map(|w| w.start()).collect();
/// assert_eq!(starts, vec![0, 2]);
/// ```
pub fn enumerate_windows<T>(
    sequence: SequenceView<'_, T>,
    length: usize,
    step: usize,
) -> Result<FixedWindows<'_, T>, WindowError> {
    FixedWindows::new(sequence, length, step)
}

/// Sums every step-1 window of `length` elements using the incremental update.
///
/// # Behavior
/// - One sum per window, in window order
/// - `length == n` yields the sum of the whole sequence
/// - An empty sequence yields no sums
///
/// # Examples
/// ```
/// use window_analytics::{window_sums, SequenceView};
///
/// let data = [1i32, 3, 4, 5, 6, 7, 10, 12, 15];
/// let sums = window_sums(SequenceView::from(&data), 3).unwrap();
/// assert_eq!(sums, vec![8, 12, 15, 18, 23, 29, 37]);
/// ```
pub fn window_sums<T: Accumulate>(
    sequence: SequenceView<'_, T>,
    length: usize,
) -> Result<Vec<T::Sum>, WindowError> {
    Ok(RollingSum::new(sequence, length)?.collect())
}

/// Sums every step-1 window by rescanning it. Same output as [`window_sums`].
pub fn window_sums_naive<T: Accumulate>(
    sequence: SequenceView<'_, T>,
    length: usize,
) -> Result<Vec<T::Sum>, WindowError> {
    let windows = FixedWindows::new(sequence, length, 1)?;
    Ok(windows.slices().map(|(_, slice)| window_sum(slice)).collect())
}

/// Per-window means derived from the incremental sums.
pub fn rolling_averages<T: Accumulate>(
    sequence: SequenceView<'_, T>,
    length: usize,
) -> Result<Vec<f64>, WindowError> {
    let divisor = length as f64;
    Ok(RollingSum::new(sequence, length)?
        .map(|sum| T::sum_to_f64(sum) / divisor)
        .collect())
}

/// Applies `kind` to every step-1 window of `length` elements by direct scan.
///
/// Numeric element types only, plain floats included. For uniqueness over
/// other hashable types see [`window_all_unique_flags`].
///
/// # Examples
/// ```
/// use window_analytics::{window_reduce, ReduceKind, SequenceView, WindowValue};
///
/// let data = [3i32, 1, 3, 2];
/// let results = window_reduce(SequenceView::from(&data), 2, ReduceKind::Max).unwrap();
/// let values: Vec<_> = results.into_iter().map(|r| r.value).collect();
/// assert_eq!(values, vec![WindowValue::Max(3), WindowValue::Max(3), WindowValue::Max(3)]);
/// ```
pub fn window_reduce<T>(
    sequence: SequenceView<'_, T>,
    length: usize,
    kind: ReduceKind,
) -> Result<Vec<WindowResult<WindowValue<T>>>, WindowError>
where
    T: Accumulate + PartialOrd,
{
    let windows = FixedWindows::new(sequence, length, 1)?;
    windows
        .slices()
        .map(|(window, slice)| Ok(WindowResult::new(window, reduce_window(slice, kind)?)))
        .collect()
}

/// Reports for every step-1 window of `length` elements whether all of its
/// elements are distinct. Accepts any hashable element type.
///
/// # Examples
/// ```
/// use window_analytics::{window_all_unique_flags, SequenceView};
///
/// let letters: Vec<char> = "abca".chars().collect();
/// let flags = window_all_unique_flags(SequenceView::from(&letters), 3).unwrap();
/// let values: Vec<bool> = flags.iter().map(|r| r.value).collect();
/// assert_eq!(values, vec![true, true]);
/// ```
pub fn window_all_unique_flags<T: Eq + Hash>(
    sequence: SequenceView<'_, T>,
    length: usize,
) -> Result<Vec<WindowResult<bool>>, WindowError> {
    let windows = FixedWindows::new(sequence, length, 1)?;
    windows
        .slices()
        .map(|(window, slice)| Ok(WindowResult::new(window, window_all_unique(slice)?)))
        .collect()
}
