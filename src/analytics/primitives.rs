//! Direct-scan reductions over a single window.
//!
//! These are pure functions that read every element of the window, O(length)
//! each. They make no assumption about how neighbouring windows relate, which
//! makes them the baseline the incremental aggregates are checked against.

use super::accumulate::Accumulate;
use crate::window::WindowError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::Hash;

/// Reduction applied to every window by [`window_reduce`](crate::window_reduce).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReduceKind {
    Sum,
    Max,
    Min,
    Average,
    AllUnique,
}

/// Value produced by a [`ReduceKind`] for one window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    rename_all = "snake_case",
    bound(
        serialize = "T: Serialize, T::Sum: Serialize",
        deserialize = "T: Deserialize<'de>, T::Sum: Deserialize<'de>"
    )
)]
pub enum WindowValue<T: Accumulate> {
    Sum(T::Sum),
    Max(T),
    Min(T),
    Average(f64),
    AllUnique(bool),
}

/// Sums the window by direct scan in the widened accumulator.
pub fn window_sum<T: Accumulate>(window: &[T]) -> T::Sum {
    window
        .iter()
        .fold(T::zero(), |total, &value| total + value.widen())
}

/// Largest element in the window. The first of equal maxima wins.
pub fn window_max<T: PartialOrd + Copy>(window: &[T]) -> Result<T, WindowError> {
    window
        .iter()
        .copied()
        .reduce(|best, value| if value > best { value } else { best })
        .ok_or(WindowError::EmptyWindow)
}

/// Smallest element in the window. The first of equal minima wins.
pub fn window_min<T: PartialOrd + Copy>(window: &[T]) -> Result<T, WindowError> {
    window
        .iter()
        .copied()
        .reduce(|best, value| if value < best { value } else { best })
        .ok_or(WindowError::EmptyWindow)
}

/// Arithmetic mean using floating-point division, whatever the element type.
pub fn window_average<T: Accumulate>(window: &[T]) -> Result<f64, WindowError> {
    if window.is_empty() {
        return Err(WindowError::EmptyWindow);
    }
    Ok(T::sum_to_f64(window_sum(window)) / window.len() as f64)
}

/// `true` when no element appears twice in the window. Works for any
/// hashable type: chars, strings, integers, `OrderedFloat`.
pub fn window_all_unique<T: Eq + Hash>(window: &[T]) -> Result<bool, WindowError> {
    if window.is_empty() {
        return Err(WindowError::EmptyWindow);
    }
    let distinct: HashSet<&T> = window.iter().collect();
    Ok(distinct.len() == window.len())
}

/// [`window_all_unique`] for numeric windows, including plain `f32`/`f64`.
///
/// Floats are compared by value through their `OrderedFloat` key, so `0.0`
/// and `-0.0` are equal and every NaN equals every other NaN.
pub fn window_all_unique_numeric<T: Accumulate>(window: &[T]) -> Result<bool, WindowError> {
    if window.is_empty() {
        return Err(WindowError::EmptyWindow);
    }
    let distinct: HashSet<T::Key> = window.iter().map(|&value| value.unique_key()).collect();
    Ok(distinct.len() == window.len())
}

/// Applies `kind` to one numeric window.
pub fn reduce_window<T>(window: &[T], kind: ReduceKind) -> Result<WindowValue<T>, WindowError>
where
    T: Accumulate + PartialOrd,
{
    if window.is_empty() {
        return Err(WindowError::EmptyWindow);
    }
    let value = match kind {
        ReduceKind::Sum => WindowValue::Sum(window_sum(window)),
        ReduceKind::Max => WindowValue::Max(window_max(window)?),
        ReduceKind::Min => WindowValue::Min(window_min(window)?),
        ReduceKind::Average => WindowValue::Average(window_average(window)?),
        ReduceKind::AllUnique => WindowValue::AllUnique(window_all_unique_numeric(window)?),
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    #[test]
    fn sum_widens_before_adding() {
        assert_eq!(window_sum(&[i32::MAX, 1]), i32::MAX as i64 + 1);
        assert_eq!(window_sum::<u8>(&[]), 0);
    }

    #[test]
    fn max_and_min_scan_every_element() {
        let window = [4i32, 9, 2, 9, 1];
        assert_eq!(window_max(&window), Ok(9));
        assert_eq!(window_min(&window), Ok(1));
    }

    #[test]
    fn max_and_min_guard_empty_window() {
        assert_eq!(window_max::<i32>(&[]), Err(WindowError::EmptyWindow));
        assert_eq!(window_min::<f64>(&[]), Err(WindowError::EmptyWindow));
    }

    #[test]
    fn average_is_floating_for_integers() {
        let result = window_average(&[1i32, 2]).unwrap();
        assert!((result - 1.5).abs() < 1e-12);
        assert!(window_average::<i32>(&[]).is_err());
    }

    #[test]
    fn all_unique_ignores_order() {
        assert_eq!(window_all_unique(&[3i32, 1, 2]), Ok(true));
        assert_eq!(window_all_unique(&[1, 2, 1]), Ok(false));
        assert_eq!(window_all_unique(&['a', 'b', 'a']), Ok(false));
    }

    #[test]
    fn all_unique_works_for_ordered_floats() {
        let window = [OrderedFloat(0.5), OrderedFloat(1.5), OrderedFloat(0.5)];
        assert_eq!(window_all_unique(&window), Ok(false));
    }

    #[test]
    fn reduce_window_dispatches_on_kind() {
        let window = [5i32, 3, 8];
        assert_eq!(reduce_window(&window, ReduceKind::Sum), Ok(WindowValue::Sum(16)));
        assert_eq!(reduce_window(&window, ReduceKind::Max), Ok(WindowValue::Max(8)));
        assert_eq!(reduce_window(&window, ReduceKind::Min), Ok(WindowValue::Min(3)));
        assert_eq!(
            reduce_window(&window, ReduceKind::AllUnique),
            Ok(WindowValue::AllUnique(true))
        );
    }

    #[test]
    fn numeric_uniqueness_covers_plain_floats() {
        assert_eq!(window_all_unique_numeric(&[0.5f64, 1.5, 0.5]), Ok(false));
        assert_eq!(window_all_unique_numeric(&[0.5f32, 1.5, 2.5]), Ok(true));
        assert_eq!(window_all_unique_numeric(&[0.0f64, -0.0]), Ok(false));
        assert_eq!(window_all_unique_numeric(&[7u8, 8, 7]), Ok(false));
        assert_eq!(window_all_unique_numeric::<f64>(&[]), Err(WindowError::EmptyWindow));
    }

    #[test]
    fn reduce_window_accepts_plain_floats() {
        let window = [1.5f64, -2.0, 4.25];
        assert_eq!(reduce_window(&window, ReduceKind::Max), Ok(WindowValue::Max(4.25)));
        assert_eq!(reduce_window(&window, ReduceKind::Min), Ok(WindowValue::Min(-2.0)));
        assert_eq!(reduce_window(&window, ReduceKind::Sum), Ok(WindowValue::Sum(3.75)));
        assert_eq!(
            reduce_window(&window, ReduceKind::AllUnique),
            Ok(WindowValue::AllUnique(true))
        );
    }
}
