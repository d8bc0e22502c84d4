//! Longest contiguous run without a repeated element.
//!
//! Works over any sequence of equatable, hashable elements. Floats can be
//! searched by wrapping them in `ordered_float::OrderedFloat`.

use crate::sequence::SequenceView;
use crate::window::UniqueRun;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Longest run of pairwise-distinct elements, in O(n).
///
/// Keeps the last index each element was seen at; when the right edge meets
/// an element already inside the run, the left edge jumps just past its
/// previous occurrence. The earliest of equally long runs is reported.
///
/// # Examples
/// ```
/// use window_analytics::{longest_unique_run, SequenceView};
///
/// let chars: Vec<char> = "abcabcbb".chars().collect();
/// let run = longest_unique_run(SequenceView::from(&chars));
/// assert_eq!((run.length, run.start), (3, 0));
/// ```
pub fn longest_unique_run<T: Eq + Hash>(sequence: SequenceView<'_, T>) -> UniqueRun {
    let data = sequence.as_slice();
    let mut best = UniqueRun::new(0, 0);
    let mut last_seen: HashMap<&T, usize> = HashMap::with_capacity(data.len());
    let mut left = 0;

    for (right, value) in data.iter().enumerate() {
        if let Some(previous) = last_seen.insert(value, right) {
            if previous >= left {
                left = previous + 1;
            }
        }
        let length = right + 1 - left;
        if length > best.length {
            best = UniqueRun::new(length, left);
        }
    }

    best
}

/// Longest run of pairwise-distinct elements, restarting a fresh membership
/// set at every start index. O(n^2); same length as [`longest_unique_run`].
pub fn longest_unique_run_naive<T: Eq + Hash>(sequence: SequenceView<'_, T>) -> UniqueRun {
    let data = sequence.as_slice();
    let mut best = UniqueRun::new(0, 0);

    for start in 0..data.len() {
        let mut seen = HashSet::new();
        let length = data[start..]
            .iter()
            .take_while(|value| seen.insert(*value))
            .count();
        if length > best.length {
            best = UniqueRun::new(length, start);
        }
    }

    best
}

/// Longest run of distinct characters in `text`.
///
/// `start` and `length` count characters, not bytes.
pub fn longest_unique_run_str(text: &str) -> UniqueRun {
    let chars: Vec<char> = text.chars().collect();
    longest_unique_run(SequenceView::from(&chars))
}
