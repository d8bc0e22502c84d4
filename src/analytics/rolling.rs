//! Incremental window sums.
//!
//! `RollingSum` computes the first window by direct scan and every following
//! window with `sum + entering - leaving`, O(n) in total instead of the
//! O(n * length) of rescanning each window.

use super::accumulate::Accumulate;
use super::primitives::window_sum;
use super::windows::window_count;
use crate::sequence::SequenceView;
use crate::window::{Window, WindowError};
use std::iter::FusedIterator;

/// Lazy iterator over the sums of every step-1 window of a fixed length.
#[derive(Debug, Clone)]
pub struct RollingSum<'a, T: Accumulate> {
    data: &'a [T],
    length: usize,
    next_start: usize,
    remaining: usize,
    current: Option<T::Sum>,
}

impl<'a, T: Accumulate> RollingSum<'a, T> {
    /// Prepares the rolling sum for windows of `length` elements.
    ///
    /// # Errors
    /// Returns `InvalidWindowLength` when `length == 0`.
    pub fn new(sequence: SequenceView<'a, T>, length: usize) -> Result<Self, WindowError> {
        if length == 0 {
            return Err(WindowError::InvalidWindowLength(length));
        }
        Ok(RollingSum {
            data: sequence.as_slice(),
            length,
            next_start: 0,
            remaining: window_count(sequence.len(), length, 1),
            current: None,
        })
    }

    /// Pairs every remaining sum with the window it covers.
    pub fn with_windows(self) -> impl Iterator<Item = (Window, T::Sum)> + 'a {
        let length = self.length;
        let first = self.next_start;
        self.enumerate().map(move |(offset, sum)| {
            let start = first + offset;
            (Window::spanning(start, start + length - 1), sum)
        })
    }
}

impl<'a, T: Accumulate> Iterator for RollingSum<'a, T> {
    type Item = T::Sum;

    #[inline]
    fn next(&mut self) -> Option<T::Sum> {
        if self.remaining == 0 {
            return None;
        }
        let start = self.next_start;
        let sum = match self.current {
            None => window_sum(&self.data[..self.length]),
            Some(previous) => {
                let entering = self.data[start + self.length - 1].widen();
                let leaving = self.data[start - 1].widen();
                previous + entering - leaving
            }
        };
        self.current = Some(sum);
        self.next_start += 1;
        self.remaining -= 1;
        Some(sum)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Accumulate> ExactSizeIterator for RollingSum<'_, T> {}

impl<T: Accumulate> FusedIterator for RollingSum<'_, T> {}
