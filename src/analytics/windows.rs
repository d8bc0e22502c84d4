//! Fixed-size window enumeration.
//!
//! `FixedWindows` describes every contiguous window of a given length and step
//! over a sequence. It never materializes the windows up front: each call to
//! [`FixedWindows::iter`] starts a fresh lazy pass, so the enumeration can be
//! replayed as often as needed at O(1) memory.

use crate::sequence::SequenceView;
use crate::window::{Window, WindowError};
use std::iter::FusedIterator;

/// All windows of `length` elements whose starts are `0, step, 2 * step, ...`.
#[derive(Debug)]
pub struct FixedWindows<'a, T> {
    sequence: SequenceView<'a, T>,
    length: usize,
    step: usize,
}

impl<'a, T> FixedWindows<'a, T> {
    /// Describes the windows of `length` elements taken every `step` positions.
    ///
    /// A `length` larger than the sequence is valid and yields no windows.
    ///
    /// # Errors
    /// `InvalidWindowLength` when `length == 0`, `InvalidStep` when `step == 0`.
    pub fn new(
        sequence: SequenceView<'a, T>,
        length: usize,
        step: usize,
    ) -> Result<Self, WindowError> {
        if length == 0 {
            return Err(WindowError::InvalidWindowLength(length));
        }
        if step == 0 {
            return Err(WindowError::InvalidStep(step));
        }
        Ok(FixedWindows {
            sequence,
            length,
            step,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn step(&self) -> usize {
        self.step
    }

    /// Number of windows the enumeration produces.
    pub fn count(&self) -> usize {
        window_count(self.sequence.len(), self.length, self.step)
    }

    /// Starts a new pass over the windows.
    pub fn iter(&self) -> WindowIter {
        WindowIter {
            next_start: 0,
            remaining: self.count(),
            length: self.length,
            step: self.step,
        }
    }

    /// Starts a new pass yielding each window together with its elements.
    pub fn slices(&self) -> impl Iterator<Item = (Window, &'a [T])> + Clone + 'a {
        let sequence = self.sequence;
        self.iter().filter_map(move |window| {
            sequence.window(&window).map(|elements| (window, elements))
        })
    }
}

impl<T> Clone for FixedWindows<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FixedWindows<'_, T> {}

impl<'a, T> IntoIterator for FixedWindows<'a, T> {
    type Item = Window;
    type IntoIter = WindowIter;

    fn into_iter(self) -> WindowIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &FixedWindows<'a, T> {
    type Item = Window;
    type IntoIter = WindowIter;

    fn into_iter(self) -> WindowIter {
        self.iter()
    }
}

/// Number of windows of `length` taken every `step` over `len` elements.
pub(crate) fn window_count(len: usize, length: usize, step: usize) -> usize {
    if length == 0 || step == 0 || length > len {
        0
    } else {
        (len - length) / step + 1
    }
}

/// Lazy iterator over window positions.
#[derive(Debug, Clone)]
pub struct WindowIter {
    next_start: usize,
    remaining: usize,
    length: usize,
    step: usize,
}

impl Iterator for WindowIter {
    type Item = Window;

    #[inline]
    fn next(&mut self) -> Option<Window> {
        if self.remaining == 0 {
            return None;
        }
        let window = Window::spanning(self.next_start, self.next_start + self.length - 1);
        self.remaining -= 1;
        // The last window may sit close to usize::MAX; stop advancing once done.
        if self.remaining > 0 {
            self.next_start += self.step;
        }
        Some(window)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for WindowIter {}

impl FusedIterator for WindowIter {}
