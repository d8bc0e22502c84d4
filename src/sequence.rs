use crate::window::Window;

/// Read-only, random-access view over an ordered sequence of elements.
///
/// Every windowed algorithm in this crate borrows its input through a
/// `SequenceView`. The view is `Copy`, so handing it to several queries (or
/// several threads) never clones the underlying data, and the borrow keeps the
/// caller from mutating the sequence while any query is still reading it.
#[derive(Debug)]
pub struct SequenceView<'a, T> {
    data: &'a [T],
}

impl<'a, T> SequenceView<'a, T> {
    /// Creates a view over the given slice.
    pub fn new(data: &'a [T]) -> Self {
        SequenceView { data }
    }

    /// Number of elements in the sequence.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the element at `index`, or `None` when out of bounds.
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.data.get(index)
    }

    /// Returns the elements covered by `window`, or `None` when the window
    /// does not fit inside this sequence.
    pub fn window(&self, window: &Window) -> Option<&'a [T]> {
        self.data.get(window.start()..window.end())
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.data.iter()
    }

    /// Returns the underlying slice.
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }
}

impl<T> Clone for SequenceView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SequenceView<'_, T> {}

impl<'a, T> From<&'a [T]> for SequenceView<'a, T> {
    fn from(data: &'a [T]) -> Self {
        SequenceView::new(data)
    }
}

impl<'a, T> From<&'a Vec<T>> for SequenceView<'a, T> {
    fn from(data: &'a Vec<T>) -> Self {
        SequenceView::new(data.as_slice())
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for SequenceView<'a, T> {
    fn from(data: &'a [T; N]) -> Self {
        SequenceView::new(data.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_reads_by_position() {
        let data = vec![10, 20, 30];
        let view = SequenceView::from(&data);
        assert_eq!(view.len(), 3);
        assert_eq!(view.get(1), Some(&20));
        assert_eq!(view.get(3), None);
    }

    #[test]
    fn view_resolves_windows_within_bounds() {
        let data = [1, 2, 3, 4];
        let view = SequenceView::from(&data);
        let inside = Window::new(1, 2).unwrap();
        let outside = Window::new(3, 2).unwrap();
        assert_eq!(view.window(&inside), Some(&[2, 3][..]));
        assert_eq!(view.window(&outside), None);
    }

    #[test]
    fn view_is_copy_and_shares_data() {
        let data = vec![1.5, 2.5];
        let view = SequenceView::new(&data);
        let copy = view;
        assert!(std::ptr::eq(view.as_slice(), copy.as_slice()));
    }
}
