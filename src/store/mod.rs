use std::collections::VecDeque;
use std::fmt::{Debug, Formatter};

use log::trace;

use crate::error::{Error, Result};
use crate::store::cursor::{Cursor, CursorMut};

pub mod cursor;
pub mod iterator;

mod algorithms;

pub use algorithms::merge_sort;

/// A single value held by a [`SequenceStore`].
pub type Element = String;

/// The `SequenceStore` is an ordered, index-addressable sequence of text
/// [`Element`]s. Pushing and popping at either end take amortized *O*(1) time,
/// inserting or erasing in the middle takes *O*(*n*) time.
///
/// # Positions
///
/// In a store with length *n*, the elements are indexed by 0, 1, ..., *n* - 1,
/// and there are *n* + 1 valid positions for a cursor: 0, 1, ..., *n*, where *n*
/// is the past-the-end position (the sentinel). The sentinel holds no element.
/// In an empty store, the sentinel is position 0.
///
/// ```text
///     0     1     2           n-1     n
///  ┌─────┬─────┬─────┬ ┄┄ ┬─────┐┌ ─ ─ ─ ┐
///  │  a  │  b  │  c  │    │  z  │  (end)
///  └─────┴─────┴─────┴ ┄┄ ┴─────┘└ ─ ─ ─ ┘
/// ```
///
/// Queries that look for a position (see [`find`](SequenceStore::find),
/// [`lower_bound`](SequenceStore::lower_bound), ...) report "not found" as the
/// sentinel, the way a cursor would.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct SequenceStore {
    items: VecDeque<Element>,
}

impl SequenceStore {
    /// Create an empty `SequenceStore`.
    ///
    /// # Examples
    /// ```
    /// use deque_emulator::SequenceStore;
    /// let store = SequenceStore::new();
    /// assert!(store.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of elements, which is also the sentinel position.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the `SequenceStore` is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Bounds-checked read: returns the element at `index`, or `None` if
    /// `index` is the sentinel or beyond.
    ///
    /// # Examples
    ///
    /// ```
    /// use deque_emulator::SequenceStore;
    ///
    /// let store = SequenceStore::from(["a", "b"]);
    /// assert_eq!(store.get(1).map(String::as_str), Some("b"));
    /// assert_eq!(store.get(2), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Element> {
        self.items.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.items.get_mut(index)
    }

    /// Provides a reference to the front element, or `None` if the store is
    /// empty.
    #[inline]
    pub fn front(&self) -> Option<&Element> {
        self.items.front()
    }

    /// Provides a reference to the back element, or `None` if the store is
    /// empty.
    #[inline]
    pub fn back(&self) -> Option<&Element> {
        self.items.back()
    }

    pub fn push_front(&mut self, value: Element) {
        self.items.push_front(value);
    }

    pub fn push_back(&mut self, value: Element) {
        self.items.push_back(value);
    }

    /// Removes the first element and returns it, or `None` if the store is
    /// empty.
    pub fn pop_front(&mut self) -> Option<Element> {
        self.items.pop_front()
    }

    /// Removes the last element and returns it, or `None` if the store is
    /// empty.
    pub fn pop_back(&mut self) -> Option<Element> {
        self.items.pop_back()
    }

    /// Inserts `value` so that it ends up at position `at`, shifting the
    /// elements from `at` onward by one. Inserting at the sentinel appends.
    ///
    /// Returns an error and leaves the store untouched if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use deque_emulator::SequenceStore;
    ///
    /// let mut store = SequenceStore::from(["a", "c"]);
    /// assert!(store.insert(1, "b".to_owned()).is_ok());
    /// assert!(store.insert(3, "d".to_owned()).is_ok());
    /// assert!(store.insert(9, "x".to_owned()).is_err());
    /// assert_eq!(store.snapshot(), ["a", "b", "c", "d"]);
    /// ```
    pub fn insert(&mut self, at: usize, value: Element) -> Result<()> {
        let len = self.len();
        if at > len {
            return Err(Error::OutOfRange { target: at, len });
        }
        self.items.insert(at, value);
        Ok(())
    }

    /// Removes and returns the element at `at`, or returns `None` if `at` is
    /// the sentinel or beyond.
    pub fn remove(&mut self, at: usize) -> Option<Element> {
        self.items.remove(at)
    }

    /// Replaces the element at `at` with `value` and returns the old element,
    /// or returns `None` (dropping `value`) if `at` is the sentinel or beyond.
    pub fn replace(&mut self, at: usize, value: Element) -> Option<Element> {
        self.get_mut(at).map(|slot| std::mem::replace(slot, value))
    }

    /// Removes all elements.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Resizes the store to `new_len` elements, truncating the back or growing
    /// with empty strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use deque_emulator::SequenceStore;
    ///
    /// let mut store = SequenceStore::from(["a", "b", "c"]);
    /// store.resize(1);
    /// assert_eq!(store.snapshot(), ["a"]);
    /// store.resize(3);
    /// assert_eq!(store.snapshot(), ["a", "", ""]);
    /// ```
    pub fn resize(&mut self, new_len: usize) {
        trace!("resize {} -> {}", self.len(), new_len);
        self.items.resize(new_len, Element::new());
    }

    /// Replaces the whole content with `values`, keeping their order.
    pub fn replace_all<I>(&mut self, values: I)
    where
        I: IntoIterator,
        I::Item: Into<Element>,
    {
        self.items.clear();
        self.items.extend(values.into_iter().map(Into::into));
    }

    /// Returns a copy of the content, in order, for display.
    pub fn snapshot(&self) -> Vec<Element> {
        self.items.iter().cloned().collect()
    }

    /// Returns a cursor at position `at`, clamped to the sentinel.
    ///
    /// # Examples
    ///
    /// ```
    /// use deque_emulator::SequenceStore;
    ///
    /// let store = SequenceStore::from(["a", "b"]);
    /// assert_eq!(store.cursor(1).current().map(String::as_str), Some("b"));
    /// assert!(store.cursor(7).is_at_end());
    /// ```
    pub fn cursor(&self, at: usize) -> Cursor<'_> {
        Cursor::new(self, at.min(self.len()))
    }

    /// Returns a cursor at the first position.
    pub fn cursor_start(&self) -> Cursor<'_> {
        Cursor::new(self, 0)
    }

    /// Returns a cursor at the sentinel.
    pub fn cursor_end(&self) -> Cursor<'_> {
        Cursor::new(self, self.len())
    }

    /// Returns an editing cursor at position `at`, clamped to the sentinel.
    pub fn cursor_mut(&mut self, at: usize) -> CursorMut<'_> {
        let at = at.min(self.len());
        CursorMut::new(self, at)
    }

    pub fn cursor_start_mut(&mut self) -> CursorMut<'_> {
        CursorMut::new(self, 0)
    }

    pub fn cursor_end_mut(&mut self) -> CursorMut<'_> {
        let len = self.len();
        CursorMut::new(self, len)
    }

    #[inline]
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, Element> {
        self.items.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> std::collections::vec_deque::IterMut<'_, Element> {
        self.items.iter_mut()
    }
}

impl Debug for SequenceStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
