use crate::error::{Error, Result};
use crate::store::{Element, SequenceStore};
use std::fmt;
use std::fmt::Formatter;

/// A cursor over a `SequenceStore`.
///
/// A `Cursor` is a position in the store that can freely seek back-and-forth.
///
/// In a store with length *n*, there are *n* + 1 valid locations for the cursor,
/// indexed by 0, 1, ..., *n*, where *n* is the sentinel (past-the-end) position.
/// A cursor never leaves this range: moves that would cross either boundary are
/// refused and leave the cursor where it was.
///
/// # Examples
///
/// Here is a simple example showing how the cursors work. (The sentinel is
/// denoted by `#`).
/// ```
/// use deque_emulator::SequenceStore;
///
/// // Create a store: [ A B C #]
/// let store = SequenceStore::from(["A", "B", "C"]);
///
/// // Create a cursor at start: [|A B C #] (index = 0)
/// let mut cursor = store.cursor_start();
/// assert_eq!(cursor.get(), "A");
///
/// // Move cursor forward: [ A|B C #] (index = 1)
/// assert!(cursor.move_next().is_ok());
/// assert_eq!(cursor.get(), "B");
///
/// // Create a cursor in the end: [ A B C|#] (index = 3)
/// let mut cursor = store.cursor_end();
/// assert_eq!(cursor.current(), None);
/// assert_eq!(cursor.get(), "");
///
/// // The sentinel is the last position
/// assert!(cursor.move_next().is_err());
/// assert_eq!(cursor.index(), 3);
/// ```
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    index: usize,
    store: &'a SequenceStore,
}

/// Two cursors are equal if they look at the same store and sit at the same
/// position.
impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.store, other.store) && self.index == other.index
    }
}

impl Eq for Cursor<'_> {}

/// A cursor over a `SequenceStore` with editing operations.
///
/// Positions follow the same rules as [`Cursor`]. Edits keep the cursor inside
/// `0..=len` at all times; see each method for where it lands.
///
/// For convenience, [`CursorMut::view`] temporarily borrows the store
/// immutably.
pub struct CursorMut<'a> {
    index: usize,
    store: &'a mut SequenceStore,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        impl<'a> $CURSOR<'a> {
            /// Return the index of the cursor.
            #[inline]
            pub fn index(&self) -> usize {
                self.index
            }

            /// Returns the length of the underlying store, i.e. the sentinel
            /// position.
            #[inline]
            pub fn len(&self) -> usize {
                self.store.len()
            }

            /// Returns `true` if the underlying store is empty.
            #[inline]
            pub fn is_empty(&self) -> bool {
                self.store.is_empty()
            }

            /// Returns `true` if the cursor is at position 0. In an empty store
            /// this is also the sentinel.
            #[inline]
            pub fn is_at_start(&self) -> bool {
                self.index == 0
            }

            /// Returns `true` if the cursor is at the sentinel.
            #[inline]
            pub fn is_at_end(&self) -> bool {
                self.index == self.store.len()
            }

            /// Move the cursor to the next position, or return an error if
            /// it is at the sentinel already.
            pub fn move_next(&mut self) -> Result<()> {
                if self.is_at_end() {
                    return Err(Error::AtSentinel);
                }
                self.index += 1;
                Ok(())
            }

            /// Move the cursor to the previous position, or return an error
            /// if it is at position 0 already.
            pub fn move_prev(&mut self) -> Result<()> {
                if self.is_at_start() {
                    return Err(Error::AtStart);
                }
                self.index -= 1;
                Ok(())
            }

            /// Move the cursor to the given position `target`, or return an
            /// error when `target > len`.
            ///
            /// If an error occurs, the cursor will stay put.
            pub fn seek_to(&mut self, target: usize) -> Result<()> {
                let len = self.store.len();
                if target > len {
                    return Err(Error::OutOfRange { target, len });
                }
                self.index = target;
                Ok(())
            }

            /// Set the cursor to the start of the store.
            #[inline]
            pub fn move_to_start(&mut self) {
                self.index = 0;
            }

            /// Set the cursor to the sentinel.
            #[inline]
            pub fn move_to_end(&mut self) {
                self.index = self.store.len();
            }

            /// Return a reference to the element at the cursor, or `None`
            /// if the cursor is at the sentinel.
            #[inline]
            pub fn current(&self) -> Option<&Element> {
                self.store.get(self.index)
            }

            /// Dereference the cursor, where the sentinel reads as an empty
            /// string.
            pub fn get(&self) -> &str {
                self.current().map_or("", String::as_str)
            }

            /// Return a reference to the element before the cursor, or `None`
            /// if the cursor is at position 0.
            pub fn previous(&self) -> Option<&Element> {
                self.index.checked_sub(1).and_then(|i| self.store.get(i))
            }
        }

        impl fmt::Debug for $CURSOR<'_> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($CURSOR))
                    .field(&self.index)
                    .field(&self.current())
                    .finish()
            }
        }
    };
}

impl_cursor!(Cursor);
impl_cursor!(CursorMut);

impl<'a> Cursor<'a> {
    pub(crate) fn new(store: &'a SequenceStore, index: usize) -> Self {
        debug_assert!(index <= store.len());
        Self { index, store }
    }

    /// Returns the store this cursor looks at.
    pub fn store(&self) -> &'a SequenceStore {
        self.store
    }
}

impl<'a> CursorMut<'a> {
    pub(crate) fn new(store: &'a mut SequenceStore, index: usize) -> Self {
        debug_assert!(index <= store.len());
        Self { index, store }
    }

    /// Return a mutable reference to the element at the cursor, or `None` if
    /// the cursor is at the sentinel.
    pub fn current_mut(&mut self) -> Option<&mut Element> {
        self.store.get_mut(self.index)
    }

    /// Returns a read-only cursor at the same position, borrowing from this
    /// one.
    pub fn as_cursor(&self) -> Cursor<'_> {
        Cursor::new(self.store, self.index)
    }

    /// Converts into a read-only cursor at the same position.
    pub fn into_cursor(self) -> Cursor<'a> {
        Cursor::new(self.store, self.index)
    }

    /// Temporarily borrow the store immutably.
    ///
    /// # Examples
    ///
    /// ```
    /// use deque_emulator::SequenceStore;
    ///
    /// let mut store = SequenceStore::from(["a", "b"]);
    /// let mut cursor = store.cursor_end_mut();
    /// cursor.insert("c".to_owned());
    /// assert_eq!(cursor.view(), &SequenceStore::from(["a", "b", "c"]));
    /// ```
    pub fn view(&self) -> &SequenceStore {
        self.store
    }

    /// Insert a new element before the cursor. The cursor keeps pointing at
    /// the same element (or the sentinel), so its index grows by one.
    ///
    /// # Examples
    ///
    /// ```
    /// use deque_emulator::SequenceStore;
    ///
    /// let mut store = SequenceStore::from(["1", "2", "3"]);
    /// let mut cursor = store.cursor_mut(1);
    ///
    /// cursor.insert("4".to_owned()); // becomes [1, 4, 2, 3]
    /// assert_eq!(cursor.index(), 2);
    /// assert_eq!(cursor.get(), "2");
    ///
    /// cursor.move_to_end();
    /// cursor.insert("5".to_owned()); // becomes [1, 4, 2, 3, 5]
    /// assert_eq!(cursor.index(), 5);
    /// assert_eq!(cursor.previous().map(String::as_str), Some("5"));
    /// ```
    pub fn insert(&mut self, item: Element) {
        self.store.items.insert(self.index, item);
        self.index += 1;
    }

    /// Remove the element at the cursor and return it, or return `None`
    /// if the cursor is at the sentinel. After removal, the cursor keeps its
    /// index and so points at the element that followed the removed one.
    ///
    /// # Examples
    ///
    /// ```
    /// use deque_emulator::SequenceStore;
    ///
    /// let mut store = SequenceStore::from(["0", "1", "2"]);
    /// let mut cursor = store.cursor_mut(1);
    ///
    /// assert_eq!(cursor.remove().as_deref(), Some("1")); // becomes [0, 2]
    /// assert_eq!(cursor.get(), "2");
    ///
    /// cursor.move_to_end();
    /// assert_eq!(cursor.remove(), None);
    /// assert_eq!(cursor.index(), 2);
    /// ```
    pub fn remove(&mut self) -> Option<Element> {
        self.store.remove(self.index)
    }

    /// Replace the element at the cursor and return the old one, or return an
    /// error if the cursor is at the sentinel.
    pub fn replace(&mut self, item: Element) -> Result<Element> {
        self.current_mut()
            .map(|slot| std::mem::replace(slot, item))
            .ok_or(Error::AtSentinel)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::store::SequenceStore;

    #[test]
    fn cursor_walk() {
        let store = SequenceStore::from(["a", "b", "c"]);
        let mut cursor = store.cursor_start();
        let mut seen = Vec::new();
        while let Some(item) = cursor.current() {
            seen.push(item.clone());
            assert!(cursor.move_next().is_ok());
        }
        assert_eq!(seen, ["a", "b", "c"]);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.move_next(), Err(Error::AtSentinel));
        assert_eq!(cursor.index(), 3);

        while cursor.move_prev().is_ok() {}
        assert!(cursor.is_at_start());
        assert_eq!(cursor.move_prev(), Err(Error::AtStart));
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.previous(), None);
    }

    #[test]
    fn cursor_empty_store() {
        let store = SequenceStore::new();
        let mut cursor = store.cursor_start();
        assert!(cursor.is_at_start() && cursor.is_at_end());
        assert_eq!(cursor.get(), "");
        assert!(cursor.move_next().is_err());
        assert!(cursor.move_prev().is_err());
        assert_eq!(cursor, store.cursor_end());
    }

    #[test]
    fn cursor_seek() {
        let store = SequenceStore::from(["a", "b", "c"]);
        let mut cursor = store.cursor_start();
        assert_eq!(cursor.seek_to(3), Ok(()));
        assert!(cursor.is_at_end());
        assert_eq!(
            cursor.seek_to(4),
            Err(Error::OutOfRange { target: 4, len: 3 })
        );
        assert_eq!(cursor.index(), 3);
        assert_eq!(cursor.seek_to(1), Ok(()));
        assert_eq!(cursor.get(), "b");
        cursor.move_to_end();
        assert_eq!(cursor.index(), 3);
        cursor.move_to_start();
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn cursor_eq_needs_same_store() {
        let store = SequenceStore::from(["a"]);
        let other = store.clone();
        assert_eq!(store.cursor(0), store.cursor_start());
        assert_ne!(store.cursor(0), other.cursor(0));
        assert_ne!(store.cursor(0), store.cursor(1));
    }

    #[test]
    fn cursor_mut_edits() {
        let mut store = SequenceStore::from(["a", "b"]);
        let mut cursor = store.cursor_mut(1);
        assert_eq!(cursor.replace("B".into()).as_deref(), Ok("b"));
        cursor.move_to_end();
        assert_eq!(cursor.replace("x".into()), Err(Error::AtSentinel));
        cursor.move_to_start();
        if let Some(item) = cursor.current_mut() {
            item.push('!');
        }
        assert_eq!(cursor.as_cursor().get(), "a!");
        assert_eq!(cursor.remove().as_deref(), Some("a!"));
        assert_eq!(cursor.remove().as_deref(), Some("B"));
        assert_eq!(cursor.remove(), None);
        assert!(cursor.into_cursor().is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn cursor_debug() {
        let store = SequenceStore::from(["a"]);
        assert_eq!(format!("{:?}", store.cursor(0)), r#"Cursor(0, Some("a"))"#);
        assert_eq!(format!("{:?}", store.cursor(1)), "Cursor(1, None)");
    }
}
