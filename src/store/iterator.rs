use crate::store::{Element, SequenceStore};
use std::collections::{vec_deque, VecDeque};
use std::iter::FromIterator;

impl<S: Into<Element>> FromIterator<S> for SequenceStore {
    /// Build a store holding the iterated values in order.
    ///
    /// ```
    /// use deque_emulator::SequenceStore;
    ///
    /// let store: SequenceStore = ["a", "b"].into_iter().collect();
    /// assert_eq!(store.snapshot(), ["a", "b"]);
    /// ```
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}

impl<S: Into<Element>> Extend<S> for SequenceStore {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.items.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for SequenceStore {
    type Item = Element;
    type IntoIter = vec_deque::IntoIter<Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a SequenceStore {
    type Item = &'a Element;
    type IntoIter = vec_deque::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut SequenceStore {
    type Item = &'a mut Element;
    type IntoIter = vec_deque::IterMut<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl From<VecDeque<Element>> for SequenceStore {
    fn from(items: VecDeque<Element>) -> Self {
        Self { items }
    }
}

impl From<Vec<Element>> for SequenceStore {
    fn from(items: Vec<Element>) -> Self {
        Self {
            items: items.into(),
        }
    }
}

impl<const N: usize> From<[&str; N]> for SequenceStore {
    fn from(items: [&str; N]) -> Self {
        items.into_iter().collect()
    }
}

impl From<SequenceStore> for Vec<Element> {
    fn from(store: SequenceStore) -> Self {
        store.items.into()
    }
}
