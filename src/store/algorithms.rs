use crate::compare::natural;
use crate::error::{Error, Result};
use crate::store::{Element, SequenceStore};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

mod sort;

pub use sort::merge_sort;

impl SequenceStore {
    /// Returns `true` if the `SequenceStore` contains an element equal to the
    /// given value.
    pub fn contains(&self, value: &str) -> bool {
        self.iter().any(|e| e == value)
    }

    /// Returns the position of the first element equal to `value`, or the
    /// sentinel if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use deque_emulator::SequenceStore;
    ///
    /// let store = SequenceStore::from(["a", "b", "a"]);
    /// assert_eq!(store.find("a"), 0);
    /// assert_eq!(store.find("b"), 1);
    /// assert_eq!(store.find("c"), store.len());
    /// ```
    pub fn find(&self, value: &str) -> usize {
        self.iter().position(|e| e == value).unwrap_or(self.len())
    }

    /// Returns the number of elements equal to `value`.
    pub fn count(&self, value: &str) -> usize {
        self.iter().filter(|e| *e == value).count()
    }

    /// Returns the position of the first element `best` such that no other
    /// element `e` satisfies `better(e, best)`, or the sentinel if the store is
    /// empty.
    fn position_by<F>(&self, mut better: F) -> usize
    where
        F: FnMut(&Element, &Element) -> bool,
    {
        let mut iter = self.iter().enumerate();
        let Some((mut best, mut best_value)) = iter.next() else {
            return self.len();
        };
        for (i, e) in iter {
            if better(e, best_value) {
                best = i;
                best_value = e;
            }
        }
        best
    }

    /// Returns the position of the first smallest element in natural order, or
    /// the sentinel if the store is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use deque_emulator::SequenceStore;
    ///
    /// let store = SequenceStore::from(["b", "a", "c", "a"]);
    /// assert_eq!(store.min_position(), 1);
    /// assert_eq!(SequenceStore::new().min_position(), 0);
    /// ```
    pub fn min_position(&self) -> usize {
        self.position_by(|e, best| natural(e, best))
    }

    /// Returns the position of the first largest element in natural order, or
    /// the sentinel if the store is empty.
    pub fn max_position(&self) -> usize {
        self.position_by(|e, best| natural(best, e))
    }

    /// Returns `true` if no element is less than its predecessor under `less`.
    pub fn is_sorted_by<F>(&self, mut less: F) -> bool
    where
        F: FnMut(&Element, &Element) -> bool,
    {
        self.iter()
            .zip(self.iter().skip(1))
            .all(|(prev, next)| !less(next, prev))
    }

    /// Returns `true` if the store is sorted in natural order.
    ///
    /// This is the precondition of [`lower_bound`](Self::lower_bound),
    /// [`upper_bound`](Self::upper_bound) and [`unique`](Self::unique), even
    /// when the store was last sorted with another ordering.
    pub fn is_sorted(&self) -> bool {
        self.is_sorted_by(|a, b| natural(a, b))
    }

    /// Returns the first position whose element is not less than `value`, i.e.
    /// the first place `value` could be inserted keeping the order.
    ///
    /// Returns [`Error::NotSorted`] if the store is not sorted in natural order.
    ///
    /// # Examples
    ///
    /// ```
    /// use deque_emulator::{Error, SequenceStore};
    ///
    /// let store = SequenceStore::from(["a", "b", "b", "c"]);
    /// assert_eq!(store.lower_bound("b"), Ok(1));
    /// assert_eq!(store.upper_bound("b"), Ok(3));
    ///
    /// let store = SequenceStore::from(["c", "a", "b"]);
    /// assert_eq!(store.lower_bound("b"), Err(Error::NotSorted));
    /// ```
    pub fn lower_bound(&self, value: &str) -> Result<usize> {
        self.ensure_sorted()?;
        Ok(self.items.partition_point(|e| natural(e.as_str(), value)))
    }

    /// Returns the first position whose element is greater than `value`, i.e.
    /// the place `value` could be inserted after all elements equal to it.
    ///
    /// Returns [`Error::NotSorted`] if the store is not sorted in natural order.
    pub fn upper_bound(&self, value: &str) -> Result<usize> {
        self.ensure_sorted()?;
        Ok(self.items.partition_point(|e| !natural(value, e.as_str())))
    }

    fn ensure_sorted(&self) -> Result<()> {
        if self.is_sorted() {
            Ok(())
        } else {
            Err(Error::NotSorted)
        }
    }

    /// Removes consecutive repeated elements, keeping the first of each run,
    /// and returns how many were removed.
    ///
    /// Returns [`Error::NotSorted`] and leaves the store untouched if it is not
    /// sorted in natural order.
    ///
    /// # Examples
    ///
    /// ```
    /// use deque_emulator::{Error, SequenceStore};
    ///
    /// let mut store = SequenceStore::from(["a", "a", "b", "c", "c"]);
    /// assert_eq!(store.unique(), Ok(2));
    /// assert_eq!(store.snapshot(), ["a", "b", "c"]);
    ///
    /// let mut store = SequenceStore::from(["b", "a", "a"]);
    /// assert_eq!(store.unique(), Err(Error::NotSorted));
    /// assert_eq!(store.snapshot(), ["b", "a", "a"]);
    /// ```
    pub fn unique(&mut self) -> Result<usize> {
        self.ensure_sorted()?;
        let len = self.len();
        // `kept` is the length of the deduplicated prefix.
        let mut kept = 0;
        for read in 0..len {
            if kept == 0 || self.items[read] != self.items[kept - 1] {
                self.items.swap(kept, read);
                kept += 1;
            }
        }
        self.items.truncate(kept);
        debug!("unique removed {} of {} elements", len - kept, len);
        Ok(len - kept)
    }

    /// Reverses the order of the elements in place.
    pub fn reverse(&mut self) {
        self.items.make_contiguous().reverse();
    }

    /// Shuffles the elements into a uniformly random permutation drawn from
    /// `rng`.
    ///
    /// The store never creates a random source of its own, so a seeded `rng`
    /// gives a reproducible order.
    ///
    /// # Examples
    ///
    /// ```
    /// use deque_emulator::SequenceStore;
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    ///
    /// let mut a = SequenceStore::from(["1", "2", "3", "4", "5"]);
    /// let mut b = a.clone();
    /// a.shuffle(&mut StdRng::seed_from_u64(7));
    /// b.shuffle(&mut StdRng::seed_from_u64(7));
    /// assert_eq!(a, b);
    /// ```
    pub fn shuffle<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.items.make_contiguous().shuffle(rng);
    }

    /// Sorts the store with the strict-weak-order predicate `less`, using
    /// [`merge_sort`]. The sort is stable.
    ///
    /// # Examples
    ///
    /// ```
    /// use deque_emulator::compare::case_free;
    /// use deque_emulator::SequenceStore;
    ///
    /// let mut store = SequenceStore::from(["b", "A", "a", "B"]);
    /// store.sort_by(case_free);
    /// assert_eq!(store.snapshot(), ["A", "a", "b", "B"]);
    /// ```
    pub fn sort_by<F>(&mut self, less: F)
    where
        F: FnMut(&Element, &Element) -> bool,
    {
        let sorted = merge_sort(self.items.make_contiguous(), less);
        self.items = sorted.into();
    }

    /// Sorts the store in natural order.
    pub fn sort(&mut self) {
        self.sort_by(|a, b| natural(a, b));
    }
}

#[cfg(test)]
mod tests {
    use crate::compare::case_free;
    use crate::error::Error;
    use crate::store::SequenceStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn find_and_count() {
        let store = SequenceStore::from(["x", "y", "x", "z"]);
        assert_eq!(store.find("x"), 0);
        assert_eq!(store.find("z"), 3);
        assert_eq!(store.find("w"), 4);
        assert_eq!(store.count("x"), 2);
        assert_eq!(store.count("w"), 0);
        assert!(store.contains("y"));
        assert!(!store.contains("Y"));

        let empty = SequenceStore::new();
        assert_eq!(empty.find("x"), 0);
        assert_eq!(empty.count("x"), 0);
    }

    #[test]
    fn min_and_max_take_first() {
        let store = SequenceStore::from(["b", "c", "a", "c", "a"]);
        assert_eq!(store.min_position(), 2);
        assert_eq!(store.max_position(), 1);

        let empty = SequenceStore::new();
        assert_eq!(empty.min_position(), 0);
        assert_eq!(empty.max_position(), 0);
    }

    #[test]
    fn sortedness() {
        assert!(SequenceStore::new().is_sorted());
        assert!(SequenceStore::from(["q"]).is_sorted());
        assert!(SequenceStore::from(["a", "a", "b"]).is_sorted());
        assert!(!SequenceStore::from(["b", "a"]).is_sorted());

        let mut store = SequenceStore::from(["a", "b", "c"]);
        store.reverse();
        assert_eq!(store.snapshot(), ["c", "b", "a"]);
        assert!(!store.is_sorted());
    }

    #[test]
    fn bounds_on_sorted() {
        let store = SequenceStore::from(["a", "b", "b", "c"]);
        assert_eq!(store.lower_bound("b"), Ok(1));
        assert_eq!(store.upper_bound("b"), Ok(3));
        assert_eq!(store.lower_bound("0"), Ok(0));
        assert_eq!(store.upper_bound("d"), Ok(4));
        assert_eq!(store.lower_bound("bb"), Ok(3));

        let empty = SequenceStore::new();
        assert_eq!(empty.lower_bound("a"), Ok(0));
        assert_eq!(empty.upper_bound("a"), Ok(0));
    }

    #[test]
    fn bounds_on_unsorted() {
        let store = SequenceStore::from(["c", "a", "b"]);
        assert_eq!(store.lower_bound("b"), Err(Error::NotSorted));
        assert_eq!(store.upper_bound("b"), Err(Error::NotSorted));
    }

    #[test]
    fn unique_runs() {
        let mut store = SequenceStore::from(["a", "a", "a", "b", "c", "c", "d"]);
        assert_eq!(store.unique(), Ok(3));
        assert_eq!(store.snapshot(), ["a", "b", "c", "d"]);
        assert_eq!(store.unique(), Ok(0));

        let mut empty = SequenceStore::new();
        assert_eq!(empty.unique(), Ok(0));
    }

    #[test]
    fn unique_needs_natural_order() {
        // sorted case-free, but not in natural order
        let mut store = SequenceStore::from(["a", "B", "b"]);
        store.sort_by(case_free);
        assert_eq!(store.snapshot(), ["a", "B", "b"]);
        assert_eq!(store.unique(), Err(Error::NotSorted));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let original = SequenceStore::from(["1", "2", "3", "4", "5", "6", "7", "8"]);
        let mut store = original.clone();
        store.shuffle(&mut StdRng::seed_from_u64(42));
        let mut shuffled = store.snapshot();
        shuffled.sort();
        assert_eq!(shuffled, original.snapshot());

        let mut empty = SequenceStore::new();
        empty.shuffle(&mut StdRng::seed_from_u64(42));
        assert!(empty.is_empty());
    }

    #[test]
    fn sort_in_place() {
        let mut store = SequenceStore::from(["Пуэр", "Ассам", "Сенча", "Матча"]);
        store.push_front("Чай".into());
        store.sort();
        assert_eq!(store.snapshot(), ["Ассам", "Матча", "Пуэр", "Сенча", "Чай"]);
        assert!(store.is_sorted());
    }
}
