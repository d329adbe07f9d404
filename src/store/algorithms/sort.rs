/// Sort `src` with the strict-weak-order predicate `less`, returning the sorted
/// elements as a new vector. `src` itself is left untouched.
///
/// This is a classic top-down merge sort: ranges of at most one element are
/// sorted already, longer ranges are split at `len / 2`, both halves are sorted
/// recursively and then merged.
///
/// The sort is stable (i.e., does not reorder elements that `less` considers
/// equal).
///
/// # Complexity
///
/// This operation should compute in *O*(*n* * log(*n*)) time and *O*(*n*) memory.
///
/// # Examples
///
/// ```
/// use deque_emulator::compare::{case_free, natural};
/// use deque_emulator::merge_sort;
///
/// let items = ["b", "A", "a", "B"];
/// assert_eq!(merge_sort(&items, natural), ["A", "B", "a", "b"]);
/// assert_eq!(merge_sort(&items, case_free), ["A", "a", "b", "B"]);
///
/// // any strict-weak order works, here by length only
/// assert_eq!(merge_sort(&items, |a, b| a.len() < b.len()), items);
/// ```
pub fn merge_sort<T, F>(src: &[T], mut less: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    merge_sort_range(src, &mut less)
}

fn merge_sort_range<T, F>(src: &[T], less: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if src.len() <= 1 {
        return src.to_vec();
    }
    let (front, back) = src.split_at(src.len() / 2);
    let front = merge_sort_range(front, less);
    let back = merge_sort_range(back, less);
    merge(front, back, less)
}

/// Merge two sorted runs into one, where `front` precedes `back` in the input.
fn merge<T, F>(front: Vec<T>, back: Vec<T>, less: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut merged = Vec::with_capacity(front.len() + back.len());
    let (mut front, mut back) = (front.into_iter().peekable(), back.into_iter().peekable());
    while let (Some(f), Some(b)) = (front.peek(), back.peek()) {
        // Only a strictly smaller `back` element may overtake `front`,
        // which keeps equal elements in input order.
        if less(b, f) {
            merged.extend(back.next());
        } else {
            merged.extend(front.next());
        }
    }
    // At most one of the runs has leftovers.
    merged.extend(front);
    merged.extend(back);
    merged
}

#[cfg(test)]
mod tests {
    use super::merge_sort;
    use crate::compare::{case_free, natural};

    #[test]
    fn sort_small() {
        let empty: [&str; 0] = [];
        assert!(merge_sort(&empty, natural).is_empty());
        assert_eq!(merge_sort(&["x"], natural), ["x"]);
        assert_eq!(merge_sort(&["y", "x"], natural), ["x", "y"]);
    }

    #[test]
    fn sort_leaves_input() {
        let items = vec![3, 1, 2];
        let sorted = merge_sort(&items, |a, b| a < b);
        assert_eq!(items, [3, 1, 2]);
        assert_eq!(sorted, [1, 2, 3]);
    }

    #[test]
    fn sort_reverse_order() {
        let items: Vec<i32> = (0..100).collect();
        let sorted = merge_sort(&items, |a, b| a > b);
        assert_eq!(sorted, (0..100).rev().collect::<Vec<_>>());
    }

    #[test]
    fn sort_is_stable() {
        // sort pairs by key only, the tag records the input order
        let items = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e'), (2, 'f')];
        let sorted = merge_sort(&items, |a, b| a.0 < b.0);
        assert_eq!(
            sorted,
            [(0, 'e'), (1, 'b'), (1, 'd'), (2, 'a'), (2, 'c'), (2, 'f')]
        );
    }

    #[test]
    fn sort_cyrillic() {
        let items = ["б", "А", "в", "Б"];
        assert_eq!(merge_sort(&items, natural), ["А", "Б", "б", "в"]);
        assert_eq!(merge_sort(&items, case_free), ["А", "б", "Б", "в"]);
    }
}
