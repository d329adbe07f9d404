//! Orderings over elements.
//!
//! Two strict-weak orders are provided, both usable as the `less` predicate of
//! [`merge_sort`](crate::merge_sort):
//! - [`natural`]: byte-wise lexicographic order, the order of [`str`]'s `Ord`;
//! - [`case_free`]: natural order over the [`fold_case`]d projection of each
//!   operand, which ignores ASCII case and the case of the Russian alphabet.
//!
//! # Examples
//!
//! ```
//! use deque_emulator::compare::{case_free, natural};
//!
//! assert!(natural("Banana", "apple"));
//! assert!(case_free("apple", "Banana"));
//!
//! // `Я` and `я` are the same letter once folded
//! assert!(!case_free("Я", "я"));
//! assert!(!case_free("я", "Я"));
//! assert!(natural("Я", "я"));
//! ```

use std::cmp::Ordering;
use std::fmt;

/// Lead bytes of the two-byte UTF-8 units holding the Cyrillic letters.
const CYRILLIC_LEADS: [u8; 2] = [0xD0, 0xD1];

/// `Ё` (U+0401), which sits outside the contiguous `А`..`Я` run.
const UPPER_IO: [u8; 2] = [0xD0, 0x81];
/// `ё` (U+0451).
const LOWER_IO: [u8; 2] = [0xD1, 0x91];

/// Trailing bytes of `А`..`Я` (U+0410..U+042F) under the `0xD0` lead.
const UPPER_TRAILS: std::ops::RangeInclusive<u8> = 0x90..=0xAF;

/// Lowercase units of `а`..`я`, indexed by the letter's ordinal in the alphabet
/// (without `ё`).
const LOWER: [[u8; 2]; 32] = lower_table();

const fn lower_table() -> [[u8; 2]; 32] {
    let mut table = [[0; 2]; 32];
    let mut ordinal = 0;
    while ordinal < 32 {
        // а..п are D0 B0..D0 BF, р..я are D1 80..D1 8F
        table[ordinal] = if ordinal < 16 {
            [0xD0, 0xB0 + ordinal as u8]
        } else {
            [0xD1, 0x80 + (ordinal - 16) as u8]
        };
        ordinal += 1;
    }
    table
}

/// Fold a single two-byte unit led by one of [`CYRILLIC_LEADS`].
///
/// Units that are not uppercase letters (lowercase letters, other Cyrillic
/// characters) are returned unchanged.
fn fold_unit(unit: [u8; 2]) -> [u8; 2] {
    match unit {
        UPPER_IO => LOWER_IO,
        [0xD0, trail] if UPPER_TRAILS.contains(&trail) => {
            LOWER[usize::from(trail - UPPER_TRAILS.start())]
        }
        _ => unit,
    }
}

/// Map `text` to its lowercase projection for case-insensitive comparison.
///
/// The input is scanned unit by unit: a Cyrillic lead byte starts a two-byte
/// unit that is folded as a whole, any other byte is a single-byte unit folded
/// with the ASCII rules. Bytes outside both alphabets pass through unchanged, so
/// the output has the same length as the input and valid UTF-8 stays valid.
///
/// # Examples
///
/// ```
/// use deque_emulator::compare::fold_case;
///
/// assert_eq!(fold_case("Чай Ёж".as_bytes()), "чай ёж".as_bytes());
/// assert_eq!(fold_case(b"Earl GREY"), b"earl grey");
/// ```
pub fn fold_case(text: &[u8]) -> Vec<u8> {
    let mut folded = Vec::with_capacity(text.len());
    let mut i = 0;
    while i < text.len() {
        let lead = text[i];
        match text.get(i + 1) {
            Some(&trail) if CYRILLIC_LEADS.contains(&lead) => {
                folded.extend_from_slice(&fold_unit([lead, trail]));
                i += 2;
            }
            _ => {
                folded.push(lead.to_ascii_lowercase());
                i += 1;
            }
        }
    }
    folded
}

/// Returns `true` if `a` is strictly less than `b` in byte-wise lexicographic
/// order.
#[inline]
pub fn natural<S>(a: &S, b: &S) -> bool
where
    S: AsRef<str> + ?Sized,
{
    a.as_ref() < b.as_ref()
}

/// Three-way form of [`case_free`].
pub fn case_free_cmp<S>(a: &S, b: &S) -> Ordering
where
    S: AsRef<str> + ?Sized,
{
    fold_case(a.as_ref().as_bytes()).cmp(&fold_case(b.as_ref().as_bytes()))
}

/// Returns `true` if `a` is strictly less than `b` once both are folded with
/// [`fold_case`].
#[inline]
pub fn case_free<S>(a: &S, b: &S) -> bool
where
    S: AsRef<str> + ?Sized,
{
    case_free_cmp(a, b) == Ordering::Less
}

/// A named ordering, for callers that pick the comparator at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Order {
    /// See [`natural`].
    #[default]
    Natural,
    /// See [`case_free`].
    CaseFree,
}

impl Order {
    pub fn less<S>(self, a: &S, b: &S) -> bool
    where
        S: AsRef<str> + ?Sized,
    {
        match self {
            Order::Natural => natural(a, b),
            Order::CaseFree => case_free(a, b),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Order::Natural => "natural",
            Order::CaseFree => "case-free",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UPPER: &str = "АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ";
    const LOWER: &str = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя";

    #[test]
    fn fold_whole_alphabet() {
        assert_eq!(fold_case(UPPER.as_bytes()), LOWER.as_bytes());
        assert_eq!(fold_case(LOWER.as_bytes()), LOWER.as_bytes());
    }

    #[test]
    fn fold_letter_pairs() {
        for (upper, lower) in UPPER.chars().zip(LOWER.chars()) {
            let (upper, lower) = (upper.to_string(), lower.to_string());
            assert!(!case_free(&upper, &lower), "{} < {}", upper, lower);
            assert!(!case_free(&lower, &upper), "{} < {}", lower, upper);
            assert!(natural(&upper, &lower) != natural(&lower, &upper));
        }
    }

    #[test]
    fn fold_keeps_other_text() {
        let text = "Ünïcode 漢字";
        assert_eq!(fold_case(text.as_bytes()), text.as_bytes().to_ascii_lowercase());
        assert_eq!(fold_case("ѢѣЀ".as_bytes()), "ѢѣЀ".as_bytes());
        assert_eq!(fold_case(b""), b"");
    }

    #[test]
    fn fold_truncated_unit() {
        assert_eq!(fold_case(&[b'A', 0xD0]), vec![b'a', 0xD0]);
    }

    #[test]
    fn compare_mixed_case() {
        assert!(case_free("apple", "Banana"));
        assert!(!natural("apple", "Banana"));
        assert!(!case_free("Apple", "apple"));
        assert!(!case_free("apple", "Apple"));
        assert!(case_free("Ассам", "ганпаудер"));
        assert!(!natural("ганпаудер", "Ассам"));
        assert_eq!(case_free_cmp("ЧАЙ", "чай"), Ordering::Equal);
    }

    #[test]
    fn compare_io_after_ya() {
        // ё folds to U+0451, past я
        assert!(case_free("я", "Ё"));
        assert!(natural("Ё", "я"));
    }

    #[test]
    fn compare_is_strict() {
        for s in ["", "a", "Ж", "чай"] {
            assert!(!natural(s, s));
            assert!(!case_free(s, s));
        }
    }

    #[test]
    fn order_dispatch() {
        assert_eq!(Order::default(), Order::Natural);
        assert!(Order::Natural.less("B", "a"));
        assert!(Order::CaseFree.less("a", "B"));
        assert_eq!(Order::CaseFree.to_string(), "case-free");
    }
}
