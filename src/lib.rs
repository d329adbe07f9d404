//! This crate provides a double-ended sequence of strings with an exposed
//! cursor, and the classic sequence algorithms over it (sort, unique, reverse,
//! shuffle, bounded search, min/max, count), for visualizing how
//! container/iterator semantics behave.
//!
//! The [`Model`] is the single stateful object: a [`SequenceStore`] plus one
//! cursor position. Every operation keeps the cursor inside the store, so a
//! display can always highlight row [`Model::position`].
//!
//! Here is a quick example showing how the model works.
//!
//! ```
//! use deque_emulator::{Error, Model};
//!
//! let mut model = Model::with_items(["c", "a", "b"]);
//!
//! // searches move the cursor
//! assert_eq!(model.find("a"), Some(1));
//! assert_eq!(model.current(), "a");
//!
//! // bounded searches need natural order
//! assert_eq!(model.lower_bound("b"), Err(Error::NotSorted));
//! model.merge_sort();
//! assert_eq!(model.lower_bound("b"), Ok(1));
//!
//! // structural changes reset the cursor to the start
//! model.push_back("d");
//! assert_eq!(model.position(), 0);
//! assert_eq!(model.snapshot(), ["a", "b", "c", "d"]);
//! ```
//!
//! # Positions
//!
//! In a store with length *n*, there are *n* + 1 positions for the cursor,
//! indexed by 0, 1, ..., *n*, where *n* is the sentinel (past-the-end) position.
//! The sentinel holds no element: dereferencing it reads as an empty string,
//! and editing or erasing there is declined.
//!
//! # Orderings
//!
//! [`merge_sort`] is a stable merge sort driven by any strict-weak-order `less`
//! predicate. The [`compare`] module provides the two orderings the model uses:
//! byte-wise natural order, and a case-free order that folds ASCII letters and
//! the Russian alphabet before comparing.
//!
//! ```
//! use deque_emulator::compare::{case_free, natural};
//! use deque_emulator::merge_sort;
//!
//! let items = ["чай", "Ассам", "Бархат"];
//! assert_eq!(merge_sort(&items, natural), ["Ассам", "Бархат", "чай"]);
//! assert_eq!(merge_sort(&["Чай", "ассам"], case_free), ["ассам", "Чай"]);
//! ```
//!
//! # Errors
//!
//! Nothing here panics on caller input. Operations that cannot apply return an
//! [`Error`] (or `None`, or the sentinel) and leave the store and the cursor as
//! they were.
//!
//! # Features
//!
//! - `presets` (default): the [`Preset`] demo datasets and
//!   [`Model::load_preset`] / [`Model::load_named`].
//!
//! [`Model`]: crate::Model
//! [`SequenceStore`]: crate::SequenceStore

#[doc(inline)]
pub use compare::Order;
#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use model::{Controls, Model};
#[cfg(feature = "presets")]
#[doc(inline)]
pub use presets::Preset;
#[doc(inline)]
pub use store::cursor::{Cursor, CursorMut};
#[doc(inline)]
pub use store::{merge_sort, Element, SequenceStore};

pub mod compare;
pub mod store;

mod error;
mod model;
#[cfg(feature = "presets")]
mod presets;
