use thiserror::Error;

/// Why an operation on the [`Model`](crate::Model) or a cursor declined to act.
///
/// None of these are faults: the store and the cursor are left exactly as they
/// were, and the caller decides whether the user should hear about it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The operation requires the store to be sorted in natural order.
    #[error("the sequence is not sorted")]
    NotSorted,
    /// The cursor is at the past-the-end position, which holds no element.
    #[error("the cursor is past the end")]
    AtSentinel,
    /// The cursor is already at the first position.
    #[error("the cursor is at the start")]
    AtStart,
    /// A position beyond the past-the-end position was requested.
    #[error("position {target} is out of range for length {len}")]
    OutOfRange { target: usize, len: usize },
    /// No demo dataset goes by this name.
    #[error("unknown preset `{0}`")]
    UnknownPreset(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
