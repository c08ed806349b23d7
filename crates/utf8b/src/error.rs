use thiserror::Error;

/// Failure outcomes of the conversion operations.
///
/// Incomplete trailing input is not an error; it is reported through
/// [`DecodeStop::IncompleteInput`](crate::DecodeStop::IncompleteInput).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Utf8bError {
    /// A scalar outside the encodable set: a surrogate outside the escape
    /// range, or a value above `0x10FFFF`.
    #[error("invalid scalar value 0x{value:X} at index {index}")]
    InvalidScalar {
        /// The offending value.
        value: u32,
        /// Index of the offending value in the scalar buffer.
        index: usize,
    },
    /// The output buffer cannot hold the next unit. Everything before it has
    /// been written.
    #[error("output buffer full at byte {position}, scalar index {index}")]
    InsufficientCapacity {
        /// Output position after the last unit that was written.
        position: usize,
        /// Index of the first scalar that was not written.
        index: usize,
    },
    /// A range does not fit the buffer it refers to. Nothing was written.
    #[error("range {start}..{end} is invalid for a buffer of length {len}")]
    InvalidArguments {
        /// Start of the rejected range.
        start: usize,
        /// End of the rejected range.
        end: usize,
        /// Length of the buffer the range was checked against.
        len: usize,
    },
}
