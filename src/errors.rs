use thiserror::Error;

/// The ways reading a name (or any other field) out of a [`MessageBuffer`] can fail.
///
/// All of these are fatal for the message being parsed. The caller should
/// treat the message as malformed and discard anything decoded so far.
///
/// [`MessageBuffer`]: crate::MessageBuffer
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Tried to read `len` bytes at `pos`, past the end of the buffer.
    #[error("read of {len} bytes at offset {pos} is outside the {capacity} byte buffer")]
    OutOfBounds {
        pos: isize,
        len: usize,
        capacity: usize,
    },

    /// A label's declared length runs past the end of the buffer.
    #[error("label at offset {offset} ends at {end}, past the {capacity} byte buffer")]
    InvalidIndex {
        offset: usize,
        end: usize,
        capacity: usize,
    },

    /// A compression pointer is truncated, or points outside the buffer.
    #[error("invalid compression pointer at offset {offset} (target {target:?})")]
    InvalidPointer {
        offset: usize,
        target: Option<usize>,
    },

    /// The encoded name is longer than the 255 octets RFC 1035 allows.
    #[error("name at offset {offset} is {len} octets, longer than {}", crate::MAX_NAME_LEN)]
    NameTooLong { offset: usize, len: usize },

    /// Too many compression pointers were followed, most likely a loop.
    #[error("more than {} compression pointers followed at offset {offset}", crate::MAX_POINTER_DEPTH)]
    MaxRecursionExceeded { offset: usize },

    /// The label type bits (0x40 or 0x80) are reserved or extended types we don't decode.
    #[error("unsupported label type {bits:#04x} at offset {offset}")]
    UnsupportedLabelType { offset: usize, bits: u8 },

    /// The message doesn't fit in the buffer.
    #[error("message of {len} bytes is larger than the {capacity} byte buffer")]
    MessageTooLarge { len: usize, capacity: usize },
}

/// A `Result` with this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
