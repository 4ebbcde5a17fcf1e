//! Errors reported by the containers.

use thiserror::Error;

/// The ways a container operation can fail.
///
/// Lookups such as `find`, `contains` and `get` never fail; they report a miss
/// through their return value. Everything else that cannot complete returns one of
/// these variants and leaves the container unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The map does not contain the requested key.
    #[error("key not found")]
    KeyNotFound,

    /// An index is outside the valid range of a vector.
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The length of the vector at the time of the call.
        len: usize,
    },

    /// The cursor denotes the end of the container, not an element.
    #[error("cursor is past the end of the container")]
    EndCursor,

    /// A cursor cannot move in front of the first element.
    #[error("cursor cannot move before the first element")]
    BeforeBegin,

    /// The cursor's element was erased, the container was cleared, or the cursor
    /// belongs to a different container.
    #[error("cursor does not refer to a live element of this container")]
    InvalidCursor,

    /// The container has no elements to read or remove.
    #[error("container is empty")]
    Empty,

    /// A reservation asked for more elements than the vector can ever hold.
    #[error("requested capacity {requested} exceeds the maximum of {max}")]
    CapacityOverflow {
        /// The requested capacity.
        requested: usize,
        /// The vector's `max_size`.
        max: usize,
    },
}

/// A `Result` whose error type is this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn messages_name_the_failure() {
        assert_eq!(Error::KeyNotFound.to_string(), "key not found");
        assert_eq!(Error::OutOfRange { index: 4, len: 2 }.to_string(),
                   "index 4 out of range for length 2");
        assert_eq!(Error::CapacityOverflow { requested: 10, max: 5 }.to_string(),
                   "requested capacity 10 exceeds the maximum of 5");
    }
}
