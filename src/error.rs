use thiserror::Error;

/// Errors returned by the overlay in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// An index does not refer to a current visible item.
    ///
    /// Visible-list indices are invalidated by every rebuild; an index held
    /// across a zoom change or forced refresh may no longer resolve.
    #[error("index {index} out of bounds for visible list of length {len}")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Visible list length at the time of the call.
        len: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
