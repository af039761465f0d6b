use thiserror::Error;

/// Failures surfaced by the fallible [`Ssv`] operations.
///
/// Both kinds leave the vector observably unchanged.
///
/// [`Ssv`]: crate::Ssv
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Allocating or growing the spill block failed.
    #[error("allocation of the spill block failed")]
    Allocation,

    /// An operation was asked to reach past the end of the vector.
    #[error("index {index} is out of range for a vector of {len} strings")]
    OutOfRange {
        /// The requested index or length.
        index: usize,
        /// The number of strings actually stored.
        len: usize,
    },
}
