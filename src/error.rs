//! Error types shared by the codec and the generators.

use crate::name::Algorithm;

/// Errors returned by the codec and the UUID generators.
///
/// None of these are retried internally. A failed call never yields a partial UUID.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A hex string had odd length or contained a non-hex character, or a byte sequence had the
    /// wrong length for a UUID.
    #[error("malformed input")]
    MalformedInput,

    /// A namespace argument was not a 32-digit hex UUID string (with or without hyphens).
    #[error("invalid namespace UUID")]
    InvalidNamespace,

    /// The digest provider does not implement the requested algorithm.
    #[error("unsupported digest algorithm: {0}")]
    UnsupportedAlgorithm(Algorithm),

    /// The system clock reads a time outside the 60-bit UUID timestamp range.
    #[error("system clock out of range of UUID timestamp")]
    ClockOutOfRange,

    /// The secure random source could not supply bytes.
    #[error("secure random source unavailable: {0}")]
    RandomSourceUnavailable(#[from] rand::Error),
}

/// Result type with [`Error`] as the default error.
pub type Result<T, E = Error> = std::result::Result<T, E>;
