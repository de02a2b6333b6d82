//! Error types for zap-kit.

use thiserror::Error;

/// The error type for toolkit operations that have no defined result on
/// empty input.
///
/// Searches that simply find nothing return `Option::None` instead; this
/// error is reserved for operations where an empty sequence makes the
/// call itself meaningless (random draws, wrapped index math).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KitError {
    /// The operation was called on an empty sequence.
    #[error("{operation} called on an empty sequence")]
    EmptyCollection {
        /// Name of the failing operation, for diagnostics.
        operation: &'static str,
    },
}

/// Convenience `Result` alias using [`KitError`].
pub type Result<T> = std::result::Result<T, KitError>;
