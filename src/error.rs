//! Crate-wide error type

use thiserror::Error;

/// Errors raised by the helper operations.
///
/// Failures produced by caller-supplied callbacks are never folded into
/// this type; they reach the caller exactly as the callback returned them.
#[derive(Error, Debug)]
pub enum HelperError {
    /// A required argument was absent.
    #[error("invalid argument: `{name}` must be supplied")]
    InvalidArgument {
        /// Name of the missing argument.
        name: &'static str,
    },

    /// The mapping function for a missing key produced no collection.
    #[error("mapping function produced no collection for the requested key")]
    EmptyMapping,

    /// Chunking was requested with a size of zero.
    #[error("chunk size must be > 0")]
    InvalidChunkSize,

    /// Input was not valid base64.
    #[error("invalid base64 input: {0}")]
    Base64(#[from] base64::DecodeError),
}

impl HelperError {
    /// Helper for constructing missing-argument errors.
    pub fn missing(name: &'static str) -> Self {
        HelperError::InvalidArgument { name }
    }
}
