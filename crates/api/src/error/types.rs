//! Error type definitions for packet parsing and signature verification

use thiserror::Error as ThisError;

/// Result type for gpgdsa operations
pub type Result<T> = core::result::Result<T, Error>;

/// Primary error type for gpgdsa operations
///
/// A cryptographic mismatch during verification is not an error: it is
/// reported as `Ok(false)` by the verifier. Every variant here means the
/// call could not be evaluated.
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A length-prefixed field declares more bytes than the buffer holds
    #[error("Packet parsing error: {context}: {message}")]
    PacketParsing {
        context: &'static str,
        message: String,
    },

    /// The cryptographic backend is not available in this build
    #[error("Unsupported library: {message}")]
    UnsupportedLibrary {
        message: String,
    },

    /// The caller supplied a hash algorithm identifier outside the supported set
    #[error("Unsupported hash algorithm id: {id}")]
    InvalidHashAlgorithm {
        id: u8,
    },

    /// Key parameters could not be interpreted as a DSA public key
    #[error("Invalid key: {context}: {message}")]
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// The composite signature could not be decoded
    #[error("Invalid signature: {context}: {message}")]
    InvalidSignature {
        context: &'static str,
        message: String,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Any other failure reported by the backend
    #[error("Backend error: {context}: {message}")]
    Backend {
        context: &'static str,
        message: String,
    },
}

impl Error {
    /// Shorthand for a truncated-field parse error
    pub fn truncated(context: &'static str, expected: usize, actual: usize) -> Self {
        Self::PacketParsing {
            context,
            message: format!("truncated MPI (expected {} bytes, got {})", expected, actual),
        }
    }

    /// Returns true for the capability-unavailable class
    pub fn is_unsupported_library(&self) -> bool {
        matches!(self, Self::UnsupportedLibrary { .. })
    }

    /// Add context to an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::PacketParsing { message, .. } => Self::PacketParsing { context, message },
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::InvalidSignature { message, .. } => Self::InvalidSignature { context, message },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::Backend { message, .. } => Self::Backend { context, message },
            // These carry no context
            other @ (Self::UnsupportedLibrary { .. } | Self::InvalidHashAlgorithm { .. }) => other,
        }
    }
}
