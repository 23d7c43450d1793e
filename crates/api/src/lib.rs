//! Public API traits and types for gpgdsa
//!
//! This crate provides the public API surface shared by the packet parsers and
//! the verifier: the error taxonomy, the capability handle guarding the
//! cryptographic backend, the backend and hash traits, and the structured
//! key/signature descriptions exchanged with upstream packet-parsing code.

pub mod capability;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use capability::{Capability, NO_CRYPTO_MSG};
pub use error::{Error, Result};
pub use types::*;

pub use traits::{DsaBackend, HashFunction};
