//! Optional cryptographic capability
//!
//! Whether a DSA backend is present is decided once, when the capability is
//! built, and every public entry point asks the capability for its backend
//! before touching any input. An absent backend surfaces as
//! [`Error::UnsupportedLibrary`] at that first check.

use crate::error::{Error, Result};
use crate::traits::DsaBackend;

/// Message carried by [`Error::UnsupportedLibrary`] when no backend is compiled in
pub const NO_CRYPTO_MSG: &str = "DSA key support for GPG requires a cryptography backend";

/// Handle to an optional DSA backend
#[derive(Debug, Clone)]
pub struct Capability<B> {
    backend: Option<B>,
}

impl<B: DsaBackend> Capability<B> {
    /// A capability backed by `backend`
    pub const fn available(backend: B) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// A capability with no backend; every entry point will refuse to run
    pub const fn unavailable() -> Self {
        Self { backend: None }
    }

    /// Returns true if a backend is present
    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    /// Borrow the backend, or fail with [`Error::UnsupportedLibrary`]
    pub fn require(&self) -> Result<&B> {
        self.backend.as_ref().ok_or_else(|| Error::UnsupportedLibrary {
            message: NO_CRYPTO_MSG.to_string(),
        })
    }
}
