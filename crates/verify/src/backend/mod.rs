//! DSA backends
//!
//! [`DefaultBackend`] is the backend behind the process-wide capability. It
//! is [`RustCryptoDsa`] when the `rustcrypto` feature is enabled and the
//! uninhabited [`NoBackend`] otherwise.

use core::convert::Infallible;

use gpgdsa_api::{DsaBackend, Result};

#[cfg(feature = "rustcrypto")]
mod rustcrypto;

#[cfg(feature = "rustcrypto")]
pub use rustcrypto::RustCryptoDsa;

/// Backend type bound to [`crypto`](crate::crypto)
#[cfg(feature = "rustcrypto")]
pub type DefaultBackend = RustCryptoDsa;

/// Backend type bound to [`crypto`](crate::crypto)
#[cfg(not(feature = "rustcrypto"))]
pub type DefaultBackend = NoBackend;

/// Placeholder backend for builds without a cryptography library
///
/// Has no values, so a `Capability<NoBackend>` can only ever be unavailable.
#[derive(Debug, Clone, Copy)]
pub enum NoBackend {}

impl DsaBackend for NoBackend {
    type PublicKey = Infallible;

    fn name(&self) -> &'static str {
        match *self {}
    }

    fn public_key(&self, _p: &[u8], _q: &[u8], _g: &[u8], _y: &[u8]) -> Result<Infallible> {
        match *self {}
    }

    fn encode_signature(&self, _r: &[u8], _s: &[u8]) -> Result<Vec<u8>> {
        match *self {}
    }

    fn verify_prehashed(&self, key: &Infallible, _digest: &[u8], _signature: &[u8]) -> Result<bool> {
        match *key {}
    }
}
