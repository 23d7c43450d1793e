//! DSA backend trait
//!
//! The packet parsers and the verifier never perform modular arithmetic
//! themselves. Everything numeric goes through a type implementing
//! [`DsaBackend`], so a different primitives library can be swapped in
//! without touching the parsing logic.

use crate::Result;

/// Prehashed DSA verification capability
///
/// Integers cross this boundary as unsigned big-endian byte strings, exactly
/// as they appear in an RFC4880 MPI body.
pub trait DsaBackend {
    /// Backend-specific public key object
    type PublicKey;

    /// Returns the name of this backend
    fn name(&self) -> &'static str;

    /// Construct a public key from the domain parameters and public value
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`](crate::Error::InvalidKey) if the
    /// parameters do not describe a usable DSA key.
    fn public_key(&self, p: &[u8], q: &[u8], g: &[u8], y: &[u8]) -> Result<Self::PublicKey>;

    /// Package `(r, s)` into the composite encoding accepted by
    /// [`verify_prehashed`](DsaBackend::verify_prehashed)
    ///
    /// The encoding must not alter the numeric values.
    fn encode_signature(&self, r: &[u8], s: &[u8]) -> Result<Vec<u8>>;

    /// Verify `signature` against an already computed `digest`
    ///
    /// Returns `Ok(false)` when the signature does not match. Errors are
    /// reserved for inputs that cannot be evaluated, such as an undecodable
    /// signature encoding.
    fn verify_prehashed(
        &self,
        key: &Self::PublicKey,
        digest: &[u8],
        signature: &[u8],
    ) -> Result<bool>;
}
