//! GPG DSA entry points bound to the process-wide capability
//!
//! Each function here consults [`crypto`](gpgdsa_verify::crypto) before
//! doing anything that needs the backend, so a build without one fails fast
//! with [`Error::UnsupportedLibrary`](crate::api::Error::UnsupportedLibrary).

use crate::api::{DsaBackend, DsaPublicKeyInfo, DsaPublicParams, DsaSignatureInfo, Result};
use crate::verify::{crypto, DefaultBackend};

/// Public key object of the compiled-in backend
pub type PublicKey = <DefaultBackend as DsaBackend>::PublicKey;

/// Parse `(p, q, g, y)` from a DSA public-key packet body
///
/// Pure parsing; does not need the backend.
pub fn get_pubkey_params(data: &[u8]) -> Result<DsaPublicParams> {
    gpgdsa_packet::get_pubkey_params(data)
}

/// Parse `(r, s)` from a DSA signature packet body and encode them for verification
pub fn get_signature_params(data: &[u8]) -> Result<Vec<u8>> {
    gpgdsa_packet::get_signature_params(crypto(), data)
}

/// Build a backend public key from a key description
pub fn create_pubkey(pubkey_info: &DsaPublicKeyInfo) -> Result<PublicKey> {
    gpgdsa_verify::create_pubkey(crypto(), pubkey_info)
}

/// Verify `signature_object` over `content` with `pubkey_info`
///
/// See [`gpgdsa_verify::verify_signature`] for the result contract.
pub fn verify_signature(
    signature_object: &DsaSignatureInfo,
    pubkey_info: &DsaPublicKeyInfo,
    content: &[u8],
    hash_algorithm_id: u8,
) -> Result<bool> {
    gpgdsa_verify::verify_signature(
        crypto(),
        signature_object,
        pubkey_info,
        content,
        hash_algorithm_id,
    )
}
