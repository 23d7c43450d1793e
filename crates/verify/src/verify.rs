//! Public key construction, digest reconstruction and signature verification

use gpgdsa_api::error::{Result, VerifyResult};
use gpgdsa_api::{Capability, DsaBackend, DsaPublicKeyInfo, DsaSignatureInfo, Error};
use log::debug;

use crate::hash::{get_hashing_class, hash_object};

/// Build the backend public key described by `pubkey_info`
///
/// # Errors
///
/// [`Error::UnsupportedLibrary`] if `crypto` has no backend, checked before
/// the parameters are looked at; [`Error::InvalidKey`] if a parameter is not
/// hex or the backend rejects the key.
pub fn create_pubkey<B: DsaBackend>(
    crypto: &Capability<B>,
    pubkey_info: &DsaPublicKeyInfo,
) -> Result<B::PublicKey> {
    let backend = crypto.require()?;
    let params = pubkey_info.public();

    let p = decode_param("DSA prime p", &params.p)?;
    let q = decode_param("DSA group order q", &params.q)?;
    let g = decode_param("DSA generator g", &params.g)?;
    let y = decode_param("DSA public value y", &params.y)?;

    backend.public_key(&p, &q, &g, &y)
}

fn decode_param(context: &'static str, value: &str) -> Result<Vec<u8>> {
    hex::decode(value).map_err(|e| Error::InvalidKey {
        context,
        message: e.to_string(),
    })
}

/// Digest GPG actually signed: `H(other_headers || content)`
///
/// # Errors
///
/// [`Error::InvalidHashAlgorithm`] if `hash_algorithm_id` is not supported.
pub fn reconstruct_digest(
    hash_algorithm_id: u8,
    other_headers: &[u8],
    content: &[u8],
) -> Result<Vec<u8>> {
    let algorithm = get_hashing_class(hash_algorithm_id)?;
    Ok(hash_object(other_headers, algorithm.hasher(), content))
}

/// Verify a GPG DSA signature over `content`
///
/// `hash_algorithm_id` is one of SHA-1 (2), SHA-256 (8) or SHA-512 (10) and
/// always decides the digest, whatever `pubkey_info.hashes`,
/// `pubkey_info.method` or the header octet inside `other_headers` say.
///
/// Returns `Ok(true)` if the signature verifies and `Ok(false)` if it does
/// not.
///
/// # Errors
///
/// - [`Error::UnsupportedLibrary`] if `crypto` has no backend
/// - [`Error::InvalidHashAlgorithm`] for an unsupported `hash_algorithm_id`
/// - [`Error::InvalidKey`] for unusable key parameters
/// - [`Error::InvalidSignature`] if the signature cannot be decoded
pub fn verify_signature<B: DsaBackend>(
    crypto: &Capability<B>,
    signature_object: &DsaSignatureInfo,
    pubkey_info: &DsaPublicKeyInfo,
    content: &[u8],
    hash_algorithm_id: u8,
) -> VerifyResult {
    let backend = crypto.require()?;
    let algorithm = get_hashing_class(hash_algorithm_id)?;

    if let Some(embedded) = signature_object.embedded_hash_algorithm() {
        if embedded != algorithm.id() {
            debug!(
                "signature header names hash {}, verifying with {} as requested",
                embedded, algorithm
            );
        }
    }

    let pubkey = create_pubkey(crypto, pubkey_info)?;

    let other_headers = signature_object.other_headers_bytes()?;
    let digest = hash_object(&other_headers, algorithm.hasher(), content);
    let signature = signature_object.signature_bytes()?;

    let verified = backend.verify_prehashed(&pubkey, &digest, &signature)?;
    debug!(
        "DSA signature by {} over {} content bytes with {}: {}",
        signature_object.keyid,
        content.len(),
        algorithm,
        if verified { "valid" } else { "invalid" }
    );

    Ok(verified)
}
