//! Prehashed DSA verification of OpenPGP signatures
//!
//! GPG does not sign the content alone: the hashed signature-packet header
//! (`other_headers`) is hashed first, then the content. This crate rebuilds
//! that digest with a hash chosen by the caller and hands it to a
//! [`DsaBackend`](gpgdsa_api::DsaBackend) for prehashed verification.
//!
//! The backend compiled into this build is exposed through the process-wide
//! capability returned by [`crypto`].

pub mod backend;
pub mod capability;
pub mod hash;
pub mod verify;

pub use backend::{DefaultBackend, NoBackend};
#[cfg(feature = "rustcrypto")]
pub use backend::RustCryptoDsa;
pub use capability::crypto;
pub use hash::{get_hashing_class, HashAlgorithmId};
pub use verify::{create_pubkey, reconstruct_digest, verify_signature};
