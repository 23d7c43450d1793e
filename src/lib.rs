//! # gpgdsa
//!
//! Decoding and verification of DSA signatures embedded in OpenPGP (RFC4880)
//! packets.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! gpgdsa = "0.3"
//! ```
//!
//! ## Features
//!
//! - `rustcrypto` (default): DSA backend built on the RustCrypto `dsa` crate
//! - `serde`: serialisation of the key and signature descriptions
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`gpgdsa-api`]: errors, capability handle, backend and hash traits
//! - [`gpgdsa-packet`]: MPI decoding, public-key and signature parameter extraction
//! - [`gpgdsa-verify`]: hash registry, backends, digest reconstruction, verification
//!
//! The [`dsa`] module binds the four entry points to the capability compiled
//! into this build.

// Core re-exports
pub use gpgdsa_api as api;
pub use gpgdsa_packet as packet;
pub use gpgdsa_verify as verify;

pub mod dsa;

/// Common imports for gpgdsa users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{Capability, DsaBackend, HashFunction};

    // Re-export description types
    pub use crate::api::{DsaPublicKeyInfo, DsaPublicParams, DsaSignatureInfo};

    // Re-export entry points
    pub use crate::dsa::{create_pubkey, get_pubkey_params, get_signature_params, verify_signature};
    pub use crate::verify::HashAlgorithmId;
}
