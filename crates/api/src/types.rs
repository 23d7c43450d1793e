//! Structured key and signature descriptions
//!
//! These are the records exchanged with upstream packet-parsing code.
//! Integers and raw header bytes are carried as lowercase hexadecimal text,
//! and the layout mirrors the GPG key/signature dictionaries
//! (`keyval.public.p`, `other_headers`, ...) when serialised.

use crate::error::{Error, Result};

/// Key type tag used in [`DsaPublicKeyInfo`]
pub const KEY_TYPE: &str = "dsa";

/// Signing scheme tag used in [`DsaPublicKeyInfo`]
pub const KEY_METHOD: &str = "pgp+dsa-fips-180-2";

/// Hash tag listed by default in [`DsaPublicKeyInfo::hashes`]
pub const DEFAULT_KEY_HASH: &str = "pgp+SHA2";

/// Offset of the hash-algorithm octet in a v4 signature header
const HASH_ALGORITHM_OFFSET: usize = 3;

/// DSA public parameters as lowercase hex strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DsaPublicParams {
    /// Prime modulus
    pub p: String,
    /// Prime order of the subgroup
    pub q: String,
    /// Generator
    pub g: String,
    /// Public value, `g^x mod p`
    pub y: String,
}

impl DsaPublicParams {
    /// Hex-encode raw big-endian parameter bytes
    pub fn from_bytes(p: &[u8], q: &[u8], g: &[u8], y: &[u8]) -> Self {
        Self {
            p: hex::encode(p),
            q: hex::encode(q),
            g: hex::encode(g),
            y: hex::encode(y),
        }
    }
}

/// Key material wrapper, `keyval` in the GPG key dictionary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyVal {
    /// Public parameters
    pub public: DsaPublicParams,
    /// Always empty; private material never enters this crate
    #[cfg_attr(feature = "serde", serde(default))]
    pub private: String,
}

/// A DSA public key description
///
/// `method` and `hashes` are informational. The verifier always hashes with
/// the algorithm its caller names explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DsaPublicKeyInfo {
    /// Hex key id
    pub keyid: String,
    /// Key type, `"dsa"`
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub key_type: String,
    /// Signing scheme
    pub method: String,
    /// Advertised hash algorithms
    pub hashes: Vec<String>,
    /// Key material
    pub keyval: KeyVal,
}

impl DsaPublicKeyInfo {
    /// Describe the key identified by `keyid` with the given public parameters
    pub fn new(keyid: impl Into<String>, public: DsaPublicParams) -> Self {
        Self {
            keyid: keyid.into(),
            key_type: KEY_TYPE.to_string(),
            method: KEY_METHOD.to_string(),
            hashes: vec![DEFAULT_KEY_HASH.to_string()],
            keyval: KeyVal {
                public,
                private: String::new(),
            },
        }
    }

    /// Public parameters of this key
    pub fn public(&self) -> &DsaPublicParams {
        &self.keyval.public
    }
}

/// A DSA signature description
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DsaSignatureInfo {
    /// Hex id of the signing key
    pub keyid: String,
    /// Hex of the hashed signature-packet header bytes
    pub other_headers: String,
    /// Hex of the composite `(r, s)` encoding
    pub signature: String,
}

impl DsaSignatureInfo {
    /// Describe a signature from its raw header bytes and composite encoding
    pub fn new(keyid: impl Into<String>, other_headers: &[u8], signature: &[u8]) -> Self {
        Self {
            keyid: keyid.into(),
            other_headers: hex::encode(other_headers),
            signature: hex::encode(signature),
        }
    }

    /// Raw header bytes that prefix the content when hashing
    pub fn other_headers_bytes(&self) -> Result<Vec<u8>> {
        hex::decode(&self.other_headers).map_err(|e| Error::InvalidParameter {
            context: "other_headers",
            message: e.to_string(),
        })
    }

    /// Raw composite signature bytes
    pub fn signature_bytes(&self) -> Result<Vec<u8>> {
        hex::decode(&self.signature).map_err(|e| Error::InvalidSignature {
            context: "signature hex",
            message: e.to_string(),
        })
    }

    /// Hash algorithm id recorded inside the v4 signature header, if any
    ///
    /// Informational only: it never selects the digest.
    pub fn embedded_hash_algorithm(&self) -> Option<u8> {
        self.other_headers_bytes()
            .ok()
            .and_then(|headers| headers.get(HASH_ALGORITHM_OFFSET).copied())
    }
}
