//! Hash algorithm registry
//!
//! Maps the RFC4880 §9.4 hash algorithm identifiers accepted for GPG DSA
//! signatures onto concrete [`HashFunction`] implementations.

use core::fmt;

use digest::Digest;
use gpgdsa_api::{Error, HashFunction, Result};
use sha1::Sha1;
use sha2::{Sha256, Sha512};

/// Supported hash algorithm identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HashAlgorithmId {
    /// SHA-1
    Sha1 = 2,
    /// SHA2-256
    Sha256 = 8,
    /// SHA2-512
    Sha512 = 10,
}

impl HashAlgorithmId {
    /// RFC4880 identifier
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Algorithm name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "SHA-1",
            Self::Sha256 => "SHA-256",
            Self::Sha512 => "SHA-512",
        }
    }

    /// Digest size in bytes
    pub const fn output_size(self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha256 => 32,
            Self::Sha512 => 64,
        }
    }

    /// A fresh hasher for this algorithm
    pub fn hasher(self) -> Box<dyn HashFunction> {
        match self {
            Self::Sha1 => Box::new(DigestHasher::<Sha1>::new(self.name())),
            Self::Sha256 => Box::new(DigestHasher::<Sha256>::new(self.name())),
            Self::Sha512 => Box::new(DigestHasher::<Sha512>::new(self.name())),
        }
    }
}

impl TryFrom<u8> for HashAlgorithmId {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self> {
        match id {
            2 => Ok(Self::Sha1),
            8 => Ok(Self::Sha256),
            10 => Ok(Self::Sha512),
            _ => Err(Error::InvalidHashAlgorithm { id }),
        }
    }
}

impl fmt::Display for HashAlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.id())
    }
}

/// Resolve a caller-supplied hash algorithm identifier
///
/// # Errors
///
/// [`Error::InvalidHashAlgorithm`] for any id other than SHA-1 (2),
/// SHA-256 (8) or SHA-512 (10).
pub fn get_hashing_class(hash_algorithm_id: u8) -> Result<HashAlgorithmId> {
    HashAlgorithmId::try_from(hash_algorithm_id)
}

/// Hash `other_headers` followed by `content`
pub fn hash_object(other_headers: &[u8], mut hasher: Box<dyn HashFunction>, content: &[u8]) -> Vec<u8> {
    hasher.update(other_headers);
    hasher.update(content);
    hasher.finalize()
}

/// Adapter from a RustCrypto [`Digest`] to [`HashFunction`]
struct DigestHasher<D> {
    name: &'static str,
    inner: D,
}

impl<D: Digest> DigestHasher<D> {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            inner: D::new(),
        }
    }
}

impl<D: Digest> HashFunction for DigestHasher<D> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn output_size(&self) -> usize {
        <D as Digest>::output_size()
    }

    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.inner, data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        let this = *self;
        this.inner.finalize().to_vec()
    }
}
