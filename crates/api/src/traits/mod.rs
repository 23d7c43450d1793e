//! Capability traits implemented by cryptographic backends

pub mod hash;
pub mod signature;

pub use hash::HashFunction;
pub use signature::DsaBackend;
