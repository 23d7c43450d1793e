//! Process-wide cryptographic capability

use gpgdsa_api::Capability;
use once_cell::sync::Lazy;

use crate::backend::DefaultBackend;

static CRYPTO: Lazy<Capability<DefaultBackend>> = Lazy::new(detect);

/// The capability compiled into this build, detected on first use
pub fn crypto() -> &'static Capability<DefaultBackend> {
    &CRYPTO
}

#[cfg(feature = "rustcrypto")]
fn detect() -> Capability<DefaultBackend> {
    use gpgdsa_api::DsaBackend;
    use log::debug;

    let backend = crate::backend::RustCryptoDsa;
    debug!("DSA capability available: {}", backend.name());
    Capability::available(backend)
}

#[cfg(not(feature = "rustcrypto"))]
fn detect() -> Capability<DefaultBackend> {
    log::warn!("DSA capability unavailable: built without a cryptography backend");
    Capability::unavailable()
}
