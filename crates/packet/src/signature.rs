//! DSA signature parameter extraction (RFC4880 §5.2.2)

use crate::mpi::read_mpi;
use gpgdsa_api::error::ParseResult;
use gpgdsa_api::{Capability, DsaBackend};
use log::debug;

/// Parse the DSA signature MPIs and package them for verification
///
/// `data` starts at the algorithm-specific signature fields: the MPIs r and
/// s, in that order. The pair is handed to the backend's
/// [`encode_signature`](DsaBackend::encode_signature), whose output is what
/// [`DsaBackend::verify_prehashed`] accepts.
///
/// # Errors
///
/// [`Error::UnsupportedLibrary`](gpgdsa_api::Error::UnsupportedLibrary) if
/// `crypto` has no backend, checked before any parsing;
/// [`Error::PacketParsing`](gpgdsa_api::Error::PacketParsing) if r or s is
/// truncated.
pub fn get_signature_params<B: DsaBackend>(
    crypto: &Capability<B>,
    data: &[u8],
) -> ParseResult<Vec<u8>> {
    let backend = crypto.require()?;

    let (r, offset) = read_mpi(data, 0).map_err(|e| e.with_context("DSA signature r-value"))?;
    let (s, _) = read_mpi(data, offset).map_err(|e| e.with_context("DSA signature s-value"))?;

    debug!(
        "DSA signature: r {} bytes, s {} bytes, encoding with {}",
        r.len(),
        s.len(),
        backend.name()
    );

    backend.encode_signature(r, s)
}
