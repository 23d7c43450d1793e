//! DSA public-key parameter extraction (RFC4880 §5.5.2)

use crate::mpi::read_mpi;
use gpgdsa_api::error::ParseResult;
use gpgdsa_api::DsaPublicParams;
use log::debug;

/// Parse the DSA public-key parameters of a public-key packet body
///
/// `data` starts at the algorithm-specific fields: four MPIs in the order
/// prime p, group order q, generator g, public value y. Any truncated field
/// aborts the whole extraction.
pub fn get_pubkey_params(data: &[u8]) -> ParseResult<DsaPublicParams> {
    let (prime_p, offset) = read_mpi(data, 0).map_err(|e| e.with_context("DSA prime p"))?;
    let (group_order_q, offset) =
        read_mpi(data, offset).map_err(|e| e.with_context("DSA group order q"))?;
    let (generator, offset) =
        read_mpi(data, offset).map_err(|e| e.with_context("DSA generator g"))?;
    let (value_y, _) = read_mpi(data, offset).map_err(|e| e.with_context("DSA public value y"))?;

    debug!(
        "DSA public key: p {} bits, q {} bits",
        prime_p.len() * 8,
        group_order_q.len() * 8
    );

    Ok(DsaPublicParams::from_bytes(
        prime_p,
        group_order_q,
        generator,
        value_y,
    ))
}
