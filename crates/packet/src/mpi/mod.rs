//! RFC4880 Multi-Precision Integer decoding
//!
//! An MPI is a two-octet big-endian bit count followed by
//! `ceil(bits / 8)` octets of big-endian magnitude (RFC4880 §3.2).
//!
//! The cursor is a plain offset: [`read_mpi`] takes the offset of a field and
//! hands back the offset of the next one, so a sequential walk over a packet
//! body is a chain of pure calls.

use gpgdsa_api::error::{Error, ParseResult};
use log::trace;

/// Size of the bit-count prefix in bytes
pub const MPI_LENGTH_PREFIX: usize = 2;

/// Declared bit count of the MPI starting at `prefix`
pub fn bit_length(prefix: &[u8]) -> ParseResult<u16> {
    match prefix {
        [hi, lo, ..] => Ok(u16::from_be_bytes([*hi, *lo])),
        _ => Err(Error::truncated(
            "MPI length prefix",
            MPI_LENGTH_PREFIX,
            prefix.len(),
        )),
    }
}

/// Byte length of the MPI body announced by `prefix`
///
/// Only the first two bytes of `prefix` are read.
pub fn decode_mpi_length(prefix: &[u8]) -> ParseResult<usize> {
    let bits = bit_length(prefix)? as usize;
    Ok(bits.div_ceil(8))
}

/// Read the MPI at `offset` in `data`
///
/// Returns the magnitude bytes and the offset just past the field. A body
/// shorter than its declared length is a parse error; nothing is padded or
/// truncated.
pub fn read_mpi(data: &[u8], offset: usize) -> ParseResult<(&[u8], usize)> {
    let remaining = data.get(offset..).unwrap_or_default();
    let length = decode_mpi_length(remaining)?;

    let body = &remaining[MPI_LENGTH_PREFIX..];
    if body.len() < length {
        return Err(Error::truncated("MPI body", length, body.len()));
    }

    let next = offset + MPI_LENGTH_PREFIX + length;
    trace!("MPI at offset {}: {} bytes, next offset {}", offset, length, next);

    Ok((&body[..length], next))
}
