//! Backend built on the RustCrypto `dsa` crate

use der::asn1::UintRef;
use der::{Decode, DecodeValue, Encode, EncodeValue, Header, Length, Reader, Sequence, Writer};
use dsa::{BigUint, Components, Signature, VerifyingKey};
use gpgdsa_api::{DsaBackend, Error, Result};
use log::trace;
use signature::hazmat::PrehashVerifier;

/// RustCrypto DSA (FIPS 186-4) backend
///
/// Signatures are exchanged as DER `SEQUENCE { INTEGER r, INTEGER s }`.
/// Zero components are encodable, so an all-zero MPI still reaches the
/// verifier, where it is a mismatch.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoDsa;

/// Borrowed `(r, s)` pair in its DER form
struct DerSignature<'a> {
    r: UintRef<'a>,
    s: UintRef<'a>,
}

impl<'a> DerSignature<'a> {
    fn new(r: &'a [u8], s: &'a [u8]) -> der::Result<Self> {
        Ok(Self {
            r: UintRef::new(integer_bytes(r))?,
            s: UintRef::new(integer_bytes(s))?,
        })
    }

    fn has_zero_component(&self) -> bool {
        is_zero(self.r.as_bytes()) || is_zero(self.s.as_bytes())
    }
}

impl<'a> DecodeValue<'a> for DerSignature<'a> {
    fn decode_value<R: Reader<'a>>(reader: &mut R, header: Header) -> der::Result<Self> {
        reader.read_nested(header.length, |reader| {
            Ok(Self {
                r: UintRef::decode(reader)?,
                s: UintRef::decode(reader)?,
            })
        })
    }
}

impl EncodeValue for DerSignature<'_> {
    fn value_len(&self) -> der::Result<Length> {
        self.r.encoded_len()? + self.s.encoded_len()?
    }

    fn encode_value(&self, writer: &mut impl Writer) -> der::Result<()> {
        self.r.encode(writer)?;
        self.s.encode(writer)
    }
}

impl<'a> Sequence<'a> for DerSignature<'a> {}

// An empty magnitude is the integer 0, which DER spells as one zero octet
fn integer_bytes(magnitude: &[u8]) -> &[u8] {
    if magnitude.is_empty() {
        &[0]
    } else {
        magnitude
    }
}

fn is_zero(bytes: &[u8]) -> bool {
    bytes.iter().all(|&b| b == 0)
}

impl DsaBackend for RustCryptoDsa {
    type PublicKey = VerifyingKey;

    fn name(&self) -> &'static str {
        "RustCrypto dsa"
    }

    fn public_key(&self, p: &[u8], q: &[u8], g: &[u8], y: &[u8]) -> Result<VerifyingKey> {
        let components = Components::from_components(
            BigUint::from_bytes_be(p),
            BigUint::from_bytes_be(q),
            BigUint::from_bytes_be(g),
        )
        .map_err(|e| Error::InvalidKey {
            context: "DSA domain parameters",
            message: e.to_string(),
        })?;

        VerifyingKey::from_components(components, BigUint::from_bytes_be(y)).map_err(|e| {
            Error::InvalidKey {
                context: "DSA public value",
                message: e.to_string(),
            }
        })
    }

    fn encode_signature(&self, r: &[u8], s: &[u8]) -> Result<Vec<u8>> {
        DerSignature::new(r, s)
            .and_then(|signature| signature.to_der())
            .map_err(|e| Error::Backend {
                context: "DER signature encoding",
                message: e.to_string(),
            })
    }

    fn verify_prehashed(
        &self,
        key: &VerifyingKey,
        digest: &[u8],
        signature: &[u8],
    ) -> Result<bool> {
        let encoded = DerSignature::from_der(signature).map_err(|e| Error::InvalidSignature {
            context: "DSA signature encoding",
            message: e.to_string(),
        })?;

        if encoded.has_zero_component() {
            trace!("DSA signature with a zero component");
            return Ok(false);
        }

        let signature = Signature::from_components(
            BigUint::from_bytes_be(encoded.r.as_bytes()),
            BigUint::from_bytes_be(encoded.s.as_bytes()),
        )
        .map_err(|e| Error::Backend {
            context: "DSA signature components",
            message: e.to_string(),
        })?;

        // Any failure past decoding is a mismatch, including r or s of at least q
        let verified = key.verify_prehash(digest, &signature).is_ok();
        trace!("prehashed DSA verification over {} byte digest: {}", digest.len(), verified);

        Ok(verified)
    }
}
