//! Fixed DSA test vectors
//!
//! A 1024-bit DSA key (160-bit q) and signatures made with it over the
//! content `b"test"`. Each signature covers `H(other_headers || content)`,
//! where `other_headers` is a v4 header (DSA, creation-time subpacket
//! 2023-11-14) naming the hash in its fourth octet.

/// Prime modulus p
pub const P: &str = "cacbb2a2001d340c327be7cf8400f55c427df779de392cc5b59e25ca20f726e8\
    43b0742a82af64094d8466fdbad9d3cf346a99eb15f7f0328a99fbcd52b6dd9c\
    75b6de8b1c0dbfa0a44fa4c9cd200b2182e28b5bafc5e40d62e0686a12f3f64f\
    cbcd674f5f0761ecda7d562c82e781d9782e6ed0cd7be6a2cdbf6b5c433fe79d";

/// Subgroup order q
pub const Q: &str = "e04b6de6d840a6b6a6528db48b45c0b6d2d34289";

/// Generator g
pub const G: &str = "1a6da1a2c1b196595517a42baee88345c431aff60a9f955b466d58be78f156d5\
    1c084d239b96cb39942170746237f042ada4052fff462780d75e5dabd77450ad\
    e87fbb158270319a20f4b446c13417b1ed907d075aa4974e84e79306bfaa9725\
    fc8a454da0411d3c4f8120930b299111533cd8d2a141599f5b9d124a3223f228";

/// Public value y; its top octet is 0x05, so the MPI is 1019 bits
pub const Y: &str = "05330f6df64078ee5ef536f4ee9bb5d4ffbef3d8b0eb07894225d829379aa431\
    784354b5f10e613b1aa1524d3e16a09c7e4bfd4f8cdbd0deeda5b26366dad043\
    5f254ae882d50d9b8060270281c873d97c1aaf76eb133c0565500ea55d98a863\
    91105fef477a48a7e0b91a429c72d9a96011b15c22e30fd23963f7b42e180b26";

/// Content every vector signs
pub const CONTENT: &[u8] = b"test";

/// A signature over [`CONTENT`]
#[derive(Debug, Clone, Copy)]
pub struct SignatureVector {
    /// Description of the test case
    pub description: &'static str,
    /// Hash algorithm actually used to compute the digest
    pub hash_algorithm_id: u8,
    /// Hashed header bytes
    pub other_headers: &'static str,
    /// Signature value r
    pub r: &'static str,
    /// Signature value s
    pub s: &'static str,
    /// DER `SEQUENCE { INTEGER r, INTEGER s }`
    pub der: &'static str,
}

/// SHA-256
pub const SHA256: SignatureVector = SignatureVector {
    description: "SHA-256",
    hash_algorithm_id: 8,
    other_headers: "04001108000605026553f100",
    r: "8d91cbb04d94f90f03a9dfc70064c859311f8754",
    s: "66d418f6ae8278a21f434c7546a33e91821e80fc",
    der: "302d0215008d91cbb04d94f90f03a9dfc70064c859311f8754021466d418f6ae\
         8278a21f434c7546a33e91821e80fc",
};

/// SHA-1
pub const SHA1: SignatureVector = SignatureVector {
    description: "SHA-1",
    hash_algorithm_id: 2,
    other_headers: "04001102000605026553f100",
    r: "993397df3ede8ed0810b0b5fd27c7b75eaa7a6b3",
    s: "81410afe5fb2bc0eafb1885b8d7c4c443a408bb9",
    der: "302e021500993397df3ede8ed0810b0b5fd27c7b75eaa7a6b302150081410afe\
         5fb2bc0eafb1885b8d7c4c443a408bb9",
};

/// SHA-512
pub const SHA512: SignatureVector = SignatureVector {
    description: "SHA-512",
    hash_algorithm_id: 10,
    other_headers: "0400110a000605026553f100",
    r: "7f3844af934b34fe760dcfd3e4195bd9d6c12f35",
    s: "25f43fdc67dd235958cb1803893c6fa85f8017a5",
    der: "302c02147f3844af934b34fe760dcfd3e4195bd9d6c12f35021425f43fdc67dd\
         235958cb1803893c6fa85f8017a5",
};

/// SHA-256 digest, header octet names SHA-1
pub const HEADER_SAYS_SHA1: SignatureVector = SignatureVector {
    description: "SHA-256 digest, header octet names SHA-1",
    hash_algorithm_id: 8,
    other_headers: "04001102000605026553f100",
    r: "5c505c553fe652998ddb0e810a9e66b62e59dea3",
    s: "439faa415c535d458bf8ee0956bfbac7eae0fcaf",
    der: "302c02145c505c553fe652998ddb0e810a9e66b62e59dea30214439faa415c53\
         5d458bf8ee0956bfbac7eae0fcaf",
};

/// Vectors whose header octet matches the digest algorithm
pub const MATCHING: &[SignatureVector] = &[SHA1, SHA256, SHA512];
