//! Hash capability trait

/// Incremental hash function selected at runtime
///
/// Object safe, so a registry can hand out `Box<dyn HashFunction>` for an
/// identifier that is only known at runtime.
pub trait HashFunction {
    /// Returns the name of the hash algorithm
    fn name(&self) -> &'static str;

    /// Digest size in bytes
    fn output_size(&self) -> usize;

    /// Absorb more input
    fn update(&mut self, data: &[u8]);

    /// Consume the hasher and return the digest
    fn finalize(self: Box<Self>) -> Vec<u8>;
}
