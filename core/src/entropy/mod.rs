//! Byte-source seam for cryptographically strong entropy
//!
//! Everything the sampler draws flows through the [`EntropySource`] trait.
//! Production code uses [`OsEntropy`] (the operating system CSPRNG); tests
//! use [`ScriptedEntropy`] to replay an exact byte sequence.

mod os;
mod scripted;

pub use os::OsEntropy;
pub use scripted::ScriptedEntropy;

/// Supplier of cryptographically strong random bytes.
///
/// This is the external-collaborator contract the sampler is built on:
/// `fill_bytes` fills the whole buffer with uniformly random bytes and has
/// no failure mode visible to callers. Implementations that can fail
/// (e.g. an exhausted test script, a broken OS entropy pool) treat that as
/// a fatal condition and panic rather than returning partial randomness.
///
/// The receiver is `&mut self`, so a source is never invoked concurrently
/// through a shared reference; sources that are cheap to construct (such as
/// [`OsEntropy`]) should be created per caller rather than shared.
///
/// # Example
/// ```
/// use fairdraw_core::{EntropySource, UniformSampler};
///
/// struct Zeroes;
///
/// impl EntropySource for Zeroes {
///     fn fill_bytes(&mut self, dest: &mut [u8]) {
///         dest.fill(0);
///     }
/// }
///
/// let mut sampler = UniformSampler::with_source(Zeroes);
/// assert_eq!(sampler.raw_u64(), 0);
/// ```
pub trait EntropySource {
    /// Fill `dest` entirely with random bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]);
}
