//! Operating-system entropy source
//!
//! Thin handle over the platform CSPRNG via the `getrandom` crate
//! (`getrandom(2)` on Linux, `SecRandomCopyBytes` on macOS, and so on).
//! The OS pool is safe to draw from concurrently, so handles can be created
//! freely in any thread; the handle itself carries no state.

use super::EntropySource;

/// Cryptographically strong byte source backed by the operating system.
///
/// # Example
/// ```
/// use fairdraw_core::{EntropySource, OsEntropy};
///
/// let mut source = OsEntropy;
/// let mut buf = [0u8; 16];
/// source.fill_bytes(&mut buf);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    /// Fill `dest` from the OS CSPRNG.
    ///
    /// # Panics
    /// Panics if the operating system refuses to provide entropy. That only
    /// happens when the platform RNG is missing or broken, which no caller
    /// of this crate can meaningfully recover from.
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        getrandom::getrandom(dest).expect("operating system entropy source failed");
    }
}
