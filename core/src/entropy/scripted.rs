//! Scripted entropy source for tests
//!
//! Replays a fixed byte sequence, which makes every draw of code built on
//! this crate exactly reproducible. The main use is forcing the sampler's
//! rejection loop down a chosen path: script a raw value at or above the
//! rejection limit, follow it with an acceptable one, and the test can
//! assert the exact outcome.

use super::EntropySource;

/// Byte source that replays a fixed script, then panics when exhausted.
///
/// Exhaustion is deliberately loud: running past the end of the script
/// means the code under test consumed more entropy than the test accounted
/// for, which is itself a bug worth failing on.
///
/// # Example
/// ```
/// use fairdraw_core::{ScriptedEntropy, UniformSampler};
///
/// let script = ScriptedEntropy::from_values(&[7]);
/// let mut sampler = UniformSampler::with_source(script);
/// assert_eq!(sampler.sample_u64(5), 2); // 7 % 5, no rejection
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedEntropy {
    script: Vec<u8>,
    cursor: usize,
}

impl ScriptedEntropy {
    /// Create a source that replays `script` byte for byte.
    pub fn new(script: impl Into<Vec<u8>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
        }
    }

    /// Create a source whose script is the given 64-bit values, each encoded
    /// little-endian, so every value comes back verbatim from one
    /// `raw_u64` draw.
    ///
    /// # Example
    /// ```
    /// use fairdraw_core::{ScriptedEntropy, UniformSampler};
    ///
    /// let script = ScriptedEntropy::from_values(&[42, u64::MAX]);
    /// let mut sampler = UniformSampler::with_source(script);
    /// assert_eq!(sampler.raw_u64(), 42);
    /// assert_eq!(sampler.raw_u64(), u64::MAX);
    /// ```
    pub fn from_values(values: &[u64]) -> Self {
        let mut script = Vec::with_capacity(values.len() * 8);
        for value in values {
            script.extend_from_slice(&value.to_le_bytes());
        }
        Self { script, cursor: 0 }
    }

    /// Bytes left in the script. Tests assert this is zero to prove the
    /// code under test drew exactly the scripted amount of entropy.
    pub fn remaining(&self) -> usize {
        self.script.len() - self.cursor
    }
}

impl EntropySource for ScriptedEntropy {
    /// Copy the next `dest.len()` scripted bytes into `dest`.
    ///
    /// # Panics
    /// Panics if fewer than `dest.len()` bytes remain in the script.
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let end = self.cursor + dest.len();
        assert!(
            end <= self.script.len(),
            "scripted entropy exhausted: needed {} byte(s), {} left",
            dest.len(),
            self.remaining()
        );
        dest.copy_from_slice(&self.script[self.cursor..end]);
        self.cursor = end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_script_in_order() {
        let mut source = ScriptedEntropy::new(vec![1u8, 2, 3, 4, 5, 6]);

        let mut first = [0u8; 4];
        source.fill_bytes(&mut first);
        assert_eq!(first, [1, 2, 3, 4]);

        let mut second = [0u8; 2];
        source.fill_bytes(&mut second);
        assert_eq!(second, [5, 6]);
    }

    #[test]
    fn test_from_values_encodes_little_endian() {
        let mut source = ScriptedEntropy::from_values(&[1]);
        let mut buf = [0u8; 8];
        source.fill_bytes(&mut buf);
        assert_eq!(buf, [1, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_remaining_counts_down() {
        let mut source = ScriptedEntropy::from_values(&[0, 0]);
        assert_eq!(source.remaining(), 16);

        let mut buf = [0u8; 8];
        source.fill_bytes(&mut buf);
        assert_eq!(source.remaining(), 8);

        source.fill_bytes(&mut buf);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "scripted entropy exhausted")]
    fn test_exhaustion_panics() {
        let mut source = ScriptedEntropy::new(vec![1u8, 2, 3]);
        let mut buf = [0u8; 4];
        source.fill_bytes(&mut buf);
    }
}
