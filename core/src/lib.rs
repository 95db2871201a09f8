//! Fairdraw Core - Unbiased Sampling Engine
//!
//! Uniform random values over arbitrary 64-bit integer ranges, drawn from a
//! cryptographically strong byte source, plus a Fisher-Yates shuffle built
//! on the sampler.
//!
//! # Architecture
//!
//! - **entropy**: byte-source seam (`EntropySource`), with the OS-backed
//!   production source and a scripted replay source for tests
//! - **sampler**: rejection-sampled uniform draws over `[0, n)` and `[lo, hi)`
//! - **shuffle**: in-place and copying Fisher-Yates permutation of slices
//!
//! # Critical Invariants
//!
//! 1. Every ranged draw is unbiased: raw values that would fold unevenly
//!    under the modulo are rejected and redrawn
//! 2. Contract violations (inverted bounds, a lower bound of `i64::MIN`)
//!    panic; a zero-width unsigned bound returns 0 by contract
//! 3. Nothing is cached or retained between calls; the only state anywhere
//!    is inside the byte source itself

// Module declarations
pub mod entropy;
pub mod sampler;
pub mod shuffle;

// Re-exports for convenience
pub use entropy::{EntropySource, OsEntropy, ScriptedEntropy};
pub use sampler::{SampleError, UniformSampler};
pub use shuffle::SliceShuffle;
