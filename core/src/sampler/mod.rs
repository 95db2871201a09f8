//! Unbiased uniform sampling over integer ranges
//!
//! Converts full-width random draws into uniform values over `[0, n)` and
//! `[lo, hi)` without modulo bias. CRITICAL: every ranged draw in this crate
//! MUST go through this module.

mod uniform;

pub use uniform::{SampleError, UniformSampler};
