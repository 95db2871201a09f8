//! Uniform permutation of slices
//!
//! Fisher-Yates shuffling built on the unbiased sampler. Available on any
//! `[T]` (and therefore on `Vec<T>` and arrays) through the
//! [`SliceShuffle`] extension trait.

mod fisher_yates;

pub use fisher_yates::SliceShuffle;
