//! Fisher-Yates shuffle
//!
//! The in-place Durstenfeld variant: walk the slice once and swap each
//! position with a uniformly chosen position from itself onward. Given an
//! unbiased sampler, all `len!` orderings are equally likely.
//!
//! Drawing from `[i, len)` rather than `[0, len)` is what makes the result
//! uniform; the latter is the classic off-by-one that visits `len^len`
//! equally likely swap sequences, which cannot distribute evenly over
//! `len!` orderings.

use crate::entropy::EntropySource;
use crate::sampler::UniformSampler;

/// Uniform shuffling for slices
///
/// # Example
/// ```
/// use fairdraw_core::{SliceShuffle, UniformSampler};
///
/// let mut sampler = UniformSampler::new();
/// let mut deck: Vec<u32> = (0..52).collect();
/// deck.shuffle(&mut sampler);
/// assert_eq!(deck.len(), 52);
///
/// let original = vec!["a", "b", "c"];
/// let copy = original.shuffled(&mut sampler);
/// assert_eq!(original, vec!["a", "b", "c"]); // input untouched
/// assert_eq!(copy.len(), 3);
/// ```
pub trait SliceShuffle<T> {
    /// Reorder the slice in place into a uniformly random permutation.
    ///
    /// No-op for slices of length 0 or 1. Length and element identities
    /// are preserved; only positions change.
    fn shuffle<S: EntropySource>(&mut self, sampler: &mut UniformSampler<S>);

    /// Return a new `Vec` with the same elements in freshly shuffled
    /// order, leaving `self` unmodified.
    fn shuffled<S: EntropySource>(&self, sampler: &mut UniformSampler<S>) -> Vec<T>
    where
        T: Clone;
}

impl<T> SliceShuffle<T> for [T] {
    fn shuffle<S: EntropySource>(&mut self, sampler: &mut UniformSampler<S>) {
        if self.len() <= 1 {
            return;
        }

        let last = self.len() - 1;
        for i in 0..last {
            // Uniform over [i, len): position i itself stays eligible.
            let j = sampler.sample_i64(i as i64, self.len() as i64) as usize;
            self.swap(i, j);
        }
    }

    fn shuffled<S: EntropySource>(&self, sampler: &mut UniformSampler<S>) -> Vec<T>
    where
        T: Clone,
    {
        let mut copy = self.to_vec();
        copy.shuffle(sampler);
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::ScriptedEntropy;

    #[test]
    fn test_shuffle_empty_is_noop() {
        // An empty script proves no entropy is drawn for length 0.
        let mut sampler = UniformSampler::with_source(ScriptedEntropy::new(Vec::new()));
        let mut items: Vec<i32> = Vec::new();
        items.shuffle(&mut sampler);
        assert!(items.is_empty());
    }

    #[test]
    fn test_shuffle_single_is_noop() {
        let mut sampler = UniformSampler::with_source(ScriptedEntropy::new(Vec::new()));
        let mut items = vec![42];
        items.shuffle(&mut sampler);
        assert_eq!(items, vec![42]);
    }

    #[test]
    fn test_shuffle_scripted_walk() {
        // Scripted draws j = 2, 2, 3 for i = 0, 1, 2:
        //   [10, 20, 30, 40] -> [30, 20, 10, 40] -> [30, 10, 20, 40]
        //                    -> [30, 10, 40, 20]
        let script = ScriptedEntropy::from_values(&[2, 1, 1]);
        let mut sampler = UniformSampler::with_source(script);

        let mut items = vec![10, 20, 30, 40];
        items.shuffle(&mut sampler);
        assert_eq!(items, vec![30, 10, 40, 20]);
    }

    #[test]
    fn test_shuffled_leaves_input_unmodified() {
        let script = ScriptedEntropy::from_values(&[2, 1, 1]);
        let mut sampler = UniformSampler::with_source(script);

        let original = vec![10, 20, 30, 40];
        let copy = original.shuffled(&mut sampler);

        assert_eq!(original, vec![10, 20, 30, 40]);
        assert_eq!(copy, vec![30, 10, 40, 20]);
    }

    #[test]
    fn test_shuffle_preserves_multiset() {
        let mut sampler = UniformSampler::new();
        let mut items: Vec<u32> = (0..100).collect();
        items.shuffle(&mut sampler);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..100).collect::<Vec<u32>>());
    }

    #[test]
    fn test_shuffle_works_on_arrays() {
        let mut sampler = UniformSampler::new();
        let mut items = [1u8, 2, 3, 4, 5];
        items.shuffle(&mut sampler);

        let mut sorted = items;
        sorted.sort_unstable();
        assert_eq!(sorted, [1, 2, 3, 4, 5]);
    }
}
