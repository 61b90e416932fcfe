//! Injected randomness for the stochastic effects.
//!
//! Effects never reach for a thread-local generator. They draw from a [`RandomSource`], which every
//! `rand` generator implements, so tests can pass a seeded [`StdRng`] and assert exact frames.

use rand::{Rng, RngCore, SeedableRng, rngs::StdRng};

/// Source of uniform samples consumed by explode, pixelate and crossfade.
pub trait RandomSource {
    /// Uniform sample in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform index in `[0, n)`. Returns 0 when `n == 0`.
    fn next_index(&mut self, n: usize) -> usize;

    /// Uniform sample in `[lo, hi]`; collapses to `lo` for an empty range.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        if hi <= lo {
            return lo;
        }
        lo + (hi - lo) * self.next_f64()
    }

    /// `true` with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

impl<R: RngCore + ?Sized> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        self.gen_range(0.0..1.0)
    }

    fn next_index(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.gen_range(0..n)
    }
}

/// Deterministic generator for reproducible animations.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generator seeded from the operating system.
pub fn from_entropy() -> StdRng {
    StdRng::from_entropy()
}

/// Fisher-Yates shuffle driven by `rng`.
pub fn shuffle<T, R: RandomSource + ?Sized>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}

/// `k` distinct indices out of `0..population` (clamped to the population), in draw order.
pub fn sample_distinct<R: RandomSource + ?Sized>(
    rng: &mut R,
    population: usize,
    k: usize,
) -> Vec<usize> {
    let k = k.min(population);
    let mut pool: Vec<usize> = (0..population).collect();
    for i in 0..k {
        let j = i + rng.next_index(population - i);
        pool.swap(i, j);
    }
    pool.truncate(k);
    pool
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/random.rs"]
mod tests;
