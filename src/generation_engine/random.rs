//! Integer draw source used by every equation generator.
//!
//! Generators never touch `rand` directly; they ask a [`RandomSource`] for a
//! value in a closed range. That keeps the draw sequence swappable: entropy
//! for the app, a seed for reproducible requests, a fixed script for tests.

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Uniform integer draws over a closed range.
pub trait RandomSource {
    /// Return a value in `[low, high]`, both ends inclusive.
    fn next_int(&mut self, low: i32, high: i32) -> i32;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_int(&mut self, low: i32, high: i32) -> i32 {
        (**self).next_int(low, high)
    }
}

/// `StdRng`-backed source, entropy-seeded by default.
#[derive(Debug, Clone)]
pub struct SystemRandom {
    rng: StdRng,
}

impl SystemRandom {
    pub fn new() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// Same seed, same draw sequence.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None       => Self::new(),
        }
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemRandom {
    fn next_int(&mut self, low: i32, high: i32) -> i32 {
        self.rng.gen_range(low..=high)
    }
}

/// Replays a fixed sequence of values, wrapping around at the end.
///
/// Each value is clamped into the requested range, so a script written for
/// one kind can't produce an out-of-range coefficient for another.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<i32>,
    cursor: usize,
}

impl ScriptedRandom {
    /// An empty script always yields the low end of the range.
    pub fn new(values: impl Into<Vec<i32>>) -> Self {
        Self { values: values.into(), cursor: 0 }
    }

    /// Number of values drawn so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn next_int(&mut self, low: i32, high: i32) -> i32 {
        if self.values.is_empty() {
            return low;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(low, high)
    }
}
