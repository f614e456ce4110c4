//! Random sources for synthetic misspellings.
//!
//! The misspeller never touches global random state. Every draw goes through a
//! [`RandomSource`], so callers choose between an OS-seeded generator, a fixed
//! seed for reproducible corpora, or a scripted sequence in tests.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform integer draws over inclusive ranges.
pub trait RandomSource {
    /// Draw a uniform integer in `low..=high`.
    ///
    /// Callers guarantee `low <= high`.
    fn draw(&mut self, low: usize, high: usize) -> usize;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn draw(&mut self, low: usize, high: usize) -> usize {
        (**self).draw(low, high)
    }
}

/// A [`RandomSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        RngSource { rng }
    }
}

impl RngSource<StdRng> {
    /// A reproducible source: the same seed always yields the same corpus.
    pub fn seeded(seed: u64) -> Self {
        RngSource::new(StdRng::seed_from_u64(seed))
    }

    /// A non-deterministic source seeded from the operating system.
    pub fn from_os() -> Self {
        RngSource::new(StdRng::from_os_rng())
    }

    /// Seeded when `seed` is given, OS-seeded otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_os(),
        }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn draw(&mut self, low: usize, high: usize) -> usize {
        self.rng.random_range(low..=high)
    }
}

/// Replays a fixed sequence of draws.
///
/// Each scripted value is clamped into the requested range. Once the script
/// runs out, every draw returns the range's lower bound.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: VecDeque<usize>,
    consumed: usize,
}

impl ScriptedSource {
    pub fn new<I: IntoIterator<Item = usize>>(values: I) -> Self {
        ScriptedSource {
            values: values.into_iter().collect(),
            consumed: 0,
        }
    }

    /// Number of draws made so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Number of scripted values not yet drawn.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedSource {
    fn draw(&mut self, low: usize, high: usize) -> usize {
        self.consumed += 1;
        match self.values.pop_front() {
            Some(value) => value.clamp(low, high),
            None => low,
        }
    }
}
