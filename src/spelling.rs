//! Synthetic misspelling utilities.
//!
//! Spell-checker benchmarks need realistic typos with known corrections. This
//! module produces them with a single random character edit per word, drawing
//! from an injectable [`random::RandomSource`].

pub mod misspell;
pub mod random;

pub use misspell::{EditKind, Misspelling, misspell};
pub use random::{RandomSource, RngSource, ScriptedSource};
