//! # typocorpus
//!
//! Builds word lists for spell-checker benchmarks from line-oriented corpus
//! text.
//!
//! ## Features
//!
//! - Unicode-aware vocabulary extraction with a fixed header/column convention
//! - Deterministic 10% sampling of the sorted vocabulary
//! - One synthetic typo (transposition, deletion, insertion) per hundred words
//! - Injectable random sources for reproducible corpora
//!
//! ```
//! use std::io::Cursor;
//! use typocorpus::corpus::build_corpus;
//! use typocorpus::spelling::RngSource;
//!
//! let input = "h\nh\nh\n1 apple banana\n";
//! let mut output = Vec::new();
//! let stats = build_corpus(Cursor::new(input), &mut output, RngSource::seeded(1)).unwrap();
//! // The leading "1" column is dropped
//! assert_eq!(stats.vocabulary_size, 2);
//! assert!(output.is_empty());
//! ```

pub mod cli;
pub mod corpus;
pub mod error;
pub mod spelling;

pub mod prelude {
    pub use crate::corpus::{CorpusBuilder, CorpusStats, Vocabulary, build_corpus};
    pub use crate::error::{Result, TypoCorpusError};
    pub use crate::spelling::{RandomSource, RngSource, ScriptedSource, misspell};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
