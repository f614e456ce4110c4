//! Corpus building: vocabulary extraction, rank sampling and output.
//!
//! Reading is eager, emission is lazy. [`CorpusBuilder::lines`] hands out an
//! iterator that misspells words only as it is advanced.

pub mod builder;
pub mod sampler;
pub mod vocabulary;

pub use builder::{CorpusBuilder, CorpusLines, CorpusStats, EditCounts, build_corpus};
pub use sampler::SampleAction;
pub use vocabulary::{HEADER_LINES, IngestStats, Vocabulary, is_word};
