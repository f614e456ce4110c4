//! Error types for the typocorpus library.
//!
//! All errors are represented by the [`TypoCorpusError`] enum. Malformed input
//! lines are never errors; only I/O failures and report serialization surface
//! here.
//!
//! # Examples
//!
//! ```
//! use std::io::Cursor;
//! use typocorpus::corpus::Vocabulary;
//! use typocorpus::error::TypoCorpusError;
//!
//! let invalid_utf8: &[u8] = b"h\nh\nh\n1 \xff\n";
//! match Vocabulary::from_reader(Cursor::new(invalid_utf8)) {
//!     Err(TypoCorpusError::Io(_)) => {}
//!     other => panic!("expected an I/O error, got {other:?}"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for typocorpus operations.
#[derive(Error, Debug)]
pub enum TypoCorpusError {
    /// I/O errors (reading the corpus, writing the word list)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with TypoCorpusError.
pub type Result<T> = std::result::Result<T, TypoCorpusError>;

impl TypoCorpusError {
    /// Whether this error is a closed downstream pipe.
    ///
    /// `typocorpus | head` closes stdout early; that ends the run, it does not fail it.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, TypoCorpusError::Io(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}
