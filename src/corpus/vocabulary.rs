//! Vocabulary extraction from line-oriented corpus text.
//!
//! The corpus format carries three metadata lines at the top and a leading
//! column (usually a line number) on every other line. Both are dropped; the
//! rest of each line is split on single spaces and the purely alphabetic
//! tokens are collected.

use std::collections::BTreeSet;
use std::io::BufRead;

use serde::{Deserialize, Serialize};
use unicode_general_category::{GeneralCategory, get_general_category};

use crate::error::Result;

/// Number of metadata lines at the top of every corpus.
pub const HEADER_LINES: usize = 3;

/// Rudimentary definition of a word: non-empty and made of letters only.
///
/// A letter is any char in the Unicode `L*` general categories, so `Zürich`
/// is a word while `w1`, `don't`, `Ⅻ` (a letter number), `ⓐb` (a symbol) and
/// the empty token left by a double space are not.
pub fn is_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(is_letter)
}

fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Counters gathered while reading a corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestStats {
    /// Every line read, headers included.
    pub lines_read: usize,
    pub header_lines_skipped: usize,
    /// Candidate tokens seen after the leading column was dropped.
    pub tokens_seen: usize,
    /// Candidate tokens that failed [`is_word`].
    pub tokens_rejected: usize,
}

/// The deduplicated set of words found in a corpus, kept in code-point order.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: BTreeSet<String>,
    stats: IngestStats,
}

impl Vocabulary {
    /// Create an empty vocabulary.
    pub fn new() -> Self {
        Vocabulary::default()
    }

    /// Build a vocabulary from corpus lines, skipping the header.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocabulary = Vocabulary::new();
        for line in lines {
            vocabulary.ingest_corpus_line(line.as_ref());
        }
        vocabulary
    }

    /// Read a whole corpus from `reader`, skipping the header.
    ///
    /// Fails only when the reader does (including on invalid UTF-8).
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut vocabulary = Vocabulary::new();
        for line in reader.lines() {
            vocabulary.ingest_corpus_line(&line?);
        }
        Ok(vocabulary)
    }

    fn ingest_corpus_line(&mut self, line: &str) {
        self.stats.lines_read += 1;
        if self.stats.lines_read <= HEADER_LINES {
            self.stats.header_lines_skipped += 1;
            return;
        }
        self.ingest_line(line);
    }

    /// Add the words of one body line. The first field is always dropped.
    ///
    /// Lines with nothing after the first field contribute no words.
    pub fn ingest_line(&mut self, line: &str) {
        for token in line.split(' ').skip(1) {
            self.stats.tokens_seen += 1;
            if is_word(token) {
                if !self.words.contains(token) {
                    self.words.insert(token.to_string());
                }
            } else {
                self.stats.tokens_rejected += 1;
            }
        }
    }

    /// Number of unique words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Words in ascending code-point order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn stats(&self) -> IngestStats {
        self.stats
    }

    pub(crate) fn into_parts(self) -> (BTreeSet<String>, IngestStats) {
        (self.words, self.stats)
    }
}
