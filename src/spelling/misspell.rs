//! Synthetic misspellings: one random character-level edit per word.
//!
//! A roll in `1..=100` selects the edit. Rolls up to 33 transpose two adjacent
//! characters, rolls up to 66 delete one, anything higher inserts a lowercase
//! ASCII letter. Words of a single character cannot be transposed or shortened,
//! so they always receive an insertion.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::spelling::random::RandomSource;

/// Letters available for insertion.
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Highest roll that selects a transposition.
pub const TRANSPOSE_MAX_ROLL: usize = 33;

/// Highest roll that selects a deletion.
pub const DELETE_MAX_ROLL: usize = 66;

/// The kind of edit applied to a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditKind {
    /// Swap two adjacent characters.
    Transpose,
    /// Remove one character.
    Delete,
    /// Add one lowercase ASCII letter.
    Insert,
}

impl fmt::Display for EditKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EditKind::Transpose => "transpose",
            EditKind::Delete => "delete",
            EditKind::Insert => "insert",
        };
        f.write_str(name)
    }
}

/// A misspelled word together with the edit that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Misspelling {
    pub kind: EditKind,
    /// Character position the edit was applied at.
    pub position: usize,
    pub word: String,
}

impl Misspelling {
    /// Apply one random edit to `word`.
    ///
    /// Positions and lengths count `char`s, so non-ASCII letters are never split.
    pub fn apply<S: RandomSource>(word: &str, source: &mut S) -> Misspelling {
        let mut chars: Vec<char> = word.chars().collect();
        let len = chars.len();
        let roll = source.draw(1, 100);

        if roll <= TRANSPOSE_MAX_ROLL && len > 1 {
            let i = source.draw(1, len - 1);
            chars.swap(i - 1, i);
            Misspelling {
                kind: EditKind::Transpose,
                position: i - 1,
                word: chars.into_iter().collect(),
            }
        } else if roll <= DELETE_MAX_ROLL && len > 1 {
            let i = source.draw(0, len - 1);
            chars.remove(i);
            Misspelling {
                kind: EditKind::Delete,
                position: i,
                word: chars.into_iter().collect(),
            }
        } else {
            let i = source.draw(0, len);
            let k = source.draw(0, ALPHABET.len() - 1);
            chars.insert(i, char::from(ALPHABET[k]));
            Misspelling {
                kind: EditKind::Insert,
                position: i,
                word: chars.into_iter().collect(),
            }
        }
    }
}

/// Apply one random edit to `word` and return the result.
pub fn misspell<S: RandomSource>(word: &str, source: &mut S) -> String {
    Misspelling::apply(word, source).word
}
