//! Turns a vocabulary into the sampled, partially misspelled word list.

use std::collections::btree_set;
use std::io::{BufRead, Write};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::corpus::sampler::{SAMPLE_INTERVAL, SampleAction};
use crate::corpus::vocabulary::{IngestStats, Vocabulary};
use crate::error::Result;
use crate::spelling::misspell::{EditKind, Misspelling};
use crate::spelling::random::RandomSource;

/// Per-kind counts of applied edits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditCounts {
    pub transpose: usize,
    pub delete: usize,
    pub insert: usize,
}

impl EditCounts {
    fn record(&mut self, kind: EditKind) {
        match kind {
            EditKind::Transpose => self.transpose += 1,
            EditKind::Delete => self.delete += 1,
            EditKind::Insert => self.insert += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.transpose + self.delete + self.insert
    }
}

/// Summary of one corpus run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusStats {
    pub ingest: IngestStats,
    pub vocabulary_size: usize,
    /// Words visited so far.
    pub ranked: usize,
    pub emitted: usize,
    pub verbatim: usize,
    pub misspelled: usize,
    pub edits: EditCounts,
}

/// Builds the output word list from a vocabulary and a random source.
pub struct CorpusBuilder<S> {
    vocabulary: Vocabulary,
    source: S,
}

impl<S: RandomSource> CorpusBuilder<S> {
    pub fn new(vocabulary: Vocabulary, source: S) -> Self {
        CorpusBuilder { vocabulary, source }
    }

    /// Read a corpus from `reader` and prepare a builder over its vocabulary.
    pub fn from_reader<R: BufRead>(reader: R, source: S) -> Result<Self> {
        let vocabulary = Vocabulary::from_reader(reader)?;
        info!(
            "Read {} lines, vocabulary of {} words",
            vocabulary.stats().lines_read,
            vocabulary.len()
        );
        Ok(CorpusBuilder::new(vocabulary, source))
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// The output lines, produced lazily in rank order.
    ///
    /// Misspellings draw from the source only as the iterator is advanced.
    pub fn lines(self) -> CorpusLines<S> {
        let vocabulary_size = self.vocabulary.len();
        let (words, ingest) = self.vocabulary.into_parts();
        CorpusLines {
            words: words.into_iter(),
            source: self.source,
            stats: CorpusStats {
                ingest,
                vocabulary_size,
                ..CorpusStats::default()
            },
        }
    }
}

/// Lazy iterator over output lines. See [`CorpusBuilder::lines`].
pub struct CorpusLines<S> {
    words: btree_set::IntoIter<String>,
    source: S,
    stats: CorpusStats,
}

impl<S> CorpusLines<S> {
    /// Counters for everything produced so far.
    pub fn stats(&self) -> CorpusStats {
        self.stats
    }

    /// Give back the random source, advanced by every draw made.
    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: RandomSource> Iterator for CorpusLines<S> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        for word in self.words.by_ref() {
            self.stats.ranked += 1;
            let rank = self.stats.ranked;
            match SampleAction::for_rank(rank) {
                SampleAction::Skip => continue,
                SampleAction::Keep => {
                    self.stats.emitted += 1;
                    self.stats.verbatim += 1;
                    return Some(word);
                }
                SampleAction::Misspell => {
                    let misspelling = Misspelling::apply(&word, &mut self.source);
                    debug!(
                        "rank {rank}: {} '{}' -> '{}' at {}",
                        misspelling.kind, word, misspelling.word, misspelling.position
                    );
                    self.stats.emitted += 1;
                    self.stats.misspelled += 1;
                    self.stats.edits.record(misspelling.kind);
                    return Some(misspelling.word);
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.words.len();
        let ranked = self.stats.ranked;
        let emitted = (ranked + remaining) / SAMPLE_INTERVAL - ranked / SAMPLE_INTERVAL;
        (emitted, Some(emitted))
    }
}

/// Run a whole corpus pass: read `reader`, write one word per line to `writer`.
pub fn build_corpus<R, W, S>(reader: R, mut writer: W, source: S) -> Result<CorpusStats>
where
    R: BufRead,
    W: Write,
    S: RandomSource,
{
    let mut lines = CorpusBuilder::from_reader(reader, source)?.lines();
    for line in lines.by_ref() {
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;

    let stats = lines.stats();
    info!(
        "Emitted {} words ({} misspelled)",
        stats.emitted, stats.misspelled
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spelling::random::ScriptedSource;
    use std::io::Cursor;

    fn body_vocabulary(count: usize) -> Vocabulary {
        let mut vocabulary = Vocabulary::new();
        for n in 0..count {
            vocabulary.ingest_line(&format!("0 {}", word_for(n)));
        }
        vocabulary
    }

    // Alphabetic words whose sort order matches `n`.
    fn word_for(n: usize) -> String {
        let letters = [n / 676, (n / 26) % 26, n % 26];
        letters
            .iter()
            .map(|&i| char::from(b'a' + i as u8))
            .collect()
    }

    #[test]
    fn test_small_vocabulary_emits_nothing() {
        let builder = CorpusBuilder::new(body_vocabulary(9), ScriptedSource::default());
        assert_eq!(builder.lines().count(), 0);
    }

    #[test]
    fn test_emits_every_tenth_word() {
        let builder = CorpusBuilder::new(body_vocabulary(35), ScriptedSource::default());
        let lines: Vec<String> = builder.lines().collect();
        assert_eq!(lines, vec![word_for(9), word_for(19), word_for(29)]);
    }

    #[test]
    fn test_hundredth_word_misspelled() {
        // Transpose the first two letters
        let source = ScriptedSource::new([1, 1]);
        let builder = CorpusBuilder::new(body_vocabulary(100), source);
        let mut lines = builder.lines();
        let output: Vec<String> = lines.by_ref().collect();

        assert_eq!(output.len(), 10);
        assert_eq!(word_for(99), "adv");
        assert_eq!(output[9], "dav");
        for (i, line) in output.iter().take(9).enumerate() {
            assert_eq!(line, &word_for(i * 10 + 9));
        }

        let stats = lines.stats();
        assert_eq!(stats.vocabulary_size, 100);
        assert_eq!(stats.verbatim, 9);
        assert_eq!(stats.misspelled, 1);
        assert_eq!(stats.edits.transpose, 1);
        assert_eq!(stats.edits.total(), 1);
        assert_eq!(lines.into_source().consumed(), 2);
    }

    #[test]
    fn test_source_only_drawn_on_demand() {
        let builder = CorpusBuilder::new(body_vocabulary(200), ScriptedSource::new([80, 0, 0]));
        let mut lines = builder.lines();
        // Nine verbatim words need no draws
        for _ in 0..9 {
            lines.next();
        }
        assert_eq!(lines.stats().misspelled, 0);
        let tenth = lines.next().unwrap();
        assert_eq!(tenth, format!("a{}", word_for(99)));
        assert_eq!(lines.into_source().consumed(), 3);
    }

    #[test]
    fn test_size_hint_is_exact() {
        let builder = CorpusBuilder::new(body_vocabulary(57), ScriptedSource::default());
        let mut lines = builder.lines();
        assert_eq!(lines.size_hint(), (5, Some(5)));
        lines.next();
        assert_eq!(lines.size_hint(), (4, Some(4)));
        assert_eq!(lines.count(), 4);
    }

    #[test]
    fn test_build_corpus_writes_lines() {
        let mut input = String::from("header\nheader\nheader\n");
        for n in 0..20 {
            input.push_str(&format!("{n} {}\n", word_for(n)));
        }
        let mut output = Vec::new();
        let stats = build_corpus(
            Cursor::new(input),
            &mut output,
            ScriptedSource::default(),
        )
        .unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "aaj\naat\n");
        assert_eq!(stats.emitted, 2);
        assert_eq!(stats.ingest.lines_read, 23);
    }
}
