//! Output formatting for the run summary.
//!
//! The word list owns stdout, so the summary always goes to a separate writer
//! (stderr in the binary).

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::TypoCorpusArgs;
use crate::corpus::CorpusStats;
use crate::error::Result;

/// Summary emitted by `--stats`.
#[derive(Debug, Serialize, Deserialize)]
pub struct RunReport {
    /// `None` when the source was seeded from the operating system.
    pub seed: Option<u64>,
    pub duration_ms: u64,
    #[serde(flatten)]
    pub stats: CorpusStats,
}

/// Write `report` as JSON, pretty-printed when `--pretty` was given.
pub fn write_report<W: Write>(report: &RunReport, args: &TypoCorpusArgs, mut out: W) -> Result<()> {
    if args.pretty {
        serde_json::to_writer_pretty(&mut out, report)?;
    } else {
        serde_json::to_writer(&mut out, report)?;
    }
    writeln!(out)?;
    Ok(())
}
