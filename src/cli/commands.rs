//! Command implementation for the typocorpus CLI.

use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::time::{Duration, Instant};

use log::debug;

use crate::cli::args::TypoCorpusArgs;
use crate::cli::output::{RunReport, write_report};
use crate::corpus::{CorpusStats, build_corpus};
use crate::error::Result;
use crate::spelling::random::RngSource;

/// Execute the CLI against the process's standard streams.
pub fn execute_command(args: TypoCorpusArgs) -> Result<CorpusStats> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();

    run(
        &args,
        BufReader::new(stdin.lock()),
        BufWriter::new(stdout.lock()),
        stderr.lock(),
    )
}

/// Read the corpus from `input`, write the word list to `output` and, with
/// `--stats`, the JSON summary to `report`.
pub fn run<R, W, E>(args: &TypoCorpusArgs, input: R, output: W, report: E) -> Result<CorpusStats>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    match args.seed {
        Some(seed) => debug!("Seeding random source with {seed}"),
        None => debug!("Seeding random source from the operating system"),
    }
    let source = RngSource::from_seed_option(args.seed);

    let start_time = Instant::now();
    let stats = build_corpus(input, output, source)?;
    let duration = start_time.elapsed();

    if args.stats {
        write_report(
            &RunReport {
                seed: args.seed,
                duration_ms: saturating_millis(duration),
                stats,
            },
            args,
            report,
        )?;
    }

    Ok(stats)
}

/// Whole milliseconds in `duration`, saturating at `u64::MAX`.
fn saturating_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
