//! Command line argument parsing for the typocorpus CLI using clap.

use clap::Parser;

/// typocorpus - sample a corpus vocabulary and sprinkle in misspellings
///
/// Reads corpus text on stdin and writes every tenth word of the sorted
/// vocabulary to stdout; every hundredth word carries one random typo.
#[derive(Parser, Debug, Clone)]
#[command(name = "typocorpus")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TypoCorpusArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Seed for the random source; omit for a different corpus on every run
    #[arg(short, long, env = "TYPOCORPUS_SEED")]
    pub seed: Option<u64>,

    /// Print a JSON summary of the run to stderr
    #[arg(long)]
    pub stats: bool,

    /// Pretty-print the JSON summary
    #[arg(long, requires = "stats")]
    pub pretty: bool,
}

impl TypoCorpusArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}
