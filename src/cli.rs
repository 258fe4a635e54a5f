use clap::{Parser as ClapParser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Text,
    /// One JSON document for the whole batch
    Json,
}

#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Course titles to decompose; reads one title per stdin line when omitted
    pub titles: Vec<String>,

    /// Path to a lexicon file to use instead of the discovery chain
    #[arg(short, long)]
    pub lexicon: Option<PathBuf>,

    /// Enable both acronym extraction and long-run splitting
    #[arg(short, long)]
    pub aggressive: bool,

    /// Lift Latin acronym runs (2+ uppercase letters) out as standalone terms
    #[arg(long)]
    pub acronyms: bool,

    /// Split unbroken Hangul runs of 6+ syllables at their midpoint
    #[arg(long = "split-long-runs")]
    pub split_long_runs: bool,

    /// Print the progressive-truncation retry ladder for each title
    #[arg(short, long)]
    pub fallback: bool,

    /// Append per-title compression figures and a batch summary
    #[arg(long)]
    pub stats: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Print only the reassembled query string, one per line
    #[arg(short, long)]
    pub quiet: bool,
}
