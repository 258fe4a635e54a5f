//! Termcut decomposes Korean course-catalog titles into search terms.
//!
//! Catalog titles pack compound nouns, grammatical particles, and
//! decorative punctuation into one string, which makes them poor search
//! queries as-is. This crate provides a library interface to the
//! decomposition pipeline: protected compound matching, particle and
//! connector splitting, and reassembly into a deduplicated term list,
//! plus the progressive-truncation fallback ladder for retrying
//! searches that return nothing.

pub mod analysis;
pub mod config;
pub mod decompose;

// Re-export commonly used types for convenience
pub use analysis::{analyze, summarize, BatchSummary, Improvement};
pub use config::LexiconFile;
pub use decompose::{
    decompose, fallback_queries, search_with_fallback, CompoundOrder, DecomposeOptions,
    Decomposer, FallbackHit, Lexicon, LexiconBuilder, LexiconError, TermList,
};

// Tests are defined in their respective modules with #[cfg(test)]
