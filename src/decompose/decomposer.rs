//! Pipeline orchestration.
//!
//! A [`Decomposer`] owns a lexicon and a strictness profile and runs
//! the full pipeline: normalize, optionally lift acronyms, protect
//! compounds, scan boundaries, optionally split long Hangul runs, and
//! reassemble. The whole path is pure and infallible; every edge case
//! resolves to a defined fallback instead of an error.

use crate::decompose::assemble::assemble;
use crate::decompose::lexicon::Lexicon;
use crate::decompose::normalize::{is_hangul_syllable, lift_acronyms, normalize};
use crate::decompose::protect::protect;
use crate::decompose::scanner::{scan, ScanToken};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Strictness knobs for the pipeline.
///
/// The defaults match the conservative decomposition; the two flags
/// enable the aggressive splitting heuristics. Non-emptiness, dedup,
/// the length filter, and compound preservation hold under every
/// profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecomposeOptions {
    /// Lift runs of two or more uppercase ASCII letters out of the
    /// text and append them as trailing tokens.
    pub extract_acronyms: bool,
    /// Split residual all-Hangul tokens of six or more syllables at
    /// their midpoint.
    pub split_long_runs: bool,
}

impl DecomposeOptions {
    /// Every splitting heuristic enabled.
    pub fn aggressive() -> Self {
        DecomposeOptions {
            extract_acronyms: true,
            split_long_runs: true,
        }
    }
}

/// Ordered, deduplicated search terms for one title.
///
/// Invariants: no duplicate terms (first occurrence wins), no term of
/// trimmed length one or less except the whole-string fallback, and
/// never empty for non-empty input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TermList {
    terms: Vec<String>,
}

impl TermList {
    pub(crate) fn from_terms(terms: Vec<String>) -> Self {
        TermList { terms }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn into_terms(self) -> Vec<String> {
        self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.terms.iter()
    }

    /// The space-joined query string handed to a search interface.
    pub fn query(&self) -> String {
        self.terms.join(" ")
    }
}

impl fmt::Display for TermList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.query())
    }
}

impl<'a> IntoIterator for &'a TermList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

/// The decomposition engine.
#[derive(Debug, Default)]
pub struct Decomposer {
    lexicon: Lexicon,
    options: DecomposeOptions,
}

impl Decomposer {
    /// Engine with the built-in lexicon and the conservative profile.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Decomposer {
            lexicon,
            options: DecomposeOptions::default(),
        }
    }

    pub fn options(mut self, options: DecomposeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Decomposes one raw title into search terms.
    pub fn decompose(&self, title: &str) -> TermList {
        let normalized = normalize(title, &self.lexicon);
        debug!("normalized {:?} -> {:?}", title, normalized);

        let (scannable, acronyms) = if self.options.extract_acronyms {
            lift_acronyms(&normalized)
        } else {
            (normalized, Vec::new())
        };

        let segments = protect(&scannable, &self.lexicon);
        let mut tokens = scan(&segments, &self.lexicon);
        if self.options.split_long_runs {
            tokens = split_long_hangul_runs(tokens);
        }
        tokens.extend(acronyms.into_iter().map(ScanToken::Word));

        let terms = assemble(tokens, &self.lexicon, title);
        debug!("assembled {:?} -> {:?}", title, terms);
        TermList::from_terms(terms)
    }

    /// Shorthand for the space-joined query of [`decompose`].
    ///
    /// [`decompose`]: Decomposer::decompose
    pub fn query(&self, title: &str) -> String {
        self.decompose(title).query()
    }
}

static DEFAULT_DECOMPOSER: Lazy<Decomposer> = Lazy::new(Decomposer::new);

/// Decomposes with the built-in lexicon and the conservative profile.
pub fn decompose(title: &str) -> TermList {
    DEFAULT_DECOMPOSER.decompose(title)
}

/// Last-resort AND-match aid: a residual unbroken Hangul run of six or
/// more syllables carries no split point the scan could find, so it is
/// cut at its character midpoint. Compound tokens are never touched.
fn split_long_hangul_runs(tokens: Vec<ScanToken>) -> Vec<ScanToken> {
    let mut out = Vec::with_capacity(tokens.len());
    for token in tokens {
        match token {
            ScanToken::Word(word) if is_long_hangul_run(&word) => {
                let count = word.chars().count();
                let mid = word
                    .char_indices()
                    .nth(count / 2)
                    .map_or(word.len(), |(i, _)| i);
                out.push(ScanToken::Word(word[..mid].to_string()));
                out.push(ScanToken::Word(word[mid..].to_string()));
            }
            token => out.push(token),
        }
    }
    out
}

fn is_long_hangul_run(word: &str) -> bool {
    word.chars().count() >= 6 && word.chars().all(is_hangul_syllable)
}
