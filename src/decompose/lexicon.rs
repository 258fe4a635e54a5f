//! Word tables driving the decomposition pipeline.
//!
//! A [`Lexicon`] bundles the compound dictionary (multi-character domain
//! terms that must survive decomposition intact), the particle and
//! connector marker lists, and the noise-symbol set. The tables are data,
//! not behavior: swapping them changes what gets protected and where
//! splits happen without touching any pipeline code.

use aho_corasick::AhoCorasick;
use std::collections::HashSet;
use std::str::FromStr;
use thiserror::Error;

/// Compound nouns from the education-catalog domain, in declaration
/// order. Order is significant: overlapping entries are resolved
/// first-match-wins (see [`CompoundOrder`]).
pub(crate) static DEFAULT_COMPOUNDS: &[&str] = &[
    "사회복지",
    "보건복지",
    "기초생활",
    "긴급복지",
    "사례관리",
    "역량평가",
    "문제해결",
    "동기부여",
    "리더십",
    "국가정책",
    "복지서비스",
    "복지정책",
    "저작권",
    "공문서",
    "기초연금",
    "임금보장",
    "생활보장",
    "북토크",
    "명강사",
    "공개강의",
    "상담기법",
    "사회보장",
    "공무원",
];

/// Grammatical case markers dropped from final output.
pub(crate) static DEFAULT_PARTICLES: &[&str] = &[
    "의", "을", "를", "이", "가", "와", "과", "에", "에서", "로", "으로",
];

/// Purpose/topic markers fused with the word that follows them.
pub(crate) static DEFAULT_CONNECTORS: &[&str] = &["위한", "통해", "통한", "대한", "관한"];

/// Decorative punctuation replaced with spaces during normalization.
pub(crate) static DEFAULT_NOISE_SYMBOLS: &str = "!@#$%^&*_+=-";

/// Policy for the order in which compound entries are matched.
///
/// Overlapping dictionary entries are resolved by whichever entry is
/// tried first, not by longest match. `Declaration` keeps the table
/// order as loaded; `LongestFirst` stable-sorts by descending character
/// count for callers that want the longer of two overlapping entries to
/// win without reordering their table by hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompoundOrder {
    #[default]
    Declaration,
    LongestFirst,
}

impl FromStr for CompoundOrder {
    type Err = LexiconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "declaration" => Ok(CompoundOrder::Declaration),
            "longest-first" => Ok(CompoundOrder::LongestFirst),
            other => Err(LexiconError::UnknownOrder(other.to_string())),
        }
    }
}

/// Validation failures raised when building a [`Lexicon`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LexiconError {
    /// One-character compounds cannot survive the output length filter.
    #[error("compound entry {0:?} must be at least two characters")]
    CompoundTooShort(String),
    #[error("compound entry {0:?} contains whitespace")]
    CompoundWhitespace(String),
    #[error("particle or connector list contains an empty entry")]
    EmptyMarker,
    #[error("marker entry {0:?} contains whitespace")]
    MarkerWhitespace(String),
    #[error("unknown compound order {0:?}, expected \"declaration\" or \"longest-first\"")]
    UnknownOrder(String),
}

/// Immutable word tables plus the matching machinery derived from them.
///
/// Construction goes through [`LexiconBuilder`], which validates entries
/// and precomputes the match order, the multi-pattern prescan automaton,
/// and the marker suffix index. A built lexicon is read-only and `Sync`;
/// one instance can back any number of concurrent decompositions.
#[derive(Debug)]
pub struct Lexicon {
    compounds: Vec<String>,
    particles: Vec<String>,
    connectors: Vec<String>,
    noise_symbols: Vec<char>,
    order: CompoundOrder,
    /// Compound indices in effective match order.
    match_order: Vec<usize>,
    /// Presence prescan over the whole dictionary. `None` when the
    /// automaton could not be built; matching then skips the prescan.
    prescan: Option<AhoCorasick>,
    /// Sorted final characters of every marker, gating the per-character
    /// suffix check in the scanner.
    marker_tails: Vec<char>,
}

impl Lexicon {
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::new()
    }

    pub fn compounds(&self) -> &[String] {
        &self.compounds
    }

    pub fn particles(&self) -> &[String] {
        &self.particles
    }

    pub fn connectors(&self) -> &[String] {
        &self.connectors
    }

    pub fn noise_symbols(&self) -> &[char] {
        &self.noise_symbols
    }

    pub fn order(&self) -> CompoundOrder {
        self.order
    }

    /// The compound string behind a protected segment index.
    pub fn compound(&self, index: usize) -> Option<&str> {
        self.compounds.get(index).map(String::as_str)
    }

    pub fn is_particle(&self, token: &str) -> bool {
        self.particles.iter().any(|p| p == token)
    }

    pub fn is_connector(&self, token: &str) -> bool {
        self.connectors.iter().any(|c| c == token)
    }

    pub fn is_noise(&self, ch: char) -> bool {
        self.noise_symbols.contains(&ch)
    }

    /// Compound indices in the order the protector must try them.
    pub(crate) fn match_order(&self) -> &[usize] {
        &self.match_order
    }

    pub(crate) fn prescan(&self) -> Option<&AhoCorasick> {
        self.prescan.as_ref()
    }

    /// First particle or connector, in declared list order, that is a
    /// proper suffix of `buffer` (the remaining prefix must be
    /// non-empty). Particles are tried before connectors. The sorted
    /// tail-character set rejects most buffers without touching the
    /// lists at all.
    pub fn marker_suffix(&self, buffer: &str) -> Option<&str> {
        let last = buffer.chars().next_back()?;
        if self.marker_tails.binary_search(&last).is_err() {
            return None;
        }
        self.particles
            .iter()
            .chain(self.connectors.iter())
            .map(String::as_str)
            .find(|marker| buffer.len() > marker.len() && buffer.ends_with(marker))
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        LexiconBuilder::with_defaults()
            .build()
            .expect("built-in tables are valid")
    }
}

/// Builder collecting word tables before validation.
///
/// `new()` starts empty for synthetic dictionaries in tests;
/// `with_defaults()` starts from the embedded tables. The list methods
/// append; duplicates are removed at build time, first occurrence wins.
#[derive(Debug, Default)]
pub struct LexiconBuilder {
    compounds: Vec<String>,
    particles: Vec<String>,
    connectors: Vec<String>,
    noise_symbols: Option<Vec<char>>,
    order: CompoundOrder,
}

impl LexiconBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        Self::new()
            .compounds(DEFAULT_COMPOUNDS.iter().copied())
            .particles(DEFAULT_PARTICLES.iter().copied())
            .connectors(DEFAULT_CONNECTORS.iter().copied())
            .noise_symbols(DEFAULT_NOISE_SYMBOLS)
    }

    pub fn compounds<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.compounds.extend(entries.into_iter().map(Into::into));
        self
    }

    pub fn particles<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.particles.extend(entries.into_iter().map(Into::into));
        self
    }

    pub fn connectors<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.connectors.extend(entries.into_iter().map(Into::into));
        self
    }

    /// Replaces the noise-symbol set with the characters of `symbols`.
    pub fn noise_symbols(mut self, symbols: &str) -> Self {
        self.noise_symbols = Some(symbols.chars().collect());
        self
    }

    pub fn compound_order(mut self, order: CompoundOrder) -> Self {
        self.order = order;
        self
    }

    pub fn build(self) -> Result<Lexicon, LexiconError> {
        for compound in &self.compounds {
            if compound.chars().count() < 2 {
                return Err(LexiconError::CompoundTooShort(compound.clone()));
            }
            if compound.chars().any(char::is_whitespace) {
                return Err(LexiconError::CompoundWhitespace(compound.clone()));
            }
        }
        for marker in self.particles.iter().chain(self.connectors.iter()) {
            if marker.is_empty() {
                return Err(LexiconError::EmptyMarker);
            }
            if marker.chars().any(char::is_whitespace) {
                return Err(LexiconError::MarkerWhitespace(marker.clone()));
            }
        }

        let compounds = dedup_preserving_order(self.compounds);
        let particles = dedup_preserving_order(self.particles);
        let connectors = dedup_preserving_order(self.connectors);

        let mut match_order: Vec<usize> = (0..compounds.len()).collect();
        if self.order == CompoundOrder::LongestFirst {
            match_order.sort_by_key(|&i| std::cmp::Reverse(compounds[i].chars().count()));
        }

        let prescan = AhoCorasick::new(&compounds).ok();

        let mut marker_tails: Vec<char> = particles
            .iter()
            .chain(connectors.iter())
            .filter_map(|m| m.chars().next_back())
            .collect();
        marker_tails.sort_unstable();
        marker_tails.dedup();

        Ok(Lexicon {
            compounds,
            particles,
            connectors,
            noise_symbols: self
                .noise_symbols
                .unwrap_or_else(|| DEFAULT_NOISE_SYMBOLS.chars().collect()),
            order: self.order,
            match_order,
            prescan,
            marker_tails,
        })
    }
}

fn dedup_preserving_order(entries: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|e| seen.insert(e.clone()))
        .collect()
}
