//! Compound protection.
//!
//! Replaces every dictionary-compound occurrence with a tagged segment
//! so the boundary scanner can never split or re-match protected text.
//! The segment form carries the compound's table index instead of a
//! sentinel substring, which makes restoration structurally reversible:
//! no real text can collide with it, and it cannot itself contain scan
//! delimiters.

use crate::decompose::lexicon::Lexicon;
use memchr::memmem;

/// One element of the protected intermediate representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Free text, still subject to boundary scanning.
    Literal(String),
    /// A protected compound, addressed by its lexicon table index.
    Compound(usize),
}

/// Splits `text` into literal and compound segments.
///
/// Entries are tried in the lexicon's match order; for each entry every
/// occurrence across the current literal segments is replaced, left to
/// right, non-overlapping. An entry tried earlier therefore wins any
/// span it shares with a later one. The prescan automaton rules out
/// absent entries in one pass before the per-entry substring search
/// runs; compound segments are opaque to later entries.
pub fn protect(text: &str, lexicon: &Lexicon) -> Vec<Segment> {
    if text.is_empty() {
        return Vec::new();
    }
    let mut segments = vec![Segment::Literal(text.to_string())];

    let present = lexicon.prescan().map(|automaton| {
        let mut present = vec![false; lexicon.compounds().len()];
        for m in automaton.find_overlapping_iter(text) {
            present[m.pattern().as_usize()] = true;
        }
        present
    });

    for &idx in lexicon.match_order() {
        if let Some(present) = &present {
            if !present[idx] {
                continue;
            }
        }
        if let Some(compound) = lexicon.compound(idx) {
            segments = split_around(segments, compound, idx);
        }
    }
    segments
}

fn split_around(segments: Vec<Segment>, needle: &str, index: usize) -> Vec<Segment> {
    let finder = memmem::Finder::new(needle.as_bytes());
    let mut out = Vec::with_capacity(segments.len());
    for segment in segments {
        let text = match segment {
            Segment::Literal(text) => text,
            compound => {
                out.push(compound);
                continue;
            }
        };
        let mut start = 0;
        while let Some(pos) = finder.find(&text.as_bytes()[start..]) {
            let at = start + pos;
            if at > start {
                out.push(Segment::Literal(text[start..at].to_string()));
            }
            out.push(Segment::Compound(index));
            start = at + needle.len();
        }
        if start == 0 {
            out.push(Segment::Literal(text));
        } else if start < text.len() {
            out.push(Segment::Literal(text[start..].to_string()));
        }
    }
    out
}
