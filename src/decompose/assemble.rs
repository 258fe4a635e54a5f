//! Reassembly of scanned tokens into the final term list.
//!
//! Stages, in order: restore compound tokens to their dictionary
//! strings, fuse each connector with the token that follows it, drop
//! bare particles, drop tokens of trimmed length one or less, dedup
//! preserving first-seen order, and fall back to the whole original
//! title when everything else was filtered away.

use crate::decompose::lexicon::Lexicon;
use crate::decompose::scanner::ScanToken;
use std::collections::HashSet;

/// Builds the final ordered term list.
///
/// A compound token whose index is unknown to `lexicon` is dropped
/// rather than leaked; that can only happen when scan tokens are
/// replayed against a different lexicon. A connector with no following
/// token is dropped too, so a connector never stands alone in the
/// output. The fallback keeps non-empty output for non-empty input:
/// the trimmed original title, or the original as-is when trimming
/// would leave nothing.
pub fn assemble(tokens: Vec<ScanToken>, lexicon: &Lexicon, original: &str) -> Vec<String> {
    let restored: Vec<String> = tokens
        .into_iter()
        .filter_map(|token| match token {
            ScanToken::Word(word) => Some(word),
            ScanToken::Compound(index) => lexicon.compound(index).map(str::to_string),
        })
        .collect();

    let mut fused = Vec::with_capacity(restored.len());
    let mut iter = restored.into_iter();
    while let Some(token) = iter.next() {
        if lexicon.is_connector(&token) {
            if let Some(next) = iter.next() {
                fused.push(format!("{token} {next}"));
            }
            continue;
        }
        fused.push(token);
    }

    let mut seen = HashSet::new();
    let terms: Vec<String> = fused
        .into_iter()
        .filter(|t| !lexicon.is_particle(t))
        .filter(|t| t.trim().chars().count() > 1)
        .filter(|t| seen.insert(t.clone()))
        .collect();

    if terms.is_empty() {
        let trimmed = original.trim();
        if !trimmed.is_empty() {
            return vec![trimmed.to_string()];
        }
        if !original.is_empty() {
            return vec![original.to_string()];
        }
        return Vec::new();
    }
    terms
}
