//! Particle/connector boundary scan.
//!
//! A single left-to-right pass over the protected segment stream with
//! one accumulating buffer. The machine has two states: accumulating
//! (buffer non-empty, growing one character at a time) and flushing
//! (a delimiter, a compound segment, or end of input emits the buffer
//! and resets it). After every appended character the buffer's suffix
//! is checked against the marker lists; a match emits the remaining
//! prefix and the marker as two separate tokens. Particles survive
//! here as standalone tokens and are filtered during reassembly;
//! connectors survive for reattachment.

use crate::decompose::lexicon::Lexicon;
use crate::decompose::protect::Segment;

/// One candidate token produced by the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanToken {
    Word(String),
    /// A protected compound passed through unsplit.
    Compound(usize),
}

fn flush(buffer: &mut String, tokens: &mut Vec<ScanToken>) {
    if !buffer.is_empty() {
        tokens.push(ScanToken::Word(std::mem::take(buffer)));
    }
}

/// Scans the segment stream into candidate tokens.
///
/// Compound segments flush any pending buffer and pass through as
/// pre-made tokens, so the buffer never contains protected material.
/// The marker check applies the declared list order: with the default
/// tables `에` always fires before `에서` could complete, which is the
/// documented cost of positional first-match semantics.
pub fn scan(segments: &[Segment], lexicon: &Lexicon) -> Vec<ScanToken> {
    let mut tokens = Vec::new();
    let mut buffer = String::new();

    for segment in segments {
        match segment {
            Segment::Compound(index) => {
                flush(&mut buffer, &mut tokens);
                tokens.push(ScanToken::Compound(*index));
            }
            Segment::Literal(text) => {
                for ch in text.chars() {
                    if ch.is_whitespace() || ch == '.' || ch == ',' {
                        flush(&mut buffer, &mut tokens);
                        continue;
                    }
                    buffer.push(ch);
                    if let Some(marker) = lexicon.marker_suffix(&buffer) {
                        let prefix = buffer[..buffer.len() - marker.len()].to_string();
                        tokens.push(ScanToken::Word(prefix));
                        tokens.push(ScanToken::Word(marker.to_string()));
                        buffer.clear();
                    }
                }
            }
        }
    }
    flush(&mut buffer, &mut tokens);
    tokens
}
