//! Lexicon file discovery and merging.
//!
//! The word tables are configuration, not code. A lexicon file is a
//! partial JSON document; files are discovered at several levels and
//! merged field-wise, later levels winning:
//!
//! 1. Built-in defaults
//! 2. Global: `~/.termcut/lexicon.json`
//! 3. Project: `./.termcut/lexicon.json`, then
//!    `./.termcut/lexicon.local.json`
//! 4. `TERMCUT_LEXICON` environment variable path (highest precedence)
//!
//! By default the list fields extend the built-in tables (appended
//! after them, so built-in entries keep first-match priority); with
//! `"replace": true` a present list field replaces its default
//! outright.

use crate::decompose::lexicon::{
    CompoundOrder, Lexicon, LexiconBuilder, DEFAULT_COMPOUNDS, DEFAULT_CONNECTORS,
    DEFAULT_PARTICLES,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// One lexicon file. All fields are optional to support partial
/// documents and merging.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LexiconFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compounds: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub particles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connectors: Option<Vec<String>>,
    /// Noise symbols as one string of characters. Always replaces the
    /// default set when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noise_symbols: Option<String>,
    /// `"declaration"` or `"longest-first"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compound_order: Option<String>,
    /// Replace the default word lists instead of extending them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace: Option<bool>,
}

impl LexiconFile {
    /// Loads and merges every discovered lexicon file into a built
    /// lexicon. With no files present this is the built-in lexicon.
    pub fn load() -> Result<Lexicon> {
        let mut merged = LexiconFile::default();
        for path in Self::lexicon_paths() {
            match fs::metadata(&path) {
                Ok(metadata) if metadata.is_file() => {
                    let file = Self::load_from_file(&path)?;
                    merged = Self::merge(merged, file);
                }
                _ => continue,
            }
        }
        merged.resolve()
    }

    /// Loads exactly one lexicon file, bypassing discovery. The file
    /// must exist and parse.
    pub fn load_from(path: &Path) -> Result<Lexicon> {
        Self::load_from_file(path)?.resolve()
    }

    /// Configuration file paths in priority order, lowest first.
    fn lexicon_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // Global: ~/.termcut/lexicon.json
        if let Ok(home) = env::var("HOME") {
            paths.push(PathBuf::from(home).join(".termcut").join("lexicon.json"));
        } else if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".termcut").join("lexicon.json"));
        }

        // Project
        paths.push(PathBuf::from(".termcut").join("lexicon.json"));
        paths.push(PathBuf::from(".termcut").join("lexicon.local.json"));

        // Explicit path via environment variable, highest precedence
        if let Ok(custom) = env::var("TERMCUT_LEXICON") {
            paths.push(PathBuf::from(custom));
        }

        paths
    }

    fn load_from_file(path: &Path) -> Result<LexiconFile> {
        // Read raw bytes to handle a potential UTF-8 BOM
        let bytes = fs::read(path).context(format!("Failed to read lexicon file: {path:?}"))?;
        let content = if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
            &bytes[3..]
        } else {
            &bytes[..]
        };
        serde_json::from_slice(content).context(format!("Failed to parse lexicon file: {path:?}"))
    }

    /// Field-wise merge, `other` taking precedence.
    fn merge(mut base: LexiconFile, other: LexiconFile) -> LexiconFile {
        if other.compounds.is_some() {
            base.compounds = other.compounds;
        }
        if other.particles.is_some() {
            base.particles = other.particles;
        }
        if other.connectors.is_some() {
            base.connectors = other.connectors;
        }
        if other.noise_symbols.is_some() {
            base.noise_symbols = other.noise_symbols;
        }
        if other.compound_order.is_some() {
            base.compound_order = other.compound_order;
        }
        if other.replace.is_some() {
            base.replace = other.replace;
        }
        base
    }

    /// Applies this document over the built-in defaults and validates.
    fn resolve(self) -> Result<Lexicon> {
        let replace = self.replace.unwrap_or(false);

        let mut builder = LexiconBuilder::new()
            .compounds(list(self.compounds, DEFAULT_COMPOUNDS, replace))
            .particles(list(self.particles, DEFAULT_PARTICLES, replace))
            .connectors(list(self.connectors, DEFAULT_CONNECTORS, replace));
        if let Some(symbols) = &self.noise_symbols {
            builder = builder.noise_symbols(symbols);
        }
        if let Some(order) = &self.compound_order {
            builder = builder.compound_order(order.parse::<CompoundOrder>()?);
        }
        builder.build().context("Invalid lexicon configuration")
    }
}

fn list(field: Option<Vec<String>>, defaults: &[&str], replace: bool) -> Vec<String> {
    match field {
        None => defaults.iter().map(|s| s.to_string()).collect(),
        Some(entries) if replace => entries,
        Some(entries) => defaults
            .iter()
            .map(|s| s.to_string())
            .chain(entries)
            .collect(),
    }
}
