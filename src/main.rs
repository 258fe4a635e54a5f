use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use colored::*;
use rayon::prelude::*;
use serde::Serialize;
use std::io::{self, BufRead};
use tracing::Level;

mod cli;

use cli::{Args, OutputFormat};
use termcut::analysis::{analyze, summarize, BatchSummary, Improvement};
use termcut::config::LexiconFile;
use termcut::decompose::{fallback_queries, DecomposeOptions, Decomposer};

/// Everything printed for one title, in both output formats.
#[derive(Debug, Serialize)]
struct Report {
    title: String,
    terms: Vec<String>,
    query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fallback: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<Improvement>,
}

#[derive(Debug, Serialize)]
struct BatchReport {
    reports: Vec<Report>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<BatchSummary>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Keep log output off stdout so piped queries stay clean
    let log_level = if std::env::var("DEBUG").unwrap_or_default() == "1" {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let lexicon = match &args.lexicon {
        Some(path) => LexiconFile::load_from(path)?,
        None => LexiconFile::load()?,
    };

    let options = DecomposeOptions {
        extract_acronyms: args.aggressive || args.acronyms,
        split_long_runs: args.aggressive || args.split_long_runs,
    };
    let decomposer = Decomposer::with_lexicon(lexicon).options(options);

    let titles = if args.titles.is_empty() {
        read_stdin_titles()?
    } else {
        args.titles.clone()
    };

    // Titles are independent; fan them across the pool. Collecting from
    // the indexed parallel iterator preserves input order.
    let reports: Vec<Report> = titles
        .par_iter()
        .map(|title| build_report(&decomposer, title, &args))
        .collect();

    let summary = if args.stats {
        let improvements: Vec<Improvement> = reports
            .iter()
            .filter_map(|report| report.stats.clone())
            .collect();
        Some(summarize(&improvements))
    } else {
        None
    };

    if args.quiet {
        for report in &reports {
            println!("{}", report.query);
        }
    } else {
        match args.format {
            OutputFormat::Json => {
                let document = BatchReport { reports, summary };
                println!("{}", serde_json::to_string_pretty(&document)?);
            }
            OutputFormat::Text => print_text(&reports, summary.as_ref()),
        }
    }

    Ok(())
}

fn build_report(decomposer: &Decomposer, title: &str, args: &Args) -> Report {
    let terms = decomposer.decompose(title);
    let fallback = if args.fallback {
        Some(fallback_queries(&terms))
    } else {
        None
    };
    let stats = if args.stats {
        Some(analyze(title, &terms))
    } else {
        None
    };
    Report {
        title: title.to_string(),
        query: terms.query(),
        terms: terms.into_terms(),
        fallback,
        stats,
    }
}

fn read_stdin_titles() -> Result<Vec<String>> {
    let stdin = io::stdin();
    let mut titles = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read title from stdin")?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            titles.push(trimmed.to_string());
        }
    }
    Ok(titles)
}

fn print_text(reports: &[Report], summary: Option<&BatchSummary>) {
    for (index, report) in reports.iter().enumerate() {
        if index > 0 {
            println!();
        }
        println!("{} {}", "Title:".bold().green(), report.title);
        println!(
            "{} {}",
            "Terms:".bold().green(),
            report.terms.join(", ").cyan()
        );
        println!("{} {}", "Query:".bold().green(), report.query.yellow());
        if let Some(ladder) = &report.fallback {
            println!("{}", "Fallback:".bold().green());
            for (attempt, query) in ladder.iter().enumerate() {
                println!("  {} {}", format!("{}.", attempt + 1).yellow(), query);
            }
        }
        if let Some(stats) = &report.stats {
            println!(
                "{} {} words -> {} terms (ratio {:.2})",
                "Stats:".bold().green(),
                stats.original_words,
                stats.term_count,
                stats.ratio
            );
        }
    }

    if let Some(summary) = summary {
        println!();
        println!("{}", "Batch summary:".bold().green());
        println!("  Titles: {}", summary.titles.to_string().cyan());
        println!("  Mean words: {:.2}", summary.mean_original_words);
        println!("  Mean terms: {:.2}", summary.mean_terms);
        println!("  Mean ratio: {:.2}", summary.mean_ratio);
    }
}
