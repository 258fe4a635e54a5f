//! AS-IS / TO-BE improvement statistics.
//!
//! Compares the whitespace word count of a raw title against its
//! decomposed term count. The ratio feeds the batch report showing how
//! much more AND-match surface the decomposition produced.

use crate::decompose::TermList;
use serde::Serialize;

/// Per-title comparison of the original text and its decomposition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Improvement {
    pub title: String,
    pub query: String,
    /// Whitespace-separated word count of the original title.
    pub original_words: usize,
    pub term_count: usize,
    /// `term_count / max(1, original_words)`.
    pub ratio: f64,
}

/// Batch means over a set of per-title improvements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSummary {
    pub titles: usize,
    pub mean_original_words: f64,
    pub mean_terms: f64,
    pub mean_ratio: f64,
}

pub fn analyze(title: &str, terms: &TermList) -> Improvement {
    let original_words = title.split_whitespace().count();
    let term_count = terms.len();
    Improvement {
        title: title.to_string(),
        query: terms.query(),
        original_words,
        term_count,
        ratio: term_count as f64 / original_words.max(1) as f64,
    }
}

pub fn summarize(improvements: &[Improvement]) -> BatchSummary {
    let titles = improvements.len();
    if titles == 0 {
        return BatchSummary {
            titles: 0,
            mean_original_words: 0.0,
            mean_terms: 0.0,
            mean_ratio: 0.0,
        };
    }
    let n = titles as f64;
    BatchSummary {
        titles,
        mean_original_words: improvements
            .iter()
            .map(|i| i.original_words as f64)
            .sum::<f64>()
            / n,
        mean_terms: improvements.iter().map(|i| i.term_count as f64).sum::<f64>() / n,
        mean_ratio: improvements.iter().map(|i| i.ratio).sum::<f64>() / n,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decompose::decompose;

    #[test]
    fn test_analyze_counts_words_and_terms() {
        let title = "국가정책의 이해";
        let improvement = analyze(title, &decompose(title));
        assert_eq!(improvement.original_words, 2);
        assert_eq!(improvement.term_count, 2);
        assert_eq!(improvement.ratio, 1.0);
        assert_eq!(improvement.query, "국가정책 이해");
    }

    #[test]
    fn test_ratio_guards_empty_originals() {
        let improvement = analyze("", &decompose(""));
        assert_eq!(improvement.original_words, 0);
        assert_eq!(improvement.ratio, 0.0);
    }

    #[test]
    fn test_fused_title_improves_ratio() {
        // One word in, two terms out.
        let title = "KOHI북토크";
        let improvement = analyze(title, &decompose(title));
        assert_eq!(improvement.original_words, 1);
        assert_eq!(improvement.term_count, 2);
        assert_eq!(improvement.ratio, 2.0);
    }

    #[test]
    fn test_summarize_means() {
        let improvements = vec![
            analyze("국가정책의 이해", &decompose("국가정책의 이해")),
            analyze("KOHI북토크", &decompose("KOHI북토크")),
        ];
        let summary = summarize(&improvements);
        assert_eq!(summary.titles, 2);
        assert_eq!(summary.mean_original_words, 1.5);
        assert_eq!(summary.mean_terms, 2.0);
        assert_eq!(summary.mean_ratio, 1.5);
    }

    #[test]
    fn test_summarize_empty_batch() {
        let summary = summarize(&[]);
        assert_eq!(summary.titles, 0);
        assert_eq!(summary.mean_ratio, 0.0);
    }
}
