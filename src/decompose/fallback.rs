//! Decreasing-prefix retry ladder.
//!
//! When the full query returns nothing, the search is retried with
//! progressively shorter token prefixes. Earlier terms carry more
//! discriminating weight than later ones, since the decomposition
//! emits compounds and connectors near their original position.

use crate::decompose::decomposer::TermList;
use anyhow::Result;
use serde::Serialize;
use tracing::debug;

/// Retry queries of strictly decreasing specificity: the first `k`
/// terms space-joined, for `k = N, N-1, ..., 1`. A list of `N` terms
/// yields exactly `N` queries; an empty list yields none.
pub fn fallback_queries(terms: &TermList) -> Vec<String> {
    let tokens = terms.terms();
    (1..=tokens.len())
        .rev()
        .map(|k| tokens[..k].join(" "))
        .collect()
}

/// The first fallback attempt that returned results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FallbackHit {
    pub query: String,
    /// Zero-based position of the winning attempt in the ladder.
    pub attempt: usize,
    pub results: usize,
}

/// Walks the ladder against `search`, a callback returning the result
/// count for a query. Stops at the first non-zero count; returns
/// `None` when every attempt came back empty. Callback errors
/// propagate unchanged.
pub fn search_with_fallback<F>(terms: &TermList, mut search: F) -> Result<Option<FallbackHit>>
where
    F: FnMut(&str) -> Result<usize>,
{
    for (attempt, query) in fallback_queries(terms).into_iter().enumerate() {
        let results = search(&query)?;
        debug!("fallback attempt {} {:?}: {} results", attempt, query, results);
        if results > 0 {
            return Ok(Some(FallbackHit {
                query,
                attempt,
                results,
            }));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(tokens: &[&str]) -> TermList {
        TermList::from_terms(tokens.iter().map(|t| t.to_string()).collect())
    }

    #[test]
    fn test_ladder_has_one_query_per_term() {
        let ladder = fallback_queries(&terms(&["사회복지", "실천", "기술론"]));
        assert_eq!(
            ladder,
            vec!["사회복지 실천 기술론", "사회복지 실천", "사회복지"]
        );
    }

    #[test]
    fn test_single_term_ladder() {
        assert_eq!(fallback_queries(&terms(&["북토크"])), vec!["북토크"]);
    }

    #[test]
    fn test_empty_list_yields_no_queries() {
        assert!(fallback_queries(&terms(&[])).is_empty());
    }

    #[test]
    fn test_driver_stops_at_first_hit() {
        let list = terms(&["가나", "다라", "마바"]);
        let mut calls = Vec::new();
        let hit = search_with_fallback(&list, |query| {
            calls.push(query.to_string());
            Ok(if query == "가나 다라" { 4 } else { 0 })
        })
        .unwrap()
        .expect("second attempt hits");
        assert_eq!(hit.query, "가나 다라");
        assert_eq!(hit.attempt, 1);
        assert_eq!(hit.results, 4);
        assert_eq!(calls, vec!["가나 다라 마바", "가나 다라"]);
    }

    #[test]
    fn test_driver_exhausts_to_none() {
        let list = terms(&["가나", "다라"]);
        let hit = search_with_fallback(&list, |_| Ok(0)).unwrap();
        assert!(hit.is_none());
    }

    #[test]
    fn test_driver_surfaces_callback_errors() {
        let list = terms(&["가나"]);
        let result = search_with_fallback(&list, |_| anyhow::bail!("portal unreachable"));
        assert!(result.is_err());
    }
}
