//! Noise normalization applied before compound protection.
//!
//! Rules, in order: parenthesized spans are unwrapped in place (content
//! kept, parentheses replaced by surrounding spaces), Hanja ideographs
//! are deleted outright, noise symbols become spaces so they separate
//! rather than fuse their neighbors, and a space is inserted at the two
//! case boundaries that signal a fused acronym (Hangul syllable followed
//! by an uppercase ASCII letter, lowercase followed by uppercase).

use crate::decompose::lexicon::Lexicon;
use once_cell::sync::Lazy;
use regex::Regex;

static PAREN_SPANS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^)]+)\)").unwrap());

static ACRONYM_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]{2,}").unwrap());

/// CJK Unified Ideographs. The extension blocks are deliberately left
/// alone; catalog titles only ever carry characters from the base block.
fn is_hanja(ch: char) -> bool {
    matches!(ch, '\u{4e00}'..='\u{9fff}')
}

pub(crate) fn is_hangul_syllable(ch: char) -> bool {
    matches!(ch, '가'..='힣')
}

/// Normalizes a raw title for protection and scanning.
pub fn normalize(input: &str, lexicon: &Lexicon) -> String {
    let unwrapped = PAREN_SPANS.replace_all(input, " $1 ");

    let mut out = String::with_capacity(unwrapped.len() + 8);
    let mut prev: Option<char> = None;
    for ch in unwrapped.chars() {
        if is_hanja(ch) {
            continue;
        }
        if lexicon.is_noise(ch) {
            out.push(' ');
            prev = Some(' ');
            continue;
        }
        if let Some(p) = prev {
            if ch.is_ascii_uppercase() && (is_hangul_syllable(p) || p.is_ascii_lowercase()) {
                out.push(' ');
            }
        }
        out.push(ch);
        prev = Some(ch);
    }
    out
}

/// Pulls runs of two or more uppercase ASCII letters out of `text`,
/// returning the remaining text and the lifted runs in encounter order.
///
/// The case-boundary rule in [`normalize`] only separates an acronym
/// from a *preceding* Hangul syllable; an acronym sitting in front of
/// Hangul (`MZ세대`) stays fused unless lifted here.
pub fn lift_acronyms(text: &str) -> (String, Vec<String>) {
    let acronyms: Vec<String> = ACRONYM_RUNS
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();
    if acronyms.is_empty() {
        return (text.to_string(), acronyms);
    }
    let remaining = ACRONYM_RUNS.replace_all(text, " ").into_owned();
    (remaining, acronyms)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::default()
    }

    #[test]
    fn test_parentheses_unwrapped_with_content_kept() {
        assert_eq!(normalize("저작권(기초)교육", &lexicon()), "저작권 기초 교육");
    }

    #[test]
    fn test_empty_parens_left_alone() {
        assert_eq!(normalize("교육()", &lexicon()), "교육()");
    }

    #[test]
    fn test_hanja_deleted() {
        assert_eq!(normalize("인권人교육", &lexicon()), "인권교육");
    }

    #[test]
    fn test_noise_symbols_become_spaces() {
        assert_eq!(normalize("복지!서비스", &lexicon()), "복지 서비스");
        assert_eq!(normalize("!!!---", &lexicon()), "      ");
    }

    #[test]
    fn test_boundary_hangul_then_uppercase() {
        assert_eq!(normalize("세대KOHI", &lexicon()), "세대 KOHI");
    }

    #[test]
    fn test_boundary_lower_then_uppercase() {
        assert_eq!(normalize("webDesign", &lexicon()), "web Design");
    }

    #[test]
    fn test_no_boundary_uppercase_then_hangul() {
        // Only the two declared adjacencies insert a boundary.
        assert_eq!(normalize("KOHI북토크", &lexicon()), "KOHI북토크");
    }

    #[test]
    fn test_hanja_deletion_exposes_case_boundary() {
        assert_eq!(normalize("복지漢K", &lexicon()), "복지 K");
    }

    #[test]
    fn test_custom_noise_symbols() {
        let lexicon = Lexicon::builder().noise_symbols("~").build().unwrap();
        assert_eq!(normalize("복지~서비스!", &lexicon), "복지 서비스!");
    }

    #[test]
    fn test_lift_acronyms_frees_leading_run() {
        let (rest, acronyms) = lift_acronyms("MZ세대 소통");
        assert_eq!(rest, " 세대 소통");
        assert_eq!(acronyms, vec!["MZ"]);
    }

    #[test]
    fn test_lift_acronyms_ignores_single_letters() {
        let (rest, acronyms) = lift_acronyms("A형 보고서");
        assert_eq!(rest, "A형 보고서");
        assert!(acronyms.is_empty());
    }

    #[test]
    fn test_lift_acronyms_collects_every_run() {
        let (_, acronyms) = lift_acronyms("AI기반 JOB매칭");
        assert_eq!(acronyms, vec!["AI", "JOB"]);
    }
}
