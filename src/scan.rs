use std::path::Path;

use lopdf::Document;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::IndexError;
use crate::terms::TermEntry;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Extract the plain text of every page, in page order. Any load or
/// per-page extraction failure aborts the whole run; there is no
/// partial-success policy for corrupt pages. The document handle is
/// dropped before returning on every path.
pub fn extract_pages(path: &Path) -> Result<Vec<String>, IndexError> {
    let document = Document::load(path).map_err(IndexError::DocumentParse)?;

    let mut pages = Vec::new();
    for (page_number, _object_id) in document.get_pages() {
        let text = document
            .extract_text(&[page_number])
            .map_err(IndexError::DocumentParse)?;
        pages.push(text);
    }

    Ok(pages)
}

/// Lowercase a page and collapse every whitespace run (line breaks
/// included) to a single space, so a phrase split across a line wrap still
/// matches its variant.
pub fn collapse_page_text(page: &str) -> String {
    WHITESPACE_RUN
        .replace_all(&page.to_lowercase(), " ")
        .into_owned()
}

/// Scan every page for every entry's variants. Returns per-entry page
/// lists aligned with `entries`: 1-based, strictly increasing, no
/// duplicates (a page is recorded at most once per entry, on the first
/// variant that hits).
pub fn scan_pages(pages: &[String], entries: &[TermEntry]) -> Vec<Vec<usize>> {
    let lowered: Vec<Vec<String>> = entries
        .iter()
        .map(|entry| entry.variants.iter().map(|v| v.to_lowercase()).collect())
        .collect();

    let mut page_lists = vec![Vec::new(); entries.len()];

    for (page_index, page) in pages.iter().enumerate() {
        let page_number = page_index + 1;
        let text = collapse_page_text(page);

        for (entry_index, variants) in lowered.iter().enumerate() {
            if variants.iter().any(|variant| contains_term(&text, variant)) {
                page_lists[entry_index].push(page_number);
                debug!(
                    label = %entries[entry_index].label,
                    page = page_number,
                    "term found"
                );
            }
        }
    }

    page_lists
}

/// Boundary-aware literal match: `needle` occurs in `haystack` and the
/// characters immediately before and after the occurrence (when present)
/// are not ASCII letters or digits. Adjacent punctuation is fine ("help!"
/// matches "help"); embedding in a longer word is not ("helper" does not).
/// This is deliberately narrower than a generic word boundary.
fn contains_term(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }

    haystack.match_indices(needle).any(|(start, _)| {
        let before_clear = haystack[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_ascii_alphanumeric());
        let after_clear = haystack[start + needle.len()..]
            .chars()
            .next()
            .is_none_or(|c| !c.is_ascii_alphanumeric());
        before_clear && after_clear
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terms::normalize_terms;

    fn pages(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn punctuation_next_to_a_match_is_allowed() {
        assert!(contains_term("get help!", "help"));
        assert!(contains_term("(help)", "help"));
        assert!(contains_term("help", "help"));
    }

    #[test]
    fn embedded_occurrences_are_rejected() {
        assert!(!contains_term("the helper", "help"));
        assert!(!contains_term("unhelpful", "help"));
        assert!(!contains_term("help2000", "help"));
    }

    #[test]
    fn later_occurrence_can_satisfy_the_boundary() {
        assert!(contains_term("helper needs help.", "help"));
    }

    #[test]
    fn empty_needle_never_matches() {
        assert!(!contains_term("anything", ""));
    }

    #[test]
    fn collapse_joins_line_wrapped_phrases() {
        assert_eq!(collapse_page_text("Forest\nfire  season"), "forest fire season");
    }

    #[test]
    fn phrase_split_across_a_line_break_is_found() {
        let entries = normalize_terms("forest fire", false);
        let lists = scan_pages(&pages(&["a forest\nfire broke out"]), &entries);
        assert_eq!(lists, [vec![1]]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let entries = normalize_terms("HELP", false);
        let lists = scan_pages(&pages(&["please Help me"]), &entries);
        assert_eq!(lists, [vec![1]]);
    }

    #[test]
    fn pages_are_one_based_increasing_and_deduplicated() {
        let entries = normalize_terms("Help (Assistance)", false);
        // Page 2 matches both variants but is recorded once.
        let lists = scan_pages(
            &pages(&["nothing here", "help and assistance", "more help"]),
            &entries,
        );
        assert_eq!(lists, [vec![2, 3]]);
    }

    #[test]
    fn scanning_twice_is_identical() {
        let entries = normalize_terms("Help\nMissing", false);
        let fixture = pages(&["help!", "no matches here"]);
        assert_eq!(scan_pages(&fixture, &entries), scan_pages(&fixture, &entries));
    }

    #[test]
    fn entry_with_no_variants_matches_nowhere() {
        let entries = normalize_terms("Madonna", true);
        let lists = scan_pages(&pages(&["madonna everywhere"]), &entries);
        assert_eq!(lists, [Vec::<usize>::new()]);
    }
}
