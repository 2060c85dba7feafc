use serde::Serialize;

use crate::terms::TermEntry;

/// Final output of a run: the formatted index plus the labels that matched
/// nothing. Either a complete result or a single error; never both.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct IndexResult {
    pub index: String,
    pub not_found: Vec<String>,
}

/// Assemble the result from per-entry page lists aligned with `entries`.
/// Found entries are sorted case-insensitively by label; the not-found
/// list keeps term-map order.
pub fn build_result(entries: &[TermEntry], page_lists: &[Vec<usize>]) -> IndexResult {
    let mut found = Vec::new();
    let mut not_found = Vec::new();

    for (entry, pages) in entries.iter().zip(page_lists) {
        if pages.is_empty() {
            not_found.push(entry.label.clone());
        } else {
            found.push((entry.label.clone(), pages));
        }
    }

    found.sort_by_key(|(label, _)| label.to_lowercase());

    let index = found
        .iter()
        .map(|(label, pages)| {
            let pages = pages
                .iter()
                .map(|page| page.to_string())
                .collect::<Vec<String>>()
                .join(", ");
            format!("{label}: {pages}")
        })
        .collect::<Vec<String>>()
        .join("\n");

    IndexResult { index, not_found }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::scan_pages;
    use crate::terms::{merge_term_maps, normalize_terms};

    #[test]
    fn found_lines_are_sorted_case_insensitively() {
        let entries = normalize_terms("banana\nApple\ncherry", false);
        let lists = vec![vec![2], vec![1, 3], vec![5]];
        let result = build_result(&entries, &lists);
        assert_eq!(result.index, "Apple: 1, 3\nbanana: 2\ncherry: 5");
        assert!(result.not_found.is_empty());
    }

    #[test]
    fn unmatched_labels_keep_map_order() {
        let entries = normalize_terms("zeta\nalpha", false);
        let lists = vec![Vec::new(), Vec::new()];
        let result = build_result(&entries, &lists);
        assert_eq!(result.index, "");
        assert_eq!(result.not_found, ["zeta", "alpha"]);
    }

    #[test]
    fn end_to_end_over_string_pages() {
        let terms = normalize_terms("Help (Assistance, Aid)\n\"Quote\"", false);
        let names = normalize_terms("Smith, John", true);
        let entries = merge_term_maps(terms, names);

        let pages = vec![
            "Page 1: Help! Quote.".to_string(),
            "Page 2: John Smith was here.".to_string(),
        ];
        let result = build_result(&entries, &scan_pages(&pages, &entries));

        assert_eq!(
            result.index,
            "Help (Assistance, Aid): 1\nQuote: 1\nSmith, John: 2"
        );
        assert!(result.not_found.is_empty());
    }

    #[test]
    fn quoted_variant_does_not_match_its_prefix_extension() {
        let terms = normalize_terms("\"Quote\"", false);
        let pages = vec!["Quoted material only.".to_string()];
        let result = build_result(&terms, &scan_pages(&pages, &terms));
        assert_eq!(result.index, "");
        assert_eq!(result.not_found, ["Quote"]);
    }
}
