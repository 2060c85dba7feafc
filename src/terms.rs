use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Quotation-mark code points stripped from the edges of a raw line:
/// straight, backtick/acute, curly (single and double, opening and
/// closing), and guillemets. Interior occurrences are kept, so an
/// apostrophe inside a word survives.
const QUOTE_CHARS: &[char] = &[
    '\u{0022}', '\u{0027}', '\u{0060}', '\u{00B4}', '\u{2018}', '\u{2019}', '\u{201C}',
    '\u{201D}', '\u{201E}', '\u{201F}', '\u{2039}', '\u{203A}', '\u{00AB}', '\u{00BB}',
];

static PAREN_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(([^)]+)\)").expect("valid paren-group pattern"));
static PAREN_STRIP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\(.*?\)\s*").expect("valid paren-strip pattern"));

/// One logical index subject: the label shown in the final index plus the
/// literal search variants that count as an occurrence of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermEntry {
    pub label: String,
    pub variants: BTreeSet<String>,
}

/// Turn a raw term list (one entry per line, blank lines skipped) into an
/// insertion-ordered term map.
///
/// With `reverse_names` a "Last, First" line is searched as "First Last"
/// and the comma form itself is not searched; without it the cleaned line
/// is searched as written. Parenthesized groups contribute extra variants
/// in both modes: their interior is split on commas and each piece becomes
/// a search phrase of its own.
pub fn normalize_terms(text: &str, reverse_names: bool) -> Vec<TermEntry> {
    let mut entries = Vec::new();

    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let clean = line.trim_matches(|c| QUOTE_CHARS.contains(&c));

        let mut candidates = Vec::new();
        let mut had_group = false;
        for captures in PAREN_GROUP.captures_iter(clean) {
            had_group = true;
            for piece in captures[1].split(',') {
                candidates.push(piece.trim().to_string());
            }
        }

        let main_text = PAREN_STRIP.replace_all(clean, "").trim().to_string();

        if reverse_names {
            // "Last, First" is searched as "First Last"; the comma form
            // itself never is.
            if let Some((last, first)) = main_text.split_once(',') {
                let (last, first) = (last.trim(), first.trim());
                if !last.is_empty() && !first.is_empty() {
                    candidates.push(format!("{first} {last}"));
                }
            }
        } else if !main_text.is_empty() {
            candidates.push(main_text.clone());
        }

        let variants = candidates
            .into_iter()
            .filter(|candidate| !candidate.is_empty())
            .collect::<BTreeSet<String>>();

        // A line with a parenthetical keeps its full form as the label
        // ("Smith (John)" displays as typed); otherwise stray empty parens
        // are dropped along with the rest of the noise.
        let label = if had_group {
            clean.to_string()
        } else {
            main_text
        };

        entries.push(TermEntry { label, variants });
    }

    entries
}

/// Append `names` after `terms`, replacing a same-label terms entry in
/// place. Later entries win on collision; this mirrors dict-update
/// semantics and is intentional, documented behavior.
pub fn merge_term_maps(mut terms: Vec<TermEntry>, names: Vec<TermEntry>) -> Vec<TermEntry> {
    for entry in names {
        match terms.iter().position(|existing| existing.label == entry.label) {
            Some(position) => {
                tracing::debug!(label = %entry.label, "name entry replaces term entry");
                terms[position] = entry;
            }
            None => terms.push(entry),
        }
    }

    terms
}
