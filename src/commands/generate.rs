use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;
use tracing::{info, warn};

use crate::cli::GenerateArgs;
use crate::error::IndexError;
use crate::report::{IndexResult, build_result};
use crate::scan::{extract_pages, scan_pages};
use crate::terms::{merge_term_maps, normalize_terms};

pub fn run(args: GenerateArgs) -> Result<()> {
    match generate(&args) {
        Ok(result) => emit_result(&args, &result),
        Err(err) => {
            if args.json {
                // The JSON error body carries the stable classification so
                // callers do not have to parse the message.
                let body = json!({
                    "error": err.to_string(),
                    "status": err.status(),
                });
                println!("{body}");
            }
            Err(err.into())
        }
    }
}

fn generate(args: &GenerateArgs) -> Result<IndexResult, IndexError> {
    super::validate_document(&args.pdf, args.max_size_mib)?;

    let terms_text = read_term_list(args.terms.as_deref())?;
    let names_text = read_term_list(args.names.as_deref())?;
    ensure_terms_present(&terms_text, &names_text)?;

    let entries = merge_term_maps(
        normalize_terms(&terms_text, false),
        normalize_terms(&names_text, true),
    );

    let variant_count: usize = entries.iter().map(|entry| entry.variants.len()).sum();
    info!(
        terms = entries.len(),
        variants = variant_count,
        pdf = %args.pdf.display(),
        "term map built"
    );

    let pages = extract_pages(&args.pdf)?;
    info!(pages = pages.len(), "pages extracted");

    let result = build_result(&entries, &scan_pages(&pages, &entries));
    // An empty term map produces neither index lines nor a not-found list.
    // That is distinct from the valid all-unmatched result.
    if result.index.is_empty() && result.not_found.is_empty() {
        return Err(IndexError::NoMatches);
    }
    info!(
        found = entries.len() - result.not_found.len(),
        not_found = result.not_found.len(),
        "scan complete"
    );

    Ok(result)
}

fn read_term_list(path: Option<&Path>) -> Result<String, IndexError> {
    match path {
        Some(path) if !path.is_file() => Err(IndexError::MissingFile(path.to_path_buf())),
        Some(path) => fs::read_to_string(path)
            .map_err(|err| IndexError::FileRead(path.to_path_buf(), err)),
        None => Ok(String::new()),
    }
}

/// At least one of the two lists must carry something other than
/// whitespace; otherwise there is nothing to index.
fn ensure_terms_present(terms_text: &str, names_text: &str) -> Result<(), IndexError> {
    if terms_text.trim().is_empty() && names_text.trim().is_empty() {
        return Err(IndexError::NoTermsProvided);
    }
    Ok(())
}

fn emit_result(args: &GenerateArgs, result: &IndexResult) -> Result<()> {
    if args.json {
        let body = serde_json::to_string_pretty(result).context("failed to serialize result")?;
        println!("{body}");
        return Ok(());
    }

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{}\n", result.index))
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "index written");
        }
        None if !result.index.is_empty() => println!("{}", result.index),
        None => {}
    }

    for label in &result.not_found {
        warn!(term = %label, "no occurrences found");
    }

    Ok(())
}
