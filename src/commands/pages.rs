use anyhow::{Result, bail};
use tracing::info;

use crate::cli::PagesArgs;
use crate::scan::{collapse_page_text, extract_pages};

/// Dump extracted page text, either raw or in the lowercased
/// whitespace-collapsed form the matcher scans. Useful for checking why a
/// term did or did not hit.
pub fn run(args: PagesArgs) -> Result<()> {
    super::validate_document(&args.pdf, args.max_size_mib)?;

    let pages = extract_pages(&args.pdf)?;
    info!(pages = pages.len(), pdf = %args.pdf.display(), "pages extracted");

    if let Some(page) = args.page {
        if page == 0 || page > pages.len() {
            bail!(
                "page {page} out of range: {} has {} pages",
                args.pdf.display(),
                pages.len()
            );
        }
    }

    for (index, text) in pages.iter().enumerate() {
        let number = index + 1;
        if args.page.is_some_and(|wanted| wanted != number) {
            continue;
        }

        println!("--- page {number}");
        if args.collapsed {
            println!("{}", collapse_page_text(text));
        } else {
            println!("{}", text.trim_end());
        }
    }

    Ok(())
}
