use std::fs;
use std::path::Path;

use crate::error::IndexError;

pub mod generate;
pub mod pages;

/// Document checks shared by every command, run before any parsing: the
/// path must name an existing file and fit under the size cap.
fn validate_document(pdf: &Path, max_size_mib: u64) -> Result<(), IndexError> {
    let has_file_name = pdf
        .file_name()
        .map(|name| !name.is_empty())
        .unwrap_or(false);
    if !has_file_name {
        return Err(IndexError::EmptyFileName);
    }

    if !pdf.is_file() {
        return Err(IndexError::MissingFile(pdf.to_path_buf()));
    }

    let size = fs::metadata(pdf)
        .map_err(|err| IndexError::FileRead(pdf.to_path_buf(), err))?
        .len();
    if size > max_size_mib.saturating_mul(1024 * 1024) {
        return Err(IndexError::FileTooLarge {
            path: pdf.to_path_buf(),
            size,
            cap_mib: max_size_mib,
        });
    }

    Ok(())
}
