use std::path::PathBuf;

use thiserror::Error;

/// Terminal failures of an index run. Every variant aborts the whole run;
/// there is no partial output and nothing is retried.
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("PDF path has an empty file name")]
    EmptyFileName,

    #[error("no terms or names provided")]
    NoTermsProvided,

    #[error("{} is {} bytes, over the {} MiB limit", .path.display(), .size, .cap_mib)]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        cap_mib: u64,
    },

    #[error("failed to read {}", .0.display())]
    FileRead(PathBuf, #[source] std::io::Error),

    #[error("failed to parse PDF document")]
    DocumentParse(#[source] lopdf::Error),

    #[error("no matching terms found in the PDF")]
    NoMatches,
}

impl IndexError {
    /// Stable classification string reported alongside the message in JSON
    /// output.
    pub fn status(&self) -> &'static str {
        match self {
            Self::MissingFile(_) => "missing-file",
            Self::EmptyFileName => "empty-file-name",
            Self::NoTermsProvided => "no-terms-provided",
            Self::FileTooLarge { .. } => "internal-processing-error",
            Self::FileRead(..) => "internal-processing-error",
            Self::DocumentParse(_) => "internal-processing-error",
            Self::NoMatches => "no-matches-at-all",
        }
    }
}
