use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn a document into page text. Fails the whole document.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("not a PDF document (missing %PDF header)")]
    NotPdf,

    #[error("PDF text extraction failed: {0}")]
    Pdf(String),

    #[error("document text is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}
