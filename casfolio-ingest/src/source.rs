//! Page text sources for statement documents.
//!
//! Extraction itself is delegated to `pdf-extract`; this module only adapts its
//! output into an ordered list of page texts.

use std::fs;
use std::path::Path;

use crate::error::ExtractError;

/// Form feed separates pages in extracted text
const PAGE_BREAK: char = '\x0C';

/// Anything that can yield a document's pages as text, in page order
pub trait PageSource {
    fn pages(&self) -> Result<Vec<String>, ExtractError>;
}

fn split_pages(text: &str) -> Vec<String> {
    let mut pages: Vec<String> = text.split(PAGE_BREAK).map(str::to_string).collect();
    // A trailing form feed closes the last page rather than opening an empty one
    if pages.len() > 1 && pages.last().is_some_and(|p| p.trim().is_empty()) {
        pages.pop();
    }
    pages
}

/// Statement already converted to text; pages split on form feed
#[derive(Debug, Clone)]
pub struct TextDocument {
    text: String,
}

impl TextDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl PageSource for TextDocument {
    fn pages(&self) -> Result<Vec<String>, ExtractError> {
        Ok(split_pages(&self.text))
    }
}

/// In-memory PDF bytes
#[derive(Debug, Clone)]
pub struct PdfDocument {
    data: Vec<u8>,
}

impl PdfDocument {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl PageSource for PdfDocument {
    fn pages(&self) -> Result<Vec<String>, ExtractError> {
        if !self.data.starts_with(b"%PDF") {
            return Err(ExtractError::NotPdf);
        }
        let text = pdf_extract::extract_text_from_mem(&self.data)
            .map_err(|e| ExtractError::Pdf(e.to_string()))?;
        Ok(split_pages(&text))
    }
}

/// Open a statement from disk: `.pdf` files go through PDF extraction, anything
/// else is read as already-extracted UTF-8 text.
pub fn open_document(path: &Path) -> Result<Box<dyn PageSource + Send>, ExtractError> {
    let data = fs::read(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_pdf = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));

    if is_pdf {
        Ok(Box::new(PdfDocument::new(data)))
    } else {
        Ok(Box::new(TextDocument::new(String::from_utf8(data)?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_pages_split_on_form_feed() {
        let doc = TextDocument::new("page one\n\x0Cpage two\n\x0C");
        let pages = doc.pages().unwrap();
        assert_eq!(pages, vec!["page one\n".to_string(), "page two\n".to_string()]);
    }

    #[test]
    fn test_single_page_text() {
        let pages = TextDocument::new("").pages().unwrap();
        assert_eq!(pages, vec![String::new()]);
    }

    #[test]
    fn test_pdf_requires_header() {
        let err = PdfDocument::new(b"not a pdf".to_vec()).pages().unwrap_err();
        assert!(matches!(err, ExtractError::NotPdf));
    }

    #[test]
    fn test_open_missing_file() {
        let err = open_document(Path::new("/definitely/not/here.pdf")).err().unwrap();
        assert!(matches!(err, ExtractError::Io { .. }));
    }
}
