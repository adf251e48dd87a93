//! Per-document pipeline: classify each page, tokenize and coerce every
//! candidate, collect records and drops in page/line order.

use casfolio_core::{DropReason, DroppedLine, ParsedDocument, TransactionRecord};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::classifier::classify;
use crate::coerce::{coerce, BalancePolicy, DEFAULT_SEPARATORS};
use crate::error::ExtractError;
use crate::source::PageSource;
use crate::tokenizer::{LineTokenizer, WhitespaceRunTokenizer};

/// Coercion knobs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParseOptions {
    pub balance_policy: BalancePolicy,
    /// Characters stripped from numeric tokens before parsing
    pub separators: Vec<char>,
    /// Strip outer whitespace before tokenizing. Off: an indented row yields an
    /// empty Date column and is dropped.
    pub trim_lines: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            balance_policy: BalancePolicy::default(),
            separators: DEFAULT_SEPARATORS.to_vec(),
            trim_lines: false,
        }
    }
}

/// Statement text -> records, parameterized by the column tokenizer
#[derive(Debug, Clone)]
pub struct Pipeline<T = WhitespaceRunTokenizer> {
    tokenizer: T,
    options: ParseOptions,
}

impl Pipeline {
    pub fn new(options: ParseOptions) -> Self {
        Self {
            tokenizer: WhitespaceRunTokenizer,
            options,
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(ParseOptions::default())
    }
}

impl<T: LineTokenizer> Pipeline<T> {
    pub fn with_tokenizer(tokenizer: T, options: ParseOptions) -> Self {
        Self { tokenizer, options }
    }

    /// Turn one candidate line into a record, or the reason it is not one.
    pub fn tokenize_line(&self, line: &str) -> Result<TransactionRecord, DropReason> {
        let line = if self.options.trim_lines { line.trim() } else { line };
        let tokens = self.tokenizer.tokenize(line);
        coerce(&tokens, self.options.balance_policy, &self.options.separators)
    }

    /// Parse already-extracted pages of one document.
    pub fn parse_pages<S: AsRef<str>>(&self, name: &str, pages: &[S]) -> ParsedDocument {
        let mut doc = ParsedDocument::new(name);

        for (page_idx, page) in pages.iter().enumerate() {
            for candidate in classify(page.as_ref()) {
                match self.tokenize_line(candidate.text) {
                    Ok(record) => doc.records.push(record),
                    Err(reason) => {
                        debug!(
                            document = name,
                            page = page_idx + 1,
                            line = candidate.line_no,
                            reason = %reason,
                            "dropped candidate line"
                        );
                        doc.drops.push(DroppedLine {
                            document: name.to_string(),
                            page: page_idx + 1,
                            line_no: candidate.line_no,
                            line: candidate.text.to_string(),
                            reason,
                        });
                    }
                }
            }
        }

        info!(
            document = name,
            pages = pages.len(),
            records = doc.records.len(),
            dropped = doc.drops.count(),
            "parsed statement"
        );
        doc
    }

    /// Extract and parse a document. Extraction failure fails the whole document.
    pub fn parse_document<S: PageSource + ?Sized>(
        &self,
        name: &str,
        source: &S,
    ) -> Result<ParsedDocument, ExtractError> {
        let pages = source.pages()?;
        Ok(self.parse_pages(name, &pages))
    }
}

/// Tokenize a candidate line with the default heuristic and options.
/// `None` means the line is dropped.
pub fn tokenize(line: &str) -> Option<TransactionRecord> {
    Pipeline::new(ParseOptions::default()).tokenize_line(line).ok()
}
