//! casfolio-ingest: turns extracted statement page text into transaction records.
//!
//! Flow per document: page text -> [`classifier`] -> [`tokenizer`] -> [`coerce`],
//! driven by [`pipeline::Pipeline`]. [`source`] adapts documents on disk into page text.

pub mod classifier;
pub mod coerce;
pub mod error;
pub mod pipeline;
pub mod source;
pub mod tokenizer;

pub use classifier::{classify, CandidateLine};
pub use coerce::{coerce, parse_number, BalancePolicy};
pub use error::ExtractError;
pub use pipeline::{tokenize, ParseOptions, Pipeline};
pub use source::{open_document, PageSource, PdfDocument, TextDocument};
pub use tokenizer::{ColumnOffsetTokenizer, LineTokenizer, WhitespaceRunTokenizer};
