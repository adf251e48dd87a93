//! Ledger consolidation across statement documents, plus the record of which
//! lines were rejected and why.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::record::TransactionRecord;

/// Numeric columns that must coerce for a line to become a record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NumericField {
    #[serde(rename = "amount")]
    Amount,
    #[serde(rename = "nav")]
    Nav,
    #[serde(rename = "units")]
    Units,
    #[serde(rename = "balance")]
    Balance,
}

impl NumericField {
    pub fn label(&self) -> &'static str {
        match self {
            NumericField::Amount => "Amount",
            NumericField::Nav => "NAV",
            NumericField::Units => "Units",
            NumericField::Balance => "Balance",
        }
    }
}

/// Why a candidate line did not become a record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum DropReason {
    /// Fewer than five column tokens (headers, footers, prose with a date in it)
    TooFewTokens { found: usize },
    /// A numeric column did not parse after separator removal
    InvalidNumber { field: NumericField, token: String },
}

impl DropReason {
    /// Short stable code, used as a grouping key in drop summaries
    pub fn code(&self) -> &'static str {
        match self {
            DropReason::TooFewTokens { .. } => "too-few-tokens",
            DropReason::InvalidNumber { field: NumericField::Amount, .. } => "invalid-amount",
            DropReason::InvalidNumber { field: NumericField::Nav, .. } => "invalid-nav",
            DropReason::InvalidNumber { field: NumericField::Units, .. } => "invalid-units",
            DropReason::InvalidNumber { field: NumericField::Balance, .. } => "invalid-balance",
        }
    }
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::TooFewTokens { found } => write!(f, "only {found} column(s), need at least 5"),
            DropReason::InvalidNumber { field, token } => {
                write!(f, "{} {:?} is not a number", field.label(), token)
            }
        }
    }
}

/// A rejected candidate line with its location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DroppedLine {
    pub document: String,
    /// 1-based page number within the document
    pub page: usize,
    /// 1-based line number within the page
    pub line_no: usize,
    pub line: String,
    pub reason: DropReason,
}

/// Every rejected line of a run, in document/page/line order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DropReport {
    lines: Vec<DroppedLine>,
}

impl DropReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, dropped: DroppedLine) {
        self.lines.push(dropped);
    }

    pub fn extend(&mut self, other: DropReport) {
        self.lines.extend(other.lines);
    }

    pub fn lines(&self) -> &[DroppedLine] {
        &self.lines
    }

    pub fn count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Drop counts keyed by reason code
    pub fn by_reason(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for dropped in &self.lines {
            *counts.entry(dropped.reason.code()).or_insert(0) += 1;
        }
        counts
    }
}

/// The record set produced from one statement document
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ParsedDocument {
    pub name: String,
    pub records: Vec<TransactionRecord>,
    pub drops: DropReport,
}

impl ParsedDocument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Ordered records of all documents in one analysis run.
///
/// Records keep document submission order, then page and line order within each
/// document. Nothing is deduplicated or sorted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Ledger {
    records: Vec<TransactionRecord>,
    documents: Vec<String>,
    #[serde(skip_serializing_if = "DropReport::is_empty", default)]
    drops: DropReport,
}

impl Ledger {
    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    /// Names of the consolidated documents, in submission order
    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    pub fn drop_report(&self) -> &DropReport {
        &self.drops
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Concatenate per-document record sets into one ledger, preserving input order.
pub fn consolidate(documents: impl IntoIterator<Item = ParsedDocument>) -> Ledger {
    let mut ledger = Ledger::default();
    for doc in documents {
        ledger.records.extend(doc.records);
        ledger.drops.extend(doc.drops);
        ledger.documents.push(doc.name);
    }
    ledger
}
