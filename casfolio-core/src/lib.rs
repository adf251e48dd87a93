//! casfolio-core: transaction record and ledger types for consolidated account statements

pub mod ledger;
pub mod record;

pub use ledger::{consolidate, DropReason, DropReport, DroppedLine, Ledger, NumericField, ParsedDocument};
pub use record::TransactionRecord;
