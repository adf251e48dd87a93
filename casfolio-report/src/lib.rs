//! casfolio-report: derived views over a consolidated ledger (totals per
//! transaction label, amount per date) and CSV/JSON export

pub mod export;
pub mod summary;

pub use export::{to_json, write_csv};
pub use summary::{amount_by_date, totals_by_transaction, DatePoint, Overview, TransactionTotal};
