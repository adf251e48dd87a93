//! Normalized transaction record extracted from one statement line

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date layout used by consolidated account statements, e.g. `05-Jan-2023`.
pub const STATEMENT_DATE_FORMAT: &str = "%d-%b-%Y";

/// One accepted transaction line.
///
/// Field names serialize to the statement column headers so exports keep the
/// shape downstream charts expect.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionRecord {
    /// Raw date token, kept verbatim (`DD-Mon-YYYY`)
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Amount")]
    pub amount: f64,
    /// Net asset value per unit at transaction time
    #[serde(rename = "NAV")]
    pub nav: f64,
    #[serde(rename = "Units")]
    pub units: f64,
    /// Free-text transaction label (Purchase, Redemption, SIP ...)
    #[serde(rename = "Transaction")]
    pub transaction: String,
    /// Running unit balance, absent when the line has no trailing column
    #[serde(rename = "Balance")]
    pub balance: Option<f64>,
}

impl TransactionRecord {
    pub fn new(
        date: impl Into<String>,
        amount: f64,
        nav: f64,
        units: f64,
        transaction: impl Into<String>,
        balance: Option<f64>,
    ) -> Self {
        Self {
            date: date.into(),
            amount,
            nav,
            units,
            transaction: transaction.into(),
            balance,
        }
    }

    /// Calendar date for ordering only; `None` when the raw token is not `DD-Mon-YYYY`.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_statement_date(&self.date)
    }
}

/// Parse a raw statement date. Month abbreviations match case-insensitively.
pub fn parse_statement_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), STATEMENT_DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creation() {
        let record = TransactionRecord::new("05-Jan-2023", 1000.0, 10.5, 95.238, "Purchase", None);
        assert_eq!(record.date, "05-Jan-2023");
        assert_eq!(record.balance, None);
    }

    #[test]
    fn test_parsed_date() {
        let record = TransactionRecord::new("05-Jan-2023", 1.0, 1.0, 1.0, "Purchase", None);
        assert_eq!(record.parsed_date(), NaiveDate::from_ymd_opt(2023, 1, 5));

        let odd = TransactionRecord::new("31-Foo-2023", 1.0, 1.0, 1.0, "Purchase", None);
        assert_eq!(odd.parsed_date(), None);
    }

    #[test]
    fn test_serializes_with_statement_headers() {
        let record = TransactionRecord::new("05-Jan-2023", 1000.0, 10.5, 95.238, "Purchase", Some(5000.0));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["Date"], "05-Jan-2023");
        assert_eq!(json["NAV"], 10.5);
        assert_eq!(json["Transaction"], "Purchase");
        assert_eq!(json["Balance"], 5000.0);

        let no_balance = TransactionRecord::new("05-Jan-2023", 1.0, 1.0, 1.0, "Purchase", None);
        assert!(serde_json::to_value(&no_balance).unwrap()["Balance"].is_null());
    }
}
