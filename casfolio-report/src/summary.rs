//! Aggregated views of a ledger for the presentation layer.
//!
//! Grouping always uses the raw strings: `05-Jan-2023` and `5-Jan-2023` are two
//! different dates here, and `Purchase` / `PURCHASE` two different labels.

use casfolio_core::{Ledger, TransactionRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Amount summed over one transaction label
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionTotal {
    pub transaction: String,
    pub amount: f64,
    pub count: usize,
}

impl TransactionTotal {
    /// Percentage of `grand_total`, as shown on the distribution chart.
    /// Zero when the grand total is zero.
    pub fn share_of(&self, grand_total: f64) -> f64 {
        if grand_total == 0.0 {
            0.0
        } else {
            self.amount / grand_total * 100.0
        }
    }
}

/// Amount summed over one raw date string
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatePoint {
    pub date: String,
    pub amount: f64,
}

/// Group Amount by transaction label, ordered by first appearance.
pub fn totals_by_transaction(records: &[TransactionRecord]) -> Vec<TransactionTotal> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<TransactionTotal> = Vec::new();

    for record in records {
        let idx = *index.entry(record.transaction.as_str()).or_insert_with(|| {
            totals.push(TransactionTotal {
                transaction: record.transaction.clone(),
                amount: 0.0,
                count: 0,
            });
            totals.len() - 1
        });
        totals[idx].amount += record.amount;
        totals[idx].count += 1;
    }

    totals
}

/// Group Amount by raw date string, in time order.
///
/// Dates that parse as `DD-Mon-YYYY` come first in calendar order; anything else
/// follows in first-appearance order.
pub fn amount_by_date(records: &[TransactionRecord]) -> Vec<DatePoint> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(Option<NaiveDate>, DatePoint)> = Vec::new();

    for record in records {
        let idx = *index.entry(record.date.as_str()).or_insert_with(|| {
            groups.push((
                record.parsed_date(),
                DatePoint {
                    date: record.date.clone(),
                    amount: 0.0,
                },
            ));
            groups.len() - 1
        });
        groups[idx].1.amount += record.amount;
    }

    // Stable sort: equal calendar dates keep first-appearance order
    groups.sort_by_key(|(parsed, _)| (parsed.is_none(), *parsed));
    groups.into_iter().map(|(_, point)| point).collect()
}

/// Headline numbers for one analysis run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Overview {
    pub document_count: usize,
    pub record_count: usize,
    pub dropped_count: usize,
    pub total_amount: f64,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

impl Overview {
    pub fn from_ledger(ledger: &Ledger) -> Self {
        let records = ledger.records();
        let dates = records.iter().filter_map(|r| r.parsed_date());
        Self {
            document_count: ledger.documents().len(),
            record_count: records.len(),
            dropped_count: ledger.drop_report().count(),
            total_amount: records.iter().map(|r| r.amount).sum(),
            first_date: dates.clone().min(),
            last_date: dates.max(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casfolio_core::{consolidate, ParsedDocument};

    fn rec(date: &str, amount: f64, transaction: &str) -> TransactionRecord {
        TransactionRecord::new(date, amount, 10.0, amount / 10.0, transaction, None)
    }

    #[test]
    fn test_totals_by_transaction() {
        let records = vec![
            rec("05-Jan-2023", 1000.0, "Purchase"),
            rec("05-Feb-2023", 500.0, "SIP Purchase"),
            rec("05-Mar-2023", 250.0, "Purchase"),
            rec("10-Mar-2023", -300.0, "Redemption"),
        ];

        let totals = totals_by_transaction(&records);
        assert_eq!(totals.len(), 3);
        assert_eq!(totals[0].transaction, "Purchase");
        assert_eq!(totals[0].amount, 1250.0);
        assert_eq!(totals[0].count, 2);
        assert_eq!(totals[1].transaction, "SIP Purchase");
        assert_eq!(totals[2].amount, -300.0);
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        let records = vec![rec("05-Jan-2023", 1.0, "Purchase"), rec("05-Jan-2023", 1.0, "PURCHASE")];
        assert_eq!(totals_by_transaction(&records).len(), 2);
    }

    #[test]
    fn test_share_of() {
        let total = TransactionTotal {
            transaction: "Purchase".into(),
            amount: 250.0,
            count: 1,
        };
        assert_eq!(total.share_of(1000.0), 25.0);
        assert_eq!(total.share_of(0.0), 0.0);
    }

    #[test]
    fn test_amount_by_date_is_time_ordered() {
        let records = vec![
            rec("05-Mar-2023", 1.0, "Purchase"),
            rec("05-Jan-2023", 2.0, "Purchase"),
            rec("garbled", 4.0, "Purchase"),
            rec("05-Mar-2023", 8.0, "Purchase"),
            rec("31-Dec-2022", 16.0, "Purchase"),
        ];

        let series = amount_by_date(&records);
        let dates: Vec<_> = series.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, vec!["31-Dec-2022", "05-Jan-2023", "05-Mar-2023", "garbled"]);
        assert_eq!(series[2].amount, 9.0);
    }

    #[test]
    fn test_distinct_renderings_stay_distinct() {
        let records = vec![rec("05-Jan-2023", 1.0, "Purchase"), rec("05-JAN-2023", 2.0, "Purchase")];
        let series = amount_by_date(&records);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].date, "05-Jan-2023");
        assert_eq!(series[1].date, "05-JAN-2023");
    }

    #[test]
    fn test_empty_ledger_views() {
        let ledger = consolidate(Vec::<ParsedDocument>::new());
        assert!(totals_by_transaction(ledger.records()).is_empty());
        assert!(amount_by_date(ledger.records()).is_empty());

        let overview = Overview::from_ledger(&ledger);
        assert_eq!(overview.record_count, 0);
        assert_eq!(overview.total_amount, 0.0);
        assert_eq!(overview.first_date, None);
    }

    #[test]
    fn test_overview() {
        let doc = ParsedDocument {
            name: "a.pdf".into(),
            records: vec![rec("05-Mar-2023", 100.0, "Purchase"), rec("05-Jan-2023", 50.0, "Purchase")],
            ..ParsedDocument::default()
        };
        let overview = Overview::from_ledger(&consolidate(vec![doc]));
        assert_eq!(overview.document_count, 1);
        assert_eq!(overview.record_count, 2);
        assert_eq!(overview.total_amount, 150.0);
        assert_eq!(overview.first_date, NaiveDate::from_ymd_opt(2023, 1, 5));
        assert_eq!(overview.last_date, NaiveDate::from_ymd_opt(2023, 3, 5));
    }
}
