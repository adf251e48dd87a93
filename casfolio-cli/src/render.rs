//! Plain-text tables for terminal output

use casfolio_core::{DropReport, Ledger};
use casfolio_report::{amount_by_date, totals_by_transaction, Overview};
use std::fmt::Write;

/// Overview, totals by transaction label and the amount-by-date series
pub fn render_summary(ledger: &Ledger) -> String {
    let overview = Overview::from_ledger(ledger);
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Parsed {} transactions from {} document(s) ({} line(s) dropped)",
        overview.record_count, overview.document_count, overview.dropped_count
    );

    if ledger.is_empty() {
        let _ = writeln!(out, "\nNo transactions found.");
        return out;
    }

    if let (Some(first), Some(last)) = (overview.first_date, overview.last_date) {
        let _ = writeln!(out, "Period: {first} .. {last}");
    }
    let _ = writeln!(out, "Total amount: {:.2}", overview.total_amount);

    let totals = totals_by_transaction(ledger.records());
    let label_w = totals
        .iter()
        .map(|t| t.transaction.chars().count())
        .max()
        .unwrap_or(0)
        .max("Transaction".len());

    let _ = writeln!(out, "\n## Totals by transaction\n");
    let _ = writeln!(
        out,
        "{:<label_w$}  {:>14}  {:>7}  {:>5}",
        "Transaction", "Amount", "Share", "Count"
    );
    for t in &totals {
        let _ = writeln!(
            out,
            "{:<label_w$}  {:>14.2}  {:>6.1}%  {:>5}",
            t.transaction,
            t.amount,
            t.share_of(overview.total_amount),
            t.count
        );
    }

    let series = amount_by_date(ledger.records());
    let date_w = series
        .iter()
        .map(|p| p.date.chars().count())
        .max()
        .unwrap_or(0)
        .max("Date".len());

    let _ = writeln!(out, "\n## Amount by date\n");
    let _ = writeln!(out, "{:<date_w$}  {:>14}", "Date", "Amount");
    for point in &series {
        let _ = writeln!(out, "{:<date_w$}  {:>14.2}", point.date, point.amount);
    }

    out
}

/// One line per rejected candidate line
pub fn render_drops(report: &DropReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "## Dropped lines ({})\n", report.count());
    for (code, count) in report.by_reason() {
        let _ = writeln!(out, "- {code}: {count}");
    }
    if !report.is_empty() {
        out.push('\n');
    }
    for d in report.lines() {
        let _ = writeln!(
            out,
            "{} p{} l{}: {} | {}",
            d.document,
            d.page,
            d.line_no,
            d.reason,
            d.line.trim()
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use casfolio_core::{consolidate, ParsedDocument, TransactionRecord};

    #[test]
    fn test_empty_summary() {
        let out = render_summary(&consolidate(Vec::<ParsedDocument>::new()));
        assert!(out.contains("Parsed 0 transactions from 0 document(s)"));
        assert!(out.contains("No transactions found."));
    }

    #[test]
    fn test_summary_tables() {
        let doc = ParsedDocument {
            name: "a.pdf".into(),
            records: vec![
                TransactionRecord::new("05-Jan-2023", 750.0, 10.0, 75.0, "Purchase", None),
                TransactionRecord::new("06-Jan-2023", 250.0, 10.0, 25.0, "SIP Purchase", None),
            ],
            ..ParsedDocument::default()
        };
        let out = render_summary(&consolidate(vec![doc]));
        assert!(out.contains("Period: 2023-01-05 .. 2023-01-06"));
        assert!(out.contains("Total amount: 1000.00"));
        assert!(out.contains("75.0%"));
        assert!(out.contains("06-Jan-2023"));
    }
}
