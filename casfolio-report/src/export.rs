//! Ledger export in the statement's column layout

use anyhow::{Context, Result};
use casfolio_core::{Ledger, TransactionRecord};
use std::io::Write;

/// Write records as CSV with header `Date,Amount,NAV,Units,Transaction,Balance`.
/// A missing balance is an empty cell.
pub fn write_csv<W: Write>(records: &[TransactionRecord], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    // serialize() only emits a header once it sees a first record
    if records.is_empty() {
        wtr.write_record(["Date", "Amount", "NAV", "Units", "Transaction", "Balance"])?;
    }
    for record in records {
        wtr.serialize(record).context("writing csv row")?;
    }
    wtr.flush().context("flushing csv output")?;
    Ok(())
}

/// Pretty JSON of the full ledger, drop report included when non-empty
pub fn to_json(ledger: &Ledger) -> Result<String> {
    serde_json::to_string_pretty(ledger).context("serializing ledger")
}

#[cfg(test)]
mod tests {
    use super::*;
    use casfolio_core::{consolidate, ParsedDocument};

    #[test]
    fn test_csv_layout() {
        let records = vec![
            TransactionRecord::new("05-Jan-2023", 1000.0, 10.5, 95.238, "Purchase", None),
            TransactionRecord::new("06-Jan-2023", 500.0, 10.0, 50.0, "SIP Purchase", Some(145.238)),
        ];
        let mut out = Vec::new();
        write_csv(&records, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Date,Amount,NAV,Units,Transaction,Balance");
        assert_eq!(lines[1], "05-Jan-2023,1000.0,10.5,95.238,Purchase,");
        assert_eq!(lines[2], "06-Jan-2023,500.0,10.0,50.0,SIP Purchase,145.238");
    }

    #[test]
    fn test_csv_empty_has_header() {
        let mut out = Vec::new();
        write_csv(&[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Date,Amount,NAV,Units,Transaction,Balance\n");
    }

    #[test]
    fn test_json_shape() {
        let doc = ParsedDocument {
            name: "a.pdf".into(),
            records: vec![TransactionRecord::new("05-Jan-2023", 1.0, 1.0, 1.0, "Purchase", None)],
            ..ParsedDocument::default()
        };
        let json = to_json(&consolidate(vec![doc])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["records"][0]["Date"], "05-Jan-2023");
        assert_eq!(value["documents"][0], "a.pdf");
        assert!(value.get("drops").is_none());
    }
}
