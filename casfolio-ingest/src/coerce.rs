//! Positional field coercion: tokens -> typed [`TransactionRecord`].
//!
//! Column order is fixed: Date, Amount, NAV, Units, Transaction, optional Balance.
//! Tokens past the sixth are ignored.

use casfolio_core::{DropReason, NumericField, TransactionRecord};
use serde::{Deserialize, Serialize};

/// Minimum column count of a transaction line
pub const MIN_TOKENS: usize = 5;

/// Thousands separator stripped before numeric parsing
pub const DEFAULT_SEPARATORS: &[char] = &[','];

/// What to do when a sixth (Balance) column exists but is not a number
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BalancePolicy {
    /// Keep the record with Balance absent
    #[default]
    Keep,
    /// Reject the whole line, same as a bad Amount/NAV/Units
    Drop,
}

/// Remove thousands separators and parse a decimal number.
///
/// NaN and infinity spellings are rejected: a statement column never holds them.
pub fn parse_number(token: &str, separators: &[char]) -> Option<f64> {
    let cleaned: String = token.chars().filter(|c| !separators.contains(c)).collect();
    let value: f64 = cleaned.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

fn required(
    tokens: &[&str],
    idx: usize,
    field: NumericField,
    separators: &[char],
) -> Result<f64, DropReason> {
    parse_number(tokens[idx], separators).ok_or_else(|| DropReason::InvalidNumber {
        field,
        token: tokens[idx].to_string(),
    })
}

/// Map column tokens onto a record, or say why the line is not one.
pub fn coerce(
    tokens: &[&str],
    policy: BalancePolicy,
    separators: &[char],
) -> Result<TransactionRecord, DropReason> {
    if tokens.len() < MIN_TOKENS {
        return Err(DropReason::TooFewTokens { found: tokens.len() });
    }

    let amount = required(tokens, 1, NumericField::Amount, separators)?;
    let nav = required(tokens, 2, NumericField::Nav, separators)?;
    let units = required(tokens, 3, NumericField::Units, separators)?;

    let balance = match tokens.get(5) {
        None => None,
        Some(raw) => match (parse_number(raw, separators), policy) {
            (Some(value), _) => Some(value),
            (None, BalancePolicy::Keep) => None,
            (None, BalancePolicy::Drop) => {
                return Err(DropReason::InvalidNumber {
                    field: NumericField::Balance,
                    token: raw.to_string(),
                });
            }
        },
    };

    Ok(TransactionRecord {
        date: tokens[0].to_string(),
        amount,
        nav,
        units,
        transaction: tokens[4].to_string(),
        balance,
    })
}
