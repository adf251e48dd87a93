//! Candidate line selection.
//!
//! A statement line is a candidate when it carries a `DD-Mon-YYYY` shaped date
//! anywhere in it. Headers and footers with a date in them pass here too; the
//! tokenizer rejects those later.

use regex::Regex;
use std::sync::LazyLock;

static DATE_SIGNAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{2}-[A-Za-z]{3}-\d{4}").expect("date signal pattern is valid"));

/// A page line that matched the date signal, borrowed verbatim from the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateLine<'a> {
    /// 1-based line number within the page
    pub line_no: usize,
    pub text: &'a str,
}

/// Returns true if the line contains a date-shaped substring
pub fn has_date_signal(line: &str) -> bool {
    DATE_SIGNAL.is_match(line)
}

/// Select candidate transaction lines from one page, in page order.
///
/// Lines split on `\n` only, so a `\r` before it stays part of the line.
pub fn classify(page_text: &str) -> Vec<CandidateLine<'_>> {
    page_text
        .split('\n')
        .enumerate()
        .filter(|(_, line)| has_date_signal(line))
        .map(|(i, text)| CandidateLine { line_no: i + 1, text })
        .collect()
}
