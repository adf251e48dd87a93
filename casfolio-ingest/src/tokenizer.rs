//! Column splitting for candidate lines.
//!
//! Statement text has no column markers. The default heuristic treats a run of two
//! or more whitespace characters as a column boundary, so labels such as
//! `Systematic Investment` keep their single spaces.

/// Splits one line into positional column tokens
pub trait LineTokenizer: Send + Sync {
    fn tokenize<'a>(&self, line: &'a str) -> Vec<&'a str>;
}

/// Splits on runs of at least two whitespace characters.
///
/// The line is split as-is: a leading run yields an empty first token and a
/// trailing run an empty last token, so positions never shift.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceRunTokenizer;

impl LineTokenizer for WhitespaceRunTokenizer {
    fn tokenize<'a>(&self, line: &'a str) -> Vec<&'a str> {
        let mut tokens = Vec::new();
        let mut start = 0;
        // (byte offset, char count) of the whitespace run currently being scanned
        let mut run: Option<(usize, usize)> = None;

        for (i, c) in line.char_indices() {
            if c.is_whitespace() {
                run = match run {
                    Some((at, n)) => Some((at, n + 1)),
                    None => Some((i, 1)),
                };
                continue;
            }
            if let Some((at, n)) = run.take() {
                if n >= 2 {
                    tokens.push(&line[start..at]);
                    start = i;
                }
            }
        }
        if let Some((at, n)) = run {
            if n >= 2 {
                tokens.push(&line[start..at]);
                start = line.len();
            }
        }
        tokens.push(&line[start..]);
        tokens
    }
}

/// Slices a line at fixed byte offsets, for layouts whose column positions are known.
///
/// `offsets` are the start of every column after the first, in ascending order.
/// Each cell is trimmed and blank cells keep their position; lines shorter than
/// an offset yield fewer tokens.
#[derive(Debug, Clone, Default)]
pub struct ColumnOffsetTokenizer {
    offsets: Vec<usize>,
}

impl ColumnOffsetTokenizer {
    pub fn new(mut offsets: Vec<usize>) -> Self {
        offsets.sort_unstable();
        offsets.dedup();
        Self { offsets }
    }
}

impl LineTokenizer for ColumnOffsetTokenizer {
    fn tokenize<'a>(&self, line: &'a str) -> Vec<&'a str> {
        let mut tokens = Vec::new();
        let mut start = 0;
        for &offset in &self.offsets {
            if offset >= line.len() {
                break;
            }
            // Never split inside a multi-byte character
            let end = (offset..=line.len())
                .find(|&i| line.is_char_boundary(i))
                .unwrap_or(line.len());
            tokens.push(line[start..end].trim());
            start = end;
        }
        tokens.push(line[start..].trim());
        tokens
    }
}
