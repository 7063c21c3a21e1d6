use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::rope::span::Span;

/// Pipe table syntax.
///
/// A table is a header row, a separator row of dashes and colons, then body
/// rows. Escaped pipes are not supported: every `|` splits a cell.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';

    /// A line bounded by pipes on both ends.
    pub fn is_row(line: &str) -> bool {
        let t = line.trim();
        t.len() >= 2 && t.starts_with(Self::PIPE) && t.ends_with(Self::PIPE)
    }

    /// A `| --- | :-: |` style line. Needs at least one dash.
    pub fn is_separator(line: &str) -> bool {
        static SEPARATOR: OnceLock<Regex> = OnceLock::new();
        let re = SEPARATOR.get_or_init(|| {
            Regex::new(r"^\s*\|[\s:|-]*-[\s:|-]*\|\s*$").expect("Invalid table separator regex")
        });
        re.is_match(line)
    }

    /// Splits a row into trimmed cell spans relative to the line start.
    ///
    /// The empty pieces before a leading pipe and after a trailing pipe are
    /// dropped; empty cells in the middle are kept.
    pub fn split_cells(line: &str) -> Vec<Span> {
        let mut cells = Vec::new();
        let mut start = 0usize;
        for (i, c) in line.char_indices() {
            if c == Self::PIPE {
                cells.push(Self::trimmed(line, start, i));
                start = i + 1;
            }
        }
        cells.push(Self::trimmed(line, start, line.len()));

        if cells.first().is_some_and(|c| c.is_empty()) {
            cells.remove(0);
        }
        if cells.last().is_some_and(|c| c.is_empty()) {
            cells.pop();
        }
        cells
    }

    fn trimmed(line: &str, start: usize, end: usize) -> Span {
        let piece = &line[start..end];
        if piece.trim().is_empty() {
            return Span::new(start, start);
        }
        let lead = piece.len() - piece.trim_start().len();
        let trail = piece.len() - piece.trim_end().len();
        Span::new(start + lead, end - trail)
    }
}
