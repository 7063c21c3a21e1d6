use xi_rope::Rope;

use super::span::Span;

/// A single source line with its byte spans.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of the whole line, including its terminator if present.
    pub span: Span,
    /// Byte span of the line without the `\n` / `\r\n` terminator.
    pub text_span: Span,
    /// The line text without its terminator.
    pub text: String,
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `lines_raw` so terminators are counted in `span`, which keeps
/// consecutive line spans abutting. Adjacency of blocks is later decided
/// from these spans.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        offset += line.len();
        let text = line.trim_end_matches(['\r', '\n']);
        LineRef {
            span: Span { start, end: offset },
            text_span: Span {
                start,
                end: start + text.len(),
            },
            text: text.to_string(),
        }
    })
}
