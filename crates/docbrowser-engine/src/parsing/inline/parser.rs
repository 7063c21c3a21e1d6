use crate::parsing::rope::span::Span;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Link},
    types::InlineNode,
};

/// Parses inline content into a sequence of [`InlineNode`]s.
///
/// # Arguments
/// - `base`: Byte offset in the rope where `s` begins (for absolute span positions)
/// - `s`: The string content to parse (a line, or a block's content span)
///
/// # Raw Zone Precedence
/// Code spans are checked first and suppress all other parsing inside them.
/// `[a](b)` inside backticks is parsed as a code span, not a link. No
/// construct pairs its delimiters across a line break.
///
/// # Returns
/// A vector of inline nodes covering the entire input. Text between special
/// constructs is emitted as `InlineNode::Text`.
pub fn parse_inline(base: usize, s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Helper to flush accumulated text as a Text node
    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        let node = try_parse_code_span(&mut cur).or_else(|| try_parse_link(&mut cur));
        if let Some(node) = node {
            let sp = node.span();
            flush_text(&mut out, text_start, sp.start);
            text_start = sp.end;
            out.push(node);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// True when the text between two absolute positions contains a line break.
fn crosses_line(cur: &Cursor<'_>, from: usize, to: usize) -> bool {
    cur.s[from - cur.base..to - cur.base].contains('\n')
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns `None` if not at a backtick or if the code span isn't closed on
/// the same line. On failure, cursor position is restored.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // `
    let inner_start = cur.pos();

    while !cur.eof() {
        if cur.peek() == Some(CodeSpan::TICK) {
            break;
        }
        cur.bump();
    }
    let inner_end = cur.pos();

    if cur.peek() != Some(CodeSpan::TICK) || crosses_line(cur, inner_start, inner_end) {
        // Not closed, restore cursor
        *cur = saved;
        return None;
    }
    cur.bump(); // closing `
    let end = cur.pos();

    Some(InlineNode::CodeSpan {
        full: Span { start, end },
        inner: Span {
            start: inner_start,
            end: inner_end,
        },
    })
}

/// Attempts to parse a `[label](target)` link at the current position.
///
/// Returns `None` if not at `[` or if either closer is missing on this
/// line. On failure, cursor position is restored.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if !cur.starts_with(Link::OPEN.as_bytes()) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(Link::OPEN.len());
    let label_start = cur.pos();

    if !cur.seek(Link::MIDDLE) {
        *cur = saved;
        return None;
    }
    let label_end = cur.pos();
    cur.bump_n(Link::MIDDLE.len());
    let target_start = cur.pos();

    if !cur.seek(Link::CLOSE) || crosses_line(cur, label_start, cur.pos()) {
        *cur = saved;
        return None;
    }
    let target_end = cur.pos();
    cur.bump_n(Link::CLOSE.len());

    Some(InlineNode::Link {
        full: Span {
            start,
            end: cur.pos(),
        },
        label: Span {
            start: label_start,
            end: label_end,
        },
        target: Span {
            start: target_start,
            end: target_end,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_text() {
        let nodes = parse_inline(0, "hello world");
        assert_eq!(nodes, vec![InlineNode::Text(Span { start: 0, end: 11 })]);
    }

    #[test]
    fn parse_code_span() {
        let nodes = parse_inline(0, "`code`");
        assert_eq!(
            nodes,
            vec![InlineNode::CodeSpan {
                full: Span { start: 0, end: 6 },
                inner: Span { start: 1, end: 5 },
            }]
        );
    }

    #[test]
    fn parse_link() {
        let nodes = parse_inline(0, "[docs](https://example.com)");
        assert_eq!(
            nodes,
            vec![InlineNode::Link {
                full: Span { start: 0, end: 27 },
                label: Span { start: 1, end: 5 },
                target: Span { start: 7, end: 26 },
            }]
        );
    }

    #[test]
    fn link_between_text() {
        let nodes = parse_inline(100, "see [a](b) now");
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0], InlineNode::Text(Span { start: 100, end: 104 }));
        assert_eq!(nodes[1].span(), Span { start: 104, end: 110 });
        assert_eq!(nodes[2], InlineNode::Text(Span { start: 110, end: 114 }));
    }

    #[test]
    fn code_span_suppresses_link() {
        let nodes = parse_inline(0, "`[not](a link)`");
        assert_eq!(nodes.len(), 1);
        assert!(matches!(nodes[0], InlineNode::CodeSpan { .. }));
    }

    #[test]
    fn unclosed_link_becomes_text() {
        let nodes = parse_inline(0, "[label](missing paren");
        assert_eq!(nodes, vec![InlineNode::Text(Span { start: 0, end: 21 })]);
    }

    #[test]
    fn bracket_without_target_becomes_text() {
        let nodes = parse_inline(0, "[just brackets]");
        assert_eq!(nodes, vec![InlineNode::Text(Span { start: 0, end: 15 })]);
    }

    #[test]
    fn unclosed_code_span_becomes_text() {
        let nodes = parse_inline(0, "`unclosed code");
        assert_eq!(nodes, vec![InlineNode::Text(Span { start: 0, end: 14 })]);
    }

    #[test]
    fn code_span_does_not_cross_lines() {
        let nodes = parse_inline(0, "`a\nb`");
        assert_eq!(nodes, vec![InlineNode::Text(Span { start: 0, end: 5 })]);
    }

    #[test]
    fn empty_code_span() {
        let nodes = parse_inline(0, "``");
        assert!(matches!(nodes[0], InlineNode::CodeSpan { inner, .. } if inner.is_empty()));
    }
}
