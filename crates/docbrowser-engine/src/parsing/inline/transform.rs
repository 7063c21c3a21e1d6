use super::{
    kinds::Emphasis,
    parser::parse_inline,
    types::InlineNode,
};
use crate::parsing::rope::span::Span;

/// Stands in for a rendered code span or link while emphasis is paired.
const ZONE: char = '\u{FFFC}';

/// Applies inline substitutions to a line or block of text.
///
/// Each line is handled on its own. Within a line the order is fixed:
/// strong emphasis, emphasis, links, then inline code. Emphasis pairs over
/// the whole line, so markers may surround a link or code span, but code
/// span contents and link targets are raw zones it never rewrites. Link
/// labels get the full inline pass. Unmatched delimiters are copied through
/// unchanged and nothing is HTML-escaped here.
pub fn transform_inline(text: &str) -> String {
    text.split('\n')
        .map(transform_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn transform_line(line: &str) -> String {
    let at = |sp: Span| slice(line, sp);
    let mut masked = String::with_capacity(line.len());
    let mut zones: Vec<String> = Vec::new();

    for node in parse_inline(0, line) {
        match node {
            InlineNode::Text(sp) => {
                for c in at(sp).chars() {
                    // A literal placeholder char is its own zone
                    if c == ZONE {
                        zones.push(ZONE.to_string());
                    }
                    masked.push(c);
                }
            }
            InlineNode::Link { label, target, .. } => {
                zones.push(format!(
                    "<a href=\"{}\" target=\"_blank\">{}</a>",
                    at(target),
                    transform_line(at(label))
                ));
                masked.push(ZONE);
            }
            InlineNode::CodeSpan { inner, .. } => {
                zones.push(format!("<code>{}</code>", at(inner)));
                masked.push(ZONE);
            }
        }
    }

    // Emphasis keeps every non-marker char in order, so zones refill in order.
    let mut zones = zones.into_iter();
    let mut out = String::with_capacity(line.len());
    for c in Emphasis::apply(&masked).chars() {
        match (c == ZONE).then(|| zones.next()).flatten() {
            Some(zone) => out.push_str(&zone),
            None => out.push(c),
        }
    }
    out
}

fn slice(line: &str, sp: Span) -> &str {
    &line[sp.start..sp.end]
}
