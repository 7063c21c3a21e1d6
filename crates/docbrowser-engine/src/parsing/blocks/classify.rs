use crate::parsing::rope::{lines::LineRef, span::Span};

use super::kinds::{CodeFence, FenceSig, Table};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line, terminator included.
    pub line: Span,
    /// Byte span of the line text without its terminator.
    pub text_span: Span,
    /// Line text without its terminator.
    pub text: String,
    /// Whether the line is whitespace only.
    pub is_blank: bool,
    /// Set when the line looks like a fence opener/closer.
    pub fence_sig: Option<FenceSig>,
    /// Whether the line is a table header separator (`| --- | --- |`).
    pub table_separator: bool,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        LineClass {
            line: lr.span,
            text_span: lr.text_span,
            text: lr.text.clone(),
            is_blank: lr.text.trim().is_empty(),
            fence_sig: CodeFence::sig(&lr.text),
            table_separator: Table::is_separator(&lr.text),
        }
    }
}
