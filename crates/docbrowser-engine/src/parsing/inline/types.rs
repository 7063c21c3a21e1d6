use crate::parsing::rope::span::Span;

/// A parsed inline node with byte spans into the rope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Text outside any code span or link. Emphasis markers stay in here and
    /// are substituted when the node is rendered.
    Text(Span),
    /// A code span (backtick-delimited). This is a "raw zone" - no parsing inside.
    CodeSpan {
        /// Full span including backticks.
        full: Span,
        /// Inner span (content between backticks).
        inner: Span,
    },
    /// A `[label](target)` link.
    Link {
        /// Full span including brackets and parentheses.
        full: Span,
        /// Visible text between the brackets.
        label: Span,
        /// Destination between the parentheses. Never parsed for emphasis.
        target: Span,
    },
}

impl InlineNode {
    /// Extracts the full span from any inline node variant.
    pub fn span(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::CodeSpan { full, .. } => *full,
            InlineNode::Link { full, .. } => *full,
        }
    }
}
