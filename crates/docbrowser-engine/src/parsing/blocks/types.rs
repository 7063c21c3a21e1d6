use crate::parsing::rope::span::Span;

/// The kind of a block. Blocks never nest; a document is a flat sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// A `#`, `##` or `###` heading.
    Heading {
        /// 1 to 3.
        level: u8,
    },
    /// A `- ` line.
    UnorderedListItem,
    /// A `N. ` line.
    OrderedListItem,
    /// The first row of a pipe table. Its span also covers the separator.
    TableHeader {
        /// Trimmed cell spans.
        cells: Vec<Span>,
    },
    /// A body row of the table opened by the preceding header.
    TableRow {
        /// Trimmed cell spans.
        cells: Vec<Span>,
    },
    /// A single `> ` line.
    BlockQuote,
    /// A ``` fenced code block.
    FencedCode {
        /// Info string on the opening fence, if any.
        lang: Option<Span>,
    },
    /// A paragraph block (default when no other block opener matches).
    Paragraph,
}

/// A parsed block node with its kind and spans.
#[derive(Debug, Clone)]
pub struct BlockNode {
    /// The kind of block (Paragraph, FencedCode, etc.)
    pub kind: BlockKind,
    /// Full byte span of the block including markers, fences and the final
    /// line terminator. Blocks on consecutive lines have abutting spans.
    pub span: Span,
    /// Span of the text that is rendered: heading/item/quote text after the
    /// marker, paragraph lines, or the code body between fences.
    pub content_span: Span,
}
