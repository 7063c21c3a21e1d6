use crate::parsing::rope::span::Span;

use super::{
    classify::LineClass,
    kinds::{CodeFence, Table},
    open::{BlockOpen, try_open_leaf},
    types::{BlockKind, BlockNode},
};

#[derive(Debug, Clone, Copy)]
enum LeafState {
    None,
    Paragraph {
        start: usize,
        content_start: usize,
        content_end: usize,
        last_line_end: usize,
    },
    Fence {
        start: usize,
        lang: Option<Span>,
        body_start: usize,
        last_line_end: usize,
    },
    Table {
        separator_pending: bool,
    },
}

/// Turns classified lines into a flat list of [`BlockNode`]s.
///
/// Lines are pushed one at a time together with the line after them; the
/// lookahead is only used to confirm a table header.
pub struct BlockBuilder {
    leaf: LeafState,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass, next: Option<&LineClass>) {
        if self.in_fence() {
            self.consume_fence_line(c);
            return;
        }

        if let LeafState::Table { separator_pending } = self.leaf {
            if separator_pending {
                self.consume_separator(c);
                return;
            }
            if !c.is_blank && Table::is_row(&c.text) {
                self.push_table_row(c);
                return;
            }
            self.leaf = LeafState::None;
        }

        if c.is_blank {
            self.flush_paragraph();
            return;
        }

        if let Some(open) = try_open_leaf(c, next) {
            self.flush_paragraph();
            self.open_leaf(open, c);
            return;
        }

        self.extend_paragraph(c);
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush
        self.flush_paragraph();
        self.flush_fence();
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn open_leaf(&mut self, open: BlockOpen, c: &LineClass) {
        let base = c.text_span.start;
        let after = |offset: usize| Span::new(base + offset, c.text_span.end);
        match open {
            BlockOpen::FencedCode { lang } => {
                self.leaf = LeafState::Fence {
                    start: c.line.start,
                    lang: lang.map(|sp| sp.offset(base)),
                    body_start: c.line.end,
                    last_line_end: c.line.end,
                };
            }
            BlockOpen::Heading { level, content } => {
                self.emit(BlockKind::Heading { level }, c.line, after(content));
            }
            BlockOpen::UnorderedListItem { content } => {
                self.emit(BlockKind::UnorderedListItem, c.line, after(content));
            }
            BlockOpen::OrderedListItem { content } => {
                self.emit(BlockKind::OrderedListItem, c.line, after(content));
            }
            BlockOpen::BlockQuote { content } => {
                self.emit(BlockKind::BlockQuote, c.line, after(content));
            }
            BlockOpen::TableHeader => {
                let cells = Self::cells(c);
                self.emit(BlockKind::TableHeader { cells }, c.line, c.text_span);
                self.leaf = LeafState::Table {
                    separator_pending: true,
                };
            }
        }
    }

    fn emit(&mut self, kind: BlockKind, span: Span, content_span: Span) {
        self.out.push(BlockNode {
            kind,
            span,
            content_span,
        });
    }

    fn cells(c: &LineClass) -> Vec<Span> {
        Table::split_cells(&c.text)
            .into_iter()
            .map(|sp| sp.offset(c.text_span.start))
            .collect()
    }

    fn consume_separator(&mut self, c: &LineClass) {
        // The header was only opened because this line is a separator.
        if let Some(header) = self.out.last_mut() {
            header.span.end = c.line.end;
        }
        self.leaf = LeafState::Table {
            separator_pending: false,
        };
    }

    fn push_table_row(&mut self, c: &LineClass) {
        let cells = Self::cells(c);
        self.emit(BlockKind::TableRow { cells }, c.line, c.text_span);
    }

    fn consume_fence_line(&mut self, c: &LineClass) {
        let LeafState::Fence {
            start,
            lang,
            body_start,
            ..
        } = self.leaf
        else {
            return;
        };

        if CodeFence::closes(c.fence_sig) {
            self.emit(
                BlockKind::FencedCode { lang },
                Span::new(start, c.line.end),
                Span::new(body_start, c.line.start),
            );
            self.leaf = LeafState::None;
            return;
        }

        self.leaf = LeafState::Fence {
            start,
            lang,
            body_start,
            last_line_end: c.line.end,
        };
    }

    fn extend_paragraph(&mut self, c: &LineClass) {
        match self.leaf {
            LeafState::Paragraph {
                start,
                content_start,
                ..
            } => {
                self.leaf = LeafState::Paragraph {
                    start,
                    content_start,
                    content_end: c.text_span.end,
                    last_line_end: c.line.end,
                };
            }
            _ => {
                self.leaf = LeafState::Paragraph {
                    start: c.line.start,
                    content_start: c.text_span.start,
                    content_end: c.text_span.end,
                    last_line_end: c.line.end,
                };
            }
        }
    }

    fn flush_paragraph(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Paragraph {
            start,
            content_start,
            content_end,
            last_line_end,
        } = prev
        {
            self.emit(
                BlockKind::Paragraph,
                Span::new(start, last_line_end),
                Span::new(content_start, content_end),
            );
        } else {
            self.leaf = prev; // put back non-paragraph leaf (e.g. fence)
        }
    }

    fn flush_fence(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Fence {
            start,
            lang,
            body_start,
            last_line_end,
        } = prev
        {
            // Unterminated fence: the body runs to end of input
            self.emit(
                BlockKind::FencedCode { lang },
                Span::new(start, last_line_end),
                Span::new(body_start, last_line_end),
            );
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
