use super::{
    classify::LineClass,
    kinds::{BlockQuote, Heading, ListItem, Table},
};
use crate::parsing::rope::span::Span;

/// A block opened by a single line. Offsets are relative to the line start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOpen {
    FencedCode { lang: Option<Span> },
    Heading { level: u8, content: usize },
    TableHeader,
    UnorderedListItem { content: usize },
    OrderedListItem { content: usize },
    BlockQuote { content: usize },
}

/// Decides which block, if any, `line` opens.
///
/// Precedence: fence, heading, table header, unordered item, ordered item,
/// blockquote. A pipe row only opens a table when `next` is a separator.
pub fn try_open_leaf(line: &LineClass, next: Option<&LineClass>) -> Option<BlockOpen> {
    if let Some(sig) = line.fence_sig {
        return Some(BlockOpen::FencedCode { lang: sig.info });
    }
    let text = line.text.as_str();
    if let Some((level, content)) = Heading::parse(text) {
        return Some(BlockOpen::Heading { level, content });
    }
    if Table::is_row(text) && next.is_some_and(|n| n.table_separator) {
        return Some(BlockOpen::TableHeader);
    }
    if let Some(content) = ListItem::unordered(text) {
        return Some(BlockOpen::UnorderedListItem { content });
    }
    if let Some(content) = ListItem::ordered(text) {
        return Some(BlockOpen::OrderedListItem { content });
    }
    if let Some(content) = BlockQuote::strip_prefix(text) {
        return Some(BlockOpen::BlockQuote { content });
    }
    None
}
