use xi_rope::Rope;

use crate::parsing::{
    blocks::{BlockKind, BlockNode},
    rope::slice::{slice_to_string, slices_to_strings},
};

/// One line per block: kind, then the rendered-relevant text.
///
/// Keeps scanner tests readable without depending on byte offsets.
pub fn describe(rope: &Rope, blocks: &[BlockNode]) -> Vec<String> {
    blocks
        .iter()
        .map(|b| {
            let text = slice_to_string(rope, b.content_span);
            match &b.kind {
                BlockKind::Heading { level } => format!("Heading({level}) {text:?}"),
                BlockKind::UnorderedListItem => format!("Bullet {text:?}"),
                BlockKind::OrderedListItem => format!("Numbered {text:?}"),
                BlockKind::BlockQuote => format!("Quote {text:?}"),
                BlockKind::Paragraph => format!("Paragraph {text:?}"),
                BlockKind::TableHeader { cells } => {
                    format!("TableHeader {:?}", slices_to_strings(rope, cells))
                }
                BlockKind::TableRow { cells } => {
                    format!("TableRow {:?}", slices_to_strings(rope, cells))
                }
                BlockKind::FencedCode { lang } => {
                    let lang = lang.map(|sp| slice_to_string(rope, sp));
                    format!("FencedCode({lang:?}) {text:?}")
                }
            }
        })
        .collect()
}
