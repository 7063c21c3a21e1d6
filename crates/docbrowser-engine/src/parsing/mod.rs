pub mod blocks;
pub mod inline;
pub mod rope;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

use blocks::{BlockBuilder, BlockNode, MarkdownLineClassifier};
use rope::lines_with_spans;

#[derive(Debug)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
}

pub fn parse_document(rope: &Rope) -> ParsedDoc {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    let mut lines = lines_with_spans(rope)
        .map(|lr| classifier.classify(&lr))
        .peekable();
    while let Some(lc) = lines.next() {
        builder.push(&lc, lines.peek());
    }

    ParsedDoc {
        blocks: builder.finish(),
    }
}
