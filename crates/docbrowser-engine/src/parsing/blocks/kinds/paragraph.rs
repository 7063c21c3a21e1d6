/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters. Consecutive lines that open no other block
/// form one paragraph; a blank line or any block opener ends it.
pub struct Paragraph;

impl Paragraph {
    /// Splits paragraph content into its physical lines, dropping any `\r`.
    pub fn lines(content: &str) -> impl Iterator<Item = &str> {
        content.split('\n').map(|l| l.trim_end_matches('\r'))
    }
}
