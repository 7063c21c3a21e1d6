/// Blockquote syntax. Quotes are one line each; nested quotes are not
/// recognised, so `> > x` is a quote whose text is `> x`.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: &'static str = "> ";

    /// Returns the byte offset where quoted text begins.
    pub fn strip_prefix(line: &str) -> Option<usize> {
        line.starts_with(Self::PREFIX).then_some(Self::PREFIX.len())
    }
}
