/// Inline link `[label](target)` with owned delimiters.
///
/// The label ends at the first `](` after the opening bracket and the target
/// at the first `)` after that, so neither can contain its own closer.
pub struct Link;

impl Link {
    pub const OPEN: &'static str = "[";
    pub const MIDDLE: &'static str = "](";
    pub const CLOSE: &'static str = ")";
}
