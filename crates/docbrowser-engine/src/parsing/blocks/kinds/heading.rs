/// ATX heading syntax (`#`, `##`, `###`).
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    /// Deeper headings (`####`) are not recognised and fall through to
    /// paragraph text.
    pub const MAX_LEVEL: u8 = 3;

    /// Returns `(level, content_offset)` when the line is a heading.
    ///
    /// The marker run must start the line and be followed by a single space.
    pub fn parse(line: &str) -> Option<(u8, usize)> {
        let b = line.as_bytes();
        let level = b.iter().take_while(|&&c| c == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL as usize {
            return None;
        }
        if b.get(level) != Some(&b' ') {
            return None;
        }
        Some((level as u8, level + 1))
    }
}
