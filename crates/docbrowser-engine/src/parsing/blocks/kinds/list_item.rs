use std::sync::OnceLock;

use regex::Regex;

/// List item markers. Items are single-line; there is no nesting.
pub struct ListItem;

impl ListItem {
    pub const BULLET: &'static str = "- ";

    /// Content offset of an unordered item (`- text`).
    pub fn unordered(line: &str) -> Option<usize> {
        line.starts_with(Self::BULLET).then_some(Self::BULLET.len())
    }

    /// Content offset of an ordered item (`12. text`).
    pub fn ordered(line: &str) -> Option<usize> {
        static ORDERED_MARKER: OnceLock<Regex> = OnceLock::new();
        let re = ORDERED_MARKER
            .get_or_init(|| Regex::new(r"^[0-9]+\. ").expect("Invalid ordered list regex"));
        re.find(line).map(|m| m.end())
    }
}
