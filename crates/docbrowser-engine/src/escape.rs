//! Text escaping for content that must reach the page literally.

use std::borrow::Cow;

/// Replaces `&`, `<`, `>`, `"` and `'` with entities and changes nothing else.
///
/// Markdown syntax is not interpreted. Returns the input unchanged (borrowed)
/// when there is nothing to escape.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}
