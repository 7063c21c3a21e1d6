/// Strong and regular emphasis markers.
///
/// Substitution runs over plain text only. Doubled markers are replaced
/// first so `**x**` is never split into two single-marker spans.
pub struct Emphasis;

impl Emphasis {
    /// Markers wrapped in `<strong>`, in substitution order.
    pub const STRONG: [&'static str; 2] = ["**", "__"];
    /// Markers wrapped in `<em>`, in substitution order.
    pub const EMPHASIS: [&'static str; 2] = ["*", "_"];

    /// Applies strong then regular emphasis to one line of text.
    pub fn apply(text: &str) -> String {
        let mut out = text.to_string();
        for marker in Self::STRONG {
            out = wrap_pairs(&out, marker, "strong");
        }
        for marker in Self::EMPHASIS {
            out = wrap_pairs(&out, marker, "em");
        }
        out
    }
}

/// Wraps each non-overlapping `marker…marker` pair in `<tag>`, pairing every
/// opener with the nearest following marker. An opener with no closer, and
/// everything after it, is left untouched. An opener directly followed by
/// its closer is literal text, so `**` on its own never becomes `<em></em>`.
fn wrap_pairs(text: &str, marker: &str, tag: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find(marker) {
        let inner = &rest[open + marker.len()..];
        let Some(close) = inner.find(marker) else {
            break;
        };
        if close == 0 {
            out.push_str(&rest[..open + marker.len()]);
            rest = inner;
            continue;
        }
        out.push_str(&rest[..open]);
        out.push('<');
        out.push_str(tag);
        out.push('>');
        out.push_str(&inner[..close]);
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
        rest = &inner[close + marker.len()..];
    }
    out.push_str(rest);
    out
}
