use xi_rope::Rope;

use super::span::Span;

/// Extracts the text for a span from the rope as an owned String.
///
/// This allocates; prefer working with spans where possible.
pub fn slice_to_string(rope: &Rope, sp: Span) -> String {
    rope.slice_to_cow(sp.start..sp.end).into_owned()
}

/// Extracts the text of each span in order.
pub fn slices_to_strings(rope: &Rope, spans: &[Span]) -> Vec<String> {
    spans.iter().map(|sp| slice_to_string(rope, *sp)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_to_string_full_span() {
        let rope = Rope::from("hello world");
        assert_eq!(slice_to_string(&rope, Span::new(0, 11)), "hello world");
    }

    #[test]
    fn slice_to_string_partial_span() {
        let rope = Rope::from("hello world");
        assert_eq!(slice_to_string(&rope, Span::new(6, 11)), "world");
    }

    #[test]
    fn slices_keep_order() {
        let rope = Rope::from("| A | B |");
        let cells = slices_to_strings(&rope, &[Span::new(2, 3), Span::new(6, 7)]);
        assert_eq!(cells, vec!["A".to_string(), "B".to_string()]);
    }
}
