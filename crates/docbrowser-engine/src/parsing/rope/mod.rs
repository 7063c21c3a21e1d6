pub mod lines;
pub mod slice;
pub mod span;

pub use lines::{LineRef, lines_with_spans};
pub use slice::{slice_to_string, slices_to_strings};
pub use span::Span;
