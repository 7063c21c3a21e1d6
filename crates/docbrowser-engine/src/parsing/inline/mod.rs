//! # Inline Parsing
//!
//! Cursor-based inline parsing with explicit raw zones, plus the
//! substitution pass that turns inline nodes into HTML.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, CodeSpan, Link)
//! - **`kinds`**: Inline-specific types with owned delimiters (CodeSpan, Link, Emphasis)
//! - **`cursor`**: `Cursor` for byte-by-byte parsing with position tracking
//! - **`parser`**: `parse_inline()` main entry point with `try_parse_*` helpers
//! - **`transform`**: `transform_inline()` renders a line or block of text
//!
//! ## Raw Zone Precedence
//!
//! Code spans take precedence: `` `[a](b)` `` parses as a single CodeSpan,
//! not as text containing a link.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod transform;
pub mod types;

pub use parser::parse_inline;
pub use transform::transform_inline;
pub use types::InlineNode;
