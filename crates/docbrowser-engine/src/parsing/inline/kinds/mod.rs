//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `TICK = b'\`'` - raw zone that suppresses other parsing
//! - **`Link`**: `OPEN = "["`, `MIDDLE = "]("`, `CLOSE = ")"`
//! - **`Emphasis`**: `**`/`__` strong and `*`/`_` emphasis markers
//!
//! The parser calls these constants; it never hardcodes `](` or `` ` ``.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::Link;
