//! # Block Parsing
//!
//! Two-phase block scanning producing a flat sequence of blocks.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts (blank status, fence signature, table separator)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` consumes lines with one
//!    line of lookahead and emits `BlockNode`s as blocks open and close
//!
//! ## Modules
//!
//! - **`types`**: Core types (`BlockNode`, `BlockKind`)
//! - **`kinds`**: Block-specific syntax (Heading, ListItem, BlockQuote, CodeFence, Table, Paragraph)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`open`**: `try_open_leaf` dispatch for detecting block openers
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Blocks do not nest: list items, quotes and table rows are single lines
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - All block nodes store byte spans into the rope; blocks on consecutive
//!   lines have abutting spans, which is how runs of list items are found

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::{BlockKind, BlockNode};
