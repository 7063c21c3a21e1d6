//! # Document Renderer
//!
//! Top-level entry point: raw Markdown in, HTML fragment out.
//!
//! Rendering never fails. Unrecognised syntax degrades to paragraph text
//! with its delimiters left in place. Each call works on its own copy of
//! the input, so renders are independent of each other.

mod html;

use serde::{Deserialize, Serialize};
use xi_rope::Rope;

use crate::parsing::parse_document;

/// Switches for output that differs from the default rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Wrap runs of ordered items in `<ol>`. Off by default: ordered items
    /// are emitted as bare `<li>` elements.
    pub wrap_ordered_lists: bool,
    /// Put the fence's language tag on the code element as
    /// `class="language-TAG"`.
    pub code_language_class: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Renders a whole document to an HTML fragment.
    ///
    /// Blocks are emitted in source order and joined with `\n`. Empty input
    /// yields an empty string.
    pub fn render(&self, markdown: &str) -> String {
        let rope = Rope::from(markdown);
        let doc = parse_document(&rope);
        html::write_blocks(&rope, &doc.blocks, self.options).join("\n")
    }
}

/// Renders with default options.
pub fn render_markdown(markdown: &str) -> String {
    Renderer::default().render(markdown)
}
