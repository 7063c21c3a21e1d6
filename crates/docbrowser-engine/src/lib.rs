pub mod escape;
pub mod io;
pub mod navigation;
pub mod parsing;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use escape::escape_html;
pub use io::{ContentSource, FsContentSource, IoError, Page, document_path, load_page};
pub use navigation::{Category, Menu, NavError, Navigator, topic_label};
pub use parsing::inline::transform_inline;
pub use render::{RenderOptions, Renderer, render_markdown};
