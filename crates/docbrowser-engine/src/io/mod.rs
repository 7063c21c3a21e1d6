//! Content loading: from a category/topic pair to a displayable page.
//!
//! Fetch failures stop here. The caller always gets a page, either the
//! rendered document or a placeholder naming the file that was expected.

use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

use crate::escape::escape_html;
use crate::navigation::topic_label;
use crate::render::Renderer;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
}

/// Where raw Markdown comes from.
pub trait ContentSource {
    /// Returns the raw text of the document at `path`.
    fn fetch(&self, path: &RelativePath) -> Result<String, IoError>;

    /// Human-readable location of `path`, shown when it cannot be fetched.
    fn location(&self, path: &RelativePath) -> String {
        path.as_str().to_string()
    }
}

/// Documents stored as files under a content root directory.
#[derive(Debug, Clone)]
pub struct FsContentSource {
    root: PathBuf,
}

impl FsContentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ContentSource for FsContentSource {
    fn fetch(&self, path: &RelativePath) -> Result<String, IoError> {
        read_file(path, &self.root)
    }

    fn location(&self, path: &RelativePath) -> String {
        path.to_path(&self.root).display().to_string()
    }
}

/// Content-root relative path of a topic's document: `<category>/<topic>.md`.
pub fn document_path(category: &str, topic: &str) -> RelativePathBuf {
    RelativePathBuf::from(format!("{category}/{topic}.md"))
}

/// Read a markdown file and return its content
pub fn read_file(relative_path: &RelativePath, content_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(content_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

pub fn validate_content_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidContentDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}

/// A page ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub category: String,
    pub topic: String,
    pub html: String,
    /// False when `html` is the placeholder because the fetch failed.
    pub found: bool,
}

/// Fetches and renders the document for a category/topic pair.
///
/// Any fetch error is logged and replaced by [`placeholder_html`]; the
/// renderer is only invoked on text that was actually fetched.
pub fn load_page(
    source: &impl ContentSource,
    renderer: &Renderer,
    category: &str,
    topic: &str,
) -> Page {
    let path = document_path(category, topic);
    let (html, found) = match source.fetch(&path) {
        Ok(markdown) => {
            log::debug!("Rendering {path} ({} bytes)", markdown.len());
            (renderer.render(&markdown), true)
        }
        Err(e) => {
            log::warn!("Failed to load content for {path}: {e}");
            (placeholder_html(topic, &source.location(&path)), false)
        }
    };
    Page {
        category: category.to_string(),
        topic: topic.to_string(),
        html,
        found,
    }
}

/// Fragment shown in place of a document that could not be fetched.
pub fn placeholder_html(topic: &str, location: &str) -> String {
    format!(
        "<h1>{}</h1>\n<p>Content under development. Expected file at: <code>{}</code></p>",
        escape_html(&topic_label(topic).to_uppercase()),
        escape_html(location)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_content_dir, create_test_file};
    use std::collections::HashMap;

    struct MemorySource(HashMap<String, String>);

    impl ContentSource for MemorySource {
        fn fetch(&self, path: &RelativePath) -> Result<String, IoError> {
            self.0
                .get(path.as_str())
                .cloned()
                .ok_or_else(|| IoError::NotFound(PathBuf::from(path.as_str())))
        }
    }

    #[test]
    fn document_path_layout() {
        assert_eq!(document_path("python", "data-types").as_str(), "python/data-types.md");
    }

    #[test]
    fn load_page_renders_found_document() {
        let source = MemorySource(HashMap::from([(
            "python/syntax.md".to_string(),
            "# Syntax\n\nUse **indentation**.".to_string(),
        )]));

        let page = load_page(&source, &Renderer::default(), "python", "syntax");

        assert!(page.found);
        assert_eq!(
            page.html,
            "<h1>Syntax</h1>\n<p>Use <strong>indentation</strong>.</p>"
        );
    }

    #[test]
    fn load_page_substitutes_placeholder() {
        let source = MemorySource(HashMap::new());

        let page = load_page(&source, &Renderer::default(), "ccnp", "network-security");

        assert!(!page.found);
        assert_eq!(page.category, "ccnp");
        assert_eq!(
            page.html,
            "<h1>NETWORK SECURITY</h1>\n<p>Content under development. Expected file at: \
             <code>ccnp/network-security.md</code></p>"
        );
    }

    #[test]
    fn fs_source_reads_nested_document() {
        let content_dir = create_test_content_dir();
        create_test_file(&content_dir, "ccna/routing.md", "- static\n- dynamic");

        let source = FsContentSource::new(content_dir.path());
        let page = load_page(&source, &Renderer::default(), "ccna", "routing");

        assert!(page.found);
        assert_eq!(page.html, "<ul><li>static</li>\n<li>dynamic</li></ul>");
    }

    #[test]
    fn fs_source_missing_file_names_full_location() {
        let content_dir = create_test_content_dir();
        let source = FsContentSource::new(content_dir.path());

        let page = load_page(&source, &Renderer::default(), "python", "operators");

        assert!(!page.found);
        let expected = content_dir.path().join("python").join("operators.md");
        assert!(page.html.contains(&expected.display().to_string()));
    }

    #[test]
    fn test_read_file_not_found() {
        let content_dir = create_test_content_dir();
        let relative_path = RelativePath::new("nonexistent.md");
        let result = read_file(relative_path, content_dir.path());
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_read_file_success() {
        let content_dir = create_test_content_dir();
        create_test_file(&content_dir, "test.md", "# Test Content\n\nParagraph");

        let content = read_file(RelativePath::new("test.md"), content_dir.path()).unwrap();
        assert_eq!(content, "# Test Content\n\nParagraph");
    }

    #[test]
    fn test_validate_content_dir() {
        let content_dir = create_test_content_dir();
        assert!(validate_content_dir(content_dir.path()).is_ok());
        assert!(matches!(
            validate_content_dir(Path::new("/nonexistent/path")),
            Err(IoError::InvalidContentDir(_))
        ));
    }
}
