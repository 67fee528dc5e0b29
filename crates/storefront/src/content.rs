//! Content management for the markdown informational sections.
//!
//! This module loads markdown files from the content directory at startup,
//! parses frontmatter metadata, and renders markdown to HTML. Sections are
//! addressed by slug (file stem): `about`, `delivery`.
//!
//! A missing directory or a malformed file degrades to a missing section
//! with a log line; the page renders without it.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use comrak::{Options, markdown_to_html};
use gray_matter::{Matter, ParsedEntity, engine::YAML};
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content io error: {0}")]
    Io(String),
    #[error("content parse error: {0}")]
    Parse(String),
}

/// Frontmatter metadata for a section.
#[derive(Debug, Clone, Deserialize)]
pub struct SectionMeta {
    pub title: String,
}

/// A rendered section with metadata and HTML content.
#[derive(Debug, Clone)]
pub struct Section {
    pub slug: String,
    pub meta: SectionMeta,
    pub content_html: String,
}

/// Content store that holds all loaded sections in memory.
#[derive(Debug, Clone)]
pub struct ContentStore {
    sections: Arc<HashMap<String, Section>>,
}

impl ContentStore {
    /// Load all content from the filesystem.
    ///
    /// # Errors
    ///
    /// Returns an error if the sections directory exists but cannot be read.
    pub fn load(content_dir: &Path) -> Result<Self, ContentError> {
        let sections = Self::load_sections(&content_dir.join("sections"))?;

        Ok(Self {
            sections: Arc::new(sections),
        })
    }

    /// Load all sections from the sections directory.
    fn load_sections(dir: &Path) -> Result<HashMap<String, Section>, ContentError> {
        let mut sections = HashMap::new();

        if !dir.exists() {
            tracing::warn!("Sections directory does not exist: {:?}", dir);
            return Ok(sections);
        }

        let entries = std::fs::read_dir(dir).map_err(|e| ContentError::Io(e.to_string()))?;

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "md") {
                match Self::load_section(&path) {
                    Ok(section) => {
                        tracing::info!("Loaded section: {}", section.slug);
                        sections.insert(section.slug.clone(), section);
                    }
                    Err(e) => {
                        tracing::error!("Failed to load section {:?}: {}", path, e);
                    }
                }
            }
        }

        Ok(sections)
    }

    /// Load a single section from a markdown file.
    fn load_section(path: &Path) -> Result<Section, ContentError> {
        let content = std::fs::read_to_string(path).map_err(|e| ContentError::Io(e.to_string()))?;

        let slug = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ContentError::Parse("Invalid filename".to_string()))?
            .to_string();

        let matter = Matter::<YAML>::new();
        let parsed: ParsedEntity<SectionMeta> = matter
            .parse(&content)
            .map_err(|e| ContentError::Parse(format!("Failed to parse frontmatter: {e}")))?;
        let meta = parsed
            .data
            .ok_or_else(|| ContentError::Parse("Missing frontmatter".to_string()))?;

        let content_html = render_markdown(&parsed.content);

        Ok(Section {
            slug,
            meta,
            content_html,
        })
    }

    /// Look up a section by slug.
    #[must_use]
    pub fn section(&self, slug: &str) -> Option<&Section> {
        self.sections.get(slug)
    }
}

/// Render markdown to HTML.
fn render_markdown(markdown: &str) -> String {
    markdown_to_html(markdown, &Options::default())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_render_markdown_basic() {
        let html = render_markdown("Глина **ручной** работы");
        assert!(html.contains("<strong>ручной</strong>"));
    }

    #[test]
    fn test_load_missing_directory_is_empty() {
        let store = ContentStore::load(Path::new("/nonexistent/content")).unwrap();
        assert!(store.section("about").is_none());
    }

    #[test]
    fn test_load_bundled_sections() {
        // The crate ships its content directory; loading it from the
        // manifest path keeps this test independent of the working directory.
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("content");
        let store = ContentStore::load(&dir).unwrap();

        let about = store.section("about").unwrap();
        assert_eq!(about.slug, "about");
        assert!(!about.meta.title.is_empty());
        assert!(about.content_html.contains("<p>"));

        assert!(store.section("delivery").is_some());
    }
}
