//! Application state shared across handlers.

use std::path::Path;
use std::sync::Arc;

use crate::catalog::{CatalogError, CatalogStore};
use crate::config::StorefrontConfig;
use crate::content::{ContentError, ContentStore};

/// Error building the application state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("content error: {0}")]
    Content(#[from] ContentError),
}

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the static catalog, and the rendered content sections.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogStore,
    content: ContentStore,
}

impl AppState {
    /// Create a new application state.
    ///
    /// Loads the embedded catalog and the markdown sections from
    /// `content_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded catalog data is malformed or the
    /// content directory exists but cannot be read.
    pub fn new(config: StorefrontConfig, content_dir: &Path) -> Result<Self, StateError> {
        let catalog = CatalogStore::load_embedded()?;
        let content = ContentStore::load(content_dir)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                content,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog store.
    #[must_use]
    pub fn catalog(&self) -> &CatalogStore {
        &self.inner.catalog
    }

    /// Get a reference to the content store.
    #[must_use]
    pub fn content(&self) -> &ContentStore {
        &self.inner.content
    }
}
