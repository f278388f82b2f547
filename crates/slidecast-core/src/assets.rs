//! Asset resolution capability.
//!
//! The editor lets users attach files (images, video, avatar portraits) to
//! elements. An [`AssetProvider`] turns a chosen file into a locator string
//! usable directly as `Element::content`; the core performs no further
//! validation on the locator.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from asset resolution.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The chosen file does not exist.
    #[error("asset not found: {0}")]
    NotFound(PathBuf),
    /// Filesystem error while resolving the asset.
    #[error("io error: {0}")]
    Io(String),
}

/// Resolves a user-chosen file into a content locator.
pub trait AssetProvider {
    /// Produce a locator string for the file at `path`.
    fn resolve(&self, path: &Path) -> Result<String, AssetError>;
}

/// Resolves local files to `file://` locators.
#[derive(Debug, Default)]
pub struct LocalAssets;

impl LocalAssets {
    /// Create a local asset provider.
    pub fn new() -> Self {
        Self
    }
}

impl AssetProvider for LocalAssets {
    fn resolve(&self, path: &Path) -> Result<String, AssetError> {
        if !path.exists() {
            return Err(AssetError::NotFound(path.to_path_buf()));
        }
        let canonical = path
            .canonicalize()
            .map_err(|e| AssetError::Io(e.to_string()))?;
        Ok(format!("file://{}", canonical.display()))
    }
}
