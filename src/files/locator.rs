//! Resource path resolution
//!
//! Maps logical save-file names onto the resource root, or onto a developer
//! root when one is configured.

use std::path::{Path, PathBuf};

use super::settings::PathSettings;
use super::storage::Storage;

/// Resolves save-file names to filesystem paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLocator {
    resource_root: PathBuf,
    dev_root: Option<PathBuf>,
}

impl ResourceLocator {
    /// Locator rooted at `resource_root` with no developer override
    pub fn new(resource_root: impl Into<PathBuf>) -> Self {
        Self {
            resource_root: resource_root.into(),
            dev_root: None,
        }
    }

    /// Build the locator from loaded settings
    pub fn from_settings(settings: &PathSettings) -> Self {
        Self {
            resource_root: settings.resolved_resource_root(),
            dev_root: settings.dev_root.clone(),
        }
    }

    /// Override every lookup with a developer root
    pub fn with_dev_root(mut self, dev_root: impl Into<PathBuf>) -> Self {
        self.dev_root = Some(dev_root.into());
        self
    }

    /// The directory files are currently resolved against
    pub fn root(&self) -> &Path {
        self.dev_root.as_deref().unwrap_or(&self.resource_root)
    }

    /// Path of `file_name` under the active root
    pub fn resource_path(&self, file_name: &str) -> PathBuf {
        self.root().join(file_name)
    }

    /// Whether `file_name` exists under the active root
    pub fn resource_exists<S: Storage>(&self, storage: &S, file_name: &str) -> bool {
        storage.exists(&self.resource_path(file_name))
    }
}
