//! Save path settings
//!
//! Loaded from a RON file, with fallback to platform defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the developer root
pub const DEV_ROOT_ENV: &str = "SOLSAVE_DEV_ROOT";

/// Where save files live
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    /// Install resource root; platform data directory when unset
    pub resource_root: Option<PathBuf>,
    /// Developer checkout root, overriding the resource root when set
    pub dev_root: Option<PathBuf>,
}

impl PathSettings {
    /// Load settings from a RON file, falling back to defaults if it is
    /// missing or invalid. `SOLSAVE_DEV_ROOT` wins over the file's dev root.
    pub fn load(path: &Path) -> Self {
        let mut settings = Self::load_file(path).unwrap_or_default();
        if let Some(dev_root) = std::env::var_os(DEV_ROOT_ENV) {
            settings.dev_root = Some(PathBuf::from(dev_root));
        }
        settings
    }

    fn load_file(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        match fs::read_to_string(path) {
            Ok(content) => match ron::from_str(&content) {
                Ok(settings) => {
                    log::debug!("Loaded path settings from {:?}", path);
                    Some(settings)
                }
                Err(e) => {
                    log::warn!("Failed to parse {:?}: {}, using defaults", path, e);
                    None
                }
            },
            Err(e) => {
                log::warn!("Failed to read {:?}: {}, using defaults", path, e);
                None
            }
        }
    }

    /// Resource root to use, resolving the platform default when unset
    pub fn resolved_resource_root(&self) -> PathBuf {
        self.resource_root.clone().unwrap_or_else(default_resource_root)
    }

    /// Serialize these settings as pretty RON
    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }
}

/// Platform data directory for saves
pub fn default_resource_root() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "solsave", "Solsave") {
        let mut path = proj_dirs.data_local_dir().to_path_buf();
        path.push("saves");
        path
    } else {
        // Fallback to current directory
        PathBuf::from("./saves")
    }
}
