//! Hull configurations
//!
//! Hulls are referenced by name in save files and resolved back to their
//! configuration on load.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Hull identity as far as saving is concerned
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HullConfig {
    /// Name the hull is registered and saved under
    pub internal_name: String,
}

impl HullConfig {
    pub fn new(internal_name: impl Into<String>) -> Self {
        Self {
            internal_name: internal_name.into(),
        }
    }
}

/// Maps hull configurations to their saved names and back
pub trait HullResolver {
    /// Name to persist for `hull`
    fn name_of(&self, hull: &HullConfig) -> String;

    /// Configuration registered under `name`
    fn config(&self, name: &str) -> Option<HullConfig>;
}

/// Registry of known hulls
#[derive(Debug, Clone, Default)]
pub struct HullConfigManager {
    configs: HashMap<String, HullConfig>,
}

impl HullConfigManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, config: HullConfig) {
        self.configs.insert(config.internal_name.clone(), config);
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}

impl HullResolver for HullConfigManager {
    fn name_of(&self, hull: &HullConfig) -> String {
        hull.internal_name.clone()
    }

    fn config(&self, name: &str) -> Option<HullConfig> {
        self.configs.get(name).cloned()
    }
}
