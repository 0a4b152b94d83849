//! Item registry
//!
//! Resolves item codes found in save files to fresh item instances.

use std::collections::HashMap;

use super::item::{ClipConfig, SolItem};

/// Resolves an item code to a new, unequipped instance
pub trait ItemResolver {
    fn resolve(&self, code: &str) -> Option<SolItem>;
}

/// Registry of item prototypes keyed by code
#[derive(Debug, Clone, Default)]
pub struct ItemManager {
    prototypes: HashMap<String, SolItem>,
}

impl ItemManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a prototype under its own code
    pub fn register(&mut self, item: SolItem) {
        self.prototypes.insert(item.code.clone(), item);
    }

    /// Register a gun together with the clip it fires
    pub fn register_gun(&mut self, code: &str, clip: ClipConfig) {
        if !clip.infinite {
            self.register(SolItem::clip(clip.clone()));
        }
        self.register(SolItem::gun(code, clip));
    }

    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }
}

impl ItemResolver for ItemManager {
    fn resolve(&self, code: &str) -> Option<SolItem> {
        self.prototypes.get(code).cloned()
    }
}
