//! Extra data store
//!
//! Free-form JSON that game modules persist under their own key, outside the
//! fixed save records. Each scope is read from disk at most once per store:
//! the first `load` pulls the file in, every later call works on memory, and
//! `flush` writes the whole blob back.

use serde_json::{Map, Value};

use super::error::SaveError;
use crate::codec::tree;
use crate::files::{ResourceLocator, Storage};

/// Which extra-data blob a store manages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtraScope {
    Player,
    World,
}

impl ExtraScope {
    /// File holding this scope's blob
    pub fn file_name(&self) -> &'static str {
        match self {
            ExtraScope::Player => super::SAVE_PLAYER_EXTRA_FILE_NAME,
            ExtraScope::World => super::WORLD_SAVE_EXTRA_FILE_NAME,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ExtraScope::Player => "player",
            ExtraScope::World => "world",
        }
    }
}

/// Lazily loaded module → value map for one scope
#[derive(Debug, Clone)]
pub struct ExtraDataStore {
    scope: ExtraScope,
    blob: Option<Map<String, Value>>,
}

impl ExtraDataStore {
    pub fn new(scope: ExtraScope) -> Self {
        Self { scope, blob: None }
    }

    pub fn scope(&self) -> ExtraScope {
        self.scope
    }

    /// Whether the blob is in memory
    pub fn is_loaded(&self) -> bool {
        self.blob.is_some()
    }

    /// Store `value` under `module` in memory only. Saving before any load
    /// starts from an empty blob, so unflushed file content is not merged.
    pub fn save(&mut self, module: &str, value: Value) {
        self.blob
            .get_or_insert_with(Map::new)
            .insert(module.to_string(), value);
    }

    /// Value stored under `module`, reading the scope file on first access
    pub fn load<S: Storage>(&mut self, storage: &S, locator: &ResourceLocator, module: &str) -> Option<&Value> {
        let scope = self.scope;
        self.blob
            .get_or_insert_with(|| read_blob(storage, locator, scope))
            .get(module)
    }

    /// Write the whole blob with four-space indentation, replacing the file
    pub fn flush<S: Storage>(&mut self, storage: &S, locator: &ResourceLocator) -> Result<(), SaveError> {
        let blob = self.blob.get_or_insert_with(Map::new);
        let text = tree::to_pretty_indent(&*blob, 4)?;
        let path = locator.resource_path(self.scope.file_name());
        storage
            .write(&path, &text)
            .map_err(|e| SaveError::io(&path, e))?;
        log::debug!("Saved extra {} data to {:?}", self.scope.name(), path);
        Ok(())
    }
}

fn read_blob<S: Storage>(storage: &S, locator: &ResourceLocator, scope: ExtraScope) -> Map<String, Value> {
    let file_name = scope.file_name();
    if !locator.resource_exists(storage, file_name) {
        log::debug!("No extra {} data file, starting blank", scope.name());
        return Map::new();
    }

    let path = locator.resource_path(file_name);
    let parsed = storage
        .read_to_string(&path)
        .map_err(|e| SaveError::io(&path, e))
        .and_then(|text| tree::parse_object(&text).map_err(SaveError::from));

    match parsed {
        Ok(blob) => {
            log::debug!("Loaded the extra {} data file", scope.name());
            blob
        }
        Err(e) => {
            log::debug!("Failed to load the extra {} data file ({}), starting blank", scope.name(), e);
            Map::new()
        }
    }
}
