//! Persisted record shapes

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::codec::ini::IniFile;
use crate::codec::tree;
use crate::codec::CodecError;
use crate::ships::Position;

/// Previous-ship slot, stored as key/value lines
#[derive(Debug, Clone, PartialEq)]
pub struct ShipRecord {
    pub hull: String,
    pub money: i32,
    pub items: String,
    pub position: Position,
}

impl ShipRecord {
    /// Key/value representation in file order
    pub fn to_ini(&self) -> IniFile {
        let mut ini = IniFile::new();
        ini.set("hull", self.hull.as_str())
            .set("money", self.money)
            .set("items", self.items.as_str())
            .set("x", self.position.x)
            .set("y", self.position.y);
        ini
    }
}

/// One hired mercenary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MercenaryRecord {
    pub hull: String,
    pub money: i32,
    pub items: String,
}

impl MercenaryRecord {
    /// Read a record leniently: missing or malformed money and items default,
    /// a missing hull makes the record unusable.
    pub fn from_object(object: &Map<String, Value>) -> Option<Self> {
        let hull = match tree::str_field(object, "hull") {
            Ok(Some(hull)) => hull.to_string(),
            _ => return None,
        };
        let money = tree::i32_field(object, "money").unwrap_or_else(|e| {
            log::warn!("Mercenary {}: {}, using 0", hull, e);
            None
        });
        let items = tree::str_field(object, "items").unwrap_or_else(|e| {
            log::warn!("Mercenary {}: {}, dropping items", hull, e);
            None
        });
        Some(Self {
            money: money.unwrap_or(0),
            items: items.unwrap_or_default().to_string(),
            hull,
        })
    }
}

/// World generation parameters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldConfig {
    pub seed: u64,
    #[serde(rename = "systems")]
    pub number_of_systems: u32,
}

impl WorldConfig {
    pub fn new(seed: u64, number_of_systems: u32) -> Self {
        Self {
            seed,
            number_of_systems,
        }
    }
}

/// Read `seed` and `systems`, leaving absent or malformed fields at zero
pub fn decode_world(value: &Value) -> Result<WorldConfig, CodecError> {
    let Value::Object(object) = value else {
        return Err(CodecError::NotAnObject);
    };
    let mut config = WorldConfig::default();
    match tree::u64_field(object, "seed") {
        Ok(Some(seed)) => config.seed = seed,
        Ok(None) => {}
        Err(e) => log::warn!("World file: {}, using seed 0", e),
    }
    match tree::u32_field(object, "systems") {
        Ok(Some(systems)) => config.number_of_systems = systems,
        Ok(None) => {}
        Err(e) => log::warn!("World file: {}, using 0 systems", e),
    }
    Ok(config)
}
