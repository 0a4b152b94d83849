//! Save/load system
//!
//! Persists the player's ship, mercenaries, world parameters and per-module
//! extra data under the resource root.

pub mod error;
pub mod extra;
pub mod manager;
pub mod records;

/// Previous ship, key/value lines
pub const SAVE_FILE_NAME: &str = "prevShip.ini";
/// Mercenary roster, JSON array
pub const MERC_SAVE_FILE: &str = "mercenaries.json";
/// World seed and system count, JSON object
pub const WORLD_SAVE_FILE_NAME: &str = "world.json";
/// World extra data, JSON object
pub const WORLD_SAVE_EXTRA_FILE_NAME: &str = "worldExtra.json";
/// Player extra data, JSON object
pub const SAVE_PLAYER_EXTRA_FILE_NAME: &str = "prevShipExtra.json";

pub use error::SaveError;
pub use extra::{ExtraDataStore, ExtraScope};
pub use manager::SaveManager;
pub use records::{decode_world, MercenaryRecord, ShipRecord, WorldConfig};
