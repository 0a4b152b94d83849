//! Solsave - save/load subsystem for a 2D space game
//!
//! Persists the player's ship and inventory, hired mercenaries, world
//! generation parameters and free-form module data between sessions.

pub mod codec;
pub mod files;
pub mod items;
pub mod random;
pub mod save;
pub mod ships;

// Re-export commonly used types
pub use files::{FsStorage, PathSettings, ResourceLocator, Storage};
pub use random::{GameRandom, SeedSource};
pub use save::{SaveError, SaveManager, WorldConfig};
