//! Ships, hulls and the hero's mercenary roster

pub mod hero;
pub mod hull;
pub mod ship_config;

pub use hero::{Hero, MercItem, Position, SolShip};
pub use hull::{HullConfig, HullConfigManager, HullResolver};
pub use ship_config::ShipConfig;
