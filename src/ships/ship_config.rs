//! Spawn-ready ship description rebuilt from a save

use super::hero::Position;
use super::hull::HullConfig;
use crate::items::{ItemContainer, SolItem};

/// Everything needed to respawn a saved ship
#[derive(Debug, Clone, PartialEq)]
pub struct ShipConfig {
    pub hull: HullConfig,
    /// Item string as stored in the save
    pub items_str: String,
    /// Items decoded from `items_str`
    pub items: Vec<SolItem>,
    pub money: i32,
    /// Ships spawned per config; saved ships are always unique
    pub density: f32,
    /// Escort config, never set for saved ships
    pub guard: Option<Box<ShipConfig>>,
    pub spawn_pos: Position,
}

impl ShipConfig {
    pub fn new(hull: HullConfig, items_str: String, items: Vec<SolItem>, money: i32, spawn_pos: Position) -> Self {
        Self {
            hull,
            items_str,
            items,
            money,
            density: 1.0,
            guard: None,
            spawn_pos,
        }
    }

    /// The ship's starting container: decoded items grouped, with empty guns
    /// reloaded from the saved clips.
    pub fn spawn_items(&self) -> ItemContainer<SolItem> {
        let mut container: ItemContainer<SolItem> = self.items.iter().cloned().collect();
        container.reload_guns();
        container
    }
}
