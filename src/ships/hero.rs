//! Player hero and hired mercenaries

use serde::{Deserialize, Serialize};

use super::hull::HullConfig;
use crate::items::{ItemContainer, SolItem, Stackable};

/// World position in game units
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A live ship as far as saving is concerned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolShip {
    pub hull: HullConfig,
    pub money: f32,
    pub items: ItemContainer<SolItem>,
    pub position: Position,
}

/// A mercenary contract held in the hero's roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MercItem {
    pub ship: SolShip,
}

impl MercItem {
    pub fn new(ship: SolShip) -> Self {
        Self { ship }
    }
}

// Every contract is its own group.
impl Stackable for MercItem {
    fn is_same(&self, _other: &Self) -> bool {
        false
    }
}

/// The player's ship and roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub ship: SolShip,
    pub mercs: ItemContainer<MercItem>,
}

impl Hero {
    pub fn new(ship: SolShip) -> Self {
        Self {
            ship,
            mercs: ItemContainer::new(),
        }
    }

    pub fn position(&self) -> Position {
        self.ship.position
    }

    /// Hire a mercenary
    pub fn add_merc(&mut self, merc: SolShip) {
        self.mercs.add(MercItem::new(merc));
    }

    /// Mercenary ships under contract, in roster order
    pub fn merc_ships(&self) -> impl Iterator<Item = &SolShip> {
        self.mercs.iter().map(|m| &m.ship)
    }
}
