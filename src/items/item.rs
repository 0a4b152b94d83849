//! Item definitions
//!
//! Items carried by ships. Only the state the save system persists is
//! modelled: the item code, the equip slot and, for guns, loaded ammo.

use serde::{Deserialize, Serialize};

/// Ammo clip definition shared by a gun and its clip items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipConfig {
    /// Item code of the clip
    pub code: String,
    /// Rounds per clip
    pub size: u32,
    /// Guns with infinite clips never need reloading
    pub infinite: bool,
}

/// A gun and its magazine state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gun {
    pub clip: ClipConfig,
    /// Rounds currently loaded
    pub ammo: u32,
    /// Seconds left until a reload finishes (0 = not reloading)
    pub reload_await: f32,
}

impl Gun {
    pub fn new(clip: ClipConfig) -> Self {
        Self {
            clip,
            ammo: 0,
            reload_await: 0.0,
        }
    }

    /// Whether the loaded clip has to be written alongside the gun
    pub fn has_saved_clip(&self) -> bool {
        (self.ammo > 0 || self.reload_await > 0.0) && !self.clip.infinite
    }

    /// Fill the magazine from one clip
    pub fn load(&mut self) {
        self.ammo = self.clip.size;
        self.reload_await = 0.0;
    }
}

/// Item behaviour variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ItemKind {
    Generic,
    Gun(Gun),
    Clip(ClipConfig),
}

/// A single item instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolItem {
    /// Registry code, e.g. `"sg"` or `"b:lightArmor"`
    pub code: String,
    /// Equip slot index, 0 when not equipped
    pub equipped: u8,
    pub kind: ItemKind,
}

impl SolItem {
    /// Create an unequipped plain item
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            equipped: 0,
            kind: ItemKind::Generic,
        }
    }

    /// Create an unloaded gun using `clip`
    pub fn gun(code: impl Into<String>, clip: ClipConfig) -> Self {
        Self {
            code: code.into(),
            equipped: 0,
            kind: ItemKind::Gun(Gun::new(clip)),
        }
    }

    /// Create a clip item for `clip`
    pub fn clip(clip: ClipConfig) -> Self {
        Self {
            code: clip.code.clone(),
            equipped: 0,
            kind: ItemKind::Clip(clip),
        }
    }

    /// Builder-style equip slot setter
    pub fn equipped_in(mut self, slot: u8) -> Self {
        self.equipped = slot;
        self
    }

    pub fn is_equipped(&self) -> bool {
        self.equipped > 0
    }

    pub fn as_gun(&self) -> Option<&Gun> {
        match &self.kind {
            ItemKind::Gun(gun) => Some(gun),
            _ => None,
        }
    }

    pub fn as_gun_mut(&mut self) -> Option<&mut Gun> {
        match &mut self.kind {
            ItemKind::Gun(gun) => Some(gun),
            _ => None,
        }
    }

    pub fn as_clip(&self) -> Option<&ClipConfig> {
        match &self.kind {
            ItemKind::Clip(clip) => Some(clip),
            _ => None,
        }
    }
}
