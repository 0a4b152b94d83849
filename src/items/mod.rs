//! Item system

pub mod container;
pub mod item;
pub mod registry;

pub use container::{ItemContainer, Stackable};
pub use item::{ClipConfig, Gun, ItemKind, SolItem};
pub use registry::{ItemManager, ItemResolver};
