//! Save file locations and file access

pub mod locator;
pub mod settings;
pub mod storage;

pub use locator::ResourceLocator;
pub use settings::{default_resource_root, PathSettings, DEV_ROOT_ENV};
pub use storage::{FsStorage, Storage};
