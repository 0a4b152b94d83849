//! Record encodings
//!
//! Two textual formats: flat key/value lines for the previous-ship record
//! and JSON for everything else, plus the item token stream embedded in both.

pub mod ini;
pub mod items;
pub mod tree;

use thiserror::Error;

pub use ini::{IniFile, IniValue};
pub use items::{decode_items, encode_items};
pub use tree::{parse_lenient, parse_object, to_pretty, to_pretty_indent};

/// Errors raised while decoding or encoding a record
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid value for '{key}': {value}")]
    InvalidValue { key: String, value: String },
    /// JSON that could not be read, or a value that could not be written
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a JSON object")]
    NotAnObject,
    #[error("no content")]
    Empty,
}
