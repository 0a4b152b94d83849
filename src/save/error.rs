//! Save error types

use std::path::PathBuf;
use thiserror::Error;

use crate::codec::CodecError;

/// Failures surfaced by save operations
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl SaveError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SaveError::Io {
            path: path.into(),
            source,
        }
    }
}
