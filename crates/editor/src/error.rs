// Chunk: docs/chunks/editor_config - JSON configuration with env overrides
//! Configuration error types.
//!
//! Editing itself never fails; only building an editor from configuration can.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or validating an [`EditorConfig`](crate::EditorConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
