// Chunk: docs/chunks/editor_config - JSON configuration with env overrides
//!
//! Editor configuration.
//!
//! Everything here is fixed when the editor is constructed: the line length
//! cap, the row height unit, the prologue, and the tokenizer vocabulary.
//! Configuration can come from a JSON file, from defaults, or both, with a
//! couple of environment variables layered on top.
//!
//! ```json
//! {
//!   "max_line_length": 80,
//!   "row_height_px": 20.0,
//!   "prologue": [[{ "text": "# scratch", "tag": "comment" }]],
//!   "prologue_shown": 1
//! }
//! ```
//!
//! Omitted fields take their defaults.

use std::env;
use std::fs;
use std::path::Path;

use code_window_buffer::{Line, Segment};
use code_window_syntax::Vocabulary;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::prologue::student_prologue;

/// Environment variable overriding [`EditorConfig::max_line_length`].
pub const MAX_LINE_LENGTH_ENV: &str = "CODE_WINDOW_MAX_LINE_LENGTH";
/// Environment variable overriding [`EditorConfig::row_height_px`].
pub const ROW_HEIGHT_ENV: &str = "CODE_WINDOW_ROW_HEIGHT";

pub const DEFAULT_MAX_LINE_LENGTH: usize = 60;
pub const DEFAULT_ROW_HEIGHT_PX: f32 = 24.0;

/// Construction-time configuration for a [`CodeWindow`](crate::CodeWindow).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Maximum characters in the current line; also the wrap width
    pub max_line_length: usize,
    /// Height of one visual row in pixels
    pub row_height_px: f32,
    /// Pre-highlighted lines shown above the editable region
    pub prologue: Vec<Vec<Segment>>,
    /// How many prologue lines are shown (clamped to the prologue length)
    pub prologue_shown: usize,
    pub vocabulary: Vocabulary,
}

impl Default for EditorConfig {
    fn default() -> Self {
        let prologue = student_prologue();
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            row_height_px: DEFAULT_ROW_HEIGHT_PX,
            prologue_shown: prologue.len(),
            prologue,
            vocabulary: Vocabulary::python(),
        }
    }
}

impl EditorConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Applies the `CODE_WINDOW_*` environment variables.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|name| env::var(name).ok())
    }

    /// Applies overrides from `lookup`, which maps a variable name to its value.
    ///
    /// Blank values are ignored. Values that do not parse are an error rather
    /// than silently falling back to the default.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let value = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(raw) = value(MAX_LINE_LENGTH_ENV) {
            self.max_line_length = raw.trim().parse().map_err(|_| {
                ConfigError::Invalid(format!("{} must be a positive integer, got {:?}", MAX_LINE_LENGTH_ENV, raw))
            })?;
        }
        if let Some(raw) = value(ROW_HEIGHT_ENV) {
            self.row_height_px = raw.trim().parse().map_err(|_| {
                ConfigError::Invalid(format!("{} must be a number, got {:?}", ROW_HEIGHT_ENV, raw))
            })?;
        }

        self.validate()?;
        Ok(self)
    }

    /// Checks the invariants the editor relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_line_length == 0 {
            return Err(ConfigError::Invalid(
                "max_line_length must be at least 1".to_string(),
            ));
        }
        if !self.row_height_px.is_finite() || self.row_height_px <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "row_height_px must be a positive number, got {}",
                self.row_height_px
            )));
        }
        let has_newline = self
            .prologue
            .iter()
            .flatten()
            .any(|seg| seg.text.contains(['\n', '\r']));
        if has_newline {
            return Err(ConfigError::Invalid(
                "prologue segments must not contain line breaks".to_string(),
            ));
        }
        Ok(())
    }

    /// Builds the prologue lines.
    pub fn prologue_lines(&self) -> Vec<Line> {
        self.prologue.iter().cloned().map(Line::prologue).collect()
    }
}
