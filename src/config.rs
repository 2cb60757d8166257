// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Predictor configuration and config-file loading.
//!
//! ```json
//! {
//!   "mode": "keypad",
//!   "labels": [
//!     { "name": "name",   "kind": "text-separated" },
//!     { "name": "number", "kind": "number" }
//!   ],
//!   "maxEncodedLen": 100
//! }
//! ```
//!
//! Everything except `labels` has a default.

use crate::alphabet::InputMode;
use crate::schema::LabelSchema;
use crate::variants::DEFAULT_MAX_VARIANTS;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Encodings this long or longer are not indexed.
pub const DEFAULT_MAX_ENCODED_LEN: usize = 100;

/// Engine tuning knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PredictorConfig {
    pub mode: InputMode,
    /// Variants whose encoding reaches this length are skipped.
    pub max_encoded_len: usize,
    /// Cap on variants generated per field value.
    pub max_variants_per_field: usize,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            mode: InputMode::default(),
            max_encoded_len: DEFAULT_MAX_ENCODED_LEN,
            max_variants_per_field: DEFAULT_MAX_VARIANTS,
        }
    }
}

impl PredictorConfig {
    pub fn new(mode: InputMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }
}

/// A full predictor setup: engine knobs plus the label schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(flatten)]
    pub predictor: PredictorConfig,
    pub labels: LabelSchema,
}

/// Error type for config loading.
#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    Io { path: PathBuf, source: std::io::Error },
    /// The config text is not valid JSON for a [`Config`].
    Parse(serde_json::Error),
    /// A numeric limit makes indexing impossible.
    InvalidLimit { field: &'static str, value: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "cannot read config {}: {}", path.display(), source)
            }
            ConfigError::Parse(e) => write!(f, "invalid config: {}", e),
            ConfigError::InvalidLimit { field, value } => {
                write!(f, "{} is too small to index anything (got {})", field, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(e) => Some(e),
            ConfigError::InvalidLimit { .. } => None,
        }
    }
}

impl Config {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(text).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        // Length 1 would reject every encoding (the bound is exclusive).
        if self.predictor.max_encoded_len < 2 {
            return Err(ConfigError::InvalidLimit {
                field: "maxEncodedLen",
                value: self.predictor.max_encoded_len,
            });
        }
        if self.predictor.max_variants_per_field == 0 {
            return Err(ConfigError::InvalidLimit {
                field: "maxVariantsPerField",
                value: 0,
            });
        }
        Ok(())
    }
}
