// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Field labels, their kinds, and their priority.
//!
//! Label order is ranking order. With N labels, the label at index k gets
//! priority level `N - k`, so the first label always wins ties against any
//! later one. A schema is installed once per predictor; swapping it later does
//! not re-index what is already there.

use crate::alphabet::InputMode;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// How a field's values are expanded into indexable variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    /// Phone numbers. Indexed with leading characters blanked (country code
    /// stripping) and as a last-four-digits variant.
    Number,
    /// Multi-word text such as names. Indexed with words dropped and reduced
    /// to initials, so "Mohandas Karamchand Gandhi" matches "mkgandhi".
    TextSeparated,
    /// Single opaque token such as an email address. Indexed as-is.
    TextContiguous,
}

impl FieldKind {
    /// Whether `*`, `+` and `#` (keypad) or `,`, `.` and `@` (alphanumeric)
    /// are encoded for values of this kind. On a keypad only phone numbers
    /// carry them; in alphanumeric mode every kind does.
    pub fn maps_symbols(self, mode: InputMode) -> bool {
        match mode {
            InputMode::Keypad => self == FieldKind::Number,
            InputMode::Alphanumeric => true,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Number => write!(f, "number"),
            FieldKind::TextSeparated => write!(f, "text-separated"),
            FieldKind::TextContiguous => write!(f, "text-contiguous"),
        }
    }
}

/// One entry of a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSpec {
    pub name: String,
    pub kind: FieldKind,
}

/// Error type for schema construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A label name was empty.
    EmptyLabel { position: usize },
    /// The same label name appears twice.
    DuplicateLabel { name: String },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::EmptyLabel { position } => {
                write!(f, "label at position {} has an empty name", position)
            }
            SchemaError::DuplicateLabel { name } => {
                write!(f, "label '{}' appears more than once", name)
            }
        }
    }
}

impl std::error::Error for SchemaError {}

/// Ordered label → kind mapping. First label has the highest priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LabelSchema {
    labels: Vec<LabelSpec>,
}

impl LabelSchema {
    /// Build a schema from labels in priority order.
    pub fn new<I, S>(labels: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = (S, FieldKind)>,
        S: Into<String>,
    {
        let labels: Vec<LabelSpec> = labels
            .into_iter()
            .map(|(name, kind)| LabelSpec {
                name: name.into(),
                kind,
            })
            .collect();
        Self::from_specs(labels)
    }

    fn from_specs(labels: Vec<LabelSpec>) -> Result<Self, SchemaError> {
        let mut seen = HashSet::with_capacity(labels.len());
        for (position, spec) in labels.iter().enumerate() {
            if spec.name.is_empty() {
                return Err(SchemaError::EmptyLabel { position });
            }
            if !seen.insert(spec.name.as_str()) {
                return Err(SchemaError::DuplicateLabel {
                    name: spec.name.clone(),
                });
            }
        }
        Ok(Self { labels })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Look up the kind of a label.
    pub fn kind(&self, label: &str) -> Option<FieldKind> {
        self.labels.iter().find(|l| l.name == label).map(|l| l.kind)
    }

    /// Priority level of a label: `N - k` for the label at index k.
    pub fn level(&self, label: &str) -> Option<usize> {
        self.labels
            .iter()
            .position(|l| l.name == label)
            .map(|k| self.labels.len() - k)
    }

    /// Labels in priority order, paired with their level.
    pub fn iter(&self) -> impl Iterator<Item = (&LabelSpec, usize)> {
        let n = self.labels.len();
        self.labels.iter().enumerate().map(move |(k, l)| (l, n - k))
    }
}

impl<'de> Deserialize<'de> for LabelSchema {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let labels = Vec::<LabelSpec>::deserialize(deserializer)?;
        Self::from_specs(labels).map_err(serde::de::Error::custom)
    }
}
