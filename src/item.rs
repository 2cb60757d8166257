// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The item contract, plus a ready-made implementation.
//!
//! The predictor never owns your data. It keeps an `Arc` to each item, asks it
//! for an id and for field values by label, and uses its `Ord` to break ranking
//! ties. Implement [`Item`] on your own contact type, or use [`Record`] when a
//! string map is enough.

use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Something the predictor can index.
///
/// - `id` must be unique and stable for as long as the item is indexed.
/// - `field` returns the values stored under a label, in order. A label the
///   item doesn't have should return an empty slice.
/// - `Ord` decides the order of items whose matches have equal priority.
///   Sort by display name or by whatever order your list shows.
pub trait Item: Ord + Send + Sync {
    fn id(&self) -> &str;

    fn field(&self, label: &str) -> &[String];
}

/// A string-keyed item, loadable from JSON.
///
/// ```json
/// { "id": "42", "fields": { "name": "John Doe", "number": ["555 0100", "555 0199"] } }
/// ```
///
/// Ordered by `sort_key` (case-insensitive, missing keys first), then by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,
    #[serde(default, deserialize_with = "one_or_many")]
    pub fields: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub sort_key: Option<String>,
}

impl Record {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: BTreeMap::new(),
            sort_key: None,
        }
    }

    /// Append a value under `label`.
    pub fn with_field(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.entry(label.into()).or_default().push(value.into());
        self
    }

    pub fn with_sort_key(mut self, key: impl Into<String>) -> Self {
        self.sort_key = Some(key.into());
        self
    }

    fn folded_key(&self) -> Option<String> {
        self.sort_key.as_ref().map(|k| k.to_lowercase())
    }
}

impl Item for Record {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, label: &str) -> &[String] {
        self.fields.get(label).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Ord for Record {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded_key()
            .cmp(&other.folded_key())
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for Record {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Record {}

/// Accept `"value"` or `["value", ...]` for each field.
fn one_or_many<'de, D>(deserializer: D) -> Result<BTreeMap<String, Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    let raw = BTreeMap::<String, OneOrMany>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(label, values)| {
            let values = match values {
                OneOrMany::One(value) => vec![value],
                OneOrMany::Many(values) => values,
            };
            (label, values)
        })
        .collect())
}
