// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prediction entries and the per-query predictions built from them.
//!
//! A [`PredictionEntry`] is created once per (item, label, value, variant) at
//! add time and never changes. A [`Prediction`] is what a query returns: the
//! entry plus how far the query got into it. Keeping the extent out of the
//! shared entry means a result you are still holding is not rewritten by the
//! next keystroke's query.

use crate::encoding::Encoding;
use crate::item::Item;
use std::fmt;
use std::sync::Arc;

/// One indexed variant of one field value of one item.
pub struct PredictionEntry<T> {
    pub(crate) item: Arc<T>,
    pub(crate) encoding: Encoding,
    pub(crate) label: Arc<str>,
    pub(crate) level: usize,
    pub(crate) field_index: usize,
    /// Generation order of the variant within its field value (0 = raw value).
    pub(crate) variant: usize,
}

impl<T> PredictionEntry<T> {
    pub(crate) fn new(
        item: Arc<T>,
        encoding: Encoding,
        label: Arc<str>,
        level: usize,
        field_index: usize,
        variant: usize,
    ) -> Self {
        Self {
            item,
            encoding,
            label,
            level,
            field_index,
            variant,
        }
    }

    pub(crate) fn symbols(&self) -> &[crate::alphabet::Symbol] {
        &self.encoding.symbols
    }
}

/// A query hit: which item, which field, and which characters matched.
pub struct Prediction<T> {
    entry: Arc<PredictionEntry<T>>,
    extent: usize,
}

impl<T> Prediction<T> {
    pub(crate) fn new(entry: Arc<PredictionEntry<T>>, extent: usize) -> Self {
        let extent = extent.min(entry.encoding.len());
        Self { entry, extent }
    }

    /// The matched item.
    pub fn item(&self) -> &Arc<T> {
        &self.entry.item
    }

    /// Label of the field that matched.
    pub fn label(&self) -> &str {
        &self.entry.label
    }

    /// Index of the matching value within the label's field.
    pub fn field_index(&self) -> usize {
        self.entry.field_index
    }

    /// Positions in the field value that the query matched, ready for
    /// highlighting. Truncated to the number of query symbols consumed.
    pub fn alignment(&self) -> &[usize] {
        &self.entry.encoding.positions[..self.extent]
    }

    /// Number of query symbols consumed.
    pub fn matched_extent(&self) -> usize {
        self.extent
    }

    /// Full encoding of the matched variant.
    pub fn encoding(&self) -> &Encoding {
        &self.entry.encoding
    }

    /// Priority level of the matched label (higher ranks first).
    pub fn level(&self) -> usize {
        self.entry.level
    }

    pub(crate) fn variant(&self) -> usize {
        self.entry.variant
    }
}

impl<T: Item> Prediction<T> {
    /// The matched field value, as stored on the item.
    pub fn value(&self) -> Option<&str> {
        self.entry
            .item
            .field(&self.entry.label)
            .get(self.entry.field_index)
            .map(String::as_str)
    }
}

impl<T> Clone for Prediction<T> {
    fn clone(&self) -> Self {
        Self {
            entry: Arc::clone(&self.entry),
            extent: self.extent,
        }
    }
}

impl<T: Item> fmt::Debug for Prediction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prediction")
            .field("id", &self.entry.item.id())
            .field("label", &self.label())
            .field("field_index", &self.field_index())
            .field("level", &self.level())
            .field("alignment", &self.alignment())
            .finish()
    }
}
