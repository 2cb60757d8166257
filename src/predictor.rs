// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The predictor: schema, mutation, and queries behind one lock.
//!
//! The partition index and the prediction store describe the same entries from
//! two sides, so they must change together. Everything lives in one
//! [`PredictorState`] behind a single `parking_lot::Mutex`; reads and writes are
//! fully serialized. Encoding and intersection are in-memory and synchronous,
//! so the lock is held briefly. There is no timeout: callers issuing very broad
//! queries on a latency-sensitive thread should throttle them.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use keysift::{FieldKind, InputMode, LabelSchema, Predictor, Record};
//!
//! let predictor = Predictor::new(InputMode::Keypad);
//! predictor.set_labels(
//!     LabelSchema::new([("name", FieldKind::TextSeparated), ("number", FieldKind::Number)])
//!         .unwrap(),
//! );
//! predictor.add_item(Arc::new(
//!     Record::new("1234")
//!         .with_field("name", "John Doe")
//!         .with_field("number", "987654321"),
//! ));
//!
//! let results = predictor.predict("5646").unwrap();
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].item().id, "1234");
//! assert!(predictor.predict("").is_none());
//! ```

use crate::alphabet::InputMode;
use crate::config::PredictorConfig;
use crate::encoding::encode;
use crate::item::Item;
use crate::partition::PartitionIndex;
use crate::prediction::{Prediction, PredictionEntry};
use crate::ranking::rank;
use crate::schema::LabelSchema;
use crate::store::PredictionStore;
use crate::variants;
use parking_lot::Mutex;
use std::sync::Arc;

/// Index size counters, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndexStats {
    /// Items currently indexed.
    pub items: usize,
    /// Live prediction entries.
    pub entries: usize,
    /// Vacated entry slots awaiting reuse.
    pub free_slots: usize,
    /// Positions in the partition index (longest encoding seen).
    pub depth: usize,
}

struct PredictorState<T> {
    labels: Option<LabelSchema>,
    store: PredictionStore<T>,
    partitions: PartitionIndex,
}

/// Thread-safe incremental predictive-search engine.
pub struct Predictor<T> {
    config: PredictorConfig,
    state: Mutex<PredictorState<T>>,
}

impl<T: Item> Predictor<T> {
    /// Create an empty predictor with default limits.
    pub fn new(mode: InputMode) -> Self {
        Self::with_config(PredictorConfig::new(mode))
    }

    pub fn with_config(config: PredictorConfig) -> Self {
        Self {
            config,
            state: Mutex::new(PredictorState {
                labels: None,
                store: PredictionStore::new(),
                partitions: PartitionIndex::new(config.mode),
            }),
        }
    }

    pub fn mode(&self) -> InputMode {
        self.config.mode
    }

    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    /// Install the label schema. Must happen before the first `add_item`.
    ///
    /// Replacing a schema does not touch entries that are already indexed:
    /// they keep the labels and levels they were created with. Build a new
    /// predictor to change the schema of existing data.
    pub fn set_labels(&self, labels: LabelSchema) {
        self.state.lock().labels = Some(labels);
    }

    /// The installed schema, if any.
    pub fn labels(&self) -> Option<LabelSchema> {
        self.state.lock().labels.clone()
    }

    /// Index an item.
    ///
    /// Ignored if an item with the same id is already indexed (first write
    /// wins; use [`replace_item`](Self::replace_item) to update), or if no
    /// schema has been installed.
    pub fn add_item(&self, item: Arc<T>) {
        let mut state = self.state.lock();
        self.add_locked(&mut state, item);
    }

    /// Index many items under a single lock acquisition.
    pub fn add_items(&self, items: impl IntoIterator<Item = Arc<T>>) {
        let mut state = self.state.lock();
        for item in items {
            self.add_locked(&mut state, item);
        }
    }

    /// Remove an item by id. Unknown ids are ignored.
    pub fn remove_item(&self, id: &str) {
        let mut state = self.state.lock();
        Self::remove_locked(&mut state, id);
    }

    /// Remove `old_id` and add `item` as one atomic step. The new item's id
    /// may differ from `old_id`.
    pub fn replace_item(&self, old_id: &str, item: Arc<T>) {
        let mut state = self.state.lock();
        Self::remove_locked(&mut state, old_id);
        self.add_locked(&mut state, item);
    }

    /// Whether an item with this id is indexed.
    pub fn contains(&self, id: &str) -> bool {
        self.state.lock().store.contains_item(id)
    }

    /// Number of indexed items.
    pub fn len(&self) -> usize {
        self.state.lock().store.item_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> IndexStats {
        let state = self.state.lock();
        IndexStats {
            items: state.store.item_count(),
            entries: state.store.entry_count(),
            free_slots: state.store.free_slots(),
            depth: state.partitions.depth(),
        }
    }

    /// Find items with a field whose encoding starts with `query`.
    ///
    /// Returns `None` for an empty or absent query, and `Some(vec![])` when the
    /// query ran but nothing matched. Results hold at most one prediction per
    /// item, ordered by label priority, then by the items' own order.
    ///
    /// Pass the whole query on every keystroke; nothing is cached between calls.
    pub fn predict<'q>(&self, query: impl Into<Option<&'q str>>) -> Option<Vec<Prediction<T>>> {
        let query = query.into().filter(|q| !q.is_empty())?;

        let state = self.state.lock();
        let found = state.partitions.query_prefix(query);
        let predictions: Vec<Prediction<T>> = found
            .candidates
            .iter()
            .filter_map(|&slot| state.store.get(slot))
            .map(|entry| Prediction::new(Arc::clone(entry), found.extent))
            .collect();
        drop(state);

        tracing::trace!(
            query,
            candidates = predictions.len(),
            extent = found.extent,
            "predict"
        );
        Some(rank(predictions))
    }

    fn add_locked(&self, state: &mut PredictorState<T>, item: Arc<T>) {
        let PredictorState {
            labels,
            store,
            partitions,
        } = state;

        let Some(labels) = labels.as_ref() else {
            tracing::debug!(id = item.id(), "no labels installed, item ignored");
            return;
        };
        if store.contains_item(item.id()) {
            tracing::debug!(id = item.id(), "duplicate id, item ignored");
            return;
        }

        let mode = self.config.mode;
        let mut added = 0usize;
        for (spec, level) in labels.iter() {
            let label: Arc<str> = Arc::from(spec.name.as_str());
            let include_symbols = spec.kind.maps_symbols(mode);

            for (field_index, value) in item.field(&spec.name).iter().enumerate() {
                let generated = variants::generate(
                    spec.kind,
                    value,
                    mode,
                    self.config.max_variants_per_field,
                );
                for (variant, text) in generated.iter().enumerate() {
                    let encoding = encode(text, mode, include_symbols);
                    if encoding.is_empty() || encoding.len() >= self.config.max_encoded_len {
                        continue;
                    }
                    let entry = PredictionEntry::new(
                        Arc::clone(&item),
                        encoding,
                        Arc::clone(&label),
                        level,
                        field_index,
                        variant,
                    );
                    let slot = store.insert(item.id(), entry);
                    if let Some(entry) = store.get(slot) {
                        partitions.insert(slot, entry.symbols());
                    }
                    added += 1;
                }
            }
        }
        tracing::trace!(id = item.id(), entries = added, "item indexed");
    }

    fn remove_locked(state: &mut PredictorState<T>, id: &str) {
        let removed = state.store.remove_item(id);
        if removed.is_empty() {
            tracing::debug!(id, "unknown id, nothing removed");
            return;
        }
        for (slot, entry) in &removed {
            state.partitions.remove(*slot, entry.symbols());
        }
        tracing::trace!(id, entries = removed.len(), "item removed");
    }
}
