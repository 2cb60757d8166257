// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Entry storage: slots indexed by [`EntryId`], plus item id → entry ids.
//!
//! Removing an item vacates its slots and puts them on a free list. The next
//! additions reuse those slots before the array grows, so a long-running
//! predictor with steady churn stays at roughly its peak live size.
//! Reuse is safe because a vacated id has already been removed from every
//! partition bucket before it goes on the free list.

use crate::partition::EntryId;
use crate::prediction::PredictionEntry;
use std::collections::HashMap;
use std::sync::Arc;

pub struct PredictionStore<T> {
    slots: Vec<Option<Arc<PredictionEntry<T>>>>,
    free: Vec<EntryId>,
    by_item: HashMap<String, Vec<EntryId>>,
}

impl<T> Default for PredictionStore<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            by_item: HashMap::new(),
        }
    }
}

impl<T> PredictionStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any entries are recorded for `item_id`.
    pub fn contains_item(&self, item_id: &str) -> bool {
        self.by_item.contains_key(item_id)
    }

    /// Store an entry under `item_id`, returning its slot.
    pub fn insert(&mut self, item_id: &str, entry: PredictionEntry<T>) -> EntryId {
        let entry = Some(Arc::new(entry));
        let id = match self.free.pop() {
            Some(id) => {
                self.slots[id] = entry;
                id
            }
            None => {
                self.slots.push(entry);
                self.slots.len() - 1
            }
        };
        self.by_item.entry(item_id.to_string()).or_default().push(id);
        id
    }

    /// Live entry in `slot`, if any.
    pub fn get(&self, slot: EntryId) -> Option<&Arc<PredictionEntry<T>>> {
        self.slots.get(slot)?.as_ref()
    }

    /// Vacate every slot of `item_id`, returning the removed entries so the
    /// caller can unhook them from the partition index.
    pub fn remove_item(&mut self, item_id: &str) -> Vec<(EntryId, Arc<PredictionEntry<T>>)> {
        let Some(ids) = self.by_item.remove(item_id) else {
            return Vec::new();
        };
        let mut removed = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(entry) = self.slots.get_mut(id).and_then(Option::take) {
                self.free.push(id);
                removed.push((id, entry));
            }
        }
        removed
    }

    /// Number of indexed items.
    pub fn item_count(&self) -> usize {
        self.by_item.len()
    }

    /// Number of live entries.
    pub fn entry_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Number of vacated slots waiting for reuse.
    pub fn free_slots(&self) -> usize {
        self.free.len()
    }
}
