// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The positional partition index.
//!
//! An ordinary inverted index maps tokens to documents. This one maps
//! *(position, symbol)* pairs to entries: bucket `(p, s)` holds every entry
//! whose encoding has symbol `s` at position `p`. A prefix query is then just
//! an intersection walk, one bucket per query symbol:
//!
//! ```text
//! query "563"      position 0     position 1     position 2
//!                 ┌──────────┐   ┌──────────┐   ┌──────────┐
//!   symbol 5 ───▶ │ {1,4,7,9}│   │          │   │          │
//!   symbol 6 ───▶ │          │ ∩ │ {1,7,12} │   │          │
//!   symbol 3 ───▶ │          │   │          │ ∩ │ {1,3}    │  = {1}
//!                 └──────────┘   └──────────┘   └──────────┘
//! ```
//!
//! Insertion and removal touch one bucket per symbol, so live updates cost
//! O(encoding length) with no rebuild.
//!
//! # INVARIANT
//!
//! Entry `e` is in bucket `(p, s)` iff `e` was inserted with an encoding of
//! length > p whose symbol at `p` is `s`, and has not been removed since.

use crate::alphabet::{InputMode, Symbol};
use crate::encoding::encode_query;
use std::collections::HashSet;

/// Index of an entry in the prediction store.
pub type EntryId = usize;

/// Result of a prefix walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixMatch {
    /// Entries that agree with the query on every consumed symbol.
    pub candidates: HashSet<EntryId>,
    /// Number of mapped query symbols consumed before the walk stopped.
    pub extent: usize,
}

/// Per-position, per-symbol entry buckets.
#[derive(Debug, Clone)]
pub struct PartitionIndex {
    mode: InputMode,
    /// `columns[p][s]` is bucket `(p, s)`. Columns are created on first use.
    columns: Vec<Vec<HashSet<EntryId>>>,
}

impl PartitionIndex {
    pub fn new(mode: InputMode) -> Self {
        Self {
            mode,
            columns: Vec::new(),
        }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Number of positions with a column, i.e. the longest encoding seen.
    pub fn depth(&self) -> usize {
        self.columns.len()
    }

    /// Add `entry` to the bucket of every (position, symbol) of `symbols`.
    pub fn insert(&mut self, entry: EntryId, symbols: &[Symbol]) {
        let alphabet = self.mode.alphabet_size();
        for (position, &symbol) in symbols.iter().enumerate() {
            if self.columns.len() <= position {
                self.columns.push(vec![HashSet::new(); alphabet]);
            }
            // Encodings only carry valid slots; skip anything else.
            if let Some(bucket) = self.columns[position].get_mut(symbol as usize) {
                bucket.insert(entry);
            }
        }
    }

    /// Remove `entry` from every bucket `insert(entry, symbols)` touched.
    pub fn remove(&mut self, entry: EntryId, symbols: &[Symbol]) {
        for (column, &symbol) in self.columns.iter_mut().zip(symbols) {
            if let Some(bucket) = column.get_mut(symbol as usize) {
                bucket.remove(&entry);
            }
        }
    }

    /// Bucket `(position, symbol)`, if its column exists.
    pub fn bucket(&self, position: usize, symbol: Symbol) -> Option<&HashSet<EntryId>> {
        self.columns.get(position)?.get(symbol as usize)
    }

    /// Find every entry whose encoding starts with the query.
    ///
    /// Query characters without a key are skipped, not treated as
    /// separators, so "c d l s" behaves like "cdls". A missing or empty
    /// bucket ends the walk with no candidates. A query longer than every
    /// stored encoding stops at the last column and keeps the candidates
    /// found so far.
    pub fn query_prefix(&self, query: &str) -> PrefixMatch {
        let mut candidates: Option<HashSet<EntryId>> = None;
        let mut extent = 0;

        for symbol in encode_query(query, self.mode) {
            let Some(column) = self.columns.get(extent) else {
                break;
            };
            let bucket = match column.get(symbol as usize) {
                Some(bucket) if !bucket.is_empty() => bucket,
                _ => return PrefixMatch::default(),
            };

            match candidates.as_mut() {
                None => candidates = Some(bucket.clone()),
                Some(current) => {
                    current.retain(|entry| bucket.contains(entry));
                    if current.is_empty() {
                        return PrefixMatch::default();
                    }
                }
            }
            extent += 1;
        }

        PrefixMatch {
            candidates: candidates.unwrap_or_default(),
            extent,
        }
    }
}
