// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ordering and per-item deduplication.
//!
//! An item appears at most once in a result list, no matter how many of its
//! fields and variants matched. Between items the order is:
//!
//! 1. Higher priority level first (the first schema label beats later ones)
//! 2. The items' own `Ord`
//! 3. Item id, so that items comparing equal are still kept, in a fixed order
//!
//! When several entries of one item match, the one that represents the item
//! is picked deterministically by [`prefer`]: higher level, then lower value
//! index, then earlier variant (the raw value before anything derived from it).
//! The item is then ranked by that winner's level.

use crate::item::Item;
use crate::prediction::Prediction;
use std::cmp::Ordering;

/// Order two predictions for *different* items. Same-item predictions compare
/// equal.
pub fn compare_predictions<T: Item>(a: &Prediction<T>, b: &Prediction<T>) -> Ordering {
    if a.item().id() == b.item().id() {
        return Ordering::Equal;
    }
    b.level()
        .cmp(&a.level())
        .then_with(|| a.item().cmp(b.item()))
        .then_with(|| a.item().id().cmp(b.item().id()))
}

/// Which of two predictions for the *same* item should represent it.
/// `Less` means `a` wins.
pub fn prefer<T>(a: &Prediction<T>, b: &Prediction<T>) -> Ordering {
    b.level()
        .cmp(&a.level())
        .then_with(|| a.field_index().cmp(&b.field_index()))
        .then_with(|| a.variant().cmp(&b.variant()))
}

/// Collapse to one prediction per item and sort.
pub fn rank<T: Item>(mut predictions: Vec<Prediction<T>>) -> Vec<Prediction<T>> {
    predictions.sort_unstable_by(|a, b| {
        a.item()
            .id()
            .cmp(b.item().id())
            .then_with(|| prefer(a, b))
    });
    // Keeps the first of each run, which is the preferred entry.
    predictions.dedup_by(|later, earlier| later.item().id() == earlier.item().id());
    predictions.sort_by(compare_predictions);
    predictions
}
