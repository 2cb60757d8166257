// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for predictor mutation and query sequences.
//!
//! Replays arbitrary add/remove/replace/predict operations against a predictor
//! and a plain set of the ids that should be indexed. Every query result must
//! name each live item at most once and stay in ranked order.

#![no_main]

use arbitrary::Arbitrary;
use keysift::testing::{contact, predictor};
use keysift::InputMode;
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;

#[derive(Debug, Arbitrary)]
enum Op {
    Add { id: u8, name: String, number: String },
    Remove { id: u8 },
    Replace { old: u8, id: u8, name: String },
    Predict { query: String },
}

#[derive(Debug, Arbitrary)]
struct OpsInput {
    alphanumeric: bool,
    ops: Vec<Op>,
}

fn clip(s: &str) -> String {
    s.chars().take(24).collect()
}

fuzz_target!(|input: OpsInput| {
    let mode = if input.alphanumeric {
        InputMode::Alphanumeric
    } else {
        InputMode::Keypad
    };
    let predictor = predictor(mode);
    // Ids that were ever added and not removed since
    let mut live: HashSet<String> = HashSet::new();

    for op in input.ops.into_iter().take(64) {
        match op {
            Op::Add { id, name, number } => {
                let id = id.to_string();
                predictor.add_item(contact(&id, &clip(&name), &clip(&number)));
                if predictor.contains(&id) {
                    live.insert(id);
                }
            }
            Op::Remove { id } => {
                let id = id.to_string();
                predictor.remove_item(&id);
                live.remove(&id);
                assert!(!predictor.contains(&id));
            }
            Op::Replace { old, id, name } => {
                let (old, id) = (old.to_string(), id.to_string());
                predictor.replace_item(&old, contact(&id, &clip(&name), ""));
                live.remove(&old);
                if predictor.contains(&id) {
                    live.insert(id);
                }
            }
            Op::Predict { query } => {
                let query = clip(&query);
                let Some(results) = predictor.predict(query.as_str()) else {
                    assert!(query.is_empty());
                    continue;
                };

                let mut seen = HashSet::new();
                for hit in &results {
                    assert!(seen.insert(hit.item().id.clone()), "duplicate item");
                    assert!(live.contains(&hit.item().id), "stale item");
                    assert_eq!(hit.alignment().len(), hit.matched_extent());
                }
                for pair in results.windows(2) {
                    let (a, b) = (&pair[0], &pair[1]);
                    assert!(a.level() > b.level() || (a.level() == b.level() && a.item() < b.item()));
                }
            }
        }
        assert_eq!(predictor.len(), live.len());
    }
});
