//! One predictor shared across threads.

use crate::common::{contact, keypad_predictor, result_ids};
use std::sync::Arc;
use std::thread;

#[test]
fn test_readers_and_writers_interleave() {
    let predictor = Arc::new(keypad_predictor());
    predictor.add_item(contact("anchor", "John Doe", "987654321"));

    let writers: Vec<_> = (0..4)
        .map(|t| {
            let predictor = Arc::clone(&predictor);
            thread::spawn(move || {
                for i in 0..50 {
                    let id = format!("{t}-{i}");
                    predictor.add_item(contact(&id, "Jane Roe", "5550100"));
                    if i % 2 == 0 {
                        predictor.remove_item(&id);
                    }
                }
            })
        })
        .collect();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let predictor = Arc::clone(&predictor);
            thread::spawn(move || {
                for _ in 0..100 {
                    // The anchor is never touched, so it is always found
                    let ids = result_ids(&predictor, "5646");
                    assert_eq!(ids, vec!["anchor"]);

                    let results = predictor.predict("5263").unwrap_or_default();
                    let mut seen: Vec<&str> = results.iter().map(|p| p.item().id.as_str()).collect();
                    let total = seen.len();
                    seen.sort_unstable();
                    seen.dedup();
                    assert_eq!(seen.len(), total, "duplicate item in one result");
                }
            })
        })
        .collect();

    for handle in writers.into_iter().chain(readers) {
        handle.join().unwrap();
    }

    // Odd rounds survive: 25 per writer
    assert_eq!(predictor.len(), 1 + 4 * 25);
    assert_eq!(result_ids(&predictor, "5263").len(), 4 * 25);
}

#[test]
fn test_replace_is_atomic_for_readers() {
    let predictor = Arc::new(keypad_predictor());
    predictor.add_item(contact("1", "John Doe", "987654321"));

    let writer = {
        let predictor = Arc::clone(&predictor);
        thread::spawn(move || {
            for i in 0..200 {
                let name = if i % 2 == 0 { "Jane Doe" } else { "John Doe" };
                predictor.replace_item("1", contact("1", name, "987654321"));
            }
        })
    };

    // "363" matches both names; the item must never vanish mid-replace
    for _ in 0..200 {
        assert_eq!(result_ids(&predictor, "363"), vec!["1"]);
    }
    writer.join().unwrap();
}
