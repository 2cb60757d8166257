//! Queries and values at the edges: unmapped characters, overlong queries,
//! empty fields, encoding limits.

use crate::common::{
    assert_no_match, contact, keypad_predictor, single, single_id, with_contacts, LABEL_NAME,
};
use keysift::{Config, FieldKind, InputMode, LabelSchema, Predictor, PredictorConfig, Record};
use std::sync::Arc;

#[test]
fn test_query_of_unmapped_characters_runs_empty() {
    let predictor = with_contacts(keypad_predictor(), &[("1", "John Doe", "987654321")]);
    let results = predictor.predict("-- ()").unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_unmapped_query_characters_are_skipped() {
    let predictor = with_contacts(keypad_predictor(), &[("1", "John Doe", "987654321")]);
    assert_eq!(single_id(&predictor, "56-46"), "1");
    assert_eq!(single(&predictor, "5 6 4 6").alignment(), &[0, 1, 2, 3]);
}

#[test]
fn test_overlong_query_keeps_what_matched() {
    let predictor = with_contacts(keypad_predictor(), &[("1", "John Doe", "987654321")]);

    // Longest encoding is the 9-digit number
    let hit = single(&predictor, "98765432100000");
    assert_eq!(hit.matched_extent(), 9);
    assert_eq!(hit.alignment().len(), 9);
}

#[test]
fn test_query_longer_than_one_entry_excludes_it() {
    let predictor = with_contacts(
        keypad_predictor(),
        &[("1", "Jo", "100"), ("2", "Jones", "200")],
    );
    assert_eq!(single_id(&predictor, "566"), "2");
}

#[test]
fn test_partial_extent_reports_partial_alignment() {
    let predictor = with_contacts(keypad_predictor(), &[("1", "John Doe", "987654321")]);
    let hit = single(&predictor, "56");
    assert_eq!(hit.matched_extent(), 2);
    assert_eq!(hit.alignment(), &[0, 1]);
    assert_eq!(hit.encoding().len(), 7);
}

#[test]
fn test_missing_and_empty_fields_are_skipped() {
    let predictor = keypad_predictor();
    predictor.add_item(Arc::new(Record::new("1").with_field(LABEL_NAME, "Ann")));
    predictor.add_item(contact("2", "", ""));
    predictor.add_item(contact("3", "!!!", "---"));

    // Items with nothing indexable leave no trace
    assert_eq!(predictor.len(), 1);
    assert!(!predictor.contains("2"));
    assert_eq!(predictor.stats().entries, 1);
    assert_eq!(single_id(&predictor, "266"), "1");
}

#[test]
fn test_encoding_at_limit_is_not_indexed() {
    let mut config = PredictorConfig::new(InputMode::Alphanumeric);
    config.max_encoded_len = 5;
    let predictor: Predictor<Record> = Predictor::with_config(config);
    predictor.set_labels(LabelSchema::new([("tag", FieldKind::TextContiguous)]).unwrap());

    predictor.add_item(Arc::new(Record::new("short").with_field("tag", "abcd")));
    predictor.add_item(Arc::new(Record::new("exact").with_field("tag", "abcde")));

    assert_eq!(predictor.stats().entries, 1);
    assert_eq!(single_id(&predictor, "abc"), "short");
}

#[test]
fn test_variant_cap_limits_entries() {
    let mut config = PredictorConfig::new(InputMode::Alphanumeric);
    config.max_variants_per_field = 4;
    let predictor: Predictor<Record> = Predictor::with_config(config);
    predictor.set_labels(LabelSchema::new([(LABEL_NAME, FieldKind::TextSeparated)]).unwrap());

    predictor.add_item(Arc::new(
        Record::new("1").with_field(LABEL_NAME, "Cipriano de la Santísima Trinidad"),
    ));

    assert_eq!(predictor.stats().entries, 4);
    assert_eq!(single_id(&predictor, "cipriano"), "1");
}

#[test]
fn test_config_drives_predictor() {
    let config = Config::from_json(
        r#"{
            "mode": "alphanumeric",
            "labels": [
                { "name": "name", "kind": "text-separated" },
                { "name": "email", "kind": "text-contiguous" }
            ]
        }"#,
    )
    .unwrap();

    let predictor: Predictor<Record> = Predictor::with_config(config.predictor);
    predictor.set_labels(config.labels);
    predictor.add_item(Arc::new(
        Record::new("1")
            .with_field("name", "Grace Hopper")
            .with_field("email", "grace@navy.mil"),
    ));

    assert_eq!(predictor.mode(), InputMode::Alphanumeric);
    assert_eq!(single(&predictor, "hopper").label(), "name");
    assert_eq!(single(&predictor, "grace@").label(), "email");
    assert_no_match(&predictor, "navy");
}

#[test]
fn test_records_load_from_json() {
    let records: Vec<Record> = serde_json::from_str(
        r#"[
            { "id": "1", "fields": { "name": "John Doe", "number": "987654321" } },
            { "id": "2", "fields": { "name": ["Jane Roe"], "number": ["555 0100", "555 0199"] } }
        ]"#,
    )
    .unwrap();

    let predictor = keypad_predictor();
    predictor.add_items(records.into_iter().map(Arc::new));

    assert_eq!(predictor.len(), 2);
    assert_eq!(single_id(&predictor, "5550199"), "2");
    assert_eq!(single_id(&predictor, "5646"), "1");
}
