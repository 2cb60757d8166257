//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::alphabet::InputMode;
use crate::item::Record;
use crate::predictor::Predictor;
use crate::schema::{FieldKind, LabelSchema};
use std::sync::Arc;

/// Label for the name field in contact fixtures.
pub const LABEL_NAME: &str = "name";

/// Label for the number field in contact fixtures.
pub const LABEL_NUMBER: &str = "number";

/// The usual contact schema: name (high priority), then number.
pub fn contact_labels() -> LabelSchema {
    LabelSchema::new([
        (LABEL_NAME, FieldKind::TextSeparated),
        (LABEL_NUMBER, FieldKind::Number),
    ])
    .expect("contact labels are valid")
}

/// Create a contact with one name and one number, ordered by id.
///
/// This is the canonical implementation used across all tests.
pub fn contact(id: &str, name: &str, number: &str) -> Arc<Record> {
    Arc::new(
        Record::new(id)
            .with_field(LABEL_NAME, name)
            .with_field(LABEL_NUMBER, number),
    )
}

/// Keypad predictor with [`contact_labels`] installed.
pub fn keypad_predictor() -> Predictor<Record> {
    predictor(InputMode::Keypad)
}

/// Alphanumeric predictor with [`contact_labels`] installed.
pub fn alphanumeric_predictor() -> Predictor<Record> {
    predictor(InputMode::Alphanumeric)
}

/// Predictor in `mode` with [`contact_labels`] installed.
pub fn predictor(mode: InputMode) -> Predictor<Record> {
    let predictor = Predictor::new(mode);
    predictor.set_labels(contact_labels());
    predictor
}

/// Ids of a prediction result, in ranked order. Empty for a `None` result.
pub fn result_ids(predictor: &Predictor<Record>, query: &str) -> Vec<String> {
    predictor
        .predict(query)
        .unwrap_or_default()
        .iter()
        .map(|p| p.item().id.clone())
        .collect()
}
