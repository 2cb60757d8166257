//! Adding, removing and replacing items on a live predictor.

use crate::common::{
    alphanumeric_predictor, assert_no_match, contact, keypad_predictor, single_id, single_name,
    with_contacts,
};
use keysift::{FieldKind, InputMode, LabelSchema, Predictor, Record};

mod keypad {
    use super::*;

    #[test]
    fn test_add_without_labels_does_not_crash() {
        let predictor: Predictor<Record> = Predictor::new(InputMode::Keypad);
        predictor.add_item(contact("1234", "John Doe", "987654321"));
        assert!(predictor.is_empty());
        assert_no_match(&predictor, "321");
    }

    #[test]
    fn test_duplicate_id_keeps_first() {
        let predictor = with_contacts(
            keypad_predictor(),
            &[
                ("0", "john doe", "880000000"),
                ("0", "jane doe", "880000000"),
                ("0", "Bane doe", "880000000"),
            ],
        );

        assert_eq!(predictor.len(), 1);
        assert_eq!(single_id(&predictor, "5363"), "0");
        assert_eq!(single_name(&predictor, "5363"), "john doe");
    }

    #[test]
    fn test_removal() {
        let predictor = with_contacts(
            keypad_predictor(),
            &[("0", "john doe", "880000000"), ("1", "jane doe", "871111111")],
        );

        assert_eq!(single_id(&predictor, "5646"), "0");
        predictor.remove_item("0");
        assert_no_match(&predictor, "5646");
        assert!(!predictor.contains("0"));

        assert_eq!(single_id(&predictor, "363"), "1");
    }

    #[test]
    fn test_replacement() {
        let predictor = with_contacts(keypad_predictor(), &[("0", "john doe", "880000000")]);

        assert_eq!(single_id(&predictor, "363"), "0");
        predictor.replace_item("0", contact("0", "jane doe", "871111111"));

        assert_eq!(single_name(&predictor, "363"), "jane doe");
        assert_no_match(&predictor, "5646");
        assert_eq!(predictor.len(), 1);
    }
}

mod alphanumeric {
    use super::*;

    #[test]
    fn test_duplicate_id_keeps_first() {
        let predictor = with_contacts(
            alphanumeric_predictor(),
            &[
                ("0", "john doe", "880000000"),
                ("0", "jane doe", "880000000"),
                ("0", "Bane doe", "880000000"),
            ],
        );

        assert_eq!(single_id(&predictor, "doe"), "0");
        assert_eq!(single_name(&predictor, "doe"), "john doe");
    }

    #[test]
    fn test_removal() {
        let predictor = with_contacts(
            alphanumeric_predictor(),
            &[("0", "john doe", "880000000"), ("1", "jane doe", "871111111")],
        );

        assert_eq!(single_id(&predictor, "john"), "0");
        predictor.remove_item("0");
        assert_no_match(&predictor, "5646");
        assert_no_match(&predictor, "john");

        assert_eq!(single_id(&predictor, "doe"), "1");
    }

    #[test]
    fn test_replacement() {
        let predictor =
            with_contacts(alphanumeric_predictor(), &[("0", "john doe", "880000000")]);

        assert_eq!(single_id(&predictor, "doe"), "0");
        predictor.replace_item("0", contact("0", "jane doe", "871111111"));

        assert_eq!(single_name(&predictor, "doe"), "jane doe");
    }
}

#[test]
fn test_replacement_can_change_id() {
    let predictor = with_contacts(keypad_predictor(), &[("old", "john doe", "880000000")]);

    predictor.replace_item("old", contact("new", "jane doe", "871111111"));

    assert!(!predictor.contains("old"));
    assert!(predictor.contains("new"));
    assert_eq!(single_id(&predictor, "363"), "new");
}

#[test]
fn test_replacing_unknown_id_adds() {
    let predictor = keypad_predictor();
    predictor.replace_item("ghost", contact("1", "john doe", "880000000"));
    assert_eq!(single_id(&predictor, "5646"), "1");
}

#[test]
fn test_removing_unknown_id_is_ignored() {
    let predictor = with_contacts(keypad_predictor(), &[("1", "john doe", "880000000")]);
    let before = predictor.stats();

    predictor.remove_item("ghost");

    assert_eq!(predictor.stats(), before);
}

#[test]
fn test_remove_then_add_same_id() {
    let predictor = with_contacts(keypad_predictor(), &[("1", "john doe", "880000000")]);
    predictor.remove_item("1");
    predictor.add_item(contact("1", "jane doe", "871111111"));

    assert_eq!(single_name(&predictor, "363"), "jane doe");
    assert_no_match(&predictor, "5646");
}

#[test]
fn test_churn_reuses_slots() {
    let predictor = keypad_predictor();
    for round in 0..10 {
        let id = format!("{round}");
        predictor.add_item(contact(&id, "john doe", "880000000"));
        predictor.remove_item(&id);
    }
    predictor.add_item(contact("last", "john doe", "880000000"));

    let stats = predictor.stats();
    assert_eq!(stats.items, 1);
    // One item's worth of slots, all live
    assert_eq!(stats.free_slots, 0);
    assert_eq!(single_id(&predictor, "5646"), "last");
}

#[test]
fn test_results_survive_later_mutation() {
    let predictor = with_contacts(keypad_predictor(), &[("1", "john doe", "880000000")]);

    let results = predictor.predict("5646").unwrap();
    predictor.remove_item("1");
    predictor.predict("5").unwrap();

    assert_eq!(results[0].item().id, "1");
    assert_eq!(results[0].alignment(), &[0, 1, 2, 3]);
}

#[test]
fn test_schema_swap_keeps_existing_entries() {
    let predictor = with_contacts(keypad_predictor(), &[("1", "john doe", "880000000")]);

    predictor.set_labels(LabelSchema::new([("number", FieldKind::Number)]).unwrap());
    predictor.add_item(contact("2", "jane doe", "871111111"));

    // Old entry still carries the name label
    assert_eq!(single_id(&predictor, "5646"), "1");
    // New item was indexed by number only
    assert_no_match(&predictor, "5263");
    assert_eq!(single_id(&predictor, "8711"), "2");
}
