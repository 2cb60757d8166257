//! Keypad (T9) mode: digits typed on a phone keypad.

use crate::common::{
    assert_no_match, keypad_predictor, result_ids, single, single_id, with_contacts, DECOY_ID,
};

const ID: &str = "1234";

fn fixture(name: &str, number: &str) -> keysift::Predictor<keysift::Record> {
    with_contacts(
        keypad_predictor(),
        &[(ID, name, number), (DECOY_ID, "Xxx Yyy", "0000000")],
    )
}

#[test]
fn test_empty_query_is_not_a_search() {
    let predictor = fixture("John Doe", "987654321");
    assert!(predictor.predict("").is_none());
    assert!(predictor.predict(None).is_none());
}

#[test]
fn test_first_name() {
    let predictor = fixture("John Doe", "987654321");
    assert_eq!(single_id(&predictor, "5646"), ID);
}

#[test]
fn test_no_match_is_empty() {
    let predictor = fixture("John Doe", "987654321");
    assert_no_match(&predictor, "111");
}

#[test]
fn test_whole_number() {
    let predictor = fixture("John Doe", "987654321");
    assert_eq!(single_id(&predictor, "987654321"), ID);
}

#[test]
fn test_partial_words_and_numbers() {
    let predictor = fixture("John Doe", "+91 98765 4321");

    assert_eq!(single_id(&predictor, "5646"), ID);
    assert_eq!(single_id(&predictor, "363"), ID);
    assert_eq!(single_id(&predictor, "5646363"), ID);
    assert_eq!(single_id(&predictor, "9876"), ID);
    assert_eq!(single_id(&predictor, "919876"), ID);
}

#[test]
fn test_last_four_digits() {
    let predictor = fixture("John Doe", "+91 98765 4321");
    let hit = single(&predictor, "4321");
    assert_eq!(hit.label(), "number");
    assert_eq!(hit.alignment(), &[10, 11, 12, 13]);
}

#[test]
fn test_plus_is_a_key_for_numbers() {
    let predictor = fixture("John Doe", "+91 98765 4321");
    assert_eq!(single_id(&predictor, "+91987654321"), ID);
}

#[test]
fn test_initials() {
    let predictor = fixture(
        "Cipriano de la Santísima Trinidad Ruiz y Picasso",
        "+91 98765 4321",
    );

    assert_eq!(single_id(&predictor, "23578797"), ID);
    assert_eq!(single_id(&predictor, "23578797422776"), ID);
    assert_eq!(single_id(&predictor, "78797"), ID);
    assert_eq!(single_id(&predictor, "78797422776"), ID);
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_accented_letters_share_keys() {
    let predictor = fixture("ÁÉÍÓÚÜÖÇÙÒÑÕÊÎàèëô", "+91 98765 4321");
    assert_eq!(single_id(&predictor, "234688628666342336"), ID);
}

#[test]
fn test_punctuation_separates_words() {
    let predictor = fixture("me.stupid@boy.com", "+91 98765 4321");
    // "stupid" + "boy"
    assert_eq!(single_id(&predictor, "788743269"), ID);
}

#[test]
fn test_alignment_follows_initials() {
    let predictor = fixture("Cipriano de la Santísima", "+91 98765 4321");

    assert_eq!(single(&predictor, "2357").alignment(), &[0, 9, 12, 15]);
    assert_eq!(single(&predictor, "3352").alignment(), &[9, 10, 12, 13]);
}

#[test]
fn test_digits_split_words_in_names() {
    let predictor = fixture("R2D2 Droid", "5550100");
    // "D" after the digit is its own word
    assert_eq!(single_id(&predictor, "3"), ID);
    assert_eq!(single(&predictor, "3").alignment(), &[2]);
}

#[test]
fn test_several_matches_in_natural_order() {
    let predictor = with_contacts(
        keypad_predictor(),
        &[
            ("0", "john doe", "880000000"),
            ("1", "jane doe", "871111111"),
            ("2", "peter gun", "842222222"),
            ("3", "Wally", "943333333"),
            ("4", "seuds ivo", "774444444"),
        ],
    );

    let ids = result_ids(&predictor, "5363");
    assert_eq!(ids, vec!["0", "1"]);

    assert_eq!(single_id(&predictor, "9"), "3");

    let ids = result_ids(&predictor, "73837486");
    assert_eq!(ids, vec!["2", "4"]);
}
