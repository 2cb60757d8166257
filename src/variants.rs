// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Variant generation: one field value → many indexable strings.
//!
//! The partition index only answers prefix queries. To let "doe" find
//! "John Doe", or "9876" find "+91 98765 4321", we index extra copies of the
//! value with the leading part blanked out. Blanking replaces characters with
//! [`FILLER`], which has no key in either alphabet, so:
//!
//! - the blanked part disappears from the encoding, and
//! - every surviving character keeps its original position.
//!
//! The second point is what makes highlighting work without any bookkeeping:
//! a match on the variant `"_____Doe"` reports positions 5, 6, 7, which are
//! exactly where "Doe" sits in "John Doe".
//!
//! # Text variants
//!
//! For `"Mohandas Karamchand Gandhi"` the generator yields, in order:
//!
//! ```text
//! Mohandas Karamchand Gandhi
//! _________Karamchand Gandhi
//! ____________________Gandhi
//! _________K__________Gandhi
//! M________Karamchand Gandhi
//! M___________________Gandhi
//! M________K__________Gandhi
//! ```
//!
//! Every word boundary doubles the work (drop the word, or keep only its
//! initial), so a field with k boundaries yields `2^(k+1) - 1` variants. The
//! `limit` argument caps that; long fields are truncated with a warning.

use crate::alphabet::InputMode;
use crate::schema::FieldKind;
use std::iter;

/// Placeholder for blanked characters. Has no key in any alphabet.
pub const FILLER: char = '_';

/// Number values shorter than or equal to this get no blanked variants.
const MIN_NUMBER_LEN_FOR_VARIANTS: usize = 4;

/// Leading characters blanked for country-code stripping: 1, 2 and 3.
const MAX_BLANKED_PREFIX: usize = 4;

/// Number values at least this long also get a last-four-digits variant.
const MIN_NUMBER_LEN_FOR_TAIL: usize = 8;

/// Length of the tail kept by the last-digits variant.
const TAIL_LEN: usize = 4;

/// Default cap on variants generated for one field value.
pub const DEFAULT_MAX_VARIANTS: usize = 512;

/// Generate the variants of `value` for a field of `kind`.
///
/// The raw value always comes first. In keypad mode digits act as word
/// separators for text fields (they share keys with letters, so "r2d2" is
/// better treated as two words); in alphanumeric mode they are word characters.
pub fn generate(kind: FieldKind, value: &str, mode: InputMode, limit: usize) -> Vec<String> {
    match kind {
        FieldKind::Number => number_variants(value),
        FieldKind::TextSeparated => text_variants(value, mode == InputMode::Keypad, limit),
        FieldKind::TextContiguous => vec![value.to_string()],
    }
}

/// Phone number variants: raw, first 1..=3 characters blanked, and the last
/// four digits alone for long numbers.
///
/// We don't know which country codes are in use, so instead of parsing them
/// we blank every short prefix. "+91 98765 4321" becomes findable by
/// "+9198…", "9198…", "198…" and "98765…".
pub fn number_variants(value: &str) -> Vec<String> {
    let chars: Vec<char> = value.chars().collect();
    let mut variants = vec![value.to_string()];

    if chars.len() > MIN_NUMBER_LEN_FOR_VARIANTS {
        for blanked in 1..MAX_BLANKED_PREFIX {
            variants.push(blank_prefix(&chars, blanked));
        }
        if chars.len() >= MIN_NUMBER_LEN_FOR_TAIL {
            variants.push(blank_prefix(&chars, chars.len() - TAIL_LEN));
        }
    }
    variants
}

/// Word-dropping and initials variants of multi-word text.
///
/// Walks the value left to right. At each word boundary the current prefix
/// forks into "drop the word" and "keep the initial". Uses an explicit stack
/// rather than recursion; output order is depth-first with the drop branch
/// first.
pub fn text_variants(value: &str, digits_separate: bool, limit: usize) -> Vec<String> {
    let chars: Vec<char> = value.chars().collect();
    let is_word = |c: char| c.is_alphabetic() || (!digits_separate && c.is_numeric());

    let mut variants = Vec::new();
    // Each pending prefix covers chars[..prefix.len()]; the rest is untouched.
    let mut pending: Vec<Vec<char>> = vec![Vec::new()];

    while let Some(prefix) = pending.pop() {
        if variants.len() >= limit {
            tracing::warn!(
                value,
                limit,
                "variant limit reached, remaining word combinations not indexed"
            );
            break;
        }

        let start = prefix.len();
        let suffix = &chars[start..];
        variants.push(prefix.iter().chain(suffix).collect());

        let Some(consumed) = first_word_span(suffix, is_word) else {
            continue;
        };

        let mut dropped = prefix.clone();
        dropped.extend(iter::repeat(FILLER).take(consumed));

        let mut initial = prefix;
        initial.push(suffix[0]);
        initial.extend(iter::repeat(FILLER).take(consumed - 1));

        // Stack: push the branch that should come out second first.
        pending.push(initial);
        pending.push(dropped);
    }
    variants
}

/// Length of the first word plus its trailing separator run, if the text
/// splits into a non-empty first word and a non-empty remainder.
fn first_word_span(text: &[char], is_word: impl Fn(char) -> bool) -> Option<usize> {
    let word_end = text.iter().position(|&c| !is_word(c))?;
    if word_end == 0 {
        return None;
    }
    let rest_start = text[word_end..]
        .iter()
        .position(|&c| is_word(c))
        .map(|offset| word_end + offset)?;
    Some(rest_start)
}

fn blank_prefix(chars: &[char], blanked: usize) -> String {
    iter::repeat(FILLER)
        .take(blanked)
        .chain(chars[blanked..].iter().copied())
        .collect()
}
