// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for variant generation and encoding.
//!
//! Any UTF-8 value in any mode for any field kind. Generation must stay under
//! the cap, and every variant must keep each surviving character at its
//! original position.

#![no_main]

use arbitrary::Arbitrary;
use keysift::variants::{generate, FILLER};
use keysift::{encode, FieldKind, InputMode};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct VariantInput {
    value: String,
    alphanumeric: bool,
    kind: u8,
    limit: u8,
}

fuzz_target!(|input: VariantInput| {
    // Cap length: text variants double per word boundary
    let value: String = input.value.chars().take(64).collect();
    let mode = if input.alphanumeric {
        InputMode::Alphanumeric
    } else {
        InputMode::Keypad
    };
    let kind = match input.kind % 3 {
        0 => FieldKind::Number,
        1 => FieldKind::TextSeparated,
        _ => FieldKind::TextContiguous,
    };
    let limit = usize::from(input.limit).max(1);

    let variants = generate(kind, &value, mode, limit);
    assert!(!variants.is_empty());
    assert_eq!(variants[0], value, "raw value must come first");
    if kind == FieldKind::TextSeparated {
        assert!(variants.len() <= limit);
    }

    let source: Vec<char> = value.chars().collect();
    let raw = encode(&value, mode, kind.maps_symbols(mode));
    for variant in &variants {
        let chars: Vec<char> = variant.chars().collect();
        assert_eq!(chars.len(), source.len());
        for (i, c) in chars.iter().enumerate() {
            assert!(*c == FILLER || *c == source[i]);
        }

        let encoded = encode(variant, mode, kind.maps_symbols(mode));
        assert_eq!(encoded.symbols.len(), encoded.positions.len());
        assert!(encoded.positions.iter().all(|p| raw.positions.contains(p)));
    }
});
