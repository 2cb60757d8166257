//! Encoding and variant invariants through the public API.

use keysift::variants::{generate, FILLER};
use keysift::{encode, FieldKind, InputMode};
use proptest::prelude::*;

fn mode_strategy() -> impl Strategy<Value = InputMode> {
    prop_oneof![Just(InputMode::Keypad), Just(InputMode::Alphanumeric)]
}

fn kind_strategy() -> impl Strategy<Value = FieldKind> {
    prop_oneof![
        Just(FieldKind::Number),
        Just(FieldKind::TextSeparated),
        Just(FieldKind::TextContiguous),
    ]
}

proptest! {
    /// Symbols stay inside the alphabet and positions point at the source
    /// character each symbol came from.
    #[test]
    fn prop_encoding_is_aligned(
        source in "[a-zA-Z0-9àéîõü ,.@*+#&_-]{0,24}",
        mode in mode_strategy(),
        symbols in any::<bool>(),
    ) {
        let encoding = encode(&source, mode, symbols);
        let chars: Vec<char> = source.chars().collect();

        prop_assert_eq!(encoding.symbols.len(), encoding.positions.len());
        prop_assert!(encoding.positions.windows(2).all(|w| w[0] < w[1]));
        for (&symbol, &pos) in encoding.symbols.iter().zip(&encoding.positions) {
            prop_assert!((symbol as usize) < mode.alphabet_size());
            prop_assert_eq!(mode.map_char(chars[pos], symbols), Some(symbol));
        }
    }

    /// Re-encoding a rendered encoding gives back the same symbols.
    #[test]
    fn prop_render_is_reencodable(
        source in "[a-z0-9 ,.@*+#]{0,24}",
        mode in mode_strategy(),
    ) {
        let encoding = encode(&source, mode, true);
        let rendered = encoding.render(mode);
        prop_assert_eq!(encode(&rendered, mode, true).symbols, encoding.symbols);
    }

    /// Blanked characters never reach the encoding, so every variant encodes
    /// to a subsequence of the raw value's positions.
    #[test]
    fn prop_variant_positions_are_subset_of_raw(
        words in prop::collection::vec("[a-z0-9]{1,5}", 1..5),
        mode in mode_strategy(),
        kind in kind_strategy(),
    ) {
        let value = words.join(" ");
        let raw = encode(&value, mode, true);
        prop_assert!(mode.map_char(FILLER, true).is_none());
        for variant in generate(kind, &value, mode, 64) {
            let encoded = encode(&variant, mode, true);
            for pos in &encoded.positions {
                prop_assert!(raw.positions.contains(pos));
            }
        }
    }
}
