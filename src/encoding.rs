// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Field encoding: source text → symbol string + alignment.
//!
//! Encoding drops every character without a key, but remembers where each
//! surviving symbol came from. `"Jo-hn"` on the keypad becomes symbols
//! `5 6 4 6` with positions `0 1 3 4`. The gap at 2 is the hyphen, and the
//! highlighter needs it: position lists index into the *original* string.
//!
//! Positions are **character offsets** (not byte offsets), so `"Santísima"`
//! counts `í` as one position.

use crate::alphabet::{InputMode, Symbol};

/// An encoded field value.
///
/// `symbols[i]` was produced by the character at `positions[i]` of the source.
/// Both vectors always have the same length.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Encoding {
    pub symbols: Vec<Symbol>,
    pub positions: Vec<usize>,
}

impl Encoding {
    /// Number of emitted symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Render the symbols as key labels (`"5646"` for "john" on the keypad).
    pub fn render(&self, mode: InputMode) -> String {
        self.symbols
            .iter()
            .filter_map(|&s| mode.symbol_char(s))
            .collect()
    }
}

/// Encode `source` in `mode`.
///
/// `include_symbols` controls whether `*+#` (keypad) or `,.@` (alphanumeric)
/// survive. Everything without a key is dropped from both outputs.
pub fn encode(source: &str, mode: InputMode, include_symbols: bool) -> Encoding {
    let mut encoding = Encoding {
        symbols: Vec::with_capacity(source.len()),
        positions: Vec::with_capacity(source.len()),
    };
    for (pos, c) in source.chars().enumerate() {
        if let Some(symbol) = mode.map_char(c, include_symbols) {
            encoding.symbols.push(symbol);
            encoding.positions.push(pos);
        }
    }
    encoding
}

/// Map a query to symbols, skipping characters without a key.
///
/// Queries always map with symbols enabled so that `+91…` or `a@b.c` can be
/// typed directly.
pub fn encode_query(query: &str, mode: InputMode) -> impl Iterator<Item = Symbol> + '_ {
    query.chars().filter_map(move |c| mode.map_char(c, true))
}
