// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Character → symbol mapping for the two input alphabets.
//!
//! Every character either lands in exactly one slot of the active alphabet or
//! is dropped. There is no state here: the same character in the same mode
//! always produces the same slot, which is what lets the partition index treat
//! positions in a stored encoding and positions in a query interchangeably.
//!
//! # Keypad (13 slots)
//!
//! ```text
//! slot:  0  1  2    3    4    5    6    7     8    9     10  11  12
//! keys:  0  1  abc  def  ghi  jkl  mno  pqrs  tuv  wxyz  *   +   #
//! ```
//!
//! # Alphanumeric (39 slots)
//!
//! ```text
//! slot:  0..=25  26..=35  36  37  38
//! keys:  a..=z   0..=9    ,   .   @
//! ```
//!
//! Symbol slots (`*+#` on the keypad, `,.@` on the keyboard) are only mapped
//! when the caller asks for them. Phone numbers want `+`; names do not.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

use serde::{Deserialize, Serialize};

/// Index of a slot in the active alphabet.
pub type Symbol = u8;

/// Number of slots on the numeric keypad: ten digits plus `*`, `+`, `#`.
pub const KEYPAD_SYMBOLS: usize = 10 + 3;

/// Number of slots on the alphanumeric keyboard: 26 letters, 10 digits, `,.@`.
pub const ALPHANUMERIC_SYMBOLS: usize = 36 + 3;

/// Where the query keystrokes come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputMode {
    /// Phone keypad. Letters collapse onto their digit key.
    #[default]
    Keypad,
    /// Full keyboard. Letters and digits keep their identity.
    Alphanumeric,
}

impl InputMode {
    /// Number of distinct symbols in this alphabet.
    pub fn alphabet_size(self) -> usize {
        match self {
            InputMode::Keypad => KEYPAD_SYMBOLS,
            InputMode::Alphanumeric => ALPHANUMERIC_SYMBOLS,
        }
    }

    /// Map one character to its slot, or `None` if it has no key.
    pub fn map_char(self, c: char, include_symbols: bool) -> Option<Symbol> {
        match self {
            InputMode::Keypad => map_keypad(c, include_symbols),
            InputMode::Alphanumeric => map_alphanumeric(c, include_symbols),
        }
    }

    /// The canonical key label for a slot (`'2'` for keypad slot 2, `'c'` for
    /// alphanumeric slot 2). Returns `None` for slots outside the alphabet.
    pub fn symbol_char(self, symbol: Symbol) -> Option<char> {
        let symbol = symbol as usize;
        if symbol >= self.alphabet_size() {
            return None;
        }
        let c = match self {
            InputMode::Keypad => match symbol {
                0..=9 => (b'0' + symbol as u8) as char,
                10 => '*',
                11 => '+',
                _ => '#',
            },
            InputMode::Alphanumeric => match symbol {
                0..=25 => (b'a' + symbol as u8) as char,
                26..=35 => (b'0' + (symbol - 26) as u8) as char,
                36 => ',',
                37 => '.',
                _ => '@',
            },
        };
        Some(c)
    }
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputMode::Keypad => write!(f, "keypad"),
            InputMode::Alphanumeric => write!(f, "alphanumeric"),
        }
    }
}

/// Strip case and diacritics down to a single ASCII character where possible.
///
/// `'Á'` → `'a'`, `'ç'` → `'c'`, `'Ñ'` → `'n'`. Characters without an ASCII
/// base (`'ß'`, `'ø'`, CJK) come back unchanged and will not map to a key.
#[cfg(feature = "unicode-normalization")]
pub fn fold_char(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    let base = std::iter::once(c).nfd().next().unwrap_or(c);
    base.to_lowercase().next().unwrap_or(base)
}

/// Case folding only. Accented input will not reach a key without the
/// `unicode-normalization` feature.
#[cfg(not(feature = "unicode-normalization"))]
pub fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn map_keypad(c: char, include_symbols: bool) -> Option<Symbol> {
    let key = match fold_char(c) {
        d @ '0'..='9' => d as u8 - b'0',
        'a'..='c' => 2,
        'd'..='f' => 3,
        'g'..='i' => 4,
        'j'..='l' => 5,
        'm'..='o' => 6,
        'p'..='s' => 7,
        't'..='v' => 8,
        'w'..='z' => 9,
        '*' if include_symbols => 10,
        '+' if include_symbols => 11,
        '#' if include_symbols => 12,
        _ => return None,
    };
    Some(key)
}

fn map_alphanumeric(c: char, include_symbols: bool) -> Option<Symbol> {
    let key = match fold_char(c) {
        l @ 'a'..='z' => l as u8 - b'a',
        d @ '0'..='9' => d as u8 - b'0' + 26,
        ',' if include_symbols => 36,
        '.' if include_symbols => 37,
        '@' if include_symbols => 38,
        _ => return None,
    };
    Some(key)
}
