//! Incremental predictive search over keypad and alphanumeric encodings.
//!
//! Type "5646" on a phone keypad and get back John Doe. Type "cdls" and get
//! back Cipriano de la Santísima. Type "9876" and get back the contact whose
//! number is "+91 98765 4321". Add, remove, and replace records at any time
//! without rebuilding anything.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ variants.rs │────▶│ encoding.rs  │────▶│ partition.rs │
//! │ (drop words,│     │ (symbols +   │     │ (position ×  │
//! │  initials,  │     │  positions)  │     │  symbol      │
//! │  prefixes)  │     │      ▲       │     │  buckets)    │
//! └─────────────┘     │ alphabet.rs  │     └──────────────┘
//!                     └──────────────┘            │
//!                                                 ▼
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ ranking.rs  │◀────│ predictor.rs │◀───▶│  store.rs    │
//! │ (dedup,     │     │ (one lock,   │     │ (entries,    │
//! │  ordering)  │     │  add/remove) │     │  id → slots) │
//! └─────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! Each field value is expanded into variants (see [`variants`]), each variant
//! is encoded into symbols of the active alphabet, and each encoding is spread
//! over the partition index one bucket per position. A query walks the same
//! buckets and intersects.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use keysift::{FieldKind, InputMode, LabelSchema, Predictor, Record};
//!
//! let predictor = Predictor::new(InputMode::Alphanumeric);
//! predictor.set_labels(LabelSchema::new([
//!     ("name", FieldKind::TextSeparated),
//!     ("email", FieldKind::TextContiguous),
//! ]).unwrap());
//!
//! predictor.add_item(Arc::new(
//!     Record::new("7")
//!         .with_field("name", "Mohandas Karamchand Gandhi")
//!         .with_field("email", "mk@example.org"),
//! ));
//!
//! let hits = predictor.predict("mkgandhi").unwrap();
//! assert_eq!(hits[0].label(), "name");
//! assert_eq!(hits[0].alignment(), &[0, 9, 20, 21, 22, 23, 24, 25]);
//! ```

pub mod alphabet;
pub mod config;
pub mod encoding;
pub mod item;
pub mod partition;
mod prediction;
mod predictor;
pub mod ranking;
pub mod schema;
mod store;
pub mod testing;
pub mod variants;

// Re-exports for public API
pub use alphabet::{InputMode, Symbol, ALPHANUMERIC_SYMBOLS, KEYPAD_SYMBOLS};
pub use config::{Config, ConfigError, PredictorConfig, DEFAULT_MAX_ENCODED_LEN};
pub use encoding::{encode, Encoding};
pub use item::{Item, Record};
pub use prediction::Prediction;
pub use predictor::{IndexStats, Predictor};
pub use schema::{FieldKind, LabelSchema, LabelSpec, SchemaError};
