// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the keysift command-line interface.
//!
//! Four subcommands: `search` runs queries against a record file, `repl`
//! reads queries from stdin, `encode` shows how a single value is expanded
//! and encoded, and `stats` reports index sizes.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};
use keysift::{FieldKind, InputMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "keysift",
    about = "Incremental predictive search over keypad and alphanumeric input",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one or more queries and print ranked predictions
    Search {
        /// Config file (mode, limits, ordered labels)
        #[arg(short, long)]
        config: PathBuf,

        /// JSON array of records to index
        #[arg(short, long)]
        records: PathBuf,

        /// Maximum results printed per query
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Queries, each run independently
        #[arg(required = true)]
        queries: Vec<String>,
    },

    /// Read queries from stdin, one per line
    Repl {
        /// Config file (mode, limits, ordered labels)
        #[arg(short, long)]
        config: PathBuf,

        /// JSON array of records to index
        #[arg(short, long)]
        records: PathBuf,

        /// Maximum results printed per query
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show the variants and encodings generated for a value
    Encode {
        /// Input alphabet
        #[arg(short, long, value_enum, default_value = "keypad")]
        mode: ModeArg,

        /// Field kind the value belongs to
        #[arg(short, long, value_enum, default_value = "text-separated")]
        kind: KindArg,

        /// Cap on variants generated for the value
        #[arg(long, default_value = "512")]
        max_variants: usize,

        /// The field value
        value: String,
    },

    /// Print index statistics after loading records
    Stats {
        /// Config file (mode, limits, ordered labels)
        #[arg(short, long)]
        config: PathBuf,

        /// JSON array of records to index
        #[arg(short, long)]
        records: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Keypad,
    Alphanumeric,
}

impl From<ModeArg> for InputMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Keypad => InputMode::Keypad,
            ModeArg::Alphanumeric => InputMode::Alphanumeric,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum KindArg {
    Number,
    TextSeparated,
    TextContiguous,
}

impl From<KindArg> for FieldKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Number => FieldKind::Number,
            KindArg::TextSeparated => FieldKind::TextSeparated,
            KindArg::TextContiguous => FieldKind::TextContiguous,
        }
    }
}
