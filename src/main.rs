// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use keysift::{encode, variants, Config, FieldKind, InputMode, Predictor, Record};

mod cli;
use cli::display::{self, row, section_bot, section_top};
use cli::{Cli, Commands};

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("{} {:#}", display::error_prefix(), e);
        std::process::exit(1);
    }
}

/// Library events go to stderr, filtered by `KEYSIFT_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("KEYSIFT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Search {
            config,
            records,
            limit,
            queries,
        } => {
            let predictor = load_predictor(&config, &records)?;
            for query in &queries {
                print_results(&predictor, query, limit);
            }
            Ok(())
        }
        Commands::Repl {
            config,
            records,
            limit,
        } => {
            let predictor = load_predictor(&config, &records)?;
            run_repl(&predictor, limit)
        }
        Commands::Encode {
            mode,
            kind,
            max_variants,
            value,
        } => {
            print_variants(mode.into(), kind.into(), max_variants, &value);
            Ok(())
        }
        Commands::Stats { config, records } => {
            let predictor = load_predictor(&config, &records)?;
            print_stats(&predictor);
            Ok(())
        }
    }
}

fn load_predictor(config_path: &Path, records_path: &Path) -> Result<Predictor<Record>> {
    let config = Config::from_path(config_path)
        .with_context(|| format!("loading config {}", config_path.display()))?;

    let text = fs::read_to_string(records_path)
        .with_context(|| format!("reading records {}", records_path.display()))?;
    let records: Vec<Record> = serde_json::from_str(&text)
        .with_context(|| format!("parsing records {}", records_path.display()))?;

    let predictor = Predictor::with_config(config.predictor);
    predictor.set_labels(config.labels);
    predictor.add_items(records.into_iter().map(Arc::new));
    tracing::debug!(items = predictor.len(), "records loaded");
    Ok(predictor)
}

fn print_results(predictor: &Predictor<Record>, query: &str, limit: usize) {
    section_top(query);
    match predictor.predict(query) {
        None => row(" (empty query)"),
        Some(results) if results.is_empty() => row(" no matches"),
        Some(results) => {
            for (i, prediction) in results.iter().take(limit).enumerate() {
                row(&display::prediction_line(i + 1, prediction));
            }
            if results.len() > limit {
                row(&format!(" … {} more", results.len() - limit));
            }
        }
    }
    section_bot();
}

fn run_repl(predictor: &Predictor<Record>, limit: usize) -> Result<()> {
    let interactive = atty::is(atty::Stream::Stdin);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if interactive {
            print!("{} ", display::themed(display::CYAN, &[display::BOLD], ">"));
            io::stdout().flush().context("flushing prompt")?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("reading query")?;
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        print_results(predictor, query, limit);
    }
    Ok(())
}

fn print_variants(mode: InputMode, kind: FieldKind, max_variants: usize, value: &str) {
    let include_symbols = kind.maps_symbols(mode);
    section_top(&format!("{} ({}, {})", value, kind, mode));
    for (i, variant) in variants::generate(kind, value, mode, max_variants)
        .iter()
        .enumerate()
    {
        let encoding = encode(variant, mode, include_symbols);
        row(&display::variant_line(i, variant, &encoding, mode));
    }
    section_bot();
}

fn print_stats(predictor: &Predictor<Record>) {
    let stats = predictor.stats();
    section_top("index");
    row(&format!(" mode        {}", predictor.mode()));
    if let Some(labels) = predictor.labels() {
        for (spec, level) in labels.iter() {
            row(&format!(
                " label       {} {} level {}",
                display::label_badge(&spec.name),
                spec.kind,
                level
            ));
        }
    }
    row(&format!(" items       {}", stats.items));
    row(&format!(" entries     {}", stats.entries));
    row(&format!(" free slots  {}", stats.free_slots));
    row(&format!(" depth       {}", stats.depth));
    section_bot();
}
