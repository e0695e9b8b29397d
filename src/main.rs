// SPDX-License-Identifier: Apache-2.0

//! Interactive text-to-hex converter.
//!
//! Prompts for one line on stdin and prints the per-character hexadecimal
//! report on stdout. Diagnostics go to stderr so the report stays clean.

use anyhow::Result;

use texthex::parser::{Decoder, Encoder};
use texthex::{InputLine, Report, MAX_LINE};

use tracing_subscriber::EnvFilter;

use std::io::{self, Write};

fn run() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    write!(out, "Digite um texto: ")?;
    out.flush()?;

    let line = InputLine::decode(&mut stdin.lock(), ())?;
    if line.is_truncated() {
        tracing::warn!(kept = line.len(), capacity = MAX_LINE, "input truncated");
    }

    Report::from(&line).encode(&mut out, ())?;
    out.flush()?;

    Ok(())
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    // The report is best-effort; the exit code stays zero either way.
    if let Err(err) = run() {
        tracing::error!("{err:#}");
    }
}
