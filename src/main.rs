//! tabula — classical tabula recta transformer for Cyrillic text files.
//!
//! Usage:
//!
//! ```text
//! tabula <INPUT> <OUTPUT> <MODE> <KEY>
//! ```
//!
//! `MODE` is "E" (encrypt) or "D" (decrypt). The message and key may only
//! use CR, LF, `. , ? ! -`, the decimal digits, and Russian letters;
//! anything else is rejected before any output is written.

mod alphabet;
mod args;
mod cipher;
mod error;
mod files;
mod key;
mod table;

use std::process;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use alphabet::Alphabet;
use args::Args;
use cipher::{Cipher, Mode};

fn main() {
    if let Err(e) = run(Args::parse()) {
        eprintln!("{e:#}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let started = Instant::now();

    let msg = files::read_file(&args.input)
        .with_context(|| format!("reading '{}'", args.input.display()))?;

    let alphabet = Alphabet::new();
    cipher::validate_message(&msg, &alphabet)?;

    let mode = Mode::parse(&args.mode)?;
    let parsed = key::parse(&args.key, &alphabet)?;
    let expanded = key::expand(&parsed, msg.len())?;

    let out = Cipher::new(&alphabet).apply(mode, &msg, &expanded);

    files::write_file(&args.output, &out)
        .with_context(|| format!("writing '{}'", args.output.display()))?;

    eprintln!("✓ done in {:.2?}", started.elapsed());
    Ok(())
}
