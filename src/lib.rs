pub mod cli;
pub mod error;
pub mod model;
pub mod parser;
pub mod processor;
pub mod writer;

use std::io::{self, Read, Write};

use anyhow::Context;
use clap::Parser;

pub use error::RemapError;
pub use model::Variant;

pub fn run(variant: Variant) -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    run_with(variant, &args, io::stdin().lock(), &mut io::stdout().lock())
}

/// The whole tool with its streams passed in. `out` is only written once
/// every stage has succeeded.
pub fn run_with<R: Read, W: Write>(
    variant: Variant,
    args: &cli::Cli,
    mut input: R,
    out: &mut W,
) -> anyhow::Result<()> {
    let verbose = args.verbose;

    // 1. ── Read ───────────────────────────────────────────────────────
    let json = match args.input_path() {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            input
                .read_to_string(&mut buf)
                .with_context(|| "Reading standard input")?;
            buf
        }
    };
    if verbose {
        eprintln!("File loaded, size: {} bytes", json.len());
    }

    // 2. ── Process ────────────────────────────────────────────────────
    let tiles = convert(variant, &json, verbose)?;

    // 3. ── Write output ───────────────────────────────────────────────
    writer::text::emit(&tiles, out).with_context(|| "Writing output")?;

    Ok(())
}

/// JSON text in, remapped tile codes out. Nothing is printed to stdout.
pub fn convert(variant: Variant, json: &str, verbose: bool) -> anyhow::Result<Vec<i64>> {
    let data = parser::load_tile_data(json).with_context(|| "Parsing input JSON")?;
    if verbose {
        eprintln!("Layer 0 parsed, {} tiles", data.len());
    }

    let out = processor::run(variant, &data)
        .with_context(|| format!("Applying {} remap", variant.name()))?;
    if verbose {
        eprintln!("Remapped {} tiles into {} values", data.len(), out.len());
    }

    Ok(out)
}
