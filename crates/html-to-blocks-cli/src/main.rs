//! Command-line front end for html-to-blocks.
//!
//! Reads an HTML fragment from a file or stdin, converts it, and prints the
//! block sequence as JSON. Conversion warnings go to stderr so the stdout
//! stream stays machine-readable.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use html_to_blocks_rs::convert_fragment;

/// Convert an HTML fragment into editor block JSON.
#[derive(Debug, Parser)]
#[command(name = "html-to-blocks", version, about)]
struct Cli {
    /// Input HTML file; reads stdin when omitted or "-".
    input: Option<PathBuf>,

    /// Write output to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,

    /// Suppress conversion warnings on stderr.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let html = read_input(cli.input.as_deref())?;
    let conversion = convert_fragment(&html)?;

    if !cli.quiet {
        for diagnostic in &conversion.diagnostics {
            eprintln!("warning: {diagnostic}");
        }
    }

    let mut json = if cli.pretty {
        serde_json::to_string_pretty(&conversion.blocks)?
    } else {
        serde_json::to_string(&conversion.blocks)?
    };
    json.push('\n');

    match cli.output.as_deref() {
        Some(path) => fs::write(path, json).with_context(|| format!("cannot write {}", path.display()))?,
        None => io::stdout().write_all(json.as_bytes())?,
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
        }
        _ => {
            let mut html = String::new();
            io::stdin()
                .read_to_string(&mut html)
                .context("cannot read stdin")?;
            Ok(html)
        }
    }
}
