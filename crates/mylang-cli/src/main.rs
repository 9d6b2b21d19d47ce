//! mylang2ir command-line translator
//!
//! Reads a `.my` script line by line and writes the equivalent LLVM IR
//! program next to it (or wherever `--output` points).

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, warn};
use mylang_compiler::{translate, ReaderLines, Translation};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mylang2ir")]
#[command(about = "Translate myLang scripts to LLVM IR", long_about = None)]
#[command(version)]
struct Cli {
    /// Input script
    input: PathBuf,
    /// Output file (defaults to the input path with a .ll extension)
    #[arg(short, long, conflicts_with = "stdout")]
    output: Option<PathBuf>,
    /// Write the IR to standard output instead of a file
    #[arg(long)]
    stdout: bool,
    /// Log more (repeat for debug and trace output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Silence all logging
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    stderrlog::new()
        .quiet(cli.quiet)
        .verbosity(1 + usize::from(cli.verbose))
        .init()?;

    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let translation = translate_file(&cli.input)?;
    if let Translation::Failed { line } = &translation {
        warn!("{}: syntax error on line {}", cli.input.display(), line);
    }

    if cli.stdout {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        translation
            .write_to(&mut out)
            .context("Failed to write to standard output")?;
        return out.flush().context("Failed to write to standard output");
    }

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.input));
    write_translation(&translation, &output)?;
    info!("Wrote {}", output.display());
    Ok(())
}

fn translate_file(path: &Path) -> Result<Translation> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut lines = ReaderLines::new(BufReader::new(file));
    debug!("Translating {}", path.display());

    let translation = translate(&mut lines);
    if let Some(err) = lines.take_error() {
        return Err(err).with_context(|| format!("Failed to read {}", path.display()));
    }
    Ok(translation)
}

fn write_translation(translation: &Translation, path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    translation
        .write_to(&mut out)
        .and_then(|()| out.flush())
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// `prog.my` becomes `prog.ll`; a path without an extension gets `.ll` added.
fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("ll")
}
