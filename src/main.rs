use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use log::error;
use outliers::driver;
use outliers::output::Format;
use std::path::PathBuf;
use std::{io, process};

/// Report the most over-represented word of each text file
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Files or directories (directories are searched for *.txt files)
    #[arg(required = true)]
    paths: Vec<PathBuf>,
    /// Also show the frequency ratio of each word
    #[arg(long)]
    ratio: bool,
    /// Produce JSON output
    #[arg(long)]
    json: bool,
    /// Produce compact JSON output
    #[arg(long, requires = "json")]
    compact: bool,
    /// Verbosity
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

impl Args {
    fn format(&self) -> Format {
        match (self.json, self.compact, self.ratio) {
            (true, true, _) => Format::CompactJson,
            (true, false, _) => Format::Json,
            (false, _, true) => Format::PlainWithRatio,
            (false, _, false) => Format::Plain,
        }
    }
}

fn process(args: &Args) -> Result<()> {
    let output = driver::calc(&args.paths);
    let stdout = io::stdout().lock();
    output
        .write(io::BufWriter::new(stdout), args.format())
        .context("cannot write output")?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    pretty_env_logger::formatted_timed_builder()
        .filter_level(args.verbose.log_level_filter())
        .init();
    if let Err(e) = process(&args) {
        error!("{e:#}");
        process::exit(1);
    }
}
