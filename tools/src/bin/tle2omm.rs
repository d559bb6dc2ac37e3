use clap::Parser;
use std::path::PathBuf;
use tle_codec::{convert_file, Config, OutputFormat};
use tracing::debug;

/// Convert a TLE file into an exported array of OMM records
#[derive(Parser, Debug)]
#[command(version)]
struct Opts {
    /// Configuration toml file.
    ///
    /// Command line options take precedence over its contents.
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Name of the exported array
    #[arg(short = 'n', long)]
    collection_name: Option<String>,

    /// Output format, 'js' or 'json'
    #[arg(short = 'f', long)]
    format: Option<OutputFormat>,

    /// Fail when the last entry is missing lines instead of dropping it
    #[arg(long)]
    strict: bool,

    /// Output file path to write
    #[arg(short = 'o', long)]
    output: PathBuf,

    /// TLE file to read (name, line 1, line 2 per entry)
    input: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let opts = Opts::parse();

    let cfg = match &opts.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    }
    .with_overrides(opts.collection_name, opts.format, opts.strict);
    debug!(?cfg, "Resolved configuration");

    let records = convert_file(&opts.input, &opts.output, &cfg)?;

    println!(
        "Wrote {records} record(s) to '{}'",
        opts.output.display()
    );

    Ok(())
}
