//! jqdoc-index — turn the jQuery API documentation into a search-index bulk
//! load document.
//!
//! Reads `<input>/entries/*.xml` (one API entry per file), normalizes each
//! entry and writes `out/<output>`: a fixed index mapping followed by an
//! `updates` array holding one JSON object per entry.
//!
//! - `jqdoc-index -d` clones the docs into `out/api.jquery.com` first
//! - `jqdoc-index path/to/api.jquery.com custom.json` indexes a local checkout

mod collab;
mod corpus;
mod error;
mod model;
mod parser;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Directory receiving the index document and, with `-d`, the doc checkout.
const OUTPUT_DIR: &str = "out";

/// Name of the checkout directory created by `git clone`.
const CHECKOUT_DIR: &str = "api.jquery.com";

const DEFAULT_OUTPUT_FILENAME: &str = "jquery_doc.json";

#[derive(Parser)]
#[command(
    name = "jqdoc-index",
    version,
    about = "Convert jQuery API documentation entries into a search-index document"
)]
struct Cli {
    /// Clone the documentation into out/api.jquery.com and index that checkout
    /// instead of INPUT.
    #[arg(short = 'd')]
    download: bool,

    /// Documentation checkout containing entries/*.xml (default: out/api.jquery.com)
    input: Option<String>,

    /// Output file name, written under out/ (default: jquery_doc.json)
    output: Option<String>,
}

/// Resolved run parameters.
#[derive(Debug, PartialEq)]
struct RunConfig {
    input: PathBuf,
    output_path: PathBuf,
    download: bool,
}

impl RunConfig {
    /// Positionals keep their slots: the first is the input directory, the
    /// second the output file name. With `-d` the input slot is ignored in
    /// favour of the checkout that will be cloned.
    fn from_cli(cli: Cli) -> Self {
        let default_input = Path::new(OUTPUT_DIR).join(CHECKOUT_DIR);

        let input = match cli.input {
            Some(explicit) if cli.download => {
                warn!("ignoring input path {} because -d was given", explicit);
                default_input
            }
            Some(explicit) => PathBuf::from(explicit),
            None => default_input,
        };

        let output_name = cli
            .output
            .unwrap_or_else(|| DEFAULT_OUTPUT_FILENAME.to_string());

        Self {
            input,
            output_path: Path::new(OUTPUT_DIR).join(output_name),
            download: cli.download,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let config = RunConfig::from_cli(Cli::parse());
    run(&config)
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(config: &RunConfig) -> Result<()> {
    info!("input_path = {}", config.input.display());

    fs::create_dir_all(OUTPUT_DIR)
        .with_context(|| format!("failed to create output directory: {}", OUTPUT_DIR))?;

    if config.download {
        collab::fetch_sources(Path::new(OUTPUT_DIR));
    }

    let (summary, records) = render::write_index(&config.output_path, |updates| {
        let summary = corpus::walk(&config.input, |record| Ok(updates.push(record)?))?;
        Ok((summary, updates.written()))
    })?;

    info!(
        "Wrote {} entries from {} files to {}",
        records,
        summary.files,
        config.output_path.display()
    );
    if summary.kinds.is_empty() {
        info!("No entries found under {}", config.input.display());
    } else {
        for kind in summary.kinds.kinds() {
            debug!("{}: {}", kind, summary.kinds.count(kind));
        }
        info!(
            "All kinds = {}",
            summary.kinds.kinds().collect::<Vec<_>>().join(",")
        );
    }

    collab::compress(&config.output_path);
    Ok(())
}
