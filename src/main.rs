//! ssrview - (ACGT)n microsatellite scanner
//!
//! Finds runs of three or more consecutive `ACGT` motifs in a sequence file,
//! prints their positions and lengths, and charts them in the terminal.
//!
//! ## Usage
//!
//! ```bash
//! ssrview <sequence_file>
//! ssrview --no-chart <sequence_file>  # Report only
//! ssrview                             # Prompt for the file path
//! ```
//!
//! ## Chart keys
//!
//! - `j/k`: Scroll bars
//! - `g/G`: First/last bar
//! - `q`: Close

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use ssrview::chart::{ChartRenderer, NoChart};
use ssrview::controller::TerminalChart;
use ssrview::logging::init_logging;
use ssrview::pipeline::{run, RunConfig};

/// ssrview - Find (ACGT)n microsatellites in a DNA sequence
///
/// Line breaks in the file are ignored; everything else is scanned as one
/// sequence. Results are printed, then shown as a bar chart unless
/// --no-chart is given.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Sequence file to scan (asked for interactively when omitted)
    file: Option<PathBuf>,

    /// Print the report without opening the chart viewer
    #[arg(long = "no-chart")]
    no_chart: bool,
}

/// Asks the user for the sequence file path on stdin.
fn prompt_for_path() -> Result<PathBuf> {
    let mut stdout = io::stdout();
    write!(
        stdout,
        "Enter the path to the file containing the genetic sequence: "
    )?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(PathBuf::from(line.trim_end_matches(['\n', '\r'])))
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let path = match args.file {
        Some(path) => path,
        None => prompt_for_path()?,
    };

    let config = RunConfig::new(path);
    debug!(?config, no_chart = args.no_chart, "starting scan");

    let mut renderer: Box<dyn ChartRenderer> = if args.no_chart {
        Box::new(NoChart)
    } else {
        Box::new(TerminalChart)
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run(&config, &mut handle, renderer.as_mut())?;

    Ok(())
}
