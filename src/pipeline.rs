//! The load → scan → aggregate → report → plot pipeline.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use crate::chart::{chart_bars, ChartRenderer};
use crate::loader::load_sequence;
use crate::report::{aggregate, write_no_matches, write_no_sequence, write_report};
use crate::scanner::{count_matches, find_matches};

/// Settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// File holding the sequence
    pub path: PathBuf,
}

impl RunConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Which branch of the pipeline a run ended in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The file could not be read; nothing was scanned
    NoSequence,
    /// The sequence was scanned but holds no (ACGT)n run
    NoMicrosatellites,
    /// At least one run was found and reported
    Found { total: usize },
}

/// Runs the whole pipeline, writing the report to `out`.
///
/// The chart is only drawn when runs were found. Pass [`crate::chart::NoChart`]
/// to skip it.
pub fn run<W: Write, R: ChartRenderer + ?Sized>(
    config: &RunConfig,
    out: &mut W,
    renderer: &mut R,
) -> Result<Outcome> {
    let Some(sequence) = load_sequence(&config.path, out)? else {
        write_no_sequence(out)?;
        return Ok(Outcome::NoSequence);
    };

    let matches = find_matches(&sequence);
    let total = count_matches(&sequence);

    if matches.is_empty() {
        write_no_matches(out)?;
        return Ok(Outcome::NoMicrosatellites);
    }

    let counts = aggregate(&matches);
    write_report(out, &matches, &counts, total)?;
    out.flush()?;
    info!(total, "reported (ACGT)n microsatellites");

    renderer.render(&chart_bars(&counts), total)?;

    Ok(Outcome::Found { total })
}
