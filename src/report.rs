//! Text report of the scan results.

use std::io::{self, Write};

use crate::model::{Match, MotifCount};

/// Printed when the file could not be loaded.
pub const MSG_NO_SEQUENCE: &str = "File with no genetic sequence";
/// Printed when the sequence holds no (ACGT)n run.
pub const MSG_NO_MICROSATELLITES: &str = "Sequence with no (ACGT)n microsatellites";

/// Aggregates matches into counts keyed by `(position, length)`.
///
/// Matches from a single scan never share a key, so every count is 1.
pub fn aggregate(matches: &[Match]) -> MotifCount {
    matches.iter().collect()
}

/// Writes the full report for a non-empty list of matches.
pub fn write_report<W: Write>(
    out: &mut W,
    matches: &[Match],
    counts: &MotifCount,
    total: usize,
) -> io::Result<()> {
    writeln!(out, "\n\"ACGT\" Microsatellite SSR Motifs:")?;
    for m in matches {
        writeln!(out, "Position: {}, Length: {}", m.position, m.length)?;
    }

    writeln!(out, "\nCount of \"ACGT\" Motifs for Each Microsatellite:")?;
    for (position, length, count) in counts.iter() {
        writeln!(out, "Position: {}, Length: {}, Count: {}", position, length, count)?;
    }

    writeln!(out, "\nNumber of \"ACGT\" Microsatellite Repeats: {}", total)?;
    Ok(())
}

/// Writes the single line shown when nothing was found.
pub fn write_no_matches<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", MSG_NO_MICROSATELLITES)
}

/// Writes the single line shown when no sequence could be loaded.
pub fn write_no_sequence<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", MSG_NO_SEQUENCE)
}
