//! (ACGT)n microsatellite scanner.
//!
//! Finds maximal, non-overlapping runs of the literal motif `ACGT` repeated
//! at least [`MIN_REPEATS`] times in a row. The semantics are those of a
//! leftmost-greedy scan for `(ACGT){3,}`:
//!
//! - scanning goes left to right
//! - a run consumes as many consecutive motif units as possible
//! - scanning resumes right after the consumed run
//!
//! Matching is exact and case-sensitive.

use tracing::debug;

use crate::model::{Match, Sequence};

/// The repeating unit searched for.
pub const MOTIF: &[u8] = b"ACGT";

/// Minimum number of consecutive motif units for a run to be reported.
pub const MIN_REPEATS: usize = 3;

/// Counts consecutive motif units starting at `pos`.
fn units_at(text: &[u8], pos: usize) -> usize {
    text[pos..]
        .chunks_exact(MOTIF.len())
        .take_while(|chunk| *chunk == MOTIF)
        .count()
}

/// Lazy iterator over the maximal runs of a sequence.
///
/// Scans bytes but reports positions in characters, so text before a run
/// may hold multi-byte characters (a byte order mark, accented letters).
#[derive(Debug, Clone)]
pub struct MatchIter<'a> {
    text: &'a str,
    /// Byte offset of the scan cursor
    pos: usize,
    /// Byte offset up to which characters have been counted
    counted_to: usize,
    /// Characters in `text[..counted_to]`
    chars_before: usize,
}

impl<'a> MatchIter<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            counted_to: 0,
            chars_before: 0,
        }
    }
}

impl Iterator for MatchIter<'_> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        let bytes = self.text.as_bytes();
        let min_len = MOTIF.len() * MIN_REPEATS;

        while self.pos + min_len <= bytes.len() {
            let units = units_at(bytes, self.pos);

            if units >= MIN_REPEATS {
                // Runs start on an ASCII 'A' and end after an ASCII 'T', both char boundaries
                let start = self.pos;
                let run_len = units * MOTIF.len();
                self.chars_before += self.text[self.counted_to..start].chars().count();

                let found = Match::new(self.chars_before, run_len);
                self.pos = start + run_len;
                self.counted_to = self.pos;
                self.chars_before += run_len;
                return Some(found);
            }

            // ACGT has no border, so no run can start inside the units just read
            self.pos += if units == 0 { 1 } else { units * MOTIF.len() };
        }

        self.pos = bytes.len();
        None
    }
}

/// Returns an iterator over the maximal runs of `sequence`.
pub fn matches(sequence: &Sequence) -> MatchIter<'_> {
    MatchIter::new(sequence.as_str())
}

/// Finds all maximal (ACGT)n runs, in order of position.
///
/// # Examples
///
/// ```
/// use ssrview::model::{Match, Sequence};
/// use ssrview::scanner::find_matches;
///
/// let seq = Sequence::new("ACGTACGTACGTGGGACGTACGTACGT");
/// assert_eq!(find_matches(&seq), vec![Match::new(0, 12), Match::new(15, 12)]);
/// ```
pub fn find_matches(sequence: &Sequence) -> Vec<Match> {
    let found: Vec<Match> = matches(sequence).collect();
    debug!(
        sequence_len = sequence.len(),
        matches = found.len(),
        "scanned sequence for (ACGT)n runs"
    );
    found
}

/// Counts the maximal (ACGT)n runs with a separate scan.
///
/// Always equal to `find_matches(sequence).len()`.
pub fn count_matches(sequence: &Sequence) -> usize {
    matches(sequence).count()
}
