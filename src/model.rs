//! Data model for the microsatellite scanner.
//!
//! This module contains the data structures shared by every stage:
//! - The loaded sequence
//! - Matches produced by the scanner and their aggregated counts
//! - Scroll state of the chart viewer

use std::collections::BTreeMap;
use std::ops::Range;

/// A nucleotide sequence, flattened to a single line.
///
/// No alphabet validation is done: whatever the file contained (minus line
/// breaks) is kept as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    data: String,
}

impl Sequence {
    /// Creates a new sequence.
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }

    /// Returns the length of the sequence in characters.
    pub fn len(&self) -> usize {
        self.data.chars().count()
    }

    /// Returns true if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the sequence as a string slice.
    pub fn as_str(&self) -> &str {
        &self.data
    }

    /// Returns the raw bytes of the sequence.
    pub fn as_bytes(&self) -> &[u8] {
        self.data.as_bytes()
    }
}

/// One maximal (ACGT)n run found by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Match {
    /// 0-based offset of the first base of the run
    pub position: usize,
    /// Length of the run in bases (a multiple of the motif length)
    pub length: usize,
}

impl Match {
    pub fn new(position: usize, length: usize) -> Self {
        Self { position, length }
    }

    /// Number of motif units in the run.
    pub fn repeats(&self) -> usize {
        self.length / crate::scanner::MOTIF.len()
    }

    /// Offset one past the last base of the run.
    pub fn end(&self) -> usize {
        self.position + self.length
    }

    pub fn span(&self) -> Range<usize> {
        self.position..self.end()
    }
}

/// Occurrence counts keyed by `(position, length)`.
///
/// Keys iterate in ascending position order, which is also the order the
/// scanner reports matches in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MotifCount {
    counts: BTreeMap<(usize, usize), usize>,
}

impl MotifCount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of a match.
    pub fn add(&mut self, m: &Match) {
        *self.counts.entry((m.position, m.length)).or_insert(0) += 1;
    }

    /// Returns the count recorded for a `(position, length)` pair.
    pub fn get(&self, position: usize, length: usize) -> Option<usize> {
        self.counts.get(&(position, length)).copied()
    }

    /// Number of distinct `(position, length)` entries.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over `(position, length, count)` triples.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        self.counts
            .iter()
            .map(|(&(position, length), &count)| (position, length, count))
    }
}

impl<'a> FromIterator<&'a Match> for MotifCount {
    fn from_iter<I: IntoIterator<Item = &'a Match>>(iter: I) -> Self {
        let mut counts = MotifCount::new();
        for m in iter {
            counts.add(m);
        }
        counts
    }
}

/// Scroll state of the chart viewer.
///
/// Tracks which bars are currently on screen when there are more bars than
/// the terminal can show at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChartView {
    /// Index of the first visible bar
    pub first_bar: usize,
    /// Number of bars that fit on screen
    pub visible_bars: usize,
    /// Total number of bars
    pub total_bars: usize,
}

impl ChartView {
    pub fn new(total_bars: usize) -> Self {
        Self {
            first_bar: 0,
            visible_bars: total_bars,
            total_bars,
        }
    }

    /// Updates the number of visible bars, keeping the offset in range.
    pub fn resize(&mut self, visible_bars: usize) {
        self.visible_bars = visible_bars.max(1);
        self.clamp();
    }

    /// Range of bar indices currently visible.
    pub fn bar_range(&self) -> Range<usize> {
        let end = (self.first_bar + self.visible_bars).min(self.total_bars);
        self.first_bar..end
    }

    fn max_first_bar(&self) -> usize {
        self.total_bars.saturating_sub(self.visible_bars)
    }

    fn clamp(&mut self) {
        self.first_bar = self.first_bar.min(self.max_first_bar());
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.first_bar = self.first_bar.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.first_bar = (self.first_bar + n).min(self.max_first_bar());
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.visible_bars);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.visible_bars);
    }

    pub fn go_to_first(&mut self) {
        self.first_bar = 0;
    }

    pub fn go_to_last(&mut self) {
        self.first_bar = self.max_first_bar();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_creation() {
        let seq = Sequence::new("ACGTACGT");
        assert_eq!(seq.len(), 8);
        assert!(!seq.is_empty());
        assert_eq!(seq.as_str(), "ACGTACGT");
        assert!(Sequence::new("").is_empty());
    }

    #[test]
    fn test_sequence_len_counts_characters() {
        let seq = Sequence::new("\u{feff}éACGT");
        assert_eq!(seq.len(), 6);
        assert_eq!(seq.as_bytes().len(), 9);
    }

    #[test]
    fn test_match_repeats_and_span() {
        let m = Match::new(15, 12);
        assert_eq!(m.repeats(), 3);
        assert_eq!(m.end(), 27);
        assert_eq!(m.span(), 15..27);
    }

    #[test]
    fn test_motif_count_aggregation() {
        let matches = vec![Match::new(0, 12), Match::new(15, 16)];
        let counts: MotifCount = matches.iter().collect();

        assert_eq!(counts.len(), 2);
        assert_eq!(counts.get(0, 12), Some(1));
        assert_eq!(counts.get(15, 16), Some(1));
        assert_eq!(counts.get(15, 12), None);
    }

    #[test]
    fn test_motif_count_repeated_key() {
        let m = Match::new(4, 12);
        let counts: MotifCount = [m, m].iter().collect();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(4, 12), Some(2));
    }

    #[test]
    fn test_motif_count_iterates_by_position() {
        let matches = vec![Match::new(40, 12), Match::new(3, 12)];
        let counts: MotifCount = matches.iter().collect();
        let positions: Vec<usize> = counts.iter().map(|(p, _, _)| p).collect();
        assert_eq!(positions, vec![3, 40]);
    }

    #[test]
    fn test_chart_view_scrolling() {
        let mut view = ChartView::new(10);
        view.resize(4);
        assert_eq!(view.bar_range(), 0..4);

        view.scroll_down(1);
        assert_eq!(view.bar_range(), 1..5);

        view.page_down();
        assert_eq!(view.bar_range(), 5..9);

        // Can't scroll past the last page
        view.page_down();
        assert_eq!(view.bar_range(), 6..10);

        view.scroll_up(10);
        assert_eq!(view.first_bar, 0);

        view.go_to_last();
        assert_eq!(view.bar_range(), 6..10);
        view.go_to_first();
        assert_eq!(view.bar_range(), 0..4);
    }

    #[test]
    fn test_chart_view_resize_clamps_offset() {
        let mut view = ChartView::new(5);
        view.resize(2);
        view.go_to_last();
        assert_eq!(view.first_bar, 3);

        // Growing the window pulls the offset back
        view.resize(4);
        assert_eq!(view.first_bar, 1);
        assert_eq!(view.bar_range(), 1..5);
    }

    #[test]
    fn test_chart_view_fewer_bars_than_space() {
        let mut view = ChartView::new(2);
        view.resize(20);
        assert_eq!(view.bar_range(), 0..2);
        view.scroll_down(5);
        assert_eq!(view.first_bar, 0);
    }
}
