//! Chart data and the rendering capability.
//!
//! Building the bars is pure and lives here. Drawing them is left to a
//! [`ChartRenderer`], so the rest of the program never touches the terminal:
//! - [`crate::controller::TerminalChart`] draws an interactive bar chart
//! - [`NoChart`] draws nothing

use anyhow::Result;

use crate::model::MotifCount;

/// Chart title.
pub const CHART_TITLE: &str = "\"ACGT\" Microsatellite Position and Repeats Distribution";
/// Label of the value axis (bar length).
pub const VALUE_AXIS_LABEL: &str = "Count of \"ACGT\" Motif Repeats";
/// Label of the category axis (one entry per bar).
pub const CATEGORY_AXIS_LABEL: &str = "Position of \"ACGT\" Microsatellite";

/// One horizontal bar of the chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartBar {
    /// Two-line label: `Position: P` then `Repeats: C`
    pub label: String,
    /// Bar length
    pub value: u64,
}

impl ChartBar {
    pub fn new(position: usize, count: usize) -> Self {
        Self {
            label: format!("Position: {}\nRepeats: {}", position, count),
            value: count as u64,
        }
    }

    /// Label lines, top to bottom.
    pub fn label_lines(&self) -> impl Iterator<Item = &str> {
        self.label.lines()
    }
}

/// Builds one bar per `(position, length)` entry, in position order.
pub fn chart_bars(counts: &MotifCount) -> Vec<ChartBar> {
    counts
        .iter()
        .map(|(position, _length, count)| ChartBar::new(position, count))
        .collect()
}

/// Something that can display the bar chart.
///
/// `render` may block until the user is done looking at the chart.
pub trait ChartRenderer {
    fn render(&mut self, bars: &[ChartBar], total: usize) -> Result<()>;
}

/// Renderer used when no chart is wanted.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoChart;

impl ChartRenderer for NoChart {
    fn render(&mut self, _bars: &[ChartBar], _total: usize) -> Result<()> {
        Ok(())
    }
}
