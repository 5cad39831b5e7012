//! Chart viewer controller.
//!
//! This module runs the interactive chart window:
//! - Terminal initialization and cleanup
//! - Event polling and handling
//! - Scroll state updates and rendering
//!
//! [`TerminalChart`] exposes the viewer as a [`ChartRenderer`]; rendering
//! blocks until the user closes the chart.

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::debug;

use crate::chart::{ChartBar, ChartRenderer};
use crate::event::{apply_action, handle_event, poll_event, Action};
use crate::model::ChartView;
use crate::ui::{calculate_visible_bars, render};

/// The chart viewer.
pub struct App<'a> {
    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Bars to display
    bars: &'a [ChartBar],
    /// Total repeat count shown in the status bar
    total: usize,
    /// Scroll state
    view: ChartView,
    /// Event poll timeout
    tick_rate: Duration,
}

impl<'a> App<'a> {
    /// Creates a new viewer for the given bars.
    pub fn new(bars: &'a [ChartBar], total: usize) -> Result<Self> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            bars,
            total,
            view: ChartView::new(bars.len()),
            tick_rate: Duration::from_millis(50),
        })
    }

    /// Runs the viewer loop until the user closes it.
    pub fn run(&mut self) -> Result<()> {
        self.update_view_size()?;

        loop {
            let (bars, view, total) = (self.bars, &self.view, self.total);
            self.terminal.draw(|frame| {
                render(frame, bars, view, total);
            })?;

            if let Some(event) = poll_event(self.tick_rate) {
                let action = handle_event(event);

                // Handle resize specially to update the visible range
                if let Action::Resize(_, _) = action {
                    self.update_view_size()?;
                }

                if apply_action(&mut self.view, action) {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Updates the number of visible bars from the terminal size.
    fn update_view_size(&mut self) -> Result<()> {
        let size = self.terminal.size()?;
        self.view.resize(calculate_visible_bars(size.height));
        Ok(())
    }
}

impl Drop for App<'_> {
    fn drop(&mut self) {
        // Restore terminal
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Interactive terminal bar chart.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalChart;

impl ChartRenderer for TerminalChart {
    fn render(&mut self, bars: &[ChartBar], total: usize) -> Result<()> {
        debug!(bars = bars.len(), "opening chart viewer");
        let mut app = App::new(bars, total)?;
        app.run()
    }
}
