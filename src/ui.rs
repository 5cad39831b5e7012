//! TUI rendering module.
//!
//! Draws the microsatellite bar chart with ratatui:
//! - Horizontal bars, one per microsatellite, labelled by position
//! - Chart title and axis labels on the surrounding block
//! - Status bar with key hints, visible range and total repeat count

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::chart::{ChartBar, CATEGORY_AXIS_LABEL, CHART_TITLE, VALUE_AXIS_LABEL};
use crate::model::ChartView;

/// Rows taken by a single bar.
const BAR_WIDTH: u16 = 1;
/// Empty rows between two bars.
const BAR_GAP: u16 = 1;
/// Height of the status bar.
const STATUS_BAR_HEIGHT: u16 = 1;

/// Bar color.
const BAR_COLOR: Color = Color::Green;

/// Flattens a bar's two-line label onto a single terminal row.
pub fn bar_label(bar: &ChartBar) -> String {
    bar.label_lines().collect::<Vec<_>>().join(" / ")
}

/// Renders the complete UI.
pub fn render(frame: &mut Frame, bars: &[ChartBar], view: &ChartView, total: usize) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(STATUS_BAR_HEIGHT)])
        .split(area);

    render_chart(frame, bars, view, main_layout[0]);
    render_status_bar(frame, view, total, main_layout[1]);
}

/// Renders the visible slice of bars inside a titled block.
fn render_chart(frame: &mut Frame, bars: &[ChartBar], view: &ChartView, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(CHART_TITLE).alignment(Alignment::Center))
        .title_bottom(Line::from(CATEGORY_AXIS_LABEL).alignment(Alignment::Left))
        .title_bottom(Line::from(VALUE_AXIS_LABEL).alignment(Alignment::Right));

    let visible = &bars[view.bar_range()];
    let max_value = bars.iter().map(|b| b.value).max().unwrap_or(1);

    let data: Vec<Bar> = visible
        .iter()
        .map(|bar| {
            Bar::default()
                .value(bar.value)
                .label(Line::from(bar_label(bar)))
                .style(Style::default().fg(BAR_COLOR))
                .value_style(Style::default().fg(Color::Black).bg(BAR_COLOR))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(BAR_WIDTH)
        .bar_gap(BAR_GAP)
        .max(max_value)
        .label_style(Style::default().fg(Color::White))
        .data(BarGroup::default().bars(&data));

    frame.render_widget(chart, area);
}

/// Renders the status bar at the bottom.
fn render_status_bar(frame: &mut Frame, view: &ChartView, total: usize, area: Rect) {
    let left_content = " CHART | q: close  j/k: scroll  g/G: first/last ".to_string();

    let range = view.bar_range();
    let position_info = if view.total_bars == 0 {
        format!("Repeats: {} ", total)
    } else {
        format!(
            "Bars {}-{}/{} | Repeats: {} ",
            range.start + 1,
            range.end,
            view.total_bars,
            total
        )
    };

    let left_len = left_content.len();
    let status_line = Line::from(vec![
        Span::styled(
            left_content,
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
        Span::styled(
            " ".repeat((area.width as usize).saturating_sub(left_len + position_info.len())),
            Style::default().bg(Color::Cyan),
        ),
        Span::styled(
            position_info,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    frame.render_widget(Paragraph::new(status_line), area);
}

/// Calculates how many bars fit in a terminal of the given height.
pub fn calculate_visible_bars(terminal_height: u16) -> usize {
    // Account for borders and status bar
    let inner = terminal_height.saturating_sub(STATUS_BAR_HEIGHT + 2);
    ((inner + BAR_GAP) / (BAR_WIDTH + BAR_GAP)).max(1) as usize
}
