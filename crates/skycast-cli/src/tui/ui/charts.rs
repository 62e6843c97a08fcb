//! Chart rendering: a projection of the orchestrator's chart registry.
//!
//! Each installed [`ChartModel`](crate::tui::charts::ChartModel) becomes a
//! line chart over the full 3-hour forecast series. When the registry is
//! empty (after an error, or before the first search) the chart area stays
//! blank — the destroyed-canvas state.

use ratatui::prelude::*;
use ratatui::symbols;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType};
use time::OffsetDateTime;

use super::theme::BORDER_TYPE;
use super::widgets::month_day;
use crate::tui::app::App;
use crate::tui::charts::{ChartId, ChartModel};

/// Draw the chart area: temperature on the left, humidity on the right.
pub(super) fn draw(frame: &mut Frame, area: Rect, app: &App) {
    if app.charts.is_empty() {
        return;
    }

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let theme = app.app_theme();
    for (i, (id, color)) in [
        (ChartId::Temperature, theme.primary),
        (ChartId::Humidity, theme.accent),
    ]
    .into_iter()
    .enumerate()
    {
        if let Some(model) = app.charts.get(id) {
            draw_chart(frame, halves[i], app, model, color);
        }
    }
}

/// Draw one line chart from its model.
fn draw_chart(frame: &mut Frame, area: Rect, app: &App, model: &ChartModel, color: Color) {
    let theme = app.app_theme();

    let datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(color))
            .data(&model.points),
    ];

    let x_labels: Vec<Line> = model
        .x_bounds
        .iter()
        .map(|&secs| Line::from(axis_date_label(secs)))
        .collect();
    let y_labels: Vec<Line> = model
        .y_bounds
        .iter()
        .map(|&value| Line::from(format!("{value:.0}{}", model.unit_suffix)))
        .collect();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(format!(" {} ", model.label))
                .title_style(theme.title_style())
                .borders(Borders::ALL)
                .border_type(BORDER_TYPE)
                .border_style(theme.border_inactive_style()),
        )
        .x_axis(
            Axis::default()
                .style(theme.muted_style())
                .bounds(model.x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(theme.muted_style())
                .bounds(model.y_bounds)
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

/// "Dec 2"-style label for a Unix-seconds axis bound.
fn axis_date_label(secs: f64) -> String {
    OffsetDateTime::from_unix_timestamp(secs as i64)
        .map(|dt| month_day(dt.date()))
        .unwrap_or_default()
}
