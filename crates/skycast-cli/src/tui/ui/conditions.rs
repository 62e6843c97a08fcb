//! Current-conditions panel rendering.
//!
//! Shows four detail cells (condition, temperature, humidity, wind) for the
//! searched city, or — on any failure path — a single error message with a
//! warning icon in place of the whole panel.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use skycast_types::WeatherIcon;

use super::theme::{AppTheme, BORDER_TYPE};
use super::widgets::{format_temp, format_wind, icon_color};
use crate::tui::app::App;

/// Draw the conditions panel.
pub(super) fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.app_theme();

    let title = match &app.current {
        Some(current) => format!(" {} ", current.city),
        None => " Current Conditions ".to_string(),
    };

    let block = Block::default()
        .title(title)
        .title_style(theme.title_style())
        .borders(Borders::ALL)
        .border_type(BORDER_TYPE)
        .border_style(theme.border_active_style());

    if let Some(message) = &app.error {
        let line = Line::from(vec![
            Span::styled("(!) ", Style::default().fg(theme.danger)),
            Span::styled(message.clone(), Style::default().fg(theme.danger)),
        ]);
        let panel = Paragraph::new(vec![Line::from(""), Line::from(""), line])
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(panel, area);
        return;
    }

    let Some(current) = &app.current else {
        let text = if app.searching {
            format!("{} Fetching weather…", app.spinner_char())
        } else {
            "Press / to enter a city, Enter to search".to_string()
        };
        let panel = Paragraph::new(vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled(text, theme.muted_style())),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(panel, area);
        return;
    };

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(inner);

    let icon = WeatherIcon::for_code(current.condition_code);
    detail_cell(
        frame,
        cells[0],
        &theme,
        icon.glyph(),
        icon_color(icon, &theme),
        &[current.description.clone()],
    );
    detail_cell(
        frame,
        cells[1],
        &theme,
        "🌡",
        theme.accent,
        &[
            format_temp(current.temperature, app.units),
            format!("Feels like: {}", format_temp(current.feels_like, app.units)),
        ],
    );
    detail_cell(
        frame,
        cells[2],
        &theme,
        "💧",
        theme.primary,
        &[format!("Humidity: {:.0}%", current.humidity)],
    );
    detail_cell(
        frame,
        cells[3],
        &theme,
        "💨",
        theme.text_secondary,
        &[format!("Wind: {}", format_wind(current.wind_speed, app.units))],
    );
}

/// One detail cell: a colored glyph on top, detail lines below.
fn detail_cell(
    frame: &mut Frame,
    area: Rect,
    theme: &AppTheme,
    glyph: &str,
    glyph_color: ratatui::style::Color,
    detail: &[String],
) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            glyph.to_string(),
            Style::default().fg(glyph_color),
        )),
    ];
    for (i, text) in detail.iter().enumerate() {
        let style = if i == 0 {
            Style::default()
                .fg(theme.text_primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_secondary)
        };
        lines.push(Line::from(Span::styled(text.clone(), style)));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
