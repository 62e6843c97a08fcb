//! Main UI layout and rendering for the TUI dashboard.
//!
//! The layout is a pure function of the viewport ([`regions`]), shared by
//! rendering and mouse hit-testing so both always agree on where the
//! carousel (and everything else) sits. Top to bottom:
//!
//! - **Header**: title and clock
//! - **Search bar**: city field and unit selection
//! - **Conditions panel**: current weather or the error message
//! - **Forecast carousel**: one card per aggregated day
//! - **Charts**: temperature and humidity over the full 3-hour series
//! - **Status bar**: key hints and status messages

pub mod carousel;
pub mod charts;
pub mod conditions;
pub mod theme;
pub mod widgets;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::app::App;
use theme::BORDER_TYPE;

/// Fixed regions of the dashboard, computed from the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub search: Rect,
    pub conditions: Rect,
    pub carousel: Rect,
    pub charts: Rect,
    pub status: Rect,
}

/// Compute the dashboard regions for a viewport.
pub fn regions(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header bar
            Constraint::Length(3), // Search bar
            Constraint::Length(7), // Conditions panel
            Constraint::Length(9), // Forecast carousel
            Constraint::Min(8),    // Charts
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    Regions {
        header: chunks[0],
        search: chunks[1],
        conditions: chunks[2],
        carousel: chunks[3],
        charts: chunks[4],
        status: chunks[5],
    }
}

/// Draw the complete TUI interface.
pub fn draw(frame: &mut Frame, app: &App) {
    let r = regions(frame.area());

    draw_header(frame, r.header, app);
    draw_search_bar(frame, r.search, app);
    conditions::draw(frame, r.conditions, app);
    carousel::draw(frame, r.carousel, app);
    charts::draw(frame, r.charts, app);
    draw_status_bar(frame, r.status, app);

    if app.show_help {
        draw_help_overlay(frame, app);
    }
}

/// Draw the header bar with title and clock.
fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.app_theme();
    let clock = time::OffsetDateTime::now_utc()
        .format(&time::macros::format_description!(
            "[hour]:[minute]:[second] UTC"
        ))
        .unwrap_or_default();

    let line = Line::from(vec![
        Span::styled(" skycast ", theme.title_style()),
        Span::styled("— weather dashboard", theme.muted_style()),
    ]);
    frame.render_widget(Paragraph::new(line).style(theme.header_style()), area);

    let clock_line = Line::from(Span::styled(format!("{clock} "), theme.muted_style()));
    frame.render_widget(
        Paragraph::new(clock_line)
            .alignment(Alignment::Right)
            .style(theme.header_style()),
        area,
    );
}

/// Draw the search bar: city field, unit selection, and search state.
fn draw_search_bar(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.app_theme();

    let border_style = if app.editing_city {
        theme.border_active_style()
    } else {
        theme.border_inactive_style()
    };

    let block = Block::default()
        .title(" Search ")
        .title_style(theme.title_style())
        .borders(Borders::ALL)
        .border_type(BORDER_TYPE)
        .border_style(border_style);

    let mut spans = vec![
        Span::styled("City: ", theme.muted_style()),
        Span::styled(
            app.city_input.clone(),
            Style::default().fg(theme.text_primary),
        ),
    ];
    if app.editing_city {
        spans.push(Span::styled("▌", Style::default().fg(theme.primary)));
    }
    spans.push(Span::styled(
        format!("   [{}]", app.units),
        Style::default().fg(theme.accent),
    ));
    if app.searching {
        spans.push(Span::styled(
            format!("   {} fetching…", app.spinner_char()),
            theme.muted_style(),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw the status bar with key hints and the latest status message.
fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.app_theme();

    let hints = " q quit · / city · Enter search · ←/→ page days · u units · ? help";
    let mut spans = vec![Span::styled(hints, theme.muted_style())];

    if let Some(message) = app.current_status_message() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            message.to_string(),
            Style::default().fg(theme.text_secondary),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the centered help overlay.
fn draw_help_overlay(frame: &mut Frame, app: &App) {
    let theme = app.app_theme();
    let area = frame.area();

    let width = 44.min(area.width);
    let height = 12.min(area.height);
    let popup = Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    );

    let lines = vec![
        Line::from(""),
        Line::from("  /, e      edit city"),
        Line::from("  Enter, s  search"),
        Line::from("  ←/→, h/l  page forecast days"),
        Line::from("  drag      swipe the forecast strip"),
        Line::from("  u         toggle metric/imperial"),
        Line::from("  t         toggle theme"),
        Line::from("  ?         toggle this help"),
        Line::from("  q         quit"),
    ];

    let block = Block::default()
        .title(" Help ")
        .title_style(theme.title_style())
        .borders(Borders::ALL)
        .border_type(BORDER_TYPE)
        .border_style(theme.border_active_style());

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_partition_the_viewport() {
        let r = regions(Rect::new(0, 0, 120, 40));
        assert_eq!(r.header.height, 1);
        assert_eq!(r.search.height, 3);
        assert_eq!(r.conditions.height, 7);
        assert_eq!(r.carousel.height, 9);
        assert_eq!(r.status.height, 1);

        let total: u16 = [r.header, r.search, r.conditions, r.carousel, r.charts, r.status]
            .iter()
            .map(|rect| rect.height)
            .sum();
        assert_eq!(total, 40);
    }

    #[test]
    fn test_regions_stack_vertically_in_order() {
        let r = regions(Rect::new(0, 0, 100, 50));
        assert!(r.header.y < r.search.y);
        assert!(r.search.y < r.conditions.y);
        assert!(r.conditions.y < r.carousel.y);
        assert!(r.carousel.y < r.charts.y);
        assert!(r.charts.y < r.status.y);
    }
}
