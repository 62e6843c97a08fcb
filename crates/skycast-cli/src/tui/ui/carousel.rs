//! Forecast carousel rendering: a pure projection of the carousel state.
//!
//! The strip of day cards is positioned by the carousel's continuous offset,
//! so drags, settles, and bounces all show up as horizontal motion. Cards
//! are clipped to the strip; the outermost columns carry the prev/next
//! affordances.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use skycast_core::CardGeometry;
use skycast_types::WeatherIcon;

use super::theme::BORDER_TYPE;
use super::widgets::{format_temp, icon_color, weekday_short};
use crate::tui::app::App;

/// Gap between adjacent cards, in columns.
const CARD_GAP: f32 = 2.0;

/// Narrowest a card may get on small terminals.
const MIN_CARD_WIDTH: f32 = 16.0;

/// Card geometry for a carousel region: three visible cards with a fixed
/// gap, floored at a minimum width.
///
/// This is the render layer's half of the carousel contract — the state
/// machine never measures anything itself.
#[must_use]
pub fn geometry_for(region: Rect) -> CardGeometry {
    let strip_width = f32::from(strip_rect(region).width);
    let card_width = ((strip_width - 2.0 * CARD_GAP) / 3.0)
        .floor()
        .max(MIN_CARD_WIDTH);
    CardGeometry {
        card_width,
        gap: CARD_GAP,
    }
}

/// The card strip: the region minus borders and the arrow columns.
fn strip_rect(region: Rect) -> Rect {
    Rect {
        x: region.x.saturating_add(3),
        y: region.y.saturating_add(1),
        width: region.width.saturating_sub(6),
        height: region.height.saturating_sub(2),
    }
}

/// Draw the forecast carousel.
pub(super) fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.app_theme();

    let block = Block::default()
        .title(" Forecast ")
        .title_style(theme.title_style())
        .borders(Borders::ALL)
        .border_type(BORDER_TYPE)
        .border_style(theme.border_active_style());
    frame.render_widget(block, area);

    if area.width < 10 || area.height < 4 {
        return;
    }

    let strip = strip_rect(area);

    if app.days.is_empty() {
        // Cleared on error; an informative empty state only after a search
        // actually produced no forecast days.
        if app.error.is_none() && app.current.is_some() {
            let msg = Paragraph::new("No forecast available")
                .style(theme.muted_style())
                .alignment(Alignment::Center);
            frame.render_widget(msg, strip);
        }
        return;
    }

    draw_arrows(frame, area, strip, app);

    let geometry = app.carousel.geometry();
    for (i, day) in app.days.iter().enumerate() {
        let left = f32::from(strip.x) + i as f32 * geometry.stride() - app.carousel.offset();
        draw_card(frame, strip, app, i, day, left, geometry);
    }
}

/// Draw the prev/next affordances on the outermost columns.
fn draw_arrows(frame: &mut Frame, area: Rect, strip: Rect, app: &App) {
    let theme = app.app_theme();
    let index = app.carousel.current_index().unwrap_or(0);
    let last = app.carousel.card_count().saturating_sub(1);

    let arrow_style = |available: bool| {
        if available {
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)
        } else {
            theme.muted_style()
        }
    };

    let y = strip.y + strip.height / 2;
    frame.render_widget(
        Paragraph::new(Span::styled("‹", arrow_style(index > 0))),
        Rect::new(area.x + 1, y, 1, 1),
    );
    frame.render_widget(
        Paragraph::new(Span::styled("›", arrow_style(index < last))),
        Rect::new(area.x + area.width.saturating_sub(2), y, 1, 1),
    );
}

/// Draw one day card at its strip-relative position, clipped to the strip.
fn draw_card(
    frame: &mut Frame,
    strip: Rect,
    app: &App,
    index: usize,
    day: &skycast_types::ForecastSample,
    left: f32,
    geometry: CardGeometry,
) {
    let theme = app.app_theme();

    let left = left.round() as i32;
    let right = left + geometry.card_width.round() as i32;
    let strip_left = i32::from(strip.x);
    let strip_right = strip_left + i32::from(strip.width);

    // Fully off-strip cards are culled; partially visible ones are clipped.
    if right <= strip_left || left >= strip_right {
        return;
    }
    let clipped_left = left.max(strip_left) as u16;
    let clipped_right = right.min(strip_right) as u16;
    let card_area = Rect::new(
        clipped_left,
        strip.y,
        clipped_right - clipped_left,
        strip.height,
    );

    let selected = app.carousel.current_index() == Some(index);
    let border_style = if selected {
        theme.border_active_style()
    } else {
        theme.border_inactive_style()
    };

    let local_date = day.timestamp.to_offset(app.utc_offset).date();
    let icon = WeatherIcon::for_code(day.condition_code);

    let block = Block::default()
        .title(format!(" {} ", weekday_short(local_date)))
        .title_style(if selected {
            theme.title_style()
        } else {
            Style::default().fg(theme.text_secondary)
        })
        .borders(Borders::ALL)
        .border_type(BORDER_TYPE)
        .border_style(border_style);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            icon.glyph().to_string(),
            Style::default().fg(icon_color(icon, &theme)),
        )),
        Line::from(Span::styled(
            format_temp(day.temperature, app.units),
            Style::default()
                .fg(theme.text_primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            day.description.clone(),
            Style::default().fg(theme.text_secondary),
        )),
    ];

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(card, card_area);
}
