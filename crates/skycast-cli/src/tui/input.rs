//! Keyboard and mouse input handling for the TUI.
//!
//! Input events are translated into high-level [`Action`]s and applied to
//! the application state, so the mapping is testable without a terminal.
//!
//! # Key Bindings
//!
//! | Key           | Action              |
//! |---------------|---------------------|
//! | `q`           | Quit                |
//! | `/` / `e`     | Edit the city field |
//! | `Enter` / `s` | Search              |
//! | `←` / `h`     | Previous day        |
//! | `→` / `l`     | Next day            |
//! | `u`           | Toggle units        |
//! | `t`           | Toggle theme        |
//! | `?`           | Toggle help         |
//!
//! Dragging the forecast strip with the mouse pages through the days; a
//! click on the `‹`/`›` affordances pages one card.

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use super::app::App;
use super::messages::Command;
use super::ui;

/// User actions that can be triggered by input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Run a search with the current city field.
    Search,
    /// Start editing the city field.
    EditCity,
    /// Input character for the city field.
    TextInput(char),
    /// Backspace in the city field.
    TextBackspace,
    /// Submit the city field and search.
    TextSubmit,
    /// Stop editing the city field without searching.
    TextCancel,
    /// Page to the next forecast day.
    NextDay,
    /// Page to the previous forecast day.
    PrevDay,
    /// Toggle between metric and imperial (re-runs the search).
    ToggleUnits,
    /// Toggle the help overlay.
    ToggleHelp,
    /// Toggle theme.
    ToggleTheme,
    /// Close the topmost overlay.
    Dismiss,
    /// Pointer pressed at coordinates.
    PointerDown { x: u16, y: u16 },
    /// Pointer moved while pressed.
    PointerMove { x: u16 },
    /// Pointer released.
    PointerUp,
    /// No action (unrecognized event).
    None,
}

/// Map a key code to an action.
///
/// While the city field is being edited, keys feed the text input instead
/// of triggering their normal bindings.
pub fn handle_key(key: KeyCode, editing_city: bool) -> Action {
    if editing_city {
        return match key {
            KeyCode::Enter => Action::TextSubmit,
            KeyCode::Esc => Action::TextCancel,
            KeyCode::Backspace => Action::TextBackspace,
            KeyCode::Char(c) => Action::TextInput(c),
            _ => Action::None,
        };
    }

    match key {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Enter | KeyCode::Char('s') => Action::Search,
        KeyCode::Char('/') | KeyCode::Char('e') => Action::EditCity,
        KeyCode::Left | KeyCode::Char('h') => Action::PrevDay,
        KeyCode::Right | KeyCode::Char('l') => Action::NextDay,
        KeyCode::Char('u') => Action::ToggleUnits,
        KeyCode::Char('?') => Action::ToggleHelp,
        KeyCode::Char('t') => Action::ToggleTheme,
        KeyCode::Esc => Action::Dismiss,
        _ => Action::None,
    }
}

/// Handle mouse events and return the corresponding action.
pub fn handle_mouse(event: MouseEvent) -> Action {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Action::PointerDown {
            x: event.column,
            y: event.row,
        },
        MouseEventKind::Drag(MouseButton::Left) => Action::PointerMove { x: event.column },
        MouseEventKind::Up(MouseButton::Left) => Action::PointerUp,
        _ => Action::None,
    }
}

/// Apply an action to the application state.
///
/// Returns `Some(Command)` if an async command should be sent to the
/// background worker, `None` if the action was handled entirely in the UI.
pub fn apply_action(app: &mut App, action: Action) -> Option<Command> {
    match action {
        Action::Quit => {
            app.should_quit = true;
            None
        }
        Action::Search => app.begin_search(),
        Action::EditCity => {
            app.editing_city = true;
            None
        }
        Action::TextInput(c) => {
            app.city_input_char(c);
            None
        }
        Action::TextBackspace => {
            app.city_input_backspace();
            None
        }
        Action::TextSubmit => {
            app.editing_city = false;
            app.begin_search()
        }
        Action::TextCancel => {
            app.editing_city = false;
            None
        }
        Action::NextDay => {
            app.carousel.next();
            None
        }
        Action::PrevDay => {
            app.carousel.previous();
            None
        }
        Action::ToggleUnits => {
            app.units = app.units.toggle();
            app.push_status_message(format!("Units: {}", app.units));
            // The original dashboard re-queries when the unit selection
            // changes, so the whole view stays in one system.
            app.begin_search()
        }
        Action::ToggleHelp => {
            app.show_help = !app.show_help;
            None
        }
        Action::ToggleTheme => {
            app.toggle_theme();
            None
        }
        Action::Dismiss => {
            if app.show_help {
                app.show_help = false;
            }
            None
        }
        Action::PointerDown { x, y } => {
            let region = ui::regions(app.viewport_rect()).carousel;
            if !region.contains(Position::new(x, y)) {
                return None;
            }
            // The outermost columns are the prev/next affordances; anywhere
            // else starts a drag.
            if x < region.x + 2 {
                app.carousel.previous();
            } else if x >= region.x + region.width.saturating_sub(2) {
                app.carousel.next();
            } else {
                app.carousel.pointer_down(f32::from(x));
            }
            None
        }
        Action::PointerMove { x } => {
            // Drags keep tracking outside the carousel region.
            app.carousel.pointer_move(f32::from(x));
            None
        }
        Action::PointerUp => {
            app.carousel.pointer_up();
            None
        }
        Action::None => None,
    }
}
