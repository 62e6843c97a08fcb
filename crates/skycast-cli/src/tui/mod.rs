//! Main entry point for the TUI dashboard.
//!
//! This module ties together the TUI components and provides the main event
//! loop. It handles:
//!
//! - Terminal setup and restoration (alternate screen, raw mode, mouse
//!   capture)
//! - Channel creation for worker communication
//! - The event loop: input handling, worker events, animation ticks,
//!   rendering
//! - Graceful shutdown coordination

pub mod app;
pub mod charts;
pub mod input;
pub mod messages;
pub mod ui;
pub mod worker;

pub use app::App;
pub use messages::{Command, WeatherEvent};
pub use worker::WeatherWorker;

use std::io::{self, stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    ExecutableCommand,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use skycast_core::WeatherClient;
use skycast_types::Units;
use tokio::sync::mpsc;

/// Poll interval for input events; doubles as the animation tick cadence.
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Startup options resolved from CLI flags and config.
#[derive(Debug, Clone)]
pub struct TuiOptions {
    /// City pre-populating the search field.
    pub city: String,
    /// Unit system selection.
    pub units: Units,
    /// Provider API key.
    pub api_key: String,
}

/// Set up the terminal for TUI rendering.
///
/// Enables raw mode, mouse capture, and switches to the alternate screen
/// buffer.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state.
///
/// Disables mouse capture, raw mode and returns to the main screen buffer.
pub fn restore_terminal() -> Result<()> {
    stdout().execute(DisableMouseCapture)?;
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application.
///
/// 1. Creates communication channels between UI and worker
/// 2. Spawns the background weather worker
/// 3. Fires the automatic initial search for the pre-populated city
/// 4. Runs the main event loop
/// 5. Ensures graceful shutdown
pub async fn run(options: TuiOptions) -> Result<()> {
    // Create communication channels
    let (cmd_tx, cmd_rx) = mpsc::channel::<Command>(32);
    let (event_tx, event_rx) = mpsc::channel::<WeatherEvent>(32);

    // Create and spawn the background worker
    let client = WeatherClient::new(options.api_key);
    let worker = WeatherWorker::new(cmd_rx, event_tx, client);
    let worker_handle = tokio::spawn(worker.run());

    // Set up terminal
    let mut terminal = setup_terminal()?;
    let size = terminal.size()?;

    // Create the application
    let mut app = App::new(
        cmd_tx.clone(),
        event_rx,
        options.city,
        options.units,
        (size.width, size.height),
    );

    // Automatic initial search for the restored city
    if let Some(cmd) = app.begin_search() {
        let _ = cmd_tx.try_send(cmd);
    }

    // Run the main event loop
    let result = run_event_loop(&mut terminal, &mut app, &cmd_tx).await;

    // Send shutdown command to worker
    let _ = cmd_tx.try_send(Command::Shutdown);

    // Restore terminal
    restore_terminal()?;

    // Wait for worker to complete
    let _ = worker_handle.await;

    result
}

/// Main event loop for the TUI.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    command_tx: &mpsc::Sender<Command>,
) -> Result<()> {
    let mut last_tick = Instant::now();

    while !app.should_quit() {
        // Draw the UI
        terminal.draw(|f| ui::draw(f, app))?;

        // Poll for keyboard, mouse, and resize events with timeout
        if event::poll(TICK_INTERVAL)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press {
                        let action = input::handle_key(key.code, app.editing_city);
                        if let Some(cmd) = input::apply_action(app, action) {
                            let _ = command_tx.try_send(cmd);
                        }
                    }
                }
                Event::Mouse(mouse_event) => {
                    let action = input::handle_mouse(mouse_event);
                    if let Some(cmd) = input::apply_action(app, action) {
                        let _ = command_tx.try_send(cmd);
                    }
                }
                Event::Resize(width, height) => {
                    app.on_resize(width, height);
                }
                _ => {}
            }
        }

        // Non-blocking receive of worker events
        while let Ok(event) = app.event_rx.try_recv() {
            app.handle_weather_event(event);
        }

        // Persist the last searched city after a successful render
        if let Some(city) = app.take_city_to_persist() {
            if let Err(e) = crate::config::update_last_city(&city) {
                tracing::warn!(error = %e, "failed to persist last city");
            }
        }

        // Advance animations and the resize debouncer
        let now = Instant::now();
        app.tick(now - last_tick);
        last_tick = now;
    }

    Ok(())
}
