//! Application state for the TUI dashboard.
//!
//! [`App`] is the orchestrator: the only component that knows the weather
//! client (through the worker channel), the daily aggregator, and the
//! carousel. It validates searches, sequences overlapping ones, turns
//! fetched bundles into rendered state, and owns the chart registry.

use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use skycast_core::{
    CardGeometry, Carousel, MAX_FORECAST_DAYS, ResizeDebouncer, WeatherBundle,
    daily_representatives,
};
use skycast_types::{CurrentConditions, ForecastSample, Units};
use time::UtcOffset;
use tokio::sync::mpsc;
use tracing::debug;

use super::charts::{ChartId, ChartModel, ChartRegistry};
use super::messages::{Command, WeatherEvent};
use super::ui;

/// Message rendered when a search is submitted with an empty city.
pub const EMPTY_CITY_MESSAGE: &str = "Please enter a city name";

/// Maximum length of the city input field.
const MAX_CITY_INPUT: usize = 40;

/// Spinner animation frames.
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// UI theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Main application state for the TUI.
pub struct App {
    /// Whether the application should exit.
    pub should_quit: bool,
    /// Contents of the city search field.
    pub city_input: String,
    /// Whether the search field is being edited.
    pub editing_city: bool,
    /// Selected unit system.
    pub units: Units,
    /// Whether a search is in flight.
    pub searching: bool,
    /// Monotonic token identifying the latest search; worker replies
    /// carrying an older token are discarded.
    search_seq: u64,
    /// City submitted with the latest search, persisted on success.
    submitted_city: Option<String>,
    /// City awaiting persistence after a successful render; drained by the
    /// event loop.
    city_to_persist: Option<String>,
    /// Current conditions from the last successful search.
    pub current: Option<CurrentConditions>,
    /// Aggregated one-per-day forecast series (the carousel cards).
    pub days: Vec<ForecastSample>,
    /// The searched city's UTC offset, for weekday/date display.
    pub utc_offset: UtcOffset,
    /// Carousel state over the day cards.
    pub carousel: Carousel,
    /// Chart models keyed by chart surface.
    pub charts: ChartRegistry,
    /// Error message replacing the conditions panel, if any.
    pub error: Option<String>,
    /// Queue of status messages with their creation time.
    pub status_messages: Vec<(String, Instant)>,
    /// How long to show each status message (in seconds).
    pub status_message_timeout: u64,
    /// Whether to show the help overlay.
    pub show_help: bool,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
    /// Current UI theme.
    pub theme: Theme,
    /// Terminal size, updated on resize events.
    pub viewport: (u16, u16),
    /// Debouncer coalescing resize bursts before carousel reflow.
    pub resize_debouncer: ResizeDebouncer,
    /// Channel for sending commands to the background worker.
    #[allow(dead_code)]
    pub command_tx: mpsc::Sender<Command>,
    /// Channel for receiving events from the background worker.
    pub event_rx: mpsc::Receiver<WeatherEvent>,
}

impl App {
    /// Create a new application with the given channels, pre-populated
    /// search field, and terminal size.
    pub fn new(
        command_tx: mpsc::Sender<Command>,
        event_rx: mpsc::Receiver<WeatherEvent>,
        city: String,
        units: Units,
        viewport: (u16, u16),
    ) -> Self {
        let viewport_rect = Rect::new(0, 0, viewport.0, viewport.1);
        let geometry = ui::carousel::geometry_for(ui::regions(viewport_rect).carousel);

        Self {
            should_quit: false,
            city_input: city,
            editing_city: false,
            units,
            searching: false,
            search_seq: 0,
            submitted_city: None,
            city_to_persist: None,
            current: None,
            days: Vec::new(),
            utc_offset: UtcOffset::UTC,
            carousel: Carousel::new(0, geometry),
            charts: ChartRegistry::default(),
            error: None,
            status_messages: Vec::new(),
            status_message_timeout: 5, // 5 seconds
            show_help: false,
            spinner_frame: 0,
            theme: Theme::default(),
            viewport,
            resize_debouncer: ResizeDebouncer::default(),
            command_tx,
            event_rx,
        }
    }

    /// Returns whether the application should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The whole terminal as a layout rectangle.
    pub fn viewport_rect(&self) -> Rect {
        Rect::new(0, 0, self.viewport.0, self.viewport.1)
    }

    /// Card geometry for the current viewport.
    pub fn card_geometry(&self) -> CardGeometry {
        ui::carousel::geometry_for(ui::regions(self.viewport_rect()).carousel)
    }

    /// Validate the search field and start a search.
    ///
    /// Returns the command to send to the worker, or `None` when the city is
    /// empty — in that case the validation message is rendered inline and no
    /// network call is made.
    pub fn begin_search(&mut self) -> Option<Command> {
        let city = self.city_input.trim().to_string();
        if city.is_empty() {
            self.show_error(EMPTY_CITY_MESSAGE);
            return None;
        }

        self.search_seq += 1;
        self.searching = true;
        self.submitted_city = Some(city.clone());
        debug!(seq = self.search_seq, %city, "starting search");

        Some(Command::Search {
            seq: self.search_seq,
            city,
            units: self.units,
        })
    }

    /// Handle an incoming event from the worker.
    pub fn handle_weather_event(&mut self, event: WeatherEvent) {
        match event {
            WeatherEvent::SearchCompleted { seq, bundle } => {
                if seq != self.search_seq {
                    debug!(seq, latest = self.search_seq, "discarding stale search result");
                    return;
                }
                self.searching = false;
                self.apply_bundle(bundle);
            }
            WeatherEvent::SearchFailed { seq, message } => {
                if seq != self.search_seq {
                    debug!(seq, latest = self.search_seq, "discarding stale search failure");
                    return;
                }
                self.searching = false;
                self.show_error(message);
            }
        }
    }

    /// Turn a fetched bundle into rendered state: aggregate the days,
    /// rebuild the carousel and charts, persist the city.
    fn apply_bundle(&mut self, bundle: WeatherBundle) {
        self.days = daily_representatives(&bundle.samples, MAX_FORECAST_DAYS, bundle.utc_offset);
        self.utc_offset = bundle.utc_offset;

        let geometry = self.card_geometry();
        self.carousel.replace_cards(self.days.len(), geometry);

        self.charts.install(
            ChartId::Temperature,
            ChartModel::from_series(
                format!("Temperature ({})", self.units.temp_suffix()),
                self.units.temp_suffix(),
                &bundle.samples,
                |s| f64::from(s.temperature),
            ),
        );
        self.charts.install(
            ChartId::Humidity,
            ChartModel::from_series("Humidity (%)".to_string(), "%", &bundle.samples, |s| {
                f64::from(s.humidity)
            }),
        );

        self.push_status_message(format!("Updated {}", bundle.current.city));
        self.current = Some(bundle.current);
        self.error = None;

        // Queued only after a successful render, never on failure.
        self.city_to_persist = self.submitted_city.take();
    }

    /// Take the city that should be written to config, if a search just
    /// rendered successfully.
    pub fn take_city_to_persist(&mut self) -> Option<String> {
        self.city_to_persist.take()
    }

    /// Render an error: the conditions panel shows the message, the day
    /// cards are cleared, and both charts are destroyed. Stale data is never
    /// left on screen next to an error.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.current = None;
        self.days.clear();
        let geometry = self.card_geometry();
        self.carousel.replace_cards(0, geometry);
        self.charts.clear();
    }

    /// Note a terminal resize. The viewport updates immediately for layout;
    /// the carousel reflow waits for the debouncer.
    pub fn on_resize(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
        self.resize_debouncer.note(width, height);
    }

    /// Advance animations, the spinner, and the resize debouncer.
    pub fn tick(&mut self, dt: Duration) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER.len();
        self.clean_expired_messages();
        self.carousel.tick(dt);

        if self.resize_debouncer.tick(dt).is_some() {
            let geometry = self.card_geometry();
            self.carousel.reflow(geometry);
        }
    }

    /// Get the current spinner character.
    pub fn spinner_char(&self) -> &'static str {
        SPINNER[self.spinner_frame]
    }

    /// Toggle between light and dark theme.
    pub fn toggle_theme(&mut self) {
        self.theme = match self.theme {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        };
    }

    /// Get the current AppTheme based on the theme setting.
    #[must_use]
    pub fn app_theme(&self) -> ui::theme::AppTheme {
        match self.theme {
            Theme::Dark => ui::theme::AppTheme::dark(),
            Theme::Light => ui::theme::AppTheme::light(),
        }
    }

    /// Add a status message to the queue.
    pub fn push_status_message(&mut self, message: String) {
        self.status_messages.push((message, Instant::now()));
        // Keep at most 5 messages
        while self.status_messages.len() > 5 {
            self.status_messages.remove(0);
        }
    }

    /// Remove expired status messages.
    pub fn clean_expired_messages(&mut self) {
        let timeout = Duration::from_secs(self.status_message_timeout);
        self.status_messages
            .retain(|(_, created)| created.elapsed() < timeout);
    }

    /// Get the current status message to display.
    pub fn current_status_message(&self) -> Option<&str> {
        self.status_messages.last().map(|(msg, _)| msg.as_str())
    }

    /// Append a character to the city input.
    pub fn city_input_char(&mut self, c: char) {
        if self.city_input.len() < MAX_CITY_INPUT {
            self.city_input.push(c);
        }
    }

    /// Remove the last character from the city input.
    pub fn city_input_backspace(&mut self) {
        self.city_input.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skycast_types::ForecastSample;
    use time::macros::datetime;

    fn test_app() -> App {
        let (command_tx, _command_rx) = mpsc::channel(8);
        let (_event_tx, event_rx) = mpsc::channel(8);
        App::new(
            command_tx,
            event_rx,
            "Reykjavik".to_string(),
            Units::Metric,
            (120, 40),
        )
    }

    fn test_bundle() -> WeatherBundle {
        let start = datetime!(2026-03-02 00:00 UTC).unix_timestamp();
        let samples: Vec<ForecastSample> = (0..40)
            .map(|i| {
                ForecastSample::from_unix(start + i * 3 * 3600, 10.0, 50.0, 800, "clear sky")
                    .unwrap()
            })
            .collect();
        WeatherBundle {
            current: CurrentConditions {
                city: "Reykjavik".to_string(),
                temperature: 3.2,
                feels_like: -0.8,
                humidity: 76.0,
                wind_speed: 9.3,
                condition_code: 801,
                description: "few clouds".to_string(),
                observed_at: datetime!(2026-03-02 10:00 UTC),
            },
            samples,
            utc_offset: UtcOffset::UTC,
        }
    }

    #[test]
    fn test_empty_city_renders_validation_error_without_searching() {
        let mut app = test_app();
        app.city_input = "   ".to_string();
        assert!(app.begin_search().is_none());
        assert_eq!(app.error.as_deref(), Some(EMPTY_CITY_MESSAGE));
        assert!(!app.searching);
    }

    #[test]
    fn test_begin_search_issues_sequenced_commands() {
        let mut app = test_app();
        let Some(Command::Search { seq: first, .. }) = app.begin_search() else {
            panic!("expected a search command");
        };
        let Some(Command::Search { seq: second, city, units }) = app.begin_search() else {
            panic!("expected a search command");
        };
        assert!(second > first);
        assert_eq!(city, "Reykjavik");
        assert_eq!(units, Units::Metric);
        assert!(app.searching);
    }

    #[test]
    fn test_successful_search_builds_cards_and_charts() {
        let mut app = test_app();
        let Some(Command::Search { seq, .. }) = app.begin_search() else {
            panic!("expected a search command");
        };

        app.handle_weather_event(WeatherEvent::SearchCompleted {
            seq,
            bundle: test_bundle(),
        });

        assert!(!app.searching);
        assert!(app.error.is_none());
        assert_eq!(app.days.len(), 5);
        assert_eq!(app.carousel.card_count(), 5);
        assert_eq!(app.carousel.current_index(), Some(0));
        assert!(app.charts.get(ChartId::Temperature).is_some());
        assert!(app.charts.get(ChartId::Humidity).is_some());
        assert_eq!(app.current.as_ref().map(|c| c.city.as_str()), Some("Reykjavik"));
        // Persisted only now, after the successful render.
        assert_eq!(app.take_city_to_persist().as_deref(), Some("Reykjavik"));
        assert_eq!(app.take_city_to_persist(), None);
    }

    #[test]
    fn test_failed_search_clears_cards_and_charts() {
        let mut app = test_app();
        let Some(Command::Search { seq, .. }) = app.begin_search() else {
            panic!("expected a search command");
        };
        app.handle_weather_event(WeatherEvent::SearchCompleted {
            seq,
            bundle: test_bundle(),
        });
        app.take_city_to_persist();

        let Some(Command::Search { seq, .. }) = app.begin_search() else {
            panic!("expected a search command");
        };
        app.handle_weather_event(WeatherEvent::SearchFailed {
            seq,
            message: "city not found".to_string(),
        });

        assert_eq!(app.error.as_deref(), Some("city not found"));
        assert!(app.current.is_none());
        assert!(app.days.is_empty());
        assert_eq!(app.carousel.card_count(), 0);
        assert!(app.charts.is_empty());
        assert_eq!(app.take_city_to_persist(), None);
    }

    #[test]
    fn test_stale_search_results_are_discarded() {
        let mut app = test_app();
        let Some(Command::Search { seq: stale, .. }) = app.begin_search() else {
            panic!("expected a search command");
        };
        let Some(Command::Search { .. }) = app.begin_search() else {
            panic!("expected a search command");
        };

        // The superseded search completes late; nothing may change.
        app.handle_weather_event(WeatherEvent::SearchCompleted {
            seq: stale,
            bundle: test_bundle(),
        });
        assert!(app.searching);
        assert!(app.days.is_empty());

        app.handle_weather_event(WeatherEvent::SearchFailed {
            seq: stale,
            message: "city not found".to_string(),
        });
        assert!(app.error.is_none());
    }

    #[test]
    fn test_resize_reflows_carousel_after_quiescence() {
        let mut app = test_app();
        let Some(Command::Search { seq, .. }) = app.begin_search() else {
            panic!("expected a search command");
        };
        app.handle_weather_event(WeatherEvent::SearchCompleted {
            seq,
            bundle: test_bundle(),
        });
        let before = app.carousel.geometry();

        app.on_resize(60, 20);
        // Still inside the debounce window: geometry unchanged.
        app.tick(Duration::from_millis(50));
        assert_eq!(app.carousel.geometry(), before);

        // Quiescent past the window: reflow fires once.
        app.tick(Duration::from_millis(60));
        assert_ne!(app.carousel.geometry(), before);
        assert_eq!(app.carousel.current_index(), Some(0));
    }
}
