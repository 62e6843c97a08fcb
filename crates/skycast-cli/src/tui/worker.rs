//! Background worker for weather fetches.
//!
//! All network I/O happens here, in a separate Tokio task, keeping the UI
//! loop responsive. The worker receives [`Command`]s from the UI and sends
//! [`WeatherEvent`]s back:
//!
//! - Provider-reported failures are forwarded with the provider's own
//!   message text.
//! - Transport and decoding failures are logged with their cause and
//!   forwarded with a generic message; they are not retried.

use skycast_core::WeatherClient;
use skycast_types::Units;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use super::messages::{Command, WeatherEvent};

/// Generic message shown when a fetch fails for non-provider reasons.
const GENERIC_FETCH_ERROR: &str = "An error occurred while fetching the weather data.";

/// Background worker that handles weather fetches.
pub struct WeatherWorker {
    /// Receiver for commands from the UI task.
    command_rx: mpsc::Receiver<Command>,
    /// Sender for events back to the UI task.
    event_tx: mpsc::Sender<WeatherEvent>,
    /// The provider client, shared across searches.
    client: WeatherClient,
}

impl WeatherWorker {
    /// Create a new weather worker.
    pub fn new(
        command_rx: mpsc::Receiver<Command>,
        event_tx: mpsc::Sender<WeatherEvent>,
        client: WeatherClient,
    ) -> Self {
        Self {
            command_rx,
            event_tx,
            client,
        }
    }

    /// Run the worker's main loop.
    ///
    /// This method consumes the worker and runs until a
    /// [`Command::Shutdown`] is received or the command channel is closed.
    pub async fn run(mut self) {
        info!("WeatherWorker started");

        loop {
            tokio::select! {
                cmd = self.command_rx.recv() => {
                    match cmd {
                        Some(Command::Shutdown) => {
                            info!("WeatherWorker received shutdown command");
                            break;
                        }
                        Some(Command::Search { seq, city, units }) => {
                            self.handle_search(seq, &city, units).await;
                        }
                        None => {
                            info!("Command channel closed, shutting down worker");
                            break;
                        }
                    }
                }
            }
        }

        info!("WeatherWorker stopped");
    }

    /// Run one search and report the outcome.
    async fn handle_search(&self, seq: u64, city: &str, units: Units) {
        debug!(seq, city, ?units, "handling search");

        let event = match self.client.fetch_current_and_forecast(city, units).await {
            Ok(bundle) => WeatherEvent::SearchCompleted { seq, bundle },
            Err(e) if e.is_provider() => WeatherEvent::SearchFailed {
                seq,
                message: e.to_string(),
            },
            Err(e) => {
                error!(seq, city, error = %e, "weather fetch failed");
                WeatherEvent::SearchFailed {
                    seq,
                    message: GENERIC_FETCH_ERROR.to_string(),
                }
            }
        };

        let _ = self.event_tx.send(event).await;
    }
}
