//! Message types for TUI communication between the UI and the worker task.
//!
//! - [`Command`]: messages sent from the UI to the background worker
//! - [`WeatherEvent`]: events sent from the worker back to the UI
//!
//! Every search carries a monotonic sequence token; worker replies echo it
//! so the UI can discard results from a superseded search instead of letting
//! the last writer win against the screen.

use skycast_core::WeatherBundle;
use skycast_types::Units;

/// Messages sent from the UI to the background worker.
#[derive(Debug, Clone)]
pub enum Command {
    /// Fetch current conditions and the forecast for a city.
    Search {
        /// Sequence token of this search.
        seq: u64,
        /// City to search for (validated non-empty by the UI).
        city: String,
        /// Unit system for the request.
        units: Units,
    },
    /// Stop the worker.
    Shutdown,
}

/// Events sent from the worker back to the UI.
#[derive(Debug)]
pub enum WeatherEvent {
    /// A search finished successfully.
    SearchCompleted {
        /// Sequence token echoed from the command.
        seq: u64,
        /// The fetched and normalized data.
        bundle: WeatherBundle,
    },
    /// A search failed; `message` is ready for display.
    SearchFailed {
        /// Sequence token echoed from the command.
        seq: u64,
        /// User-facing failure message.
        message: String,
    },
}
