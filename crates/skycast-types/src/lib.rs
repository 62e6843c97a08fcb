//! Platform-agnostic types for the skycast weather dashboard.
//!
//! This crate provides the shared data model used by the fetching/aggregation
//! core (skycast-core) and the terminal frontend (skycast-cli):
//!
//! - [`ForecastSample`] and [`CurrentConditions`] for normalized weather data
//! - [`Units`] for the metric/imperial selection
//! - [`WeatherIcon`] for the condition-code → icon lookup
//! - [`ParseError`] for validation failures
//!
//! No I/O happens here; raw provider records are normalized into these types
//! by the client in skycast-core.

pub mod error;
pub mod icons;
pub mod types;

pub use error::{ParseError, ParseResult};
pub use icons::WeatherIcon;
pub use types::{CurrentConditions, ForecastSample, Units};
