//! Core types for weather dashboard data.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::{ParseError, ParseResult};

/// Unit system used for outbound requests and display formatting.
///
/// The selection is read from the UI at query time; a search always carries
/// it explicitly rather than persisting it alongside the last city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Celsius and metres per second.
    #[default]
    Metric,
    /// Fahrenheit and miles per hour.
    Imperial,
}

impl Units {
    /// Value of the provider's `units` query parameter.
    ///
    /// # Examples
    ///
    /// ```
    /// use skycast_types::Units;
    ///
    /// assert_eq!(Units::Metric.api_value(), "metric");
    /// assert_eq!(Units::Imperial.api_value(), "imperial");
    /// ```
    #[must_use]
    pub fn api_value(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }

    /// Temperature suffix for display.
    #[must_use]
    pub fn temp_suffix(self) -> &'static str {
        match self {
            Self::Metric => "°C",
            Self::Imperial => "°F",
        }
    }

    /// Wind speed suffix for display.
    #[must_use]
    pub fn wind_suffix(self) -> &'static str {
        match self {
            Self::Metric => "m/s",
            Self::Imperial => "mph",
        }
    }

    /// Switch to the other unit system.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Metric => Self::Imperial,
            Self::Imperial => Self::Metric,
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_value())
    }
}

impl FromStr for Units {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "metric" => Ok(Self::Metric),
            "imperial" => Ok(Self::Imperial),
            other => Err(ParseError::InvalidValue(format!(
                "unknown unit system '{other}' (expected 'metric' or 'imperial')"
            ))),
        }
    }
}

/// One provider-supplied forecast reading at a specific timestamp.
///
/// Samples are immutable once created; the dashboard only ever rebuilds
/// whole sequences of them, never mutates one in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    /// Observation time.
    #[serde(with = "time::serde::timestamp")]
    pub timestamp: OffsetDateTime,
    /// Air temperature in the requested unit system.
    pub temperature: f32,
    /// Relative humidity in percent (0–100).
    pub humidity: f32,
    /// Provider weather-condition code.
    pub condition_code: u16,
    /// Human-readable condition description.
    pub description: String,
}

impl ForecastSample {
    /// Build a sample from a raw provider record.
    ///
    /// Fails when the Unix timestamp is unrepresentable or the humidity is
    /// outside 0–100.
    pub fn from_unix(
        unix_secs: i64,
        temperature: f32,
        humidity: f32,
        condition_code: u16,
        description: impl Into<String>,
    ) -> ParseResult<Self> {
        let timestamp = OffsetDateTime::from_unix_timestamp(unix_secs)
            .map_err(|_| ParseError::InvalidTimestamp(unix_secs))?;
        if !(0.0..=100.0).contains(&humidity) {
            return Err(ParseError::InvalidValue(format!(
                "humidity {humidity} outside 0–100"
            )));
        }
        Ok(Self {
            timestamp,
            temperature,
            humidity,
            condition_code,
            description: description.into(),
        })
    }

    /// Observation time as Unix seconds.
    #[must_use]
    pub fn unix_timestamp(&self) -> i64 {
        self.timestamp.unix_timestamp()
    }
}

/// Current weather conditions for a city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// City name as reported by the provider.
    pub city: String,
    /// Air temperature in the requested unit system.
    pub temperature: f32,
    /// Perceived temperature in the requested unit system.
    pub feels_like: f32,
    /// Relative humidity in percent.
    pub humidity: f32,
    /// Wind speed in the requested unit system.
    pub wind_speed: f32,
    /// Provider weather-condition code.
    pub condition_code: u16,
    /// Human-readable condition description.
    pub description: String,
    /// Observation time.
    #[serde(with = "time::serde::timestamp")]
    pub observed_at: OffsetDateTime,
}
