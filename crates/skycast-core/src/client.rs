//! HTTP client for the weather provider.
//!
//! One search issues two GET requests — current conditions and the 3-hour
//! forecast list — concurrently, and the pair settles as a unit: a transport
//! failure on either side aborts the search, and a provider-reported failure
//! status on either side surfaces the provider's own message. Requests are
//! made once, with no retry.
//!
//! The provider signals success inconsistently between the two endpoints
//! (numeric `cod` on current conditions, string `"cod"` on the forecast) and
//! omits the payload fields entirely from error bodies, so each body is
//! probed for its status marker before the full schema is decoded.

use serde::Deserialize;
use skycast_types::{CurrentConditions, ForecastSample, ParseError, Units};
use time::{OffsetDateTime, UtcOffset};
use tracing::debug;

use crate::error::{Error, Result};

/// Default provider base URL.
const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// Maximum number of 3-hour samples the forecast endpoint returns per call.
const FORECAST_SAMPLE_COUNT: u32 = 40;

/// Everything one successful search returns.
#[derive(Debug, Clone)]
pub struct WeatherBundle {
    /// Normalized current conditions.
    pub current: CurrentConditions,
    /// The full 3-hour sample series, in provider (chronological) order.
    pub samples: Vec<ForecastSample>,
    /// The searched city's UTC offset, which defines "local" for daily
    /// aggregation.
    pub utc_offset: UtcOffset,
}

/// HTTP client for the weather provider's current-conditions and forecast
/// endpoints.
///
/// # Example
///
/// ```no_run
/// use skycast_core::client::WeatherClient;
/// use skycast_types::Units;
///
/// # async fn example() -> skycast_core::Result<()> {
/// let client = WeatherClient::new("my-api-key");
/// let bundle = client.fetch_current_and_forecast("Reykjavik", Units::Metric).await?;
/// println!("{}: {:.1}", bundle.current.city, bundle.current.temperature);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    /// Create a client against the default provider URL.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against a non-default base URL (tests, proxies).
    #[must_use]
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Fetch current conditions and the forecast series for `city`.
    ///
    /// The two requests run concurrently; both must succeed. Callers
    /// validate that `city` is non-empty before invoking. The client
    /// persists nothing — storing the searched city is the caller's
    /// responsibility, after a successful render.
    pub async fn fetch_current_and_forecast(
        &self,
        city: &str,
        units: Units,
    ) -> Result<WeatherBundle> {
        let (current_body, forecast_body) = tokio::try_join!(
            self.get_body("weather", city, units, None),
            self.get_body("forecast", city, units, Some(FORECAST_SAMPLE_COUNT)),
        )?;

        decode_bundle(&current_body, &forecast_body)
    }

    async fn get_body(
        &self,
        endpoint: &str,
        city: &str,
        units: Units,
        sample_count: Option<u32>,
    ) -> Result<String> {
        let mut request = self
            .http
            .get(format!("{}/data/2.5/{}", self.base_url, endpoint))
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", units.api_value()),
            ]);
        if let Some(count) = sample_count {
            request = request.query(&[("cnt", count)]);
        }

        debug!(endpoint, city, "requesting weather data");
        // Failure statuses still carry a JSON body with the provider's own
        // `cod`/`message`, so the HTTP status itself is not checked here.
        Ok(request.send().await?.text().await?)
    }
}

/// Probe the paired response bodies and decode them into a bundle.
///
/// Split from the fetch path so the status/decoding rules can be exercised
/// against fixture bodies without a network.
pub fn decode_bundle(current_body: &str, forecast_body: &str) -> Result<WeatherBundle> {
    let current_probe = StatusProbe::parse(current_body)?;
    let forecast_probe = StatusProbe::parse(forecast_body)?;

    if !current_probe.is_ok_numeric() || !forecast_probe.is_ok_string() {
        return Err(Error::provider(provider_message(
            &current_probe,
            &forecast_probe,
        )));
    }

    let current: CurrentDto = serde_json::from_str(current_body)?;
    let forecast: ForecastDto = serde_json::from_str(forecast_body)?;
    build_bundle(current, forecast)
}

/// Minimal view of a provider response: just the status marker and message.
#[derive(Debug, Deserialize)]
struct StatusProbe {
    #[serde(default)]
    cod: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<serde_json::Value>,
}

impl StatusProbe {
    fn parse(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Current-conditions success marker: numeric 200.
    fn is_ok_numeric(&self) -> bool {
        matches!(&self.cod, Some(v) if v.as_i64() == Some(200))
    }

    /// Forecast success marker: the string "200".
    fn is_ok_string(&self) -> bool {
        matches!(&self.cod, Some(v) if v.as_str() == Some("200"))
    }

    /// User-facing message text, if any. Forecast success bodies carry a
    /// numeric `message` field; only non-empty strings count.
    fn message_text(&self) -> Option<&str> {
        match &self.message {
            Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    }
}

/// First non-empty provider message: current conditions first, then
/// forecast.
fn provider_message(current: &StatusProbe, forecast: &StatusProbe) -> String {
    current
        .message_text()
        .or_else(|| forecast.message_text())
        .unwrap_or("Unknown provider error")
        .to_string()
}

// ==========================================================================
// Provider DTOs
// ==========================================================================

#[derive(Debug, Deserialize)]
struct ConditionDto {
    id: u16,
    description: String,
}

#[derive(Debug, Deserialize)]
struct MainDto {
    temp: f32,
    #[serde(default)]
    feels_like: f32,
    humidity: f32,
}

#[derive(Debug, Deserialize)]
struct WindDto {
    speed: f32,
}

#[derive(Debug, Deserialize)]
struct CurrentDto {
    name: String,
    dt: i64,
    weather: Vec<ConditionDto>,
    main: MainDto,
    wind: WindDto,
}

#[derive(Debug, Deserialize)]
struct ForecastEntryDto {
    dt: i64,
    main: MainDto,
    weather: Vec<ConditionDto>,
}

#[derive(Debug, Deserialize)]
struct CityDto {
    /// Shift from UTC in seconds.
    timezone: i32,
}

#[derive(Debug, Deserialize)]
struct ForecastDto {
    list: Vec<ForecastEntryDto>,
    city: CityDto,
}

fn build_bundle(current: CurrentDto, forecast: ForecastDto) -> Result<WeatherBundle> {
    let condition = primary_condition(&current.weather)?;
    let observed_at = OffsetDateTime::from_unix_timestamp(current.dt)
        .map_err(|_| ParseError::InvalidTimestamp(current.dt))
        .map_err(Error::from)?;

    let conditions = CurrentConditions {
        city: current.name,
        temperature: current.main.temp,
        feels_like: current.main.feels_like,
        humidity: current.main.humidity,
        wind_speed: current.wind.speed,
        condition_code: condition.id,
        description: condition.description.clone(),
        observed_at,
    };

    let samples = forecast
        .list
        .iter()
        .map(|entry| {
            let condition = primary_condition(&entry.weather)?;
            ForecastSample::from_unix(
                entry.dt,
                entry.main.temp,
                entry.main.humidity,
                condition.id,
                condition.description.clone(),
            )
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let utc_offset = UtcOffset::from_whole_seconds(forecast.city.timezone).map_err(|_| {
        Error::from(ParseError::InvalidValue(format!(
            "timezone shift {} seconds out of range",
            forecast.city.timezone
        )))
    })?;

    Ok(WeatherBundle {
        current: conditions,
        samples,
        utc_offset,
    })
}

fn primary_condition(weather: &[ConditionDto]) -> std::result::Result<&ConditionDto, ParseError> {
    weather
        .first()
        .ok_or_else(|| ParseError::InvalidValue("record has no weather condition".to_string()))
}
