//! One-shot weather summary output.
//!
//! Fetches current conditions once and prints a short textual update, for
//! shell pipelines and scheduled jobs that don't want the dashboard.

use anyhow::{Context, Result};
use skycast_core::WeatherClient;
use skycast_types::Units;

use crate::tui::ui::widgets::format_temp;

/// Fetch and print the update for `city`.
pub async fn run(city: &str, units: Units, api_key: String) -> Result<()> {
    let client = WeatherClient::new(api_key);
    let bundle = client
        .fetch_current_and_forecast(city, units)
        .await
        .with_context(|| format!("failed to fetch weather for {city}"))?;

    let current = &bundle.current;
    println!("Good morning! Here's your weather update for {}:", current.city);
    println!("Temperature: {}", format_temp(current.temperature, units));
    println!("Feels like: {}", format_temp(current.feels_like, units));
    println!("Description: {}", current.description);
    println!("Humidity: {:.0}%", current.humidity);

    Ok(())
}
