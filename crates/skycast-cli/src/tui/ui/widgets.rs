//! Reusable formatting helpers for the TUI.

use ratatui::style::Color;
use skycast_types::{Units, WeatherIcon};
use time::{Date, Weekday};

use super::theme::AppTheme;

/// Format a temperature with one decimal and the unit suffix.
#[must_use]
pub fn format_temp(value: f32, units: Units) -> String {
    format!("{:.1}{}", value, units.temp_suffix())
}

/// Format a wind speed with the unit suffix.
#[must_use]
pub fn format_wind(speed: f32, units: Units) -> String {
    format!("{} {}", speed, units.wind_suffix())
}

/// Three-letter weekday abbreviation for a date.
#[must_use]
pub fn weekday_short(date: Date) -> &'static str {
    match date.weekday() {
        Weekday::Monday => "Mon",
        Weekday::Tuesday => "Tue",
        Weekday::Wednesday => "Wed",
        Weekday::Thursday => "Thu",
        Weekday::Friday => "Fri",
        Weekday::Saturday => "Sat",
        Weekday::Sunday => "Sun",
    }
}

/// "Dec 2"-style label for a date, used on chart axes.
#[must_use]
pub fn month_day(date: Date) -> String {
    let month = match date.month() {
        time::Month::January => "Jan",
        time::Month::February => "Feb",
        time::Month::March => "Mar",
        time::Month::April => "Apr",
        time::Month::May => "May",
        time::Month::June => "Jun",
        time::Month::July => "Jul",
        time::Month::August => "Aug",
        time::Month::September => "Sep",
        time::Month::October => "Oct",
        time::Month::November => "Nov",
        time::Month::December => "Dec",
    };
    format!("{} {}", month, date.day())
}

/// Display color for a weather icon.
#[must_use]
pub fn icon_color(icon: WeatherIcon, theme: &AppTheme) -> Color {
    match icon {
        WeatherIcon::Bolt => theme.warning,
        WeatherIcon::Clear => theme.warning,
        WeatherIcon::Drizzle | WeatherIcon::Rain => theme.primary,
        WeatherIcon::Snow => theme.text_primary,
        WeatherIcon::Atmosphere | WeatherIcon::Cloud => theme.text_secondary,
        WeatherIcon::Unknown => theme.text_muted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_format_temp_has_one_decimal_and_suffix() {
        assert_eq!(format_temp(21.46, Units::Metric), "21.5°C");
        assert_eq!(format_temp(-3.0, Units::Metric), "-3.0°C");
        assert_eq!(format_temp(70.0, Units::Imperial), "70.0°F");
    }

    #[test]
    fn test_format_wind_keeps_raw_speed() {
        assert_eq!(format_wind(7.2, Units::Metric), "7.2 m/s");
        assert_eq!(format_wind(15.0, Units::Imperial), "15 mph");
    }

    #[test]
    fn test_weekday_short() {
        assert_eq!(weekday_short(date!(2026 - 03 - 02)), "Mon");
        assert_eq!(weekday_short(date!(2026 - 03 - 08)), "Sun");
    }

    #[test]
    fn test_month_day() {
        assert_eq!(month_day(date!(2026 - 12 - 02)), "Dec 2");
        assert_eq!(month_day(date!(2026 - 01 - 31)), "Jan 31");
    }
}
