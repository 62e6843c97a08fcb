//! Condition-code to display-icon mapping.

/// Display icon for a provider weather-condition code.
///
/// The provider groups conditions by the leading digit of the code
/// (2xx thunderstorm, 3xx drizzle, 5xx rain, 6xx snow, 7xx atmosphere,
/// 8xx clouds), with 800 special-cased as clear sky. Codes outside the
/// known groups fall back to [`WeatherIcon::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherIcon {
    /// Thunderstorm (2xx).
    Bolt,
    /// Drizzle (3xx).
    Drizzle,
    /// Rain (5xx).
    Rain,
    /// Snow (6xx).
    Snow,
    /// Mist, smoke, haze and similar (7xx).
    Atmosphere,
    /// Clear sky (exactly 800).
    Clear,
    /// Clouds (801–8xx).
    Cloud,
    /// Unmapped condition code.
    Unknown,
}

impl WeatherIcon {
    /// Map a provider condition code to its icon.
    ///
    /// # Examples
    ///
    /// ```
    /// use skycast_types::WeatherIcon;
    ///
    /// assert_eq!(WeatherIcon::for_code(211), WeatherIcon::Bolt);
    /// assert_eq!(WeatherIcon::for_code(800), WeatherIcon::Clear);
    /// assert_eq!(WeatherIcon::for_code(804), WeatherIcon::Cloud);
    /// assert_eq!(WeatherIcon::for_code(999), WeatherIcon::Unknown);
    /// ```
    #[must_use]
    pub fn for_code(code: u16) -> Self {
        match code {
            800 => Self::Clear,
            200..=299 => Self::Bolt,
            300..=399 => Self::Drizzle,
            500..=599 => Self::Rain,
            600..=699 => Self::Snow,
            700..=799 => Self::Atmosphere,
            801..=899 => Self::Cloud,
            _ => Self::Unknown,
        }
    }

    /// Terminal glyph for this icon.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Bolt => "⚡",
            Self::Drizzle => "☂",
            Self::Rain => "☔",
            Self::Snow => "❄",
            Self::Atmosphere => "≋",
            Self::Clear => "☀",
            Self::Cloud => "☁",
            Self::Unknown => "?",
        }
    }

    /// Display label for this icon.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Bolt => "Thunderstorm",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Atmosphere => "Atmosphere",
            Self::Clear => "Clear",
            Self::Cloud => "Clouds",
            Self::Unknown => "Unknown",
        }
    }
}
