//! Condition icons and the provider code lookup table

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Icon shown for a weather condition
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WeatherIcon {
    Clear,
    #[default]
    Cloud,
    Drizzle,
    Rain,
    Snow,
}

impl WeatherIcon {
    /// Icon used when a condition code has no entry in the table.
    pub const FALLBACK: WeatherIcon = WeatherIcon::Cloud;

    pub const ALL: [WeatherIcon; 5] = [
        WeatherIcon::Clear,
        WeatherIcon::Cloud,
        WeatherIcon::Drizzle,
        WeatherIcon::Rain,
        WeatherIcon::Snow,
    ];

    /// Resolve an OpenWeatherMap icon code (e.g. `"10d"`) to an icon.
    pub fn from_code(code: &str) -> Self {
        match code {
            "01d" | "01n" => WeatherIcon::Clear,
            "02d" | "02n" | "03d" | "03n" => WeatherIcon::Cloud,
            "04d" | "04n" => WeatherIcon::Drizzle,
            "09d" | "09n" | "10d" | "10n" => WeatherIcon::Rain,
            "13d" | "13n" => WeatherIcon::Snow,
            _ => Self::FALLBACK,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WeatherIcon::Clear => "clear",
            WeatherIcon::Cloud => "cloud",
            WeatherIcon::Drizzle => "drizzle",
            WeatherIcon::Rain => "rain",
            WeatherIcon::Snow => "snow",
        }
    }

    /// Emoji representation for when sprites don't fit
    pub fn emoji(self) -> &'static str {
        match self {
            WeatherIcon::Clear => "\u{2600}\u{fe0f}",
            WeatherIcon::Cloud => "\u{2601}\u{fe0f}",
            WeatherIcon::Drizzle => "\u{1f326}\u{fe0f}",
            WeatherIcon::Rain => "\u{1f327}\u{fe0f}",
            WeatherIcon::Snow => "\u{2744}\u{fe0f}",
        }
    }
}

impl std::fmt::Display for WeatherIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub const HUMIDITY_ICON: &str = "\u{1f4a7}";
pub const WIND_ICON: &str = "\u{1f32c}\u{fe0f}";
pub const SEARCH_ICON: &str = "\u{1f50d}";
