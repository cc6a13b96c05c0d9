//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::icon::WeatherIcon;

/// City searched on startup when none is given
pub const DEFAULT_CITY: &str = "london";

/// Current conditions for one city, as shown by the widget
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherResult {
    /// Relative humidity in percent
    pub humidity: u8,
    pub wind_speed: f64,
    /// Celsius, floored
    pub temperature: i32,
    pub location: String,
    pub icon: WeatherIcon,
    /// Raw provider code the icon was resolved from
    pub icon_code: String,
}

impl WeatherResult {
    pub fn temperature_label(&self) -> String {
        format!("{}°C", self.temperature)
    }

    pub fn humidity_label(&self) -> String {
        format!("{}%", self.humidity)
    }

    pub fn wind_label(&self) -> String {
        format!("{} km/h", self.wind_speed)
    }
}

/// Spinner animation timing.
pub const LOADING_ANIM_TICK_MS: u64 = 80;
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, Default, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// Last successfully fetched conditions; only ever replaced whole
    #[debug(section = "Weather", label = "Result", debug_fmt)]
    pub weather: Option<WeatherResult>,

    /// True while a fetch is in flight
    #[debug(section = "Weather", label = "Loading")]
    pub is_loading: bool,

    /// Text in the search field
    #[debug(section = "Search", label = "Query", debug_fmt)]
    pub search_query: String,

    /// Spinner frame counter
    #[debug(skip)]
    pub tick_count: u32,

    /// Number of fetches started so far; names the next fetch task
    #[debug(skip)]
    pub fetch_seq: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spinner_frame(&self) -> &'static str {
        SPINNER_FRAMES[self.tick_count as usize % SPINNER_FRAMES.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn london() -> WeatherResult {
        WeatherResult {
            humidity: 80,
            wind_speed: 4.1,
            temperature: 18,
            location: "London".into(),
            icon: WeatherIcon::Rain,
            icon_code: "10d".into(),
        }
    }

    #[test]
    fn test_labels() {
        let result = london();
        assert_eq!(result.temperature_label(), "18°C");
        assert_eq!(result.humidity_label(), "80%");
        assert_eq!(result.wind_label(), "4.1 km/h");
    }

    #[test]
    fn test_whole_wind_speed_has_no_fraction() {
        let result = WeatherResult {
            wind_speed: 4.0,
            ..london()
        };
        assert_eq!(result.wind_label(), "4 km/h");
    }

    #[test]
    fn test_spinner_wraps() {
        let mut state = AppState::new();
        let first = state.spinner_frame();
        state.tick_count = SPINNER_FRAMES.len() as u32;
        assert_eq!(state.spinner_frame(), first);
    }

    #[test]
    fn test_initial_state_is_empty() {
        let state = AppState::new();
        assert!(state.weather.is_none());
        assert!(!state.is_loading);
        assert!(state.search_query.is_empty());
    }
}
