//! Runtime configuration, resolved once in `main` and passed down explicitly

use crate::state::DEFAULT_CITY;

pub const DEFAULT_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const API_KEY_ENV: &str = "OPENWEATHER_APP_ID";
pub const ENDPOINT_ENV: &str = "OPENWEATHER_ENDPOINT";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Provider API key. An empty key is passed through unchanged and
    /// rejected by the provider.
    pub api_key: String,
    pub endpoint: String,
    /// City fetched once on startup
    pub default_city: String,
}

impl WidgetConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            default_city: DEFAULT_CITY.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_default_city(mut self, city: impl Into<String>) -> Self {
        self.default_city = city.into();
        self
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self::new(String::new())
    }
}
