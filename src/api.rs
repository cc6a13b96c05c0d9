//! OpenWeatherMap current-conditions client

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::config::WidgetConfig;
use crate::error::WeatherError;
use crate::icon::WeatherIcon;
use crate::state::WeatherResult;

/// Anything that can look up current conditions for a city
#[async_trait]
pub trait WeatherClient: Send + Sync {
    async fn current_weather(&self, city: &str) -> Result<WeatherResult, WeatherError>;
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    name: String,
    main: MainBlock,
    wind: WindBlock,
    weather: Vec<ConditionBlock>,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    icon: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: Option<String>,
}

impl TryFrom<CurrentResponse> for WeatherResult {
    type Error = WeatherError;

    fn try_from(data: CurrentResponse) -> Result<Self, Self::Error> {
        let icon_code = data
            .weather
            .into_iter()
            .next()
            .map(|c| c.icon)
            .ok_or(WeatherError::MissingCondition)?;
        Ok(WeatherResult {
            humidity: data.main.humidity.round().clamp(0.0, 100.0) as u8,
            wind_speed: data.wind.speed,
            temperature: data.main.temp.floor() as i32,
            location: data.name,
            icon: WeatherIcon::from_code(&icon_code),
            icon_code,
        })
    }
}

/// Turn a provider response into a result or a typed error.
pub fn parse_current(status: StatusCode, body: &str) -> Result<WeatherResult, WeatherError> {
    if !status.is_success() {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|e| e.message)
            .unwrap_or_else(|| truncate_body(body));
        return Err(WeatherError::Provider {
            status: status.as_u16(),
            message,
        });
    }

    let data: CurrentResponse = serde_json::from_str(body)?;
    data.try_into()
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

// ============================================================================
// Client
// ============================================================================

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    endpoint: String,
    http: reqwest::Client,
}

impl OpenWeatherClient {
    pub fn new(config: &WidgetConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            endpoint: config.endpoint.clone(),
            http: reqwest::Client::new(),
        }
    }

    /// Request URL for `city`, metric units.
    pub fn current_weather_url(&self, city: &str) -> String {
        build_url(&self.endpoint, city, &self.api_key)
    }
}

fn build_url(endpoint: &str, city: &str, api_key: &str) -> String {
    format!(
        "{}?q={}&units=metric&appid={}",
        endpoint,
        urlencoding::encode(city),
        urlencoding::encode(api_key)
    )
}

#[async_trait]
impl WeatherClient for OpenWeatherClient {
    async fn current_weather(&self, city: &str) -> Result<WeatherResult, WeatherError> {
        tracing::debug!(url = %build_url(&self.endpoint, city, "<redacted>"), "requesting current weather");

        let response = self.http.get(self.current_weather_url(city)).send().await?;
        let status = response.status();
        let body = response.text().await?;

        parse_current(status, &body)
    }
}
