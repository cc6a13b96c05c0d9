use thiserror::Error;

/// Ways a current-conditions lookup can fail
#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("weather request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("weather provider returned {status}: {message}")]
    Provider { status: u16, message: String },
    #[error("weather response parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("weather response has no condition entry")]
    MissingCondition,
}

impl WeatherError {
    /// Message reported by the provider itself, if any.
    pub fn provider_message(&self) -> Option<&str> {
        match self {
            WeatherError::Provider { message, .. } => Some(message),
            _ => None,
        }
    }
}
