//! Effects - side effects declared by the reducer

use std::sync::Arc;

use tui_dispatch::{TaskKey, TaskManager};

use crate::action::Action;
use crate::api::WeatherClient;

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch current conditions for the given city.
    ///
    /// `request_id` only names the task; results are not fenced by it.
    FetchWeather { city: String, request_id: u64 },
}

impl Effect {
    /// Every fetch runs under its own key so an earlier search is never
    /// aborted by a later one.
    pub fn task_key(&self) -> TaskKey {
        match self {
            Effect::FetchWeather { request_id, .. } => TaskKey::new(format!("weather_{request_id}")),
        }
    }
}

/// Spawn the task for `effect` on `tasks`.
pub fn spawn_effect(effect: Effect, tasks: &mut TaskManager<Action>, client: &Arc<dyn WeatherClient>) {
    let key = effect.task_key();
    match effect {
        Effect::FetchWeather { city, .. } => {
            let client = Arc::clone(client);
            tasks.spawn(key, async move { fetch_weather(client.as_ref(), &city).await });
        }
    }
}

/// Body of the fetch task.
///
/// Every outcome maps to exactly one result action, and both of them clear
/// the loading flag in the reducer.
pub async fn fetch_weather(client: &dyn WeatherClient, city: &str) -> Action {
    tracing::info!(city, "fetching current weather");
    match client.current_weather(city).await {
        Ok(result) => {
            tracing::info!(
                city,
                location = %result.location,
                icon = %result.icon,
                "weather loaded"
            );
            Action::WeatherDidLoad(result)
        }
        Err(err) => {
            let message = err
                .provider_message()
                .map(str::to_string)
                .unwrap_or_else(|| err.to_string());
            tracing::error!(city, error = %err, "weather fetch failed");
            Action::WeatherDidError(message)
        }
    }
}
