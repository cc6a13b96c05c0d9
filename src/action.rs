//! Actions: user intents and async results

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::WeatherResult;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Weather category =====
    /// Intent: fetch current conditions for a city (triggers async task)
    WeatherFetch(String),

    /// Result: conditions loaded successfully
    WeatherDidLoad(WeatherResult),

    /// Result: fetch failed (message goes to the log, never to the screen)
    WeatherDidError(String),

    // ===== Search category =====
    /// Search field text changed
    SearchQueryChange(String),

    /// Submit the search field (Enter or click on the search icon)
    SearchQuerySubmit(String),

    // ===== Uncategorized (global) =====
    /// Force a re-render (for cursor movement, etc.)
    Render,

    /// Periodic tick for the loading spinner
    Tick,

    /// Exit the application
    Quit,
}
