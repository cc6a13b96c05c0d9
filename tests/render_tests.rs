//! Render tests using RenderHarness
//!
//! One test per view: loading, result, and no data.

use tui_dispatch::testing::*;
use weather_widget::{
    components::{Component, LOADING_MESSAGE, NO_DATA_MESSAGE, WeatherDisplay, WeatherDisplayProps},
    icon::WeatherIcon,
    state::{AppState, WeatherResult},
};

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

fn render(state: &AppState, width: u16, height: u16) -> String {
    let mut render = RenderHarness::new(width, height);
    let mut component = WeatherDisplay::new();
    render.render_to_string_plain(|frame| {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    })
}

#[test]
fn test_render_result() {
    let state = AppState {
        weather: Some(london()),
        ..Default::default()
    };

    let output = render(&state, 60, 24);

    assert!(output.contains("London"), "Should show location:\n{}", output);
    assert!(output.contains("80%"), "Should show humidity:\n{}", output);
    assert!(output.contains("Humidity"), "Should label humidity");
    assert!(output.contains("4.1 km/h"), "Should show wind speed:\n{}", output);
    assert!(output.contains("Wind Speed"), "Should label wind speed");
    assert!(!output.contains(NO_DATA_MESSAGE));
}

#[test]
fn test_render_rain_sprite() {
    let state = AppState {
        weather: Some(london()),
        ..Default::default()
    };

    let output = render(&state, 60, 30);

    assert!(output.contains("/ / / /"), "Should draw rain sprite:\n{}", output);
}

#[test]
fn test_render_loading_hides_result() {
    let state = AppState {
        weather: Some(london()),
        is_loading: true,
        ..Default::default()
    };

    let output = render(&state, 60, 24);

    assert!(output.contains(LOADING_MESSAGE), "Should show loading:\n{}", output);
    assert!(!output.contains("London"), "Result hidden while loading");
    assert!(!output.contains(NO_DATA_MESSAGE), "Empty view hidden while loading");
}

#[test]
fn test_render_no_data() {
    let output = render(&AppState::default(), 60, 24);

    assert!(output.contains(NO_DATA_MESSAGE), "Should show no-data text:\n{}", output);
    assert!(!output.contains(LOADING_MESSAGE));
}

#[test]
fn test_render_search_field() {
    let state = AppState {
        search_query: "Madrid".into(),
        ..Default::default()
    };

    let output = render(&state, 60, 24);

    assert!(output.contains("Madrid"), "Should echo the query:\n{}", output);
}

#[test]
fn test_render_help_bar() {
    let output = render(&AppState::default(), 80, 24);

    assert!(output.contains("search"), "Should show search hint");
    assert!(output.contains("quit"), "Should show quit hint");
}

#[test]
fn test_render_small_terminal_uses_emoji() {
    let state = AppState {
        weather: Some(london()),
        ..Default::default()
    };

    // 3 search + 1 help leaves 8 rows for the body
    let output = render(&state, 40, 12);

    assert!(!output.contains("/ / / /"), "Sprite should not fit:\n{}", output);
    assert!(output.contains("London"));
}
