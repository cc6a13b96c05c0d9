//! Action and store tests
//!
//! Store + reducer dispatch, action categories, and key handling through
//! the top-level component.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_dispatch::testing::*;
use tui_dispatch::{EffectStore, EventKind, assert_emitted, assert_not_emitted};
use weather_widget::{
    action::Action,
    components::{Component, WeatherDisplay, WeatherDisplayProps},
    effect::Effect,
    reducer::reducer,
    state::{AppState, WeatherResult},
};

fn press(component: &mut WeatherDisplay, state: &AppState, code: KeyCode) -> Vec<Action> {
    let props = WeatherDisplayProps {
        state,
        is_focused: true,
    };
    component
        .handle_event(&EventKind::Key(KeyEvent::new(code, KeyModifiers::NONE)), props)
        .into_iter()
        .collect()
}

#[test]
fn test_store_fetch_sets_loading() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    assert!(!store.state().is_loading);

    let result = store.dispatch(Action::WeatherFetch("london".into()));
    assert!(result.changed, "State should change");
    assert!(store.state().is_loading);
    assert_eq!(result.effects.len(), 1);
    assert!(matches!(result.effects[0], Effect::FetchWeather { .. }));
}

#[test]
fn test_store_load_then_error() {
    let mut store = EffectStore::new(AppState::default(), reducer);
    let weather = WeatherResult {
        location: "Lima".into(),
        humidity: 70,
        ..Default::default()
    };

    store.dispatch(Action::WeatherFetch("lima".into()));
    store.dispatch(Action::WeatherDidLoad(weather.clone()));
    assert_eq!(store.state().weather.as_ref(), Some(&weather));

    store.dispatch(Action::SearchQuerySubmit("nowhere".into()));
    store.dispatch(Action::WeatherDidError("city not found".into()));
    assert!(!store.state().is_loading);
    assert_eq!(store.state().weather.as_ref(), Some(&weather));
}

#[test]
fn test_typing_updates_query() {
    let mut store = EffectStore::new(AppState::default(), reducer);
    let mut component = WeatherDisplay::new();

    let actions = press(&mut component, store.state(), KeyCode::Char('a'));
    assert_emitted!(actions, Action::SearchQueryChange(_));
    assert_not_emitted!(actions, Action::SearchQuerySubmit(_));

    for action in actions {
        store.dispatch(action);
    }
    assert!(!store.state().is_loading);
}

#[test]
fn test_enter_submits_typed_query() {
    let mut store = EffectStore::new(AppState::default(), reducer);
    let mut component = WeatherDisplay::new();

    store.dispatch(Action::SearchQueryChange("Nairobi".into()));
    let actions = press(&mut component, store.state(), KeyCode::Enter);
    actions.assert_first(Action::SearchQuerySubmit("Nairobi".into()));

    let result = store.dispatch(actions[0].clone());
    assert!(store.state().is_loading);
    assert!(matches!(
        &result.effects[0],
        Effect::FetchWeather { city, .. } if city == "Nairobi"
    ));
}

#[test]
fn test_escape_quits() {
    let state = AppState::default();
    let mut component = WeatherDisplay::new();

    let actions = press(&mut component, &state, KeyCode::Esc);

    actions.assert_count(1);
    actions.assert_first(Action::Quit);
}

#[test]
fn test_action_categories() {
    let did_load = Action::WeatherDidLoad(WeatherResult::default());
    let tick = Action::Tick;

    // Categories are inferred from naming convention
    assert_eq!(did_load.category(), Some("weather_did"));
    assert_eq!(tick.category(), None);

    assert!(did_load.is_weather_did());
}

#[test]
fn test_harness_emit_and_drain() {
    let mut harness = TestHarness::<(), Action>::new(());

    harness.emit(Action::WeatherFetch("london".into()));
    harness.emit(Action::WeatherDidError("oops".into()));

    let actions = harness.drain_emitted();
    actions.assert_count(2);
    assert_emitted!(actions, Action::WeatherFetch(_));
    assert_not_emitted!(actions, Action::Quit);
}
