//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::AppState;

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Weather actions =====
        Action::WeatherFetch(city) => start_fetch(state, city),

        Action::WeatherDidLoad(result) => {
            state.weather = Some(result);
            state.is_loading = false;
            DispatchResult::changed()
        }

        // Previous result stays on screen; only the flag is cleared.
        Action::WeatherDidError(_) => {
            state.is_loading = false;
            DispatchResult::changed()
        }

        // ===== Search actions =====
        Action::SearchQueryChange(query) => {
            if state.search_query == query {
                return DispatchResult::unchanged();
            }
            state.search_query = query;
            DispatchResult::changed()
        }

        Action::SearchQuerySubmit(query) => {
            let city = query.trim();
            if city.is_empty() {
                return DispatchResult::unchanged();
            }
            start_fetch(state, city.to_string())
        }

        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Tick => {
            if state.is_loading {
                state.tick_count = state.tick_count.wrapping_add(1);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

fn start_fetch(state: &mut AppState, city: String) -> DispatchResult<Effect> {
    state.is_loading = true;
    state.tick_count = 0;
    state.fetch_seq = state.fetch_seq.wrapping_add(1);
    DispatchResult::changed_with(Effect::FetchWeather {
        city,
        request_id: state.fetch_seq,
    })
}
