use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{Component, SearchBar, SearchBarProps, WeatherBody, WeatherBodyProps};
use crate::action::Action;
use crate::state::AppState;

/// Props for WeatherDisplay - read-only view of state
pub struct WeatherDisplayProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The whole widget: search bar, weather body, help bar
#[derive(Default)]
pub struct WeatherDisplay {
    search: SearchBar,
}

impl WeatherDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    fn search_props(state: &AppState, is_focused: bool) -> SearchBarProps<'_> {
        SearchBarProps {
            query: &state.search_query,
            is_focused,
            on_query_change: Action::SearchQueryChange,
            on_query_submit: Action::SearchQuerySubmit,
        }
    }
}

impl Component<Action> for WeatherDisplay {
    type Props<'a> = WeatherDisplayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        if let EventKind::Key(key) = event {
            let ctrl_c =
                key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
            if key.code == KeyCode::Esc || ctrl_c {
                return vec![Action::Quit];
            }
        }

        // Everything else belongs to the search bar
        self.search
            .handle_event(event, Self::search_props(props.state, true))
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherDisplayProps<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(3), // Search bar
            Constraint::Min(1),    // Weather
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        self.search.render(
            frame,
            chunks[0],
            Self::search_props(props.state, props.is_focused),
        );

        let mut body = WeatherBody;
        body.render(frame, chunks[1], WeatherBodyProps { state: props.state });

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[2],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("enter", "search"),
                    StatusBarHint::new("esc", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::WeatherIcon;
    use crate::state::WeatherResult;
    use crossterm::event::KeyEvent;
    use tui_dispatch::testing::*;

    fn key_event(code: KeyCode, modifiers: KeyModifiers) -> EventKind {
        EventKind::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_handle_event_quit() {
        let mut component = WeatherDisplay::new();
        let state = AppState::default();

        for event in [
            key_event(KeyCode::Esc, KeyModifiers::NONE),
            key_event(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            let props = WeatherDisplayProps {
                state: &state,
                is_focused: true,
            };
            let actions: Vec<_> = component.handle_event(&event, props).into_iter().collect();
            actions.assert_first(Action::Quit);
        }
    }

    #[test]
    fn test_handle_event_enter_submits_current_query() {
        let mut component = WeatherDisplay::new();
        let state = AppState {
            search_query: "Berlin".into(),
            ..Default::default()
        };
        let props = WeatherDisplayProps {
            state: &state,
            is_focused: true,
        };

        let actions: Vec<_> = component
            .handle_event(&key_event(KeyCode::Enter, KeyModifiers::NONE), props)
            .into_iter()
            .collect();

        actions.assert_count(1);
        actions.assert_first(Action::SearchQuerySubmit("Berlin".into()));
    }

    #[test]
    fn test_handle_event_unfocused_ignores() {
        let mut component = WeatherDisplay::new();
        let state = AppState::default();
        let props = WeatherDisplayProps {
            state: &state,
            is_focused: false,
        };

        let actions: Vec<_> = component
            .handle_event(&key_event(KeyCode::Esc, KeyModifiers::NONE), props)
            .into_iter()
            .collect();
        actions.assert_empty();
    }

    #[test]
    fn test_render_weather() {
        let mut render = RenderHarness::new(60, 24);
        let mut component = WeatherDisplay::new();

        let state = AppState {
            weather: Some(WeatherResult {
                humidity: 64,
                wind_speed: 2.6,
                temperature: 9,
                location: "Reykjavik".into(),
                icon: WeatherIcon::Snow,
                icon_code: "13n".into(),
            }),
            ..Default::default()
        };

        let output = render.render_to_string_plain(|frame| {
            let props = WeatherDisplayProps {
                state: &state,
                is_focused: true,
            };
            component.render(frame, frame.area(), props);
        });

        assert!(output.contains("Reykjavik"));
        assert!(output.contains("64%"));
        assert!(output.contains("2.6 km/h"));
    }
}
