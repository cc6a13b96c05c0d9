use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::icon::{HUMIDITY_ICON, WIND_ICON};
use crate::sprites::{self, SPRITE_HEIGHT};
use crate::state::{AppState, WeatherResult};

pub const NO_DATA_MESSAGE: &str = "No data available. Please search for a city.";
pub const LOADING_MESSAGE: &str = "Loading...";

pub struct WeatherBody;

pub struct WeatherBodyProps<'a> {
    pub state: &'a AppState,
}

/// Fixed rows: blank + location + blank + two detail rows.
const LAYOUT_FIXED: u16 = 5;

/// Temperature text caps: terminus(6), miniwi(4), plain(1).
const TEMP_TIERS: [u16; 3] = [6, 4, 1];

struct LayoutSizing {
    show_sprite: bool,
    icon_h: u16,
    temp_cap: u16,
}

/// Prefer the sprite, shrinking the temperature font first.
/// Only falls to emoji when no sprite fits even with plain text.
fn compute_layout(area_height: u16) -> LayoutSizing {
    for &temp_cap in &TEMP_TIERS {
        let budget = area_height.saturating_sub(temp_cap + LAYOUT_FIXED);
        if budget >= SPRITE_HEIGHT {
            return LayoutSizing {
                show_sprite: true,
                icon_h: SPRITE_HEIGHT,
                temp_cap,
            };
        }
    }
    let temp_cap = TEMP_TIERS
        .iter()
        .copied()
        .find(|cap| area_height >= cap + LAYOUT_FIXED + 1)
        .unwrap_or(1);
    LayoutSizing {
        show_sprite: false,
        icon_h: 1,
        temp_cap,
    }
}

// ============================================================================
// Component
// ============================================================================

impl Component<Action> for WeatherBody {
    type Props<'a> = WeatherBodyProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        match WeatherView::from_state(props.state) {
            WeatherView::Loading => render_loading(frame, area, props.state),
            WeatherView::Ready(weather) => render_ready(frame, area, weather),
            WeatherView::Empty => render_message(frame, area, NO_DATA_MESSAGE),
        }
    }
}

fn render_ready(frame: &mut Frame, area: Rect, weather: &WeatherResult) {
    let sizing = compute_layout(area.height);
    let chunks = Layout::vertical([
        Constraint::Length(sizing.icon_h),
        Constraint::Length(1),
        Constraint::Max(sizing.temp_cap),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(2),
    ])
    .flex(Flex::Center)
    .split(area);

    // Sprite or emoji
    let icon = if sizing.show_sprite {
        sprites::weather_sprite(weather.icon, chunks[0].height)
    } else {
        None
    };
    match icon {
        Some(art) => {
            frame.render_widget(Paragraph::new(art).alignment(Alignment::Center), chunks[0]);
        }
        None => {
            let emoji = Line::from(weather.icon.emoji()).centered();
            frame.render_widget(Paragraph::new(emoji), chunks[0]);
        }
    }

    // Temperature
    let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
        .with_plain_fallback()
        .with_alignment(ArtAlignment::Center)
        .with_fill(temperature_gradient(weather.temperature));
    frame.render_widget(
        ArtBox::new(&renderer, &weather.temperature_label()),
        chunks[2],
    );

    // Location
    let location = Line::from(vec![Span::styled(
        weather.location.clone(),
        Style::default().fg(Color::White).bold(),
    )])
    .centered();
    frame.render_widget(Paragraph::new(location), chunks[3]);

    render_details(frame, chunks[5], weather);
}

fn render_details(frame: &mut Frame, area: Rect, weather: &WeatherResult) {
    let columns = Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .flex(Flex::Center)
        .split(area);

    render_detail_block(
        frame,
        columns[0],
        HUMIDITY_ICON,
        weather.humidity_label(),
        "Humidity",
    );
    render_detail_block(
        frame,
        columns[1],
        WIND_ICON,
        weather.wind_label(),
        "Wind Speed",
    );
}

fn render_detail_block(frame: &mut Frame, area: Rect, icon: &str, value: String, label: &str) {
    let lines = vec![
        Line::from(vec![
            Span::raw(format!("{icon} ")),
            Span::styled(value, Style::default().fg(Color::White).bold()),
        ])
        .centered(),
        Line::from(Span::styled(
            label.to_string(),
            Style::default().fg(Color::DarkGray),
        ))
        .centered(),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_loading(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = Line::from(vec![
        Span::styled(state.spinner_frame(), Style::default().fg(Color::Cyan)),
        Span::raw(" "),
        Span::styled(LOADING_MESSAGE, Style::default().fg(Color::Gray)),
    ])
    .centered();
    render_centered_line(frame, area, line);
}

fn render_message(frame: &mut Frame, area: Rect, message: &str) {
    let line = Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(Color::DarkGray),
    ))
    .centered();
    render_centered_line(frame, area, line);
}

fn render_centered_line(frame: &mut Frame, area: Rect, line: Line<'_>) {
    let chunks = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .split(area);
    frame.render_widget(Paragraph::new(line), chunks[0]);
}

// ============================================================================
// Helpers
// ============================================================================

/// The three mutually exclusive views. Loading hides any result.
enum WeatherView<'a> {
    Loading,
    Ready(&'a WeatherResult),
    Empty,
}

impl<'a> WeatherView<'a> {
    fn from_state(state: &'a AppState) -> Self {
        if state.is_loading {
            return WeatherView::Loading;
        }
        match &state.weather {
            Some(weather) => WeatherView::Ready(weather),
            None => WeatherView::Empty,
        }
    }
}

fn temperature_gradient(celsius: i32) -> Fill {
    let (start, end) = match celsius {
        t if t < 0 => (ArtColor::rgb(150, 200, 255), ArtColor::rgb(200, 230, 255)),
        t if t < 15 => (ArtColor::rgb(100, 180, 255), ArtColor::rgb(150, 220, 200)),
        t if t < 25 => (ArtColor::rgb(100, 200, 150), ArtColor::rgb(255, 220, 100)),
        t if t < 35 => (ArtColor::rgb(255, 180, 80), ArtColor::rgb(255, 120, 80)),
        _ => (ArtColor::rgb(255, 100, 80), ArtColor::rgb(255, 60, 60)),
    };
    Fill::Linear(LinearGradient::horizontal(start, end))
}
