//! Condition icon art with multi-color layer support
//!
//! Sprites are loaded from text files at compile time using `include_str!`.
//! Multi-layer sprites (cloud + precipitation) composite several colored layers.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};

use crate::icon::WeatherIcon;

// ============================================================================
// Sprite data - embedded at compile time
// File naming: {icon}/{color}.txt
// ============================================================================

mod sprite_data {
    pub mod clear {
        pub const YELLOW: &str = include_str!("../sprites/clear/yellow.txt");
    }
    pub mod cloud {
        pub const DARKGRAY: &str = include_str!("../sprites/cloud/darkgray.txt");
        pub const LIGHTGRAY: &str = include_str!("../sprites/cloud/lightgray.txt");
    }
    pub mod drizzle {
        pub const GRAY: &str = include_str!("../sprites/drizzle/gray.txt");
        pub const BLUE: &str = include_str!("../sprites/drizzle/blue.txt");
    }
    pub mod rain {
        pub const GRAY: &str = include_str!("../sprites/rain/gray.txt");
        pub const BLUE: &str = include_str!("../sprites/rain/blue.txt");
    }
    pub mod snow {
        pub const GRAY: &str = include_str!("../sprites/snow/gray.txt");
        pub const WHITE: &str = include_str!("../sprites/snow/white.txt");
    }
}

/// Rows reserved for a sprite in the layout.
pub const SPRITE_HEIGHT: u16 = 5;

// ============================================================================
// Layer compositing
// ============================================================================

/// A single sprite layer with its content and color
struct SpriteLayer {
    content: &'static str,
    color: Color,
}

/// Composite multiple layers into Text, treating spaces as transparent
fn composite_layers(layers: &[SpriteLayer]) -> Text<'static> {
    if layers.is_empty() {
        return Text::default();
    }

    let layer_lines: Vec<Vec<Vec<char>>> = layers
        .iter()
        .map(|l| l.content.lines().map(|line| line.chars().collect()).collect())
        .collect();

    let max_lines = layer_lines.iter().map(|l| l.len()).max().unwrap_or(0);
    let max_width = layer_lines
        .iter()
        .flat_map(|lines| lines.iter())
        .map(|line| line.len())
        .max()
        .unwrap_or(0);

    let mut result_lines = Vec::with_capacity(max_lines);

    for line_idx in 0..max_lines {
        let mut spans = Vec::with_capacity(max_width);

        for col_idx in 0..max_width {
            // Last layer is the foreground
            let (ch, color) = layers
                .iter()
                .enumerate()
                .rev()
                .find_map(|(layer_idx, layer)| {
                    layer_lines[layer_idx]
                        .get(line_idx)
                        .and_then(|line| line.get(col_idx))
                        .filter(|ch| **ch != ' ')
                        .map(|ch| (*ch, layer.color))
                })
                .unwrap_or((' ', Color::Reset));

            spans.push(Span::styled(ch.to_string(), Style::default().fg(color)));
        }

        result_lines.push(Line::from(spans));
    }

    Text::from(result_lines)
}

// ============================================================================
// Public API
// ============================================================================

/// Sprite for `icon`, or `None` if it won't fit in `available_height` rows.
pub fn weather_sprite(icon: WeatherIcon, available_height: u16) -> Option<Text<'static>> {
    (available_height >= SPRITE_HEIGHT).then(|| get_sprite(icon))
}

pub fn get_sprite(icon: WeatherIcon) -> Text<'static> {
    let cloud = Color::Rgb(160, 160, 175);
    let layers = match icon {
        WeatherIcon::Clear => vec![SpriteLayer {
            content: sprite_data::clear::YELLOW,
            color: Color::Yellow,
        }],
        WeatherIcon::Cloud => vec![
            SpriteLayer {
                content: sprite_data::cloud::DARKGRAY,
                color: Color::Rgb(120, 120, 140),
            },
            SpriteLayer {
                content: sprite_data::cloud::LIGHTGRAY,
                color: Color::Rgb(170, 170, 185),
            },
        ],
        WeatherIcon::Drizzle => vec![
            SpriteLayer {
                content: sprite_data::drizzle::GRAY,
                color: cloud,
            },
            SpriteLayer {
                content: sprite_data::drizzle::BLUE,
                color: Color::Rgb(130, 170, 200),
            },
        ],
        WeatherIcon::Rain => vec![
            SpriteLayer {
                content: sprite_data::rain::GRAY,
                color: cloud,
            },
            SpriteLayer {
                content: sprite_data::rain::BLUE,
                color: Color::Rgb(80, 140, 200),
            },
        ],
        WeatherIcon::Snow => vec![
            SpriteLayer {
                content: sprite_data::snow::GRAY,
                color: cloud,
            },
            SpriteLayer {
                content: sprite_data::snow::WHITE,
                color: Color::Rgb(200, 220, 255),
            },
        ],
    };

    composite_layers(&layers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &Text<'_>) -> String {
        text.lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_all_sprites_load() {
        for icon in WeatherIcon::ALL {
            let text = get_sprite(icon);
            assert!(!text.lines.is_empty(), "Sprite {:?} should not be empty", icon);
            assert!(text.lines.len() <= SPRITE_HEIGHT as usize);
        }
    }

    #[test]
    fn test_sprite_none_when_too_small() {
        assert!(weather_sprite(WeatherIcon::Rain, SPRITE_HEIGHT - 1).is_none());
        assert!(weather_sprite(WeatherIcon::Rain, SPRITE_HEIGHT).is_some());
    }

    #[test]
    fn test_foreground_layer_wins() {
        let rain = plain(&get_sprite(WeatherIcon::Rain));
        assert!(rain.contains("(___.__)__)"));
        assert!(rain.contains('/'));

        let snow = plain(&get_sprite(WeatherIcon::Snow));
        assert!(snow.contains('*'));
    }

    #[test]
    fn test_cloud_layers_merge() {
        let cloud = plain(&get_sprite(WeatherIcon::Cloud));
        assert!(cloud.contains(".--."));
        assert!(cloud.contains("(___.__)__)"));
    }
}
