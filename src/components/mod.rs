pub mod search_bar;
pub mod weather_body;
pub mod weather_display;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use search_bar::{SearchBar, SearchBarProps};
pub use weather_body::{LOADING_MESSAGE, NO_DATA_MESSAGE, WeatherBody, WeatherBodyProps};
pub use weather_display::{WeatherDisplay, WeatherDisplayProps};
