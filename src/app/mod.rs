mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::config::{AppConfig, ThemeMode};
use crate::routes::Route;
use iced::{Point, Size, window};
use std::path::PathBuf;

/// Launch the site window on `start_route`.
pub fn run_app(
    config: AppConfig,
    start_route: Route,
    stored_theme: Option<ThemeMode>,
    preferences_path: PathBuf,
) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        position: match (config.window_pos_x, config.window_pos_y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => {
                window::Position::Specific(Point::new(x, y))
            }
            _ => window::Position::Default,
        },
        ..window::Settings::default()
    };

    iced::application(App::title, App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(App::theme)
        .run_with(move || App::bootstrap(config, start_route, stored_theme, preferences_path))
}
