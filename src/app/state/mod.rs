mod constants;
mod gallery;
mod ui;

use crate::audio::BackgroundAudio;
use crate::carousel::motion::{ScrollBehavior, probe_system_reduced_motion, resolve_behavior};
use crate::config::{AppConfig, ThemeMode};
use crate::gallery_loader::ImageListSource;
use crate::routes::Route;
use crate::theme::{Appearance, system_prefers_dark};
use iced::widget::image::Handle;
use iced::{Task, Theme};
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::messages::Message;

pub(crate) use constants::*;
pub(in crate::app) use gallery::{GalleryState, GalleryView, SlideImage};
pub(in crate::app) use ui::OklchState;

/// Core application state composed of per-page models.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) route: Route,
    pub(super) appearance: Appearance,
    pub(super) preferences_path: PathBuf,
    pub(super) audio: BackgroundAudio,
    pub(super) gallery: GalleryState,
    /// Bumped on every gallery mount so late loader results can be dropped.
    pub(super) gallery_generation: u64,
    pub(super) scroll_behavior: ScrollBehavior,
    pub(super) window_width: f32,
    pub(super) window_height: f32,
    pub(super) oklch: OklchState,
    pub(super) post_image: Handle,
}

impl App {
    pub(super) fn bootstrap(
        config: AppConfig,
        start_route: Route,
        stored_theme: Option<ThemeMode>,
        preferences_path: PathBuf,
    ) -> (App, Task<Message>) {
        let theme_mode = stored_theme.unwrap_or(config.theme);
        let appearance = Appearance::resolve(theme_mode, system_prefers_dark);
        let scroll_behavior =
            resolve_behavior(config.reduced_motion, probe_system_reduced_motion);
        let post_image = Handle::from_path(
            Path::new(&config.site_root)
                .join("assets/posts/algorithm-sculpting/splotch.jpg"),
        );

        let app = App {
            route: Route::Home,
            appearance,
            preferences_path,
            audio: BackgroundAudio::new(&config.audio_track, config.audio_volume),
            gallery: GalleryState::Unmounted,
            gallery_generation: 0,
            scroll_behavior,
            window_width: config.window_width,
            window_height: config.window_height,
            oklch: OklchState::default(),
            post_image,
            config,
        };
        tracing::info!(
            theme = %theme_mode,
            dark = matches!(app.appearance, Appearance::Dark),
            ?scroll_behavior,
            route = %start_route,
            "Initialized app state"
        );

        let startup = if start_route == Route::Home {
            Task::none()
        } else {
            Task::done(Message::Navigate(start_route))
        };
        (app, startup)
    }

    pub fn title(&self) -> String {
        format!("{HEADER_TITLE} / {}", self.route.label())
    }

    pub fn theme(&self) -> Theme {
        self.appearance.into()
    }

    pub(super) fn hint_dwell(&self) -> Duration {
        Duration::from_millis(self.config.hint_dwell_ms)
    }

    pub(super) fn scroll_animation_duration(&self) -> Duration {
        Duration::from_millis(self.config.scroll_animation_ms)
    }

    pub(super) fn image_source(&self) -> ImageListSource {
        ImageListSource {
            manifest: self.config.gallery_manifest.clone(),
            image_root: self.config.gallery_image_root.clone(),
        }
    }
}
