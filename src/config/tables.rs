use super::defaults;
use super::models::{AppConfig, LogLevel, MotionPreference, ThemeMode};
use serde::Deserialize;

/// On-disk layout of `conf/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    window: WindowConfig,
    #[serde(default)]
    site: SiteConfig,
    #[serde(default)]
    gallery: GalleryConfig,
    #[serde(default)]
    audio: AudioConfig,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    keys: KeysConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            theme: tables.appearance.theme,
            window_width: tables.window.width,
            window_height: tables.window.height,
            window_pos_x: tables.window.pos_x,
            window_pos_y: tables.window.pos_y,
            site_root: tables.site.root,
            gallery_manifest: tables.gallery.manifest,
            gallery_image_root: tables.gallery.image_root,
            hint_dwell_ms: tables.gallery.hint_dwell_ms,
            max_height_fraction: tables.gallery.max_height_fraction,
            scroll_animation_ms: tables.gallery.scroll_animation_ms,
            reduced_motion: tables.gallery.reduced_motion,
            audio_track: tables.audio.track,
            audio_volume: tables.audio.volume,
            log_level: tables.logging.log_level,
            key_next_slide: tables.keys.next_slide,
            key_prev_slide: tables.keys.prev_slide,
            key_toggle_theme: tables.keys.toggle_theme,
            key_toggle_audio: tables.keys.toggle_audio,
            key_go_home: tables.keys.go_home,
            key_quit: tables.keys.quit,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
}

#[derive(Debug, Clone, Deserialize)]
struct WindowConfig {
    #[serde(default = "defaults::default_window_width")]
    width: f32,
    #[serde(default = "defaults::default_window_height")]
    height: f32,
    #[serde(default)]
    pos_x: Option<f32>,
    #[serde(default)]
    pos_y: Option<f32>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: defaults::default_window_width(),
            height: defaults::default_window_height(),
            pos_x: None,
            pos_y: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct SiteConfig {
    #[serde(default = "defaults::default_site_root")]
    root: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            root: defaults::default_site_root(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct GalleryConfig {
    #[serde(default = "defaults::default_manifest")]
    manifest: String,
    #[serde(default = "defaults::default_image_root")]
    image_root: String,
    #[serde(default = "defaults::default_hint_dwell_ms")]
    hint_dwell_ms: u64,
    #[serde(default = "defaults::default_max_height_fraction")]
    max_height_fraction: f32,
    #[serde(default = "defaults::default_scroll_animation_ms")]
    scroll_animation_ms: u64,
    #[serde(default)]
    reduced_motion: MotionPreference,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        GalleryConfig {
            manifest: defaults::default_manifest(),
            image_root: defaults::default_image_root(),
            hint_dwell_ms: defaults::default_hint_dwell_ms(),
            max_height_fraction: defaults::default_max_height_fraction(),
            scroll_animation_ms: defaults::default_scroll_animation_ms(),
            reduced_motion: MotionPreference::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct AudioConfig {
    #[serde(default = "defaults::default_audio_track")]
    track: String,
    #[serde(default = "defaults::default_audio_volume")]
    volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        AudioConfig {
            track: defaults::default_audio_track(),
            volume: defaults::default_audio_volume(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct KeysConfig {
    #[serde(default = "defaults::default_key_next_slide")]
    next_slide: String,
    #[serde(default = "defaults::default_key_prev_slide")]
    prev_slide: String,
    #[serde(default = "defaults::default_key_toggle_theme")]
    toggle_theme: String,
    #[serde(default = "defaults::default_key_toggle_audio")]
    toggle_audio: String,
    #[serde(default = "defaults::default_key_go_home")]
    go_home: String,
    #[serde(default = "defaults::default_key_quit")]
    quit: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        KeysConfig {
            next_slide: defaults::default_key_next_slide(),
            prev_slide: defaults::default_key_prev_slide(),
            toggle_theme: defaults::default_key_toggle_theme(),
            toggle_audio: defaults::default_key_toggle_audio(),
            go_home: defaults::default_key_go_home(),
            quit: defaults::default_key_quit(),
        }
    }
}
