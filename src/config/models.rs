use serde::Deserialize;

/// High-level app configuration, flattened from the TOML tables.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub theme: ThemeMode,
    pub window_width: f32,
    pub window_height: f32,
    pub window_pos_x: Option<f32>,
    pub window_pos_y: Option<f32>,
    pub site_root: String,
    pub gallery_manifest: String,
    pub gallery_image_root: String,
    pub hint_dwell_ms: u64,
    pub max_height_fraction: f32,
    pub scroll_animation_ms: u64,
    pub reduced_motion: MotionPreference,
    pub audio_track: String,
    pub audio_volume: f32,
    pub log_level: LogLevel,
    pub key_next_slide: String,
    pub key_prev_slide: String,
    pub key_toggle_theme: String,
    pub key_toggle_audio: String,
    pub key_go_home: String,
    pub key_quit: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: ThemeMode::System,
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            window_pos_x: None,
            window_pos_y: None,
            site_root: crate::config::defaults::default_site_root(),
            gallery_manifest: crate::config::defaults::default_manifest(),
            gallery_image_root: crate::config::defaults::default_image_root(),
            hint_dwell_ms: crate::config::defaults::default_hint_dwell_ms(),
            max_height_fraction: crate::config::defaults::default_max_height_fraction(),
            scroll_animation_ms: crate::config::defaults::default_scroll_animation_ms(),
            reduced_motion: MotionPreference::System,
            audio_track: crate::config::defaults::default_audio_track(),
            audio_volume: crate::config::defaults::default_audio_volume(),
            log_level: crate::config::defaults::default_log_level(),
            key_next_slide: crate::config::defaults::default_key_next_slide(),
            key_prev_slide: crate::config::defaults::default_key_prev_slide(),
            key_toggle_theme: crate::config::defaults::default_key_toggle_theme(),
            key_toggle_audio: crate::config::defaults::default_key_toggle_audio(),
            key_go_home: crate::config::defaults::default_key_go_home(),
            key_quit: crate::config::defaults::default_key_quit(),
        }
    }
}

/// Theme preference. `System` follows the desktop colour scheme.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        };
        write!(f, "{}", label)
    }
}

/// Whether carousel paging animates.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MotionPreference {
    /// Ask the desktop.
    #[default]
    System,
    Reduce,
    Animate,
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
