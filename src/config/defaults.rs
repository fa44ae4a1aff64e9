pub(crate) fn default_window_width() -> f32 {
    1280.0
}

pub(crate) fn default_window_height() -> f32 {
    860.0
}

pub(crate) fn default_site_root() -> String {
    "site".to_string()
}

pub(crate) fn default_manifest() -> String {
    "site/images/images.json".to_string()
}

pub(crate) fn default_image_root() -> String {
    "site/images".to_string()
}

pub(crate) fn default_hint_dwell_ms() -> u64 {
    crate::carousel::DEFAULT_HINT_DWELL.as_millis() as u64
}

pub(crate) fn default_max_height_fraction() -> f32 {
    crate::carousel::DEFAULT_MAX_HEIGHT_FRACTION
}

pub(crate) fn default_scroll_animation_ms() -> u64 {
    crate::carousel::motion::DEFAULT_SCROLL_ANIMATION.as_millis() as u64
}

pub(crate) fn default_audio_track() -> String {
    "site/assets/audio/TEED, ANOTR - Sound of You  (Extended Mix).mp3".to_string()
}

pub(crate) fn default_audio_volume() -> f32 {
    1.0
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}

pub(crate) fn default_key_next_slide() -> String {
    "arrowright".to_string()
}

pub(crate) fn default_key_prev_slide() -> String {
    "arrowleft".to_string()
}

pub(crate) fn default_key_toggle_theme() -> String {
    "t".to_string()
}

pub(crate) fn default_key_toggle_audio() -> String {
    "m".to_string()
}

pub(crate) fn default_key_go_home() -> String {
    "h".to_string()
}

pub(crate) fn default_key_quit() -> String {
    "q".to_string()
}
