//! Light/dark appearance and the toggle between them.

use crate::config::ThemeMode;
use iced::Theme as IcedTheme;

/// The theme actually on screen, after `system` has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    /// Resolve a preference. `system_prefers_dark` is `None` when the desktop
    /// gives no answer, which resolves to light.
    pub fn resolve(mode: ThemeMode, system_prefers_dark: impl FnOnce() -> Option<bool>) -> Self {
        match mode {
            ThemeMode::Light => Appearance::Light,
            ThemeMode::Dark => Appearance::Dark,
            ThemeMode::System => {
                if system_prefers_dark().unwrap_or(false) {
                    Appearance::Dark
                } else {
                    Appearance::Light
                }
            }
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Appearance::Light => Appearance::Dark,
            Appearance::Dark => Appearance::Light,
        }
    }

    /// Explicit preference to remember after a toggle.
    pub fn as_mode(self) -> ThemeMode {
        match self {
            Appearance::Light => ThemeMode::Light,
            Appearance::Dark => ThemeMode::Dark,
        }
    }

    pub fn toggle_glyph(self) -> &'static str {
        match self {
            Appearance::Dark => "☼",
            Appearance::Light => "☾",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Appearance::Dark => "Switch to light mode",
            Appearance::Light => "Switch to dark mode",
        }
    }
}

/// Ask the desktop for its colour scheme.
pub fn system_prefers_dark() -> Option<bool> {
    match dark_light::detect() {
        Ok(dark_light::Mode::Dark) => Some(true),
        Ok(dark_light::Mode::Light) => Some(false),
        Ok(dark_light::Mode::Unspecified) => None,
        Err(err) => {
            tracing::debug!("System theme detection failed: {err}");
            None
        }
    }
}

impl From<Appearance> for IcedTheme {
    fn from(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Light => IcedTheme::Light,
            Appearance::Dark => IcedTheme::Dark,
        }
    }
}
