use super::super::super::messages::Message;
use super::super::super::state::App;
use crate::routes::Route;
use iced::keyboard::{Key, Modifiers, key};

impl App {
    pub(super) fn shortcut_message_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<Message> {
        let pressed = Self::pressed_token(&key)?;

        // Paging keys only reach the carousel while it is mounted.
        if self.gallery.view().is_some() {
            if Self::shortcut_matches(
                &self.config.key_next_slide,
                "arrowright",
                &pressed,
                modifiers,
            ) {
                return Some(Message::NextSlide);
            }
            if Self::shortcut_matches(
                &self.config.key_prev_slide,
                "arrowleft",
                &pressed,
                modifiers,
            ) {
                return Some(Message::PreviousSlide);
            }
        }

        if Self::shortcut_matches(&self.config.key_toggle_theme, "t", &pressed, modifiers) {
            Some(Message::ToggleTheme)
        } else if Self::shortcut_matches(&self.config.key_toggle_audio, "m", &pressed, modifiers)
        {
            Some(Message::ToggleAudio)
        } else if Self::shortcut_matches(&self.config.key_go_home, "h", &pressed, modifiers) {
            Some(Message::Navigate(Route::Home))
        } else if Self::shortcut_matches(&self.config.key_quit, "q", &pressed, modifiers) {
            Some(Message::SafeQuit)
        } else {
            None
        }
    }

    fn pressed_token(key: &Key) -> Option<String> {
        let token = match key.as_ref() {
            Key::Named(key::Named::Space) => "space".to_string(),
            Key::Named(key::Named::ArrowLeft) => "arrowleft".to_string(),
            Key::Named(key::Named::ArrowRight) => "arrowright".to_string(),
            Key::Named(key::Named::ArrowUp) => "arrowup".to_string(),
            Key::Named(key::Named::ArrowDown) => "arrowdown".to_string(),
            Key::Named(key::Named::Escape) => "escape".to_string(),
            Key::Character(ch) => ch.to_ascii_lowercase(),
            _ => return None,
        };
        Some(token)
    }

    pub(super) fn shortcut_matches(
        raw: &str,
        fallback: &str,
        pressed: &str,
        modifiers: Modifiers,
    ) -> bool {
        let normalized = Self::normalize_shortcut_token(raw, fallback);

        let mut required_ctrl = false;
        let mut required_alt = false;
        let mut required_logo = false;
        let mut required_shift = false;
        let mut required_key: Option<&str> = None;

        for token in normalized
            .split('+')
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            match token {
                "ctrl" | "control" => required_ctrl = true,
                "alt" => required_alt = true,
                "logo" | "meta" | "super" | "cmd" | "command" => required_logo = true,
                "shift" => required_shift = true,
                key => required_key = Some(key),
            }
        }

        let required_key = required_key.unwrap_or(fallback);
        if pressed != required_key {
            return false;
        }

        modifiers.control() == required_ctrl
            && modifiers.alt() == required_alt
            && modifiers.logo() == required_logo
            && modifiers.shift() == required_shift
    }

    pub(super) fn normalize_shortcut_token(raw: &str, fallback: &str) -> String {
        let normalized = raw.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            fallback.to_string()
        } else {
            normalized
                .replace("spacebar", "space")
                .replace("right", "arrowright")
                .replace("left", "arrowleft")
                .replace("arrowarrow", "arrow")
        }
    }
}
