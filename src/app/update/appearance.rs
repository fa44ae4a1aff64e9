use super::super::state::App;
use super::Effect;
use tracing::info;

impl App {
    pub(super) fn handle_toggle_theme(&mut self, effects: &mut Vec<Effect>) {
        self.appearance = self.appearance.toggled();
        info!(theme = %self.appearance.as_mode(), "Toggled theme");
        effects.push(Effect::SavePreferences);
    }
}
