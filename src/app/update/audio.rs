use super::super::state::App;
use tracing::warn;

impl App {
    pub(super) fn handle_toggle_audio(&mut self) {
        if let Err(err) = self.audio.toggle() {
            warn!("Background audio could not start: {err:#}");
        }
    }
}
