use super::super::state::{App, GalleryState};
use super::Effect;
use crate::routes::Route;
use tracing::info;

impl App {
    pub(super) fn handle_navigate(&mut self, route: Route, effects: &mut Vec<Effect>) {
        if route == self.route {
            return;
        }
        if self.route == Route::Gallery {
            self.unmount_gallery();
        }
        self.route = route;
        info!(route = %route, "Navigated");

        if route == Route::Gallery {
            self.mount_gallery(effects);
        }
    }

    fn mount_gallery(&mut self, effects: &mut Vec<Effect>) {
        self.gallery_generation = self.gallery_generation.wrapping_add(1);
        self.gallery = GalleryState::Loading;
        effects.push(Effect::LoadGallery {
            generation: self.gallery_generation,
        });
    }

    fn unmount_gallery(&mut self) {
        // Dropping the state cancels the hint timer and any animation; results
        // still in flight carry a stale generation and are ignored.
        self.gallery = GalleryState::Unmounted;
        self.gallery_generation = self.gallery_generation.wrapping_add(1);
    }
}
