use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use crate::carousel::PageDirection;

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::Navigate(route) => self.handle_navigate(route, &mut effects),
            Message::ToggleTheme => self.handle_toggle_theme(&mut effects),
            Message::ToggleAudio => self.handle_toggle_audio(),
            Message::NextSlide => self.handle_page(PageDirection::Next, &mut effects),
            Message::PreviousSlide => self.handle_page(PageDirection::Previous, &mut effects),
            Message::GalleryListLoaded { generation, images } => {
                self.handle_gallery_list_loaded(generation, images, &mut effects);
            }
            Message::SlideImageLoaded {
                generation,
                index,
                handle,
            } => self.handle_slide_image_loaded(generation, index, handle),
            Message::GalleryScrolled {
                offset_x,
                viewport_width,
                viewport_height,
            } => self.handle_gallery_scrolled(offset_x, viewport_width, viewport_height),
            Message::HintTick(now) => self.handle_hint_tick(now),
            Message::AnimationFrame(now) => self.handle_animation_frame(now, &mut effects),
            Message::OklchChanged(channel, value) => self.handle_oklch_changed(channel, value),
            Message::OklchInputChanged(channel, raw) => {
                self.handle_oklch_input_changed(channel, raw);
            }
            Message::CopyOklch => self.handle_copy_oklch(&mut effects),
            Message::WindowResized { width, height } => {
                self.handle_window_resized(width, height, &mut effects);
            }
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::PollSystemSignals => {
                if crate::take_sigint_requested() {
                    effects.push(Effect::QuitSafely);
                }
            }
            Message::SafeQuit => effects.push(Effect::QuitSafely),
        }

        effects
    }
}
