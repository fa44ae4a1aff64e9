use super::super::super::messages::Message;
use super::super::super::state::{App, GALLERY_SCROLL_ID, SlideImage};
use super::super::Effect;
use crate::gallery_loader::{load_image_list, load_slide_pixels};
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::widget::image::Handle;
use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::window;
use tracing::{info, warn};

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::SavePreferences => {
                crate::cache::save_theme_preference(
                    &self.preferences_path,
                    self.appearance.as_mode(),
                );
                Task::none()
            }
            Effect::LoadGallery { generation } => {
                let source = self.image_source();
                info!(
                    generation,
                    manifest = %source.manifest,
                    "Dispatching gallery load task"
                );
                Task::perform(
                    async move {
                        let images = tokio::task::spawn_blocking(move || load_image_list(&source))
                            .await
                            .unwrap_or_else(|err| {
                                warn!("Gallery load task failed: {err}");
                                Vec::new()
                            });
                        Message::GalleryListLoaded { generation, images }
                    },
                    |message| message,
                )
            }
            Effect::LoadSlideImages { generation } => {
                let Some(view) = self.gallery.view() else {
                    return Task::none();
                };
                let tasks = view
                    .carousel
                    .slides()
                    .iter()
                    .enumerate()
                    .filter(|(index, _)| matches!(view.images.get(*index), Some(SlideImage::Pending)))
                    .map(|(index, reference)| {
                        let reference = reference.to_string();
                        Task::perform(
                            async move {
                                let handle = tokio::task::spawn_blocking(move || {
                                    match load_slide_pixels(&reference) {
                                        Ok(pixels) => Some(Handle::from_rgba(
                                            pixels.width,
                                            pixels.height,
                                            pixels.rgba,
                                        )),
                                        Err(err) => {
                                            warn!("Slide image unavailable: {err:#}");
                                            None
                                        }
                                    }
                                })
                                .await
                                .unwrap_or(None);
                                Message::SlideImageLoaded {
                                    generation,
                                    index,
                                    handle,
                                }
                            },
                            |message| message,
                        )
                    })
                    .collect::<Vec<_>>();
                Task::batch(tasks)
            }
            Effect::ScrollGalleryTo(x) => {
                scrollable::scroll_to(GALLERY_SCROLL_ID.clone(), AbsoluteOffset { x, y: 0.0 })
            }
            Effect::CopyToClipboard(contents) => iced::clipboard::write(contents),
            Effect::QuitSafely => {
                crate::cache::save_theme_preference(
                    &self.preferences_path,
                    self.appearance.as_mode(),
                );
                self.audio.pause();
                info!("Exiting");
                iced::exit()
            }
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}
