use super::super::state::{App, GalleryState, GalleryView, SlideImage};
use super::Effect;
use crate::carousel::motion::{ScrollAnimation, ScrollBehavior};
use crate::carousel::{Carousel, PageDirection, SlideList};
use iced::widget::image::Handle;
use std::time::Instant;
use tracing::{debug, info, warn};

impl App {
    pub(super) fn handle_page(&mut self, direction: PageDirection, effects: &mut Vec<Effect>) {
        let smooth = self.scroll_behavior == ScrollBehavior::Smooth
            && !self.scroll_animation_duration().is_zero();
        let duration = self.scroll_animation_duration();
        let Some(view) = self.gallery.view_mut() else {
            return;
        };
        let Some(target) = view.carousel.target_index(direction) else {
            debug!(
                ?direction,
                current = view.carousel.current_index(),
                "Paging clamped at edge"
            );
            return;
        };
        let to = view.carousel.offset_for_index(target);
        debug!(?direction, target, offset = to, smooth, "Paging carousel");
        if smooth {
            let from = view.carousel.scroll_offset();
            view.animation = Some(ScrollAnimation::new(from, to, Instant::now(), duration));
        } else {
            view.animation = None;
            effects.push(Effect::ScrollGalleryTo(to));
        }
    }

    pub(super) fn handle_gallery_list_loaded(
        &mut self,
        generation: u64,
        images: Vec<String>,
        effects: &mut Vec<Effect>,
    ) {
        if generation != self.gallery_generation
            || !matches!(self.gallery, GalleryState::Loading)
        {
            debug!(generation, "Dropping stale gallery list");
            return;
        }
        match SlideList::new(images) {
            Ok(slides) => {
                info!(slides = slides.len(), "Gallery ready");
                let carousel = Carousel::mount(
                    slides,
                    self.window_width,
                    self.window_height,
                    Instant::now(),
                    self.hint_dwell(),
                );
                self.gallery = GalleryState::Ready(GalleryView::new(carousel));
                effects.push(Effect::LoadSlideImages { generation });
            }
            Err(err) => {
                warn!("Gallery has nothing to show: {err}");
                self.gallery = GalleryState::Empty;
            }
        }
    }

    pub(super) fn handle_slide_image_loaded(
        &mut self,
        generation: u64,
        index: usize,
        handle: Option<Handle>,
    ) {
        if generation != self.gallery_generation {
            return;
        }
        let Some(view) = self.gallery.view_mut() else {
            return;
        };
        if let Some(slot) = view.images.get_mut(index) {
            *slot = match handle {
                Some(handle) => SlideImage::Ready(handle),
                None => SlideImage::Failed,
            };
        }
    }

    pub(super) fn handle_gallery_scrolled(
        &mut self,
        offset_x: f32,
        viewport_width: f32,
        viewport_height: f32,
    ) {
        let Some(view) = self.gallery.view_mut() else {
            return;
        };
        if view.carousel.observe_scroll(offset_x, viewport_width) {
            debug!("Swipe hint dismissed by scrolling");
        }
        tracing::trace!(
            offset_x,
            viewport_width,
            viewport_height,
            current = view.carousel.current_index(),
            "Gallery scrolled"
        );
    }

    pub(super) fn handle_hint_tick(&mut self, now: Instant) {
        if let Some(view) = self.gallery.view_mut() {
            if view.carousel.expire_hint(now) {
                debug!("Swipe hint expired");
            }
        }
    }

    pub(super) fn handle_animation_frame(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        let Some(view) = self.gallery.view_mut() else {
            return;
        };
        let Some(animation) = view.animation else {
            return;
        };
        effects.push(Effect::ScrollGalleryTo(animation.sample(now)));
        if animation.is_finished(now) {
            view.animation = None;
        }
    }

    pub(super) fn handle_window_resized(
        &mut self,
        width: f32,
        height: f32,
        effects: &mut Vec<Effect>,
    ) {
        if !(width.is_finite() && height.is_finite()) {
            return;
        }
        self.window_width = width.max(1.0);
        self.window_height = height.max(1.0);
        if let Some(view) = self.gallery.view_mut() {
            let current = view.carousel.current_index();
            view.carousel.resize(self.window_width, self.window_height);
            view.animation = None;
            // Keep the same slide framed at the new width.
            effects.push(Effect::ScrollGalleryTo(
                view.carousel.offset_for_index(current),
            ));
        }
    }
}
