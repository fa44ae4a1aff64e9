use super::super::messages::Message;
use super::super::state::{
    App, BODY_FONT_SIZE_PX, GALLERY_SCROLL_ID, GalleryState, GalleryView, HINT_FONT_SIZE_PX,
    SlideImage,
};
use super::placeholder;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{Row, Scrollable, Space, container, image, stack, text};
use iced::{ContentFit, Element, Length};

/// Slides shrink to fit their bounds but are never enlarged.
const SLIDE_FIT: ContentFit = ContentFit::ScaleDown;

impl App {
    pub(in crate::app) fn gallery_page(&self) -> Element<'_, Message> {
        match &self.gallery {
            GalleryState::Unmounted | GalleryState::Loading => placeholder("Loading images..."),
            GalleryState::Empty => placeholder("No images found in /images"),
            GalleryState::Ready(view) => self.carousel(view),
        }
    }

    fn carousel<'a>(&'a self, view: &'a GalleryView) -> Element<'a, Message> {
        let carousel = &view.carousel;
        let slide_width = carousel.slide_width();
        let (max_width, max_height) = carousel.image_bounds(self.config.max_height_fraction);

        let slides = carousel
            .slides()
            .iter()
            .zip(&view.images)
            .map(|(reference, slot)| -> Element<'a, Message> {
                let content: Element<'a, Message> = match slot {
                    SlideImage::Ready(handle) => image(handle.clone())
                        .content_fit(SLIDE_FIT)
                        .width(Length::Fixed(max_width))
                        .height(Length::Fixed(max_height))
                        .into(),
                    SlideImage::Pending => text("…").size(BODY_FONT_SIZE_PX).into(),
                    SlideImage::Failed => text(reference).size(BODY_FONT_SIZE_PX).into(),
                };
                container(content)
                    .width(Length::Fixed(slide_width))
                    .height(Length::Fill)
                    .align_x(Horizontal::Center)
                    .align_y(Vertical::Center)
                    .into()
            });

        let strip = Scrollable::with_direction(
            Row::with_children(slides).height(Length::Fill),
            Direction::Horizontal(Scrollbar::new()),
        )
        .id(GALLERY_SCROLL_ID.clone())
        .on_scroll(|viewport| Message::GalleryScrolled {
            offset_x: viewport.absolute_offset().x,
            viewport_width: viewport.bounds().width,
            viewport_height: viewport.bounds().height,
        })
        .width(Length::Fill)
        .height(Length::Fill);

        // Both layers stay in place after the hint hides; changing the root
        // widget would rebuild the scrollable and drop its offset.
        let overlay: Element<'a, Message> = if carousel.hint_visible() {
            text("↔").size(HINT_FONT_SIZE_PX).style(text::secondary).into()
        } else {
            Space::new(Length::Shrink, Length::Shrink).into()
        };
        stack![strip, container(overlay).center(Length::Fill)].into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Size;

    #[test]
    fn small_slides_keep_their_size() {
        let bounds = Size::new(800.0, 420.0);
        assert_eq!(SLIDE_FIT.fit(Size::new(100.0, 50.0), bounds), Size::new(100.0, 50.0));
    }

    #[test]
    fn large_slides_shrink_into_bounds() {
        let fitted = SLIDE_FIT.fit(Size::new(1600.0, 840.0), Size::new(800.0, 420.0));
        assert_eq!(fitted, Size::new(800.0, 420.0));
    }
}
