use crate::carousel::Carousel;
use crate::carousel::motion::ScrollAnimation;
use iced::widget::image::Handle;

/// Gallery page model. Only `Ready` has a mounted carousel.
pub enum GalleryState {
    /// The gallery page is not on screen.
    Unmounted,
    Loading,
    /// The loader produced nothing the carousel can show.
    Empty,
    Ready(GalleryView),
}

impl GalleryState {
    pub(in crate::app) fn view_mut(&mut self) -> Option<&mut GalleryView> {
        match self {
            GalleryState::Ready(view) => Some(view),
            _ => None,
        }
    }

    pub(in crate::app) fn view(&self) -> Option<&GalleryView> {
        match self {
            GalleryState::Ready(view) => Some(view),
            _ => None,
        }
    }
}

/// A mounted carousel plus what the GUI needs to draw and animate it.
pub struct GalleryView {
    pub(in crate::app) carousel: Carousel,
    pub(in crate::app) images: Vec<SlideImage>,
    pub(in crate::app) animation: Option<ScrollAnimation>,
}

impl GalleryView {
    pub(in crate::app) fn new(carousel: Carousel) -> Self {
        let images = vec![SlideImage::Pending; carousel.slides().len()];
        Self {
            carousel,
            images,
            animation: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum SlideImage {
    Pending,
    Ready(Handle),
    Failed,
}
