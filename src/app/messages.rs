use crate::routes::Route;
use iced::keyboard::{Key, Modifiers};
use iced::widget::image::Handle;
use std::time::Instant;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Route),
    ToggleTheme,
    ToggleAudio,
    NextSlide,
    PreviousSlide,
    GalleryListLoaded {
        generation: u64,
        images: Vec<String>,
    },
    SlideImageLoaded {
        generation: u64,
        index: usize,
        handle: Option<Handle>,
    },
    GalleryScrolled {
        offset_x: f32,
        viewport_width: f32,
        viewport_height: f32,
    },
    HintTick(Instant),
    AnimationFrame(Instant),
    OklchChanged(OklchChannel, f32),
    OklchInputChanged(OklchChannel, String),
    CopyOklch,
    WindowResized {
        width: f32,
        height: f32,
    },
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    PollSystemSignals,
    SafeQuit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OklchChannel {
    Lightness,
    Chroma,
    Hue,
}
