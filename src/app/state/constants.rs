use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;
use std::time::Duration;

/// Limits and defaults for the page shell.
pub(crate) const HEADER_TITLE: &str = "OverFunction";
pub(crate) const TITLE_FONT_SIZE_PX: f32 = 28.0;
pub(crate) const BODY_FONT_SIZE_PX: f32 = 17.0;
pub(crate) const HINT_FONT_SIZE_PX: f32 = 40.0;
pub(crate) const PAGE_PADDING_PX: f32 = 24.0;
pub(crate) const PROSE_MAX_WIDTH_PX: f32 = 640.0;
pub(crate) const POST_MEDIA_WIDTH_PX: f32 = 320.0;
pub(crate) const SWATCH_HEIGHT_PX: f32 = 160.0;
pub(crate) const TINT_HEIGHT_PX: f32 = 48.0;
/// How often the dwell timer checks whether the hint has expired.
pub(crate) const HINT_POLL_INTERVAL: Duration = Duration::from_millis(100);
/// Frame pacing for smooth paging.
pub(crate) const ANIMATION_FRAME_INTERVAL: Duration = Duration::from_millis(16);
pub(crate) const SIGNAL_POLL_INTERVAL: Duration = Duration::from_millis(250);
pub(crate) static GALLERY_SCROLL_ID: Lazy<ScrollId> =
    Lazy::new(|| ScrollId::new("gallery-scroll"));
