//! Horizontal image carousel.
//!
//! The carousel never stores which slide is current. It remembers the last
//! scroll offset reported by the viewport and derives the index from it on
//! every read, so manual swipes and programmatic paging can't drift apart.
//! Everything here is plain state; the GUI layer feeds it scroll
//! observations and timer ticks and turns paging targets into scroll
//! commands.

pub mod motion;

use std::time::{Duration, Instant};
use thiserror::Error;

/// Fraction of the viewport height a slide image may occupy.
pub const DEFAULT_MAX_HEIGHT_FRACTION: f32 = 0.7;
/// How long the swipe hint stays up when nobody scrolls.
pub const DEFAULT_HINT_DWELL: Duration = Duration::from_millis(3500);
/// Scroll deltas below this many pixels are layout noise, not user scrolls.
const SCROLL_EPSILON: f32 = 0.5;

/// Reasons a list of image references can't be shown.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SlideListError {
    #[error("slide list is empty")]
    Empty,
    #[error("slide {index} has a blank image reference")]
    BlankReference { index: usize },
}

/// Ordered, non-empty list of image references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideList {
    refs: Vec<String>,
}

impl SlideList {
    pub fn new(refs: Vec<String>) -> Result<Self, SlideListError> {
        if refs.is_empty() {
            return Err(SlideListError::Empty);
        }
        if let Some(index) = refs.iter().position(|r| r.trim().is_empty()) {
            return Err(SlideListError::BlankReference { index });
        }
        Ok(Self { refs })
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn last_index(&self) -> usize {
        self.refs.len() - 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.refs.iter().map(String::as_str)
    }

    /// A single slide has nowhere to page to.
    pub fn is_pageable(&self) -> bool {
        self.refs.len() > 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Next,
    Previous,
}

/// The "you can swipe" indicator shown when a carousel mounts.
#[derive(Debug, Clone, Copy)]
pub struct SwipeHint {
    visible: bool,
    shown_at: Instant,
    dwell: Duration,
}

impl SwipeHint {
    pub fn new(shown_at: Instant, dwell: Duration) -> Self {
        Self {
            visible: true,
            shown_at,
            dwell,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Hide for good. Returns true if this call hid it.
    pub fn dismiss(&mut self) -> bool {
        std::mem::replace(&mut self.visible, false)
    }

    /// Hide once the dwell time has elapsed. Returns true if this call hid it.
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.visible && now.saturating_duration_since(self.shown_at) >= self.dwell {
            self.dismiss()
        } else {
            false
        }
    }
}

/// Derive the current slide from a horizontal scroll offset.
///
/// Widths below one pixel are treated as one pixel, and the result is always
/// a valid index for a list of `len` slides (`0` when `len` is zero).
pub fn index_for_offset(offset: f32, slide_width: f32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let width = if slide_width.is_finite() {
        slide_width.max(1.0)
    } else {
        1.0
    };
    let offset = if offset.is_finite() {
        offset.max(0.0)
    } else {
        0.0
    };
    let raw = (offset / width).round() as usize;
    raw.min(len - 1)
}

/// Largest box a slide image may fill. The image is fitted inside it with
/// its aspect ratio intact.
pub fn image_bounds(viewport_width: f32, viewport_height: f32, height_fraction: f32) -> (f32, f32) {
    let sanitize = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
    let fraction = if height_fraction.is_finite() {
        height_fraction.clamp(0.1, 1.0)
    } else {
        DEFAULT_MAX_HEIGHT_FRACTION
    };
    (
        sanitize(viewport_width),
        sanitize(viewport_height) * fraction,
    )
}

/// One mounted carousel: the slides, the hint, and the latest viewport
/// observation.
#[derive(Debug, Clone)]
pub struct Carousel {
    slides: SlideList,
    hint: SwipeHint,
    scroll_offset: f32,
    slide_width: f32,
    viewport_height: f32,
}

impl Carousel {
    pub fn mount(
        slides: SlideList,
        viewport_width: f32,
        viewport_height: f32,
        now: Instant,
        hint_dwell: Duration,
    ) -> Self {
        tracing::debug!(
            slides = slides.len(),
            viewport_width,
            viewport_height,
            "Mounted carousel"
        );
        Self {
            slides,
            hint: SwipeHint::new(now, hint_dwell),
            scroll_offset: 0.0,
            slide_width: viewport_width,
            viewport_height,
        }
    }

    pub fn slides(&self) -> &SlideList {
        &self.slides
    }

    pub fn slide_width(&self) -> f32 {
        self.slide_width
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn hint_visible(&self) -> bool {
        self.hint.is_visible()
    }

    pub fn current_index(&self) -> usize {
        index_for_offset(self.scroll_offset, self.slide_width, self.slides.len())
    }

    /// Slide a paging request lands on, or `None` when it would not move.
    pub fn target_index(&self, direction: PageDirection) -> Option<usize> {
        if !self.slides.is_pageable() {
            return None;
        }
        let current = self.current_index();
        let target = match direction {
            PageDirection::Next => (current + 1).min(self.slides.last_index()),
            PageDirection::Previous => current.saturating_sub(1),
        };
        (target != current).then_some(target)
    }

    /// Scroll offset that puts slide `index` fully in view.
    pub fn offset_for_index(&self, index: usize) -> f32 {
        index.min(self.slides.last_index()) as f32 * self.slide_width.max(1.0)
    }

    /// Record what the viewport reported. A real change in offset counts as
    /// a scroll and dismisses the hint; returns true if it did.
    pub fn observe_scroll(&mut self, offset: f32, viewport_width: f32) -> bool {
        if viewport_width.is_finite() && viewport_width >= 1.0 {
            self.slide_width = viewport_width;
        }
        let offset = if offset.is_finite() {
            offset.max(0.0)
        } else {
            0.0
        };
        let moved = (offset - self.scroll_offset).abs() > SCROLL_EPSILON;
        self.scroll_offset = offset;
        moved && self.hint.dismiss()
    }

    pub fn resize(&mut self, viewport_width: f32, viewport_height: f32) {
        if viewport_width.is_finite() && viewport_width >= 1.0 {
            self.slide_width = viewport_width;
        }
        if viewport_height.is_finite() && viewport_height >= 0.0 {
            self.viewport_height = viewport_height;
        }
    }

    /// Dwell-timer tick. Returns true if the hint was hidden by this tick.
    pub fn expire_hint(&mut self, now: Instant) -> bool {
        self.hint.expire(now)
    }

    pub fn image_bounds(&self, height_fraction: f32) -> (f32, f32) {
        image_bounds(self.slide_width, self.viewport_height, height_fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(names: &[&str]) -> SlideList {
        SlideList::new(names.iter().map(|n| n.to_string()).collect()).unwrap()
    }

    fn mounted(names: &[&str]) -> (Carousel, Instant) {
        let now = Instant::now();
        let carousel = Carousel::mount(list(names), 800.0, 600.0, now, DEFAULT_HINT_DWELL);
        (carousel, now)
    }

    /// Apply a paging request the way the GUI does: scroll to the target.
    fn page(carousel: &mut Carousel, direction: PageDirection) {
        if let Some(target) = carousel.target_index(direction) {
            let offset = carousel.offset_for_index(target);
            let width = carousel.slide_width();
            carousel.observe_scroll(offset, width);
        }
    }

    #[test]
    fn rejects_empty_list() {
        assert_eq!(SlideList::new(Vec::new()), Err(SlideListError::Empty));
    }

    #[test]
    fn rejects_blank_reference() {
        let err = SlideList::new(vec!["a.jpg".into(), "  ".into()]).unwrap_err();
        assert_eq!(err, SlideListError::BlankReference { index: 1 });
    }

    #[test]
    fn keeps_insertion_order() {
        let slides = list(&["c.jpg", "a.jpg", "b.jpg"]);
        assert_eq!(
            slides.iter().collect::<Vec<_>>(),
            vec!["c.jpg", "a.jpg", "b.jpg"]
        );
    }

    #[test]
    fn pages_forward_and_back_with_clamping() {
        let (mut carousel, _) = mounted(&["a.jpg", "b.jpg", "c.jpg"]);
        assert_eq!(carousel.current_index(), 0);
        page(&mut carousel, PageDirection::Next);
        assert_eq!(carousel.current_index(), 1);
        page(&mut carousel, PageDirection::Next);
        assert_eq!(carousel.current_index(), 2);
        page(&mut carousel, PageDirection::Next);
        assert_eq!(carousel.current_index(), 2);
        page(&mut carousel, PageDirection::Previous);
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn previous_at_start_is_a_no_op() {
        let (carousel, _) = mounted(&["a.jpg", "b.jpg"]);
        assert_eq!(carousel.target_index(PageDirection::Previous), None);
    }

    #[test]
    fn next_at_end_is_a_no_op() {
        let (mut carousel, _) = mounted(&["a.jpg", "b.jpg"]);
        carousel.observe_scroll(800.0, 800.0);
        assert_eq!(carousel.target_index(PageDirection::Next), None);
    }

    #[test]
    fn singleton_never_pages() {
        let (mut carousel, _) = mounted(&["x.jpg"]);
        assert!(!carousel.slides().is_pageable());
        page(&mut carousel, PageDirection::Next);
        page(&mut carousel, PageDirection::Previous);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn manual_scroll_rounds_to_nearest_slide() {
        let (mut carousel, _) = mounted(&["a.jpg", "b.jpg", "c.jpg"]);
        carousel.observe_scroll(1.6 * 800.0, 800.0);
        assert_eq!(carousel.current_index(), 2);
        carousel.observe_scroll(0.4 * 800.0, 800.0);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn derived_index_stays_in_range() {
        for len in 1..6 {
            for offset in [-50.0, 0.0, 10.0, 399.0, 401.0, 5_000.0, f32::NAN, f32::INFINITY] {
                for width in [0.0, 0.5, 1.0, 400.0, f32::NAN] {
                    let idx = index_for_offset(offset, width, len);
                    assert!(idx < len, "len={len} offset={offset} width={width}");
                }
            }
        }
    }

    #[test]
    fn tiny_width_is_treated_as_one_pixel() {
        assert_eq!(index_for_offset(2.0, 0.0, 5), 2);
    }

    #[test]
    fn hint_hides_on_first_scroll_and_stays_hidden() {
        let (mut carousel, now) = mounted(&["a.jpg", "b.jpg"]);
        assert!(carousel.hint_visible());
        assert!(carousel.observe_scroll(120.0, 800.0));
        assert!(!carousel.hint_visible());
        assert!(!carousel.observe_scroll(0.0, 800.0));
        assert!(!carousel.expire_hint(now + DEFAULT_HINT_DWELL));
        assert!(!carousel.hint_visible());
    }

    #[test]
    fn unchanged_offset_is_not_a_scroll() {
        let (mut carousel, _) = mounted(&["a.jpg", "b.jpg"]);
        assert!(!carousel.observe_scroll(0.0, 800.0));
        assert!(!carousel.observe_scroll(0.2, 800.0));
        assert!(carousel.hint_visible());
    }

    #[test]
    fn hint_expires_after_dwell() {
        let (mut carousel, now) = mounted(&["x.jpg"]);
        assert!(!carousel.expire_hint(now + Duration::from_millis(3499)));
        assert!(carousel.hint_visible());
        assert!(carousel.expire_hint(now + DEFAULT_HINT_DWELL));
        assert!(!carousel.hint_visible());
    }

    #[test]
    fn resize_rescales_offsets() {
        let (mut carousel, _) = mounted(&["a.jpg", "b.jpg", "c.jpg"]);
        carousel.resize(1000.0, 700.0);
        assert_eq!(carousel.offset_for_index(2), 2000.0);
        assert_eq!(carousel.offset_for_index(9), 2000.0);
    }

    #[test]
    fn image_bounds_respect_height_fraction() {
        assert_eq!(image_bounds(1200.0, 1000.0, 0.7), (1200.0, 700.0));
        assert_eq!(image_bounds(-5.0, f32::NAN, 0.7), (0.0, 0.0));
    }
}
