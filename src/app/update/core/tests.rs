use super::super::super::messages::{Message, OklchChannel};
use super::super::super::state::{App, GalleryState, SlideImage};
use super::super::Effect;
use crate::config::{AppConfig, MotionPreference, ThemeMode};
use crate::routes::Route;
use crate::theme::Appearance;
use iced::advanced::widget::Tree;
use iced::advanced::widget::tree::Tag;
use iced::keyboard::{Key, Modifiers, key};
use std::time::{Duration, Instant};

fn app_with(motion: MotionPreference) -> App {
    let config = AppConfig {
        theme: ThemeMode::Light,
        reduced_motion: motion,
        window_width: 800.0,
        window_height: 600.0,
        ..AppConfig::default()
    };
    let prefs = std::env::temp_dir()
        .join(format!("overfunction-reducer-{}", std::process::id()))
        .join("preferences.toml");
    let (app, _) = App::bootstrap(config, Route::Home, None, prefs);
    app
}

fn images(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

/// Navigate to the gallery and deliver the image list.
fn mounted_gallery(motion: MotionPreference, names: &[&str]) -> App {
    let mut app = app_with(motion);
    let effects = app.reduce(Message::Navigate(Route::Gallery));
    let generation = match effects.as_slice() {
        [Effect::LoadGallery { generation }] => *generation,
        _ => panic!("expected a gallery load"),
    };
    let effects = app.reduce(Message::GalleryListLoaded {
        generation,
        images: images(names),
    });
    assert!(matches!(effects.as_slice(), [Effect::LoadSlideImages { .. }]));
    app
}

fn current_index(app: &App) -> usize {
    app.gallery.view().unwrap().carousel.current_index()
}

/// Page, then report back the scroll the GUI would perform.
fn page(app: &mut App, message: Message) {
    for effect in app.reduce(message) {
        if let Effect::ScrollGalleryTo(x) = effect {
            app.reduce(Message::GalleryScrolled {
                offset_x: x,
                viewport_width: 800.0,
                viewport_height: 500.0,
            });
        }
    }
}

fn layer_tags(tree: &Tree) -> (Tag, Vec<Tag>) {
    (tree.tag, tree.children.iter().map(|child| child.tag).collect())
}

fn arrow(named: key::Named) -> Message {
    Message::KeyPressed {
        key: Key::Named(named),
        modifiers: Modifiers::empty(),
    }
}

#[test]
fn gallery_mounts_after_list_arrives() {
    let app = mounted_gallery(MotionPreference::Reduce, &["a.jpg", "b.jpg"]);
    let view = app.gallery.view().unwrap();
    assert_eq!(view.carousel.slides().len(), 2);
    assert!(view.carousel.hint_visible());
    assert!(view.images.iter().all(|i| matches!(i, SlideImage::Pending)));
}

#[test]
fn empty_list_shows_placeholder_state() {
    let mut app = app_with(MotionPreference::Reduce);
    app.reduce(Message::Navigate(Route::Gallery));
    let generation = app.gallery_generation;
    let effects = app.reduce(Message::GalleryListLoaded {
        generation,
        images: Vec::new(),
    });
    assert!(effects.is_empty());
    assert!(matches!(app.gallery, GalleryState::Empty));
}

#[test]
fn stale_list_is_ignored_after_leaving() {
    let mut app = app_with(MotionPreference::Reduce);
    app.reduce(Message::Navigate(Route::Gallery));
    let stale = app.gallery_generation;
    app.reduce(Message::Navigate(Route::Home));
    assert!(matches!(app.gallery, GalleryState::Unmounted));
    app.reduce(Message::Navigate(Route::Gallery));
    app.reduce(Message::GalleryListLoaded {
        generation: stale,
        images: images(&["a.jpg"]),
    });
    assert!(matches!(app.gallery, GalleryState::Loading));
}

#[test]
fn keyboard_paging_clamps_at_both_ends() {
    let mut app = mounted_gallery(MotionPreference::Reduce, &["a.jpg", "b.jpg", "c.jpg"]);
    assert_eq!(current_index(&app), 0);
    page(&mut app, arrow(key::Named::ArrowRight));
    assert_eq!(current_index(&app), 1);
    page(&mut app, arrow(key::Named::ArrowRight));
    assert_eq!(current_index(&app), 2);
    assert!(app.reduce(arrow(key::Named::ArrowRight)).is_empty());
    assert_eq!(current_index(&app), 2);
    page(&mut app, arrow(key::Named::ArrowLeft));
    assert_eq!(current_index(&app), 1);
}

#[test]
fn singleton_gallery_never_scrolls() {
    let mut app = mounted_gallery(MotionPreference::Reduce, &["x.jpg"]);
    assert!(app.reduce(Message::NextSlide).is_empty());
    assert!(app.reduce(Message::PreviousSlide).is_empty());
    assert_eq!(current_index(&app), 0);
}

#[test]
fn arrows_do_nothing_outside_the_gallery() {
    let mut app = app_with(MotionPreference::Reduce);
    assert!(app.reduce(arrow(key::Named::ArrowRight)).is_empty());
}

#[test]
fn smooth_paging_animates_to_the_target() {
    let mut app = mounted_gallery(MotionPreference::Animate, &["a.jpg", "b.jpg"]);
    assert!(app.reduce(Message::NextSlide).is_empty());
    let animation = app.gallery.view().unwrap().animation.expect("animation");
    assert_eq!(animation.target(), 800.0);

    let done = Instant::now() + Duration::from_secs(5);
    let effects = app.reduce(Message::AnimationFrame(done));
    assert!(matches!(effects.as_slice(), [Effect::ScrollGalleryTo(x)] if *x == 800.0));
    assert!(app.gallery.view().unwrap().animation.is_none());
}

#[test]
fn manual_scroll_drives_the_index_and_hides_the_hint() {
    let mut app = mounted_gallery(MotionPreference::Reduce, &["a.jpg", "b.jpg", "c.jpg"]);
    app.reduce(Message::GalleryScrolled {
        offset_x: 1.6 * 800.0,
        viewport_width: 800.0,
        viewport_height: 500.0,
    });
    let view = app.gallery.view().unwrap();
    assert_eq!(view.carousel.current_index(), 2);
    assert!(!view.carousel.hint_visible());
}

#[test]
fn hint_expires_on_a_late_tick() {
    let mut app = mounted_gallery(MotionPreference::Reduce, &["x.jpg"]);
    app.reduce(Message::HintTick(Instant::now() + Duration::from_secs(10)));
    assert!(!app.gallery.view().unwrap().carousel.hint_visible());
}

#[test]
fn returning_to_the_gallery_shows_the_hint_again() {
    let mut app = mounted_gallery(MotionPreference::Reduce, &["a.jpg", "b.jpg"]);
    app.reduce(Message::HintTick(Instant::now() + Duration::from_secs(10)));
    app.reduce(Message::Navigate(Route::Home));
    app.reduce(Message::Navigate(Route::Gallery));
    let generation = app.gallery_generation;
    app.reduce(Message::GalleryListLoaded {
        generation,
        images: images(&["a.jpg", "b.jpg"]),
    });
    assert!(app.gallery.view().unwrap().carousel.hint_visible());
}

#[test]
fn resize_keeps_the_current_slide_framed() {
    let mut app = mounted_gallery(MotionPreference::Reduce, &["a.jpg", "b.jpg", "c.jpg"]);
    page(&mut app, Message::NextSlide);
    let effects = app.reduce(Message::WindowResized {
        width: 1000.0,
        height: 700.0,
    });
    assert!(matches!(effects.as_slice(), [Effect::ScrollGalleryTo(x)] if *x == 1000.0));
}

#[test]
fn failed_slide_download_is_marked() {
    let mut app = mounted_gallery(MotionPreference::Reduce, &["a.jpg", "b.jpg"]);
    let generation = app.gallery_generation;
    app.reduce(Message::SlideImageLoaded {
        generation,
        index: 1,
        handle: None,
    });
    let view = app.gallery.view().unwrap();
    assert!(matches!(view.images[0], SlideImage::Pending));
    assert!(matches!(view.images[1], SlideImage::Failed));
}

#[test]
fn theme_toggle_flips_and_saves() {
    let mut app = app_with(MotionPreference::Reduce);
    assert_eq!(app.appearance, Appearance::Light);
    let effects = app.reduce(Message::ToggleTheme);
    assert_eq!(app.appearance, Appearance::Dark);
    assert!(matches!(effects.as_slice(), [Effect::SavePreferences]));
}

#[test]
fn theme_shortcut_routes_through_reducer() {
    let mut app = app_with(MotionPreference::Reduce);
    app.reduce(Message::KeyPressed {
        key: Key::Character("t".into()),
        modifiers: Modifiers::empty(),
    });
    assert_eq!(app.appearance, Appearance::Dark);
}

#[test]
fn oklch_fields_clamp_and_tolerate_garbage() {
    let mut app = app_with(MotionPreference::Reduce);
    app.reduce(Message::OklchInputChanged(OklchChannel::Lightness, "140".into()));
    assert_eq!(app.oklch.color.lightness, 100.0);
    assert_eq!(app.oklch.lightness_input, "140");

    app.reduce(Message::OklchInputChanged(OklchChannel::Hue, "abc".into()));
    assert_eq!(app.oklch.color.hue, 40.0);

    app.reduce(Message::OklchChanged(OklchChannel::Chroma, 0.25));
    assert_eq!(app.oklch.chroma_input, "0.25");

    let effects = app.reduce(Message::CopyOklch);
    assert!(matches!(
        effects.as_slice(),
        [Effect::CopyToClipboard(css)] if css == "oklch(100% 0.25 40)"
    ));
}

#[test]
fn mounted_gallery_renders() {
    let app = mounted_gallery(MotionPreference::Reduce, &["a.jpg", "b.jpg", "c.jpg"]);
    let _page = app.view();
    let tree = Tree::new(&app.gallery_page());
    assert_eq!(tree.children.len(), 2);
}

#[test]
fn gallery_widget_tree_is_stable_when_the_hint_hides() {
    let mut app = mounted_gallery(MotionPreference::Reduce, &["a.jpg", "b.jpg", "c.jpg"]);
    let mut tree = Tree::new(&app.gallery_page());
    let with_hint = layer_tags(&tree);

    page(&mut app, Message::NextSlide);
    assert!(!app.gallery.view().unwrap().carousel.hint_visible());
    let without_hint = app.gallery_page();
    assert_eq!(layer_tags(&Tree::new(&without_hint)), with_hint);

    tree.diff(&without_hint);
    assert_eq!(layer_tags(&tree), with_hint);
}

#[test]
fn typed_lightness_keeps_fractions_and_slider_snaps() {
    let mut app = app_with(MotionPreference::Reduce);
    app.reduce(Message::OklchInputChanged(OklchChannel::Lightness, "55.5".into()));
    assert_eq!(app.oklch.color.lightness, 55.5);

    app.reduce(Message::OklchChanged(OklchChannel::Hue, 42.6));
    assert_eq!(app.oklch.color.hue, 43.0);
}
