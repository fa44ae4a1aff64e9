mod appearance;
mod audio;
mod core;
mod gallery;
mod navigation;
mod oklch;

/// Describes work that must be performed outside the pure reducer.
pub(super) enum Effect {
    SavePreferences,
    LoadGallery { generation: u64 },
    LoadSlideImages { generation: u64 },
    ScrollGalleryTo(f32),
    CopyToClipboard(String),
    QuitSafely,
}
