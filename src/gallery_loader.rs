//! Image list loading for the gallery.
//!
//! The manifest is a JSON array of image names, read from a local file or
//! fetched over HTTP. This module never hands back an empty list: a missing
//! or unhelpful manifest falls back to a built-in selection, so the gallery
//! always has something to show.

use anyhow::{Context, Result, bail};
use reqwest::header::CACHE_CONTROL;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Shown when the manifest answers but lists nothing useful.
pub const DEFAULT_IMAGES: [&str; 3] = ["elephantdanielfirman.jpg", "hefti.webp", "fishman.jpg"];

/// Shown when the manifest can't be fetched or decoded at all.
pub const OFFLINE_IMAGES: [&str; 6] = [
    "elephantdanielfirman.jpg",
    "hefti.webp",
    "emilalzamora.webp",
    "rothko.jpg",
    "mariamartins.jpg",
    "Remedios.jpg",
];

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the manifest lives and what relative names resolve against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageListSource {
    pub manifest: String,
    pub image_root: String,
}

/// Decoded RGBA pixels for one slide.
#[derive(Debug, Clone)]
pub struct SlidePixels {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Load the gallery's image references, resolved and in manifest order.
pub fn load_image_list(source: &ImageListSource) -> Vec<String> {
    let names = match fetch_manifest(&source.manifest) {
        Ok(Some(body)) => match parse_manifest(&body) {
            Ok(names) => names,
            Err(err) => {
                warn!("Manifest is unreadable, using offline images: {err:#}");
                offline_names()
            }
        },
        Ok(None) => {
            info!(manifest = %source.manifest, "Manifest unavailable, using default images");
            default_names()
        }
        Err(err) => {
            warn!("Manifest fetch failed, using offline images: {err:#}");
            offline_names()
        }
    };
    let resolved: Vec<String> = names
        .iter()
        .map(|name| resolve_reference(name, &source.image_root))
        .collect();
    info!(count = resolved.len(), "Loaded gallery image list");
    resolved
}

/// Read the manifest body. `Ok(None)` means the server answered with a
/// non-success status, which counts as an empty manifest.
fn fetch_manifest(manifest: &str) -> Result<Option<String>> {
    if is_remote(manifest) {
        let client = reqwest::blocking::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .context("Building HTTP client")?;
        let response = client
            .get(manifest)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .with_context(|| format!("Requesting {manifest}"))?;
        if !response.status().is_success() {
            debug!(status = %response.status(), "Manifest request was not successful");
            return Ok(None);
        }
        let body = response
            .text()
            .with_context(|| format!("Reading body of {manifest}"))?;
        Ok(Some(body))
    } else {
        let body = fs::read_to_string(manifest)
            .with_context(|| format!("Reading manifest at {manifest}"))?;
        Ok(Some(body))
    }
}

/// Extract image names from a manifest body.
///
/// Anything other than a non-empty array yields the default names; an array
/// holding non-strings is an error.
pub fn parse_manifest(body: &str) -> Result<Vec<String>> {
    let value: Value = serde_json::from_str(body).context("Decoding manifest JSON")?;
    let entries = match value {
        Value::Array(entries) if !entries.is_empty() => entries,
        _ => return Ok(default_names()),
    };
    entries
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| match entry {
            Value::String(name) => Ok(name),
            other => bail!("manifest entry {idx} is not a string: {other}"),
        })
        .collect()
}

/// Absolute locators pass through; anything else hangs off `image_root`.
pub fn resolve_reference(name: &str, image_root: &str) -> String {
    if name.starts_with("http") {
        return name.to_string();
    }
    let relative = name.trim_start_matches('/');
    if is_remote(image_root) {
        format!("{}/{}", image_root.trim_end_matches('/'), relative)
    } else {
        Path::new(image_root)
            .join(relative)
            .to_string_lossy()
            .into_owned()
    }
}

/// Fetch and decode one slide image.
pub fn load_slide_pixels(reference: &str) -> Result<SlidePixels> {
    let bytes = if is_remote(reference) {
        let client = reqwest::blocking::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .context("Building HTTP client")?;
        let response = client
            .get(reference)
            .send()
            .and_then(|r| r.error_for_status())
            .with_context(|| format!("Downloading {reference}"))?;
        response
            .bytes()
            .with_context(|| format!("Reading body of {reference}"))?
            .to_vec()
    } else {
        fs::read(reference).with_context(|| format!("Reading image at {reference}"))?
    };
    let decoded = image::load_from_memory(&bytes)
        .with_context(|| format!("Decoding image {reference}"))?
        .to_rgba8();
    let (width, height) = decoded.dimensions();
    debug!(reference, width, height, "Decoded slide image");
    Ok(SlidePixels {
        width,
        height,
        rgba: decoded.into_raw(),
    })
}

fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

fn default_names() -> Vec<String> {
    DEFAULT_IMAGES.iter().map(|s| s.to_string()).collect()
}

fn offline_names() -> Vec<String> {
    OFFLINE_IMAGES.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "overfunction-loader-{}-{name}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn source_for(manifest: &Path) -> ImageListSource {
        ImageListSource {
            manifest: manifest.to_string_lossy().into_owned(),
            image_root: "/srv/images".to_string(),
        }
    }

    #[test]
    fn keeps_manifest_order() {
        let names = parse_manifest(r#"["b.jpg", "a.jpg", "c.jpg"]"#).unwrap();
        assert_eq!(names, vec!["b.jpg", "a.jpg", "c.jpg"]);
    }

    #[test]
    fn empty_or_non_array_manifest_uses_defaults() {
        assert_eq!(parse_manifest("[]").unwrap(), default_names());
        assert_eq!(parse_manifest(r#"{"images": []}"#).unwrap(), default_names());
        assert_eq!(parse_manifest("null").unwrap(), default_names());
    }

    #[test]
    fn non_string_entries_are_rejected() {
        assert!(parse_manifest(r#"["a.jpg", 3]"#).is_err());
        assert!(parse_manifest("not json").is_err());
    }

    #[test]
    fn resolves_relative_and_absolute_references() {
        assert_eq!(
            resolve_reference("https://cdn.example/x.jpg", "site/images"),
            "https://cdn.example/x.jpg"
        );
        assert_eq!(
            resolve_reference("/rothko.jpg", "https://example.org/images/"),
            "https://example.org/images/rothko.jpg"
        );
        assert_eq!(
            resolve_reference("/rothko.jpg", "site/images"),
            Path::new("site/images")
                .join("rothko.jpg")
                .to_string_lossy()
                .into_owned()
        );
    }

    #[test]
    fn local_manifest_is_resolved_against_root() {
        let dir = scratch_dir("local");
        let manifest = dir.join("images.json");
        fs::write(&manifest, r#"["one.png", "https://cdn.example/two.png"]"#).unwrap();
        let list = load_image_list(&source_for(&manifest));
        assert_eq!(list.len(), 2);
        assert!(list[0].ends_with("one.png"));
        assert_eq!(list[1], "https://cdn.example/two.png");
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn missing_manifest_uses_offline_images() {
        let dir = scratch_dir("missing");
        let list = load_image_list(&source_for(&dir.join("absent.json")));
        assert_eq!(list.len(), OFFLINE_IMAGES.len());
        assert!(list[5].ends_with("Remedios.jpg"));
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn empty_manifest_uses_default_images() {
        let dir = scratch_dir("empty");
        let manifest = dir.join("images.json");
        fs::write(&manifest, "[]").unwrap();
        let list = load_image_list(&source_for(&manifest));
        assert_eq!(list.len(), DEFAULT_IMAGES.len());
        assert!(list[2].ends_with("fishman.jpg"));
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn decodes_local_slide() {
        let dir = scratch_dir("decode");
        let path = dir.join("tiny.png");
        image::RgbaImage::new(3, 2).save(&path).unwrap();
        let pixels = load_slide_pixels(&path.to_string_lossy()).unwrap();
        assert_eq!((pixels.width, pixels.height), (3, 2));
        assert_eq!(pixels.rgba.len(), 3 * 2 * 4);
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn undecodable_slide_is_an_error() {
        let dir = scratch_dir("garbage");
        let path = dir.join("broken.jpg");
        fs::write(&path, b"definitely not a jpeg").unwrap();
        assert!(load_slide_pixels(&path.to_string_lossy()).is_err());
        let _ = fs::remove_dir_all(dir);
    }
}
