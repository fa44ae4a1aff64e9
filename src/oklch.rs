//! OKLCH colours: CSS formatting, tint strips and conversion to sRGB for
//! on-screen previews.

use iced::Color;

pub const LIGHTNESS_MAX: f32 = 100.0;
/// Upper end of the chroma slider; the numeric field accepts up to
/// [`CHROMA_INPUT_MAX`].
pub const CHROMA_SLIDER_MAX: f32 = 0.4;
pub const CHROMA_INPUT_MAX: f32 = 1.0;
pub const HUE_MAX: f32 = 360.0;
pub const TINT_COUNT: usize = 7;

/// Out-of-gamut tolerance for channels that land a hair outside `[0, 1]`.
const GAMUT_EPSILON: f32 = 1e-4;

/// A colour in OKLCH with lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    pub lightness: f32,
    pub chroma: f32,
    pub hue: f32,
}

impl Default for Oklch {
    fn default() -> Self {
        Self {
            lightness: 70.0,
            chroma: 0.12,
            hue: 40.0,
        }
    }
}

/// An sRGB conversion result. Channels are already clipped to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub color: Color,
    pub in_gamut: bool,
}

impl Oklch {
    /// CSS value, e.g. `oklch(70% 0.12 40)`.
    pub fn css(&self) -> String {
        format!("oklch({}% {} {})", self.lightness, self.chroma, self.hue)
    }

    /// Seven lightness steps from 15% to 87% at this chroma and hue.
    pub fn tints(&self) -> Vec<Oklch> {
        (0..TINT_COUNT)
            .map(|i| Oklch {
                lightness: 15.0 + i as f32 * 12.0,
                ..*self
            })
            .collect()
    }

    pub fn to_srgb(&self) -> Srgb {
        let l = self.lightness / 100.0;
        let hue = self.hue.to_radians();
        let a = self.chroma * hue.cos();
        let b = self.chroma * hue.sin();

        let l_ = l + 0.396_337_78 * a + 0.215_803_76 * b;
        let m_ = l - 0.105_561_346 * a - 0.063_854_17 * b;
        let s_ = l - 0.089_484_18 * a - 1.291_485_5 * b;
        let (l3, m3, s3) = (l_.powi(3), m_.powi(3), s_.powi(3));

        let linear = [
            4.076_741_7 * l3 - 3.307_711_6 * m3 + 0.230_969_94 * s3,
            -1.268_438 * l3 + 2.609_757_4 * m3 - 0.341_319_38 * s3,
            -0.004_196_086_3 * l3 - 0.703_418_6 * m3 + 1.707_614_7 * s3,
        ];
        let in_gamut = linear
            .iter()
            .all(|c| (-GAMUT_EPSILON..=1.0 + GAMUT_EPSILON).contains(c));
        let [r, g, b] = linear.map(|c| encode_gamma(c.clamp(0.0, 1.0)));
        Srgb {
            color: Color::from_rgb(r, g, b),
            in_gamut,
        }
    }
}

fn encode_gamma(linear: f32) -> f32 {
    if linear <= 0.003_130_8 {
        12.92 * linear
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

pub fn clamp_lightness(value: f32) -> f32 {
    value.clamp(0.0, LIGHTNESS_MAX)
}

pub fn clamp_chroma(value: f32) -> f32 {
    ((value.clamp(0.0, CHROMA_INPUT_MAX)) * 1000.0).round() / 1000.0
}

pub fn clamp_hue(value: f32) -> f32 {
    value.clamp(0.0, HUE_MAX)
}

/// Parse a numeric field. Blank input reads as zero; garbage is ignored.
pub fn parse_field(input: &str) -> Option<f32> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f32>().ok().filter(|v| v.is_finite())
}
