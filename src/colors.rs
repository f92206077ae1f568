//! Color constants and per-pixel color helpers.
//!
//! Colors are [`Vec3`] values with each channel conceptually in `[0, 1]`.
//! Out-of-range values are allowed to accumulate during rendering and are
//! only brought back into range by [`tone_map`] before quantization.

use crate::math::vec3::Vec3;

pub const BLACK: Vec3 = Vec3::new(0.0, 0.0, 0.0);
pub const WHITE: Vec3 = Vec3::new(1.0, 1.0, 1.0);

/// Framebuffer clear color.
pub const BACKGROUND: Vec3 = BLACK;

/// Number of discrete luminance levels used by banded shading.
pub const SHADE_BANDS: u32 = 13;

/// Snaps a light intensity in `[0, 1]` to one of [`SHADE_BANDS`] levels.
///
/// Band `k` maps to level `k / (SHADE_BANDS - 1)`, so the top band is full
/// brightness and the bottom band is pure black.
pub fn quantize_level(intensity: f32) -> f32 {
    let top = (SHADE_BANDS - 1) as f32;
    let band = (intensity * SHADE_BANDS as f32).floor().clamp(0.0, top);
    band / top
}

/// Greyscale luminance of a color (channel mean).
pub fn luminance(color: Vec3) -> f32 {
    (color.x + color.y + color.z) / 3.0
}

/// Maps a pixel into the displayable `[0, 1]` range.
///
/// If the largest channel exceeds 1, the whole pixel is rescaled uniformly
/// so that channel becomes 1 (preserves hue instead of clipping a single
/// channel), then every channel is clamped to `[0, 1]`.
pub fn tone_map(color: Vec3) -> Vec3 {
    let max = color.x.max(color.y).max(color.z);
    let color = if max > 1.0 { color * (1.0 / max) } else { color };
    Vec3::new(
        color.x.clamp(0.0, 1.0),
        color.y.clamp(0.0, 1.0),
        color.z.clamp(0.0, 1.0),
    )
}
