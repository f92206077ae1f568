//! Rasterization and the framebuffer device.

mod device;
pub(crate) mod scanline;

pub use device::{Device, EYE_SEPARATION};

/// What gets drawn for each visible triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Scanline-filled triangles (the primary path).
    #[default]
    Filled,
    /// Triangle outlines via Bresenham lines.
    Wireframe,
}
