//! Visibility and shading: face normals, back-face culling, and the
//! directional light.

use crate::colors;
use crate::math::vec3::Vec3;
use crate::mesh::Triangle;

/// Minimum light intensity. Keeps grazing-angle faces visibly shaded
/// instead of pure black.
pub const MIN_INTENSITY: f32 = 0.1;

/// How a scalar light intensity becomes a luminance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadingMode {
    /// Quantize into [`colors::SHADE_BANDS`] discrete levels.
    #[default]
    Banded,
    /// Use the intensity directly as the luminance.
    Greyscale,
}

impl ShadingMode {
    pub fn apply(self, intensity: f32) -> f32 {
        match self {
            ShadingMode::Banded => colors::quantize_level(intensity),
            ShadingMode::Greyscale => intensity,
        }
    }
}

/// A directional light illuminating the scene uniformly from one direction.
///
/// A face whose normal matches the light direction receives full intensity.
#[derive(Debug, Clone, Copy)]
pub struct DirectionalLight {
    /// Normalized light direction.
    pub direction: Vec3,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            direction: Vec3::BACK,
        }
    }
}

impl DirectionalLight {
    /// Creates a light for the given direction. The direction is
    /// normalized automatically.
    pub fn new(direction: Vec3) -> Self {
        Self {
            direction: direction.normalize(),
        }
    }

    /// Lambertian intensity for a unit face normal, floored at
    /// [`MIN_INTENSITY`] and clamped to 1.
    pub fn intensity(&self, normal: Vec3) -> f32 {
        normal.dot(self.direction).clamp(MIN_INTENSITY, 1.0)
    }
}

/// Unit face normal of a world-space triangle.
///
/// Degenerate triangles (collinear vertices) yield the zero vector.
pub fn face_normal(triangle: &Triangle) -> Vec3 {
    let [v0, v1, v2] = triangle.vertices;
    (v1 - v0).cross(v2 - v0).normalize()
}

/// True when the face points away from the camera and should be culled.
///
/// Tests the sign of `normal . (camera - vertex)`: negative means the
/// camera is on the far side of the face plane. Edge-on faces (dot == 0)
/// are kept; they rasterize to nothing.
pub fn is_back_face(normal: Vec3, vertex: Vec3, camera_position: Vec3) -> bool {
    normal.dot(camera_position - vertex) < 0.0
}
