//! A CPU-based software-rendered 3D graphics pipeline.
//!
//! Meshes, a camera, and per-mesh transforms go in; a 2D image comes out.
//! All work happens on the CPU in a single sequential pass: perspective
//! projection, a look-at camera, back-face culling, flat directional-light
//! shading, painter's-algorithm depth ordering, and scanline rasterization
//! into an owned pixel buffer.
//!
//! # Quick Start
//!
//! ```ignore
//! use softrast::prelude::*;
//!
//! let mut cube = Mesh::unit_cube();
//! cube.set_translation(0.0, 0.0, 3.0);
//!
//! let camera = Camera::new(Vec3::ZERO, Vec3::FORWARD);
//! let mut device = Device::new(1024, 768);
//! device.render(&camera, &[cube], 90.0, RenderMode::Filled);
//! softrast::encode::write_ppm(&device, "out.ppm")?;
//! ```

// Public API - exposed to library consumers
pub mod camera;
pub mod colors;
pub mod encode;
pub mod light;
pub mod math;
pub mod mesh;
pub mod projection;
pub mod sorting;
pub mod transform;

// Internal modules - used within the crate only
pub(crate) mod render;

// Re-export commonly needed types at crate root for convenience
pub use camera::Camera;
pub use encode::{EncodeError, OutputFormat};
pub use light::{DirectionalLight, ShadingMode};
pub use mesh::{LoadError, Mesh, Triangle};
pub use render::{Device, RenderMode, EYE_SEPARATION};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use softrast::prelude::*;
/// ```
pub mod prelude {
    // Scene
    pub use crate::camera::Camera;
    pub use crate::mesh::{LoadError, Mesh, Triangle};

    // Rendering
    pub use crate::light::{DirectionalLight, ShadingMode};
    pub use crate::render::{Device, RenderMode};

    // Output
    pub use crate::encode::OutputFormat;

    // Math
    pub use crate::math::matrix::Matrix;
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;
    pub use crate::math::vec4::Vec4;
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::scanline::fill_triangle;
}
