//! Linear algebra kernel for the rendering pipeline.
//!
//! Fixed-size vectors ([`Vec2`], [`Vec3`], [`Vec4`]) and a dense [`Matrix`]
//! with run-time dimensions, used as 4x4 throughout the pipeline.

pub mod matrix;
pub mod vec2;
pub mod vec3;
pub mod vec4;

pub use matrix::Matrix;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
