//! Scene geometry: triangles and meshes.
//!
//! A [`Mesh`] is an ordered list of [`Triangle`]s plus the orientation and
//! position state the transform stage composes into a world matrix. Meshes
//! are built once (from an OBJ file or by direct insertion), mutated only
//! through their setters between frames, and read-only during rendering.

use std::path::Path;

use thiserror::Error;

use crate::colors;
use crate::math::vec3::Vec3;

/// Error produced by the OBJ mesh loader.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to load OBJ file: {0}")]
    Obj(#[from] tobj::LoadError),
}

/// A triangle: three vertices plus one resolved shading color.
///
/// The same type flows through every pipeline stage; the vertices are in
/// whichever space the previous stage produced (model, world, view, or
/// screen). The color starts as the mesh's base color and is resolved to
/// the shaded value by the visibility stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: [Vec3; 3],
    pub color: Vec3,
}

impl Triangle {
    pub const fn new(vertices: [Vec3; 3], color: Vec3) -> Self {
        Self { vertices, color }
    }
}

impl Default for Triangle {
    fn default() -> Self {
        Self {
            vertices: [Vec3::ZERO; 3],
            color: colors::WHITE,
        }
    }
}

/// A polygon list with orientation and position state.
///
/// Rotation angles are Euler angles in **radians** (x, y, z); use
/// [`Mesh::set_rotation_degrees`] when working in degrees. Setters
/// overwrite unconditionally: two successive `set_rotation` calls leave
/// only the last-set angles in effect.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    polygons: Vec<Triangle>,
    rotation: Vec3,
    translation: Vec3,
}

impl Mesh {
    /// Creates a mesh from an existing triangle list.
    pub fn from_triangles(polygons: Vec<Triangle>) -> Self {
        Self {
            polygons,
            rotation: Vec3::ZERO,
            translation: Vec3::ZERO,
        }
    }

    /// Loads a mesh from a Wavefront OBJ file.
    ///
    /// Handles both the plain `v`/`f` form and the attributed
    /// `v`/`vt`/`vn`/`f` form; faces are triangulated at load. Only
    /// positions are kept: face normals are recomputed per frame by the
    /// visibility stage, and texture coordinates have no consumer in a
    /// flat-shaded pipeline. Triangles start out white.
    pub fn from_obj(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let options = tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        };
        let (models, _materials) = tobj::load_obj(path.as_ref(), &options)?;

        let mut polygons = Vec::new();
        for model in &models {
            let mesh = &model.mesh;
            let position = |index: u32| {
                let i = index as usize * 3;
                Vec3::new(mesh.positions[i], mesh.positions[i + 1], mesh.positions[i + 2])
            };
            for face in mesh.indices.chunks_exact(3) {
                polygons.push(Triangle::new(
                    [position(face[0]), position(face[1]), position(face[2])],
                    colors::WHITE,
                ));
            }
        }
        Ok(Self::from_triangles(polygons))
    }

    /// Loads a mesh, reporting failure on stderr and yielding an empty mesh.
    ///
    /// The render pipeline tolerates empty meshes (nothing is drawn for
    /// them), so a missing asset degrades to missing geometry instead of
    /// aborting the frame.
    pub fn from_obj_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::from_obj(path) {
            Ok(mesh) => mesh,
            Err(err) => {
                eprintln!("softrast: could not load {}: {err}", path.display());
                Self::default()
            }
        }
    }

    /// The unit cube: 8 corners at 0/1 coordinates, 12 outward-wound
    /// triangles, two per face.
    pub fn unit_cube() -> Self {
        const P: [Vec3; 8] = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 1.0, 1.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
        ];
        const FACES: [[usize; 3]; 12] = [
            // Front (z = 0)
            [0, 1, 2],
            [0, 2, 3],
            // Right (x = 1)
            [3, 2, 6],
            [3, 6, 7],
            // Back (z = 1)
            [7, 6, 5],
            [7, 5, 4],
            // Left (x = 0)
            [4, 5, 1],
            [4, 1, 0],
            // Top (y = 1)
            [1, 5, 6],
            [1, 6, 2],
            // Bottom (y = 0)
            [7, 4, 0],
            [7, 0, 3],
        ];

        let polygons = FACES
            .iter()
            .map(|&[a, b, c]| Triangle::new([P[a], P[b], P[c]], colors::WHITE))
            .collect();
        Self::from_triangles(polygons)
    }

    /// Appends a triangle; insertion order is draw order prior to the
    /// depth sort.
    pub fn push(&mut self, triangle: Triangle) {
        self.polygons.push(triangle);
    }

    pub fn polygons(&self) -> &[Triangle] {
        &self.polygons
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Euler rotation angles in radians.
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    /// Sets the rotation angles (radians), replacing any previous value.
    pub fn set_rotation(&mut self, x: f32, y: f32, z: f32) {
        self.rotation = Vec3::new(x, y, z);
    }

    /// Sets the rotation angles from degrees, replacing any previous value.
    pub fn set_rotation_degrees(&mut self, x: f32, y: f32, z: f32) {
        self.set_rotation(x.to_radians(), y.to_radians(), z.to_radians());
    }

    /// Sets the translation, replacing any previous value.
    pub fn set_translation(&mut self, x: f32, y: f32, z: f32) {
        self.translation = Vec3::new(x, y, z);
    }
}
