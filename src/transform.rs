//! World and view transforms.
//!
//! Each pipeline stage is a pure `Triangle -> Triangle` function; the
//! matrices are rebuilt per frame from the mesh and camera state rather
//! than cached, keeping the stages free of hidden state.

use crate::camera::Camera;
use crate::math::matrix::Matrix;
use crate::math::vec3::Vec3;
use crate::mesh::{Mesh, Triangle};

/// Composes a mesh's world matrix: `Rz * Ry * Rx * T`.
///
/// Row-vector chaining, so vertices are rotated about Z, then Y, then X,
/// and translated last. Order matters: the rotations do not commute, and
/// the translation must stay outside the rotations.
pub fn world_matrix(mesh: &Mesh) -> Matrix {
    let rotation = mesh.rotation();
    let translation = mesh.translation();
    Matrix::rotation_z(rotation.z)
        * Matrix::rotation_y(rotation.y)
        * Matrix::rotation_x(rotation.x)
        * Matrix::translation(translation.x, translation.y, translation.z)
}

/// Builds the view matrix for a camera.
///
/// A point-at matrix is formed from the camera position, its look target,
/// and the fixed world up vector, then inverted as a rigid transform.
pub fn view_matrix(camera: &Camera) -> Matrix {
    Matrix::point_at(camera.position, camera.look_target(), Vec3::UP).rigid_inverse()
}

/// Applies an affine transform (world or view) to every vertex.
pub fn transform_triangle(triangle: &Triangle, matrix: &Matrix) -> Triangle {
    Triangle {
        vertices: triangle.vertices.map(|v| matrix.transform_point(v).xyz()),
        color: triangle.color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn world_matrix_rotates_before_translating() {
        let mut mesh = Mesh::default();
        mesh.set_rotation(0.0, FRAC_PI_2, 0.0);
        mesh.set_translation(10.0, 0.0, 0.0);

        // (1,0,0) rotated a quarter turn about Y lands on -Z (row-vector
        // convention), then the translation shifts X by 10.
        let world = world_matrix(&mesh);
        let moved = world.transform_point(Vec3::RIGHT).xyz();
        assert_relative_eq!(moved.x, 10.0, epsilon = 1e-5);
        assert_relative_eq!(moved.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(moved.z, -1.0, epsilon = 1e-5);
    }

    #[test]
    fn world_matrix_identity_for_default_mesh() {
        let mesh = Mesh::default();
        let p = Vec3::new(0.3, -0.7, 2.0);
        let moved = world_matrix(&mesh).transform_point(p).xyz();
        assert_relative_eq!(moved.x, p.x, epsilon = 1e-6);
        assert_relative_eq!(moved.y, p.y, epsilon = 1e-6);
        assert_relative_eq!(moved.z, p.z, epsilon = 1e-6);
    }

    #[test]
    fn view_matrix_for_axis_aligned_camera_is_identity() {
        let camera = Camera::new(Vec3::ZERO, Vec3::FORWARD);
        let view = view_matrix(&camera);
        let p = Vec3::new(1.0, 2.0, 3.0);
        let moved = view.transform_point(p).xyz();
        assert_relative_eq!(moved.x, p.x, epsilon = 1e-5);
        assert_relative_eq!(moved.y, p.y, epsilon = 1e-5);
        assert_relative_eq!(moved.z, p.z, epsilon = 1e-5);
    }

    #[test]
    fn view_matrix_moves_world_opposite_to_camera() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, -2.0), Vec3::FORWARD);
        let view = view_matrix(&camera);
        let origin_in_view = view.transform_point(Vec3::ZERO).xyz();
        assert_relative_eq!(origin_in_view.z, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn transform_preserves_color() {
        let triangle = Triangle::new([Vec3::ZERO; 3], colors::WHITE * 0.5);
        let moved = transform_triangle(&triangle, &Matrix::translation(1.0, 2.0, 3.0));
        assert_eq!(moved.color, triangle.color);
        assert_eq!(moved.vertices[0], Vec3::new(1.0, 2.0, 3.0));
    }
}
