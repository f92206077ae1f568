//! Perspective projection and viewport mapping.

use crate::math::matrix::Matrix;
use crate::math::vec3::Vec3;
use crate::mesh::Triangle;

/// Near clipping plane distance.
pub const Z_NEAR: f32 = 0.1;
/// Far clipping plane distance.
pub const Z_FAR: f32 = 1000.0;

/// Below this magnitude a perspective divisor counts as zero and the
/// vertex is passed through unmodified.
const W_EPSILON: f32 = 1e-6;

/// Perspective projection parameters.
///
/// The aspect term is `height / width` (it scales x by the inverse of how
/// wide the frame is relative to its height); the focal term is
/// `1 / tan(fov / 2)` with the field of view given in degrees.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    fov_degrees: f32,
    aspect: f32,
}

impl Projection {
    pub fn new(fov_degrees: f32, width: u32, height: u32) -> Self {
        Self {
            fov_degrees,
            aspect: height as f32 / width as f32,
        }
    }

    /// Builds the perspective projection matrix.
    ///
    /// Maps view-space z into `[0, 1]` between the near and far planes and
    /// copies z into w so the perspective divide scales x and y by depth.
    pub fn matrix(&self) -> Matrix {
        let focal = 1.0 / (self.fov_degrees * 0.5).to_radians().tan();

        let mut m = Matrix::new(4, 4);
        m[(0, 0)] = self.aspect * focal;
        m[(1, 1)] = focal;
        m[(2, 2)] = Z_FAR / (Z_FAR - Z_NEAR);
        m[(3, 2)] = (-Z_FAR * Z_NEAR) / (Z_FAR - Z_NEAR);
        m[(2, 3)] = 1.0;
        m
    }
}

/// Projects a view-space triangle into normalized device coordinates.
///
/// Each vertex is multiplied by the projection matrix and divided by the
/// resulting w. A vertex whose w lands on zero (on the camera plane) is
/// left unmodified rather than divided.
pub fn project(triangle: &Triangle, projection: &Matrix) -> Triangle {
    Triangle {
        vertices: triangle.vertices.map(|v| {
            let clip = projection.transform_point(v);
            if clip.w.abs() > W_EPSILON {
                Vec3::new(clip.x / clip.w, clip.y / clip.w, clip.z / clip.w)
            } else {
                v
            }
        }),
        color: triangle.color,
    }
}

/// Maps normalized device coordinates to pixel coordinates.
///
/// Shifts the `[-1, 1]` range to `[0, 2]` and scales by half the frame
/// size. z is carried through for the depth sort.
pub fn to_screen(triangle: &Triangle, width: u32, height: u32) -> Triangle {
    let half_width = 0.5 * width as f32;
    let half_height = 0.5 * height as f32;
    Triangle {
        vertices: triangle.vertices.map(|v| {
            Vec3::new((v.x + 1.0) * half_width, (v.y + 1.0) * half_height, v.z)
        }),
        color: triangle.color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;
    use approx::assert_relative_eq;

    fn triangle_at(v: Vec3) -> Triangle {
        Triangle::new([v; 3], colors::WHITE)
    }

    #[test]
    fn square_frame_with_90_degree_fov_is_a_unit_frustum() {
        // fov 90 makes the focal term 1, so x/z and y/z fall straight out.
        let projection = Projection::new(90.0, 64, 64).matrix();
        let projected = project(&triangle_at(Vec3::new(1.0, 1.0, 2.0)), &projection);
        let v = projected.vertices[0];
        assert_relative_eq!(v.x, 0.5, epsilon = 1e-5);
        assert_relative_eq!(v.y, 0.5, epsilon = 1e-5);
    }

    #[test]
    fn aspect_scales_x_by_height_over_width() {
        let projection = Projection::new(90.0, 200, 100).matrix();
        let projected = project(&triangle_at(Vec3::new(1.0, 1.0, 1.0)), &projection);
        let v = projected.vertices[0];
        assert_relative_eq!(v.x, 0.5, epsilon = 1e-5);
        assert_relative_eq!(v.y, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn depth_maps_into_unit_range() {
        let projection = Projection::new(90.0, 64, 64).matrix();
        let near = project(&triangle_at(Vec3::new(0.0, 0.0, Z_NEAR)), &projection);
        let far = project(&triangle_at(Vec3::new(0.0, 0.0, Z_FAR)), &projection);
        assert_relative_eq!(near.vertices[0].z, 0.0, epsilon = 1e-4);
        assert_relative_eq!(far.vertices[0].z, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn zero_w_vertex_is_left_unmodified() {
        let projection = Projection::new(90.0, 64, 64).matrix();
        // z = 0 puts the vertex on the camera plane: w comes out zero.
        let on_plane = Vec3::new(0.3, -0.2, 0.0);
        let projected = project(&triangle_at(on_plane), &projection);
        assert_eq!(projected.vertices[0], on_plane);
    }

    #[test]
    fn screen_mapping_covers_the_frame() {
        let ndc = Triangle::new(
            [
                Vec3::new(-1.0, -1.0, 0.5),
                Vec3::new(1.0, 1.0, 0.5),
                Vec3::new(0.0, 0.0, 0.5),
            ],
            colors::WHITE,
        );
        let screen = to_screen(&ndc, 640, 480);
        assert_eq!(screen.vertices[0], Vec3::new(0.0, 0.0, 0.5));
        assert_eq!(screen.vertices[1], Vec3::new(640.0, 480.0, 0.5));
        assert_eq!(screen.vertices[2], Vec3::new(320.0, 240.0, 0.5));
    }
}
