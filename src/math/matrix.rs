//! Dense matrix with run-time dimensions, using the row-vector convention.
//!
//! # Convention
//! - Vectors are **row vectors** on the left: `v * M`
//! - Translation is stored in the **last row**
//! - Transforms chain **left-to-right**: `v * A * B` applies A first, then B
//!
//! The pipeline only ever builds 4x4 matrices, but the type keeps general
//! dimensions so the arithmetic operators can state their preconditions.
//!
//! # Example
//! ```ignore
//! let world = Matrix::rotation_z(roll) * Matrix::translation(0.0, 0.0, 3.0);
//! let transformed = world.transform_point(vertex); // roll first, then translate
//! ```

use std::ops::{Add, Index, IndexMut, Mul, Sub};

use super::vec3::Vec3;
use super::vec4::Vec4;

/// Rectangular grid of `f32` scalars, indexed by `(row, col)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Matrix {
    /// Creates a `rows` x `cols` matrix filled with zeros.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Creates a 4x4 matrix from explicit rows.
    pub fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        let mut m = Matrix::new(4, 4);
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                m[(r, c)] = *value;
            }
        }
        m
    }

    /// Creates an `n` x `n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Matrix::new(n, n);
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        m
    }

    /// Creates a rotation matrix around the X axis (angle in radians).
    pub fn rotation_x(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Matrix::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, s, 0.0],
            [0.0, -s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the Y axis (angle in radians).
    pub fn rotation_y(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Matrix::from_rows([
            [c, 0.0, -s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the Z axis (angle in radians).
    pub fn rotation_z(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Matrix::from_rows([
            [c, s, 0.0, 0.0],
            [-s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a translation matrix.
    ///
    /// Translation is stored in the last row (row-vector convention).
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        Matrix::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [x, y, z, 1.0],
        ])
    }

    /// Creates a camera matrix from a position, a point to look at, and an
    /// up direction.
    ///
    /// The rows are the camera's right, up, and forward basis vectors
    /// followed by its position. Invert with [`Matrix::rigid_inverse`] to
    /// obtain the view matrix.
    pub fn point_at(position: Vec3, target: Vec3, up: Vec3) -> Self {
        let forward = (target - position).normalize();
        // Re-orthogonalize up against the actual forward direction
        let up = (up - forward * up.dot(forward)).normalize();
        let right = up.cross(forward);

        Matrix::from_rows([
            [right.x, right.y, right.z, 0.0],
            [up.x, up.y, up.z, 0.0],
            [forward.x, forward.y, forward.z, 0.0],
            [position.x, position.y, position.z, 1.0],
        ])
    }

    /// Inverts a rigid transform (rotation + translation only).
    ///
    /// The rotation block is transposed and the translation row is
    /// re-projected through it. Not a general matrix inverse: scaling or
    /// shearing input produces garbage.
    pub fn rigid_inverse(&self) -> Self {
        debug_assert!(self.rows == 4 && self.cols == 4, "rigid_inverse is 4x4 only");

        let m = self;
        let mut inv = Matrix::new(4, 4);
        for r in 0..3 {
            for c in 0..3 {
                inv[(r, c)] = m[(c, r)];
            }
        }
        for c in 0..3 {
            inv[(3, c)] = -(m[(3, 0)] * inv[(0, c)] + m[(3, 1)] * inv[(1, c)] + m[(3, 2)] * inv[(2, c)]);
        }
        inv[(3, 3)] = 1.0;
        inv
    }

    /// Returns the transpose.
    pub fn transpose(&self) -> Self {
        let mut t = Matrix::new(self.cols, self.rows);
        for r in 0..self.rows {
            for c in 0..self.cols {
                t[(c, r)] = self[(r, c)];
            }
        }
        t
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Transforms a homogeneous row vector: `v * M`.
    pub fn transform_vec4(&self, v: Vec4) -> Vec4 {
        debug_assert!(self.rows == 4 && self.cols == 4, "transform_vec4 is 4x4 only");

        Vec4::new(
            v.x * self[(0, 0)] + v.y * self[(1, 0)] + v.z * self[(2, 0)] + v.w * self[(3, 0)],
            v.x * self[(0, 1)] + v.y * self[(1, 1)] + v.z * self[(2, 1)] + v.w * self[(3, 1)],
            v.x * self[(0, 2)] + v.y * self[(1, 2)] + v.z * self[(2, 2)] + v.w * self[(3, 2)],
            v.x * self[(0, 3)] + v.y * self[(1, 3)] + v.z * self[(2, 3)] + v.w * self[(3, 3)],
        )
    }

    /// Transforms a point, promoting it to homogeneous form with `w = 1`.
    ///
    /// The perspective divide is a separate pipeline step; the returned `w`
    /// is carried through untouched.
    pub fn transform_point(&self, v: Vec3) -> Vec4 {
        self.transform_vec4(Vec4::from_vec3(v, 1.0))
    }
}

/// Matrix addition. Both operands must have equal dimensions.
impl Add<Matrix> for Matrix {
    type Output = Matrix;

    fn add(self, rhs: Matrix) -> Self::Output {
        assert!(
            self.rows == rhs.rows && self.cols == rhs.cols,
            "matrix addition requires equal dimensions ({}x{} vs {}x{})",
            self.rows,
            self.cols,
            rhs.rows,
            rhs.cols
        );
        let mut out = self;
        for (a, b) in out.data.iter_mut().zip(rhs.data.iter()) {
            *a += b;
        }
        out
    }
}

/// Matrix subtraction. Both operands must have equal dimensions.
impl Sub<Matrix> for Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Matrix) -> Self::Output {
        assert!(
            self.rows == rhs.rows && self.cols == rhs.cols,
            "matrix subtraction requires equal dimensions ({}x{} vs {}x{})",
            self.rows,
            self.cols,
            rhs.rows,
            rhs.cols
        );
        let mut out = self;
        for (a, b) in out.data.iter_mut().zip(rhs.data.iter()) {
            *a -= b;
        }
        out
    }
}

/// Matrix multiplication: requires `lhs.cols == rhs.rows`.
///
/// For the row-vector convention, `v * A * B` applies A first, then B.
impl Mul<Matrix> for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Self::Output {
        &self * &rhs
    }
}

impl Mul<&Matrix> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Self::Output {
        assert!(
            self.cols == rhs.rows,
            "matrix multiplication requires lhs.cols == rhs.rows ({}x{} vs {}x{})",
            self.rows,
            self.cols,
            rhs.rows,
            rhs.cols
        );
        let mut out = Matrix::new(self.rows, rhs.cols);
        for r in 0..self.rows {
            for c in 0..rhs.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self[(r, k)] * rhs[(k, c)];
                }
                out[(r, c)] = sum;
            }
        }
        out
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f32;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        &mut self.data[row * self.cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_3;

    fn assert_matrix_eq(a: &Matrix, b: &Matrix, epsilon: f32) {
        assert_eq!(a.rows(), b.rows());
        assert_eq!(a.cols(), b.cols());
        for r in 0..a.rows() {
            for c in 0..a.cols() {
                assert_relative_eq!(a[(r, c)], b[(r, c)], epsilon = epsilon);
            }
        }
    }

    #[test]
    fn identity_is_multiplicative_unit() {
        let a = Matrix::rotation_y(0.7) * Matrix::translation(1.0, -2.0, 5.0);
        let product = &a * &Matrix::identity(4);
        assert_eq!(product, a);
    }

    #[test]
    fn multiplication_is_associative() {
        let a = Matrix::rotation_x(0.3);
        let b = Matrix::rotation_y(-1.1);
        let c = Matrix::translation(2.0, 4.0, -6.0);
        let left = &(&a * &b) * &c;
        let right = &a * &(&b * &c);
        assert_matrix_eq(&left, &right, 1e-5);
    }

    #[test]
    fn rectangular_multiplication_shapes() {
        let a = Matrix::new(2, 3);
        let b = Matrix::new(3, 5);
        let product = &a * &b;
        assert_eq!(product.rows(), 2);
        assert_eq!(product.cols(), 5);
    }

    #[test]
    #[should_panic(expected = "lhs.cols == rhs.rows")]
    fn incompatible_multiplication_panics() {
        let a = Matrix::new(2, 3);
        let b = Matrix::new(2, 3);
        let _ = &a * &b;
    }

    #[test]
    #[should_panic(expected = "equal dimensions")]
    fn mismatched_addition_panics() {
        let _ = Matrix::new(2, 3) + Matrix::new(3, 2);
    }

    #[test]
    fn rotation_round_trip_restores_point() {
        let p = Vec3::new(1.5, -0.5, 2.0);
        for (forward, backward) in [
            (Matrix::rotation_x(FRAC_PI_3), Matrix::rotation_x(-FRAC_PI_3)),
            (Matrix::rotation_y(FRAC_PI_3), Matrix::rotation_y(-FRAC_PI_3)),
            (Matrix::rotation_z(FRAC_PI_3), Matrix::rotation_z(-FRAC_PI_3)),
        ] {
            let round_trip = backward.transform_point(forward.transform_point(p).xyz()).xyz();
            assert_relative_eq!(round_trip.x, p.x, epsilon = 1e-5);
            assert_relative_eq!(round_trip.y, p.y, epsilon = 1e-5);
            assert_relative_eq!(round_trip.z, p.z, epsilon = 1e-5);
        }
    }

    #[test]
    fn rotation_preserves_length() {
        let p = Vec3::new(0.3, 0.4, 1.2);
        let rotated = Matrix::rotation_z(1.9).transform_point(p).xyz();
        assert_relative_eq!(rotated.magnitude(), p.magnitude(), epsilon = 1e-5);
    }

    #[test]
    fn translation_moves_points() {
        let moved = Matrix::translation(1.0, 2.0, 3.0).transform_point(Vec3::ZERO).xyz();
        assert_eq!(moved, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn rigid_inverse_undoes_point_at() {
        let camera = Matrix::point_at(
            Vec3::new(1.0, 2.0, -3.0),
            Vec3::new(0.5, 0.0, 4.0),
            Vec3::UP,
        );
        let product = &camera * &camera.rigid_inverse();
        assert_matrix_eq(&product, &Matrix::identity(4), 1e-5);
    }

    #[test]
    fn transpose_swaps_indices() {
        let m = Matrix::translation(7.0, 8.0, 9.0);
        let t = m.transpose();
        assert_eq!(t[(0, 3)], 7.0);
        assert_eq!(t[(1, 3)], 8.0);
        assert_eq!(t[(2, 3)], 9.0);
    }
}
