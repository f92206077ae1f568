//! Scanline triangle rasterization.
//!
//! Fills a screen-space triangle one horizontal line at a time using
//! symmetric edge interpolation:
//!
//! 1. **Sort vertices** by Y coordinate (top to bottom in screen space)
//! 2. **Classify** which side the middle vertex lies on by comparing the
//!    inverse slopes of the two edges leaving the top vertex
//! 3. **Rasterize** each scanline by interpolating an X position along the
//!    left and right bounding edges and filling the span between them
//!
//! # Edge selection
//!
//! With vertices sorted as p1 (top), p2 (middle), p3 (bottom), the two
//! inverse slopes `d12 = (p2.x - p1.x) / (p2.y - p1.y)` and
//! `d13 = (p3.x - p1.x) / (p3.y - p1.y)` decide the triangle's shape:
//!
//! ```text
//!  d12 > d13: p2 right        d12 < d13: p2 left
//!
//!      p1                          p1
//!      |\                          /|
//!      | \ p2                 p2  / |
//!      | /                      \ \ |
//!      |/                        \\|
//!      p3                          p3
//! ```
//!
//! Above p2's row the scanline is bounded by the p1-p2 and p1-p3 edges;
//! below it by p2-p3 and p1-p3. A horizontal edge (zero Y extent) gets an
//! inverse slope of 0, and its interpolation gradient is forced to 1.
//!
//! # Span convention
//!
//! Each scanline fills the half-open pixel range `[min_x, max_x)` at
//! integer rows `p1.y ..= p3.y` (float coordinates truncate toward zero).
//! Pixels outside the framebuffer are silently skipped.

use super::device::Device;
use crate::math::vec3::Vec3;
use crate::mesh::Triangle;

/// Linear interpolation with the gradient clamped to `[0, 1]`.
fn interpolate(start: f32, end: f32, gradient: f32) -> f32 {
    start + (end - start) * gradient.clamp(0.0, 1.0)
}

/// Interpolation progress of row `y` along the edge `a -> b`, forced to 1
/// for horizontal edges.
fn edge_gradient(y: f32, a: Vec3, b: Vec3) -> f32 {
    if b.y > a.y {
        (y - a.y) / (b.y - a.y)
    } else {
        1.0
    }
}

/// Fills one scanline bounded by edge `a -> b` on one side and `c -> d`
/// on the other.
fn process_scanline(device: &mut Device, y: i32, a: Vec3, b: Vec3, c: Vec3, d: Vec3, color: Vec3) {
    let left = interpolate(a.x, b.x, edge_gradient(y as f32, a, b)) as i32;
    let right = interpolate(c.x, d.x, edge_gradient(y as f32, c, d)) as i32;

    let (start, end) = if left <= right { (left, right) } else { (right, left) };
    for x in start..end {
        device.draw_point(x, y, color);
    }
}

/// Fills a screen-space triangle with its resolved color.
pub fn fill_triangle(device: &mut Device, triangle: &Triangle) {
    let [mut p1, mut p2, mut p3] = triangle.vertices;

    // Sort by ascending y; three compares suffice.
    if p2.y < p1.y {
        std::mem::swap(&mut p1, &mut p2);
    }
    if p3.y < p2.y {
        std::mem::swap(&mut p2, &mut p3);
    }
    if p2.y < p1.y {
        std::mem::swap(&mut p1, &mut p2);
    }

    let d12 = if p2.y - p1.y > 0.0 {
        (p2.x - p1.x) / (p2.y - p1.y)
    } else {
        0.0
    };
    let d13 = if p3.y - p1.y > 0.0 {
        (p3.x - p1.x) / (p3.y - p1.y)
    } else {
        0.0
    };

    let y_start = p1.y as i32;
    let y_end = p3.y as i32;

    if d12 > d13 {
        // p2 on the right: long edge p1-p3 bounds the left side throughout.
        for y in y_start..=y_end {
            if (y as f32) < p2.y {
                process_scanline(device, y, p1, p3, p1, p2, triangle.color);
            } else {
                process_scanline(device, y, p1, p3, p2, p3, triangle.color);
            }
        }
    } else {
        // p2 on the left: long edge p1-p3 bounds the right side throughout.
        for y in y_start..=y_end {
            if (y as f32) < p2.y {
                process_scanline(device, y, p1, p2, p1, p3, triangle.color);
            } else {
                process_scanline(device, y, p2, p3, p1, p3, triangle.color);
            }
        }
    }
}
