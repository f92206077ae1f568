//! Look-at camera.
//!
//! # Coordinate System
//!
//! Uses a **left-handed** coordinate system:
//! - X: positive right
//! - Y: positive up
//! - Z: positive forward (into screen)

use crate::math::vec3::Vec3;

/// A camera described by a position and a view target.
///
/// `target` is an **offset from `position`**, not an absolute point in the
/// world: the camera looks toward `position + target`. Moving the camera
/// therefore carries its view direction along with it. This deviates from
/// the usual look-at convention (absolute target point) and is kept for
/// output compatibility; callers wanting look-at-a-point behavior must
/// re-derive the offset themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            target: Vec3::FORWARD,
        }
    }
}

impl Camera {
    /// Creates a camera at `position` looking toward `position + target`.
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    /// The absolute point the camera is looking at.
    pub fn look_target(&self) -> Vec3 {
        self.position + self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_is_an_offset_from_position() {
        let camera = Camera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(camera.look_target(), Vec3::new(1.0, 2.0, 4.0));
    }

    #[test]
    fn moving_the_camera_carries_the_view_direction() {
        let mut camera = Camera::default();
        let direction = camera.look_target() - camera.position;
        camera.position = Vec3::new(5.0, 0.0, 0.0);
        assert_eq!(camera.look_target() - camera.position, direction);
    }
}
