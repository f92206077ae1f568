//! The framebuffer device and the per-frame render loop.

use crate::camera::Camera;
use crate::colors;
use crate::light::{self, DirectionalLight, ShadingMode};
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::mesh::{Mesh, Triangle};
use crate::projection::{self, Projection};
use crate::render::scanline;
use crate::render::RenderMode;
use crate::sorting;
use crate::transform;

/// Horizontal camera offset, in world units, between the stereo eyes.
pub const EYE_SEPARATION: f32 = 0.1;

/// Owns the pixel buffer and runs the rendering pipeline into it.
///
/// The framebuffer is a dense row-major `width * height` array of linear
/// RGB colors, allocated once and never resized. Every [`Device::render`]
/// call clears it to the background color before drawing, so frames are
/// independent of each other.
pub struct Device {
    width: u32,
    height: u32,
    framebuffer: Vec<Vec3>,
    /// The scene's single directional light.
    pub light: DirectionalLight,
    /// Intensity-to-luminance policy for shaded triangles.
    pub shading: ShadingMode,
}

impl Device {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            framebuffer: vec![colors::BACKGROUND; (width * height) as usize],
            light: DirectionalLight::default(),
            shading: ShadingMode::default(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw linear-color framebuffer, row-major.
    pub fn pixels(&self) -> &[Vec3] {
        &self.framebuffer
    }

    /// The color at (x, y), or `None` if out of bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Vec3> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.framebuffer[(x as u32 + y as u32 * self.width) as usize])
        } else {
            None
        }
    }

    pub fn clear(&mut self, color: Vec3) {
        self.framebuffer.fill(color);
    }

    /// Writes a color at (x, y). Out-of-bounds coordinates are silently
    /// clipped.
    #[inline]
    pub fn draw_point(&mut self, x: i32, y: i32, color: Vec3) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            self.framebuffer[(x as u32 + y as u32 * self.width) as usize] = color;
        }
    }

    /// Draws a line with Bresenham's algorithm.
    ///
    /// Steep lines are transposed so the loop always walks the major axis,
    /// and an integer error accumulator decides when to step the minor
    /// axis.
    pub fn draw_line(&mut self, from: Vec2, to: Vec2, color: Vec3) {
        let (mut x0, mut y0) = (from.x as i32, from.y as i32);
        let (mut x1, mut y1) = (to.x as i32, to.y as i32);

        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        if steep {
            std::mem::swap(&mut x0, &mut y0);
            std::mem::swap(&mut x1, &mut y1);
        }
        if x0 > x1 {
            std::mem::swap(&mut x0, &mut x1);
            std::mem::swap(&mut y0, &mut y1);
        }

        let dx = x1 - x0;
        let dy = (y1 - y0).abs();
        let y_step = if y0 < y1 { 1 } else { -1 };

        let mut error = dx / 2;
        let mut y = y0;
        for x in x0..=x1 {
            if steep {
                self.draw_point(y, x, color);
            } else {
                self.draw_point(x, y, color);
            }
            error -= dy;
            if error < 0 {
                y += y_step;
                error += dx;
            }
        }
    }

    /// Draws a triangle outline.
    pub fn draw_triangle(&mut self, triangle: &Triangle) {
        let [v0, v1, v2] = triangle.vertices;
        let (a, b, c) = (
            Vec2::new(v0.x, v0.y),
            Vec2::new(v1.x, v1.y),
            Vec2::new(v2.x, v2.y),
        );
        self.draw_line(a, b, triangle.color);
        self.draw_line(b, c, triangle.color);
        self.draw_line(a, c, triangle.color);
    }

    /// Renders one frame.
    ///
    /// Per mesh: compose the world matrix, then per triangle: transform to
    /// world space, cull back faces, shade, transform through the view and
    /// projection matrices, and map to pixel coordinates. Survivors are
    /// depth-sorted back to front and rasterized in that order.
    pub fn render(&mut self, camera: &Camera, meshes: &[Mesh], fov_degrees: f32, mode: RenderMode) {
        self.clear(colors::BACKGROUND);

        let projection_matrix = Projection::new(fov_degrees, self.width, self.height).matrix();
        let view = transform::view_matrix(camera);

        let mut visible: Vec<Triangle> = Vec::new();
        for mesh in meshes {
            let world = transform::world_matrix(mesh);
            for triangle in mesh.polygons() {
                let world_triangle = transform::transform_triangle(triangle, &world);

                let normal = light::face_normal(&world_triangle);
                if light::is_back_face(normal, world_triangle.vertices[0], camera.position) {
                    continue;
                }

                let level = self.shading.apply(self.light.intensity(normal));
                let shaded = Triangle {
                    vertices: world_triangle.vertices,
                    color: world_triangle.color * level,
                };

                let view_triangle = transform::transform_triangle(&shaded, &view);
                let ndc_triangle = projection::project(&view_triangle, &projection_matrix);
                visible.push(projection::to_screen(&ndc_triangle, self.width, self.height));
            }
        }

        sorting::sort_back_to_front(&mut visible);

        for triangle in &visible {
            match mode {
                RenderMode::Filled => scanline::fill_triangle(self, triangle),
                RenderMode::Wireframe => self.draw_triangle(triangle),
            }
        }
    }

    /// Renders a red/blue stereo anaglyph.
    ///
    /// Three passes: the nominal camera position (a full-color preview,
    /// returned to the caller), the camera shifted left by
    /// [`EYE_SEPARATION`], and shifted right by the same baseline. The
    /// composite keeps the left eye's greyscale luminance in the red
    /// channel and the right eye's in the blue channel; green stays zero.
    pub fn render_anaglyph(&mut self, camera: &Camera, meshes: &[Mesh], fov_degrees: f32) -> Vec<Vec3> {
        self.render(camera, meshes, fov_degrees, RenderMode::Filled);
        let preview = self.framebuffer.clone();

        let mut eye = *camera;
        eye.position.x = camera.position.x - EYE_SEPARATION;
        self.render(&eye, meshes, fov_degrees, RenderMode::Filled);
        let left = self.framebuffer.clone();

        eye.position.x = camera.position.x + EYE_SEPARATION;
        self.render(&eye, meshes, fov_degrees, RenderMode::Filled);

        for (pixel, left_pixel) in self.framebuffer.iter_mut().zip(&left) {
            let right_luma = colors::luminance(*pixel);
            let left_luma = colors::luminance(*left_pixel);
            *pixel = Vec3::new(left_luma, 0.0, right_luma);
        }

        preview
    }

    /// Tone-maps the framebuffer and quantizes it to 8-bit RGB, three
    /// bytes per pixel in row-major order. This is the byte stream the
    /// image encoders consume.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.framebuffer.len() * 3);
        for pixel in &self.framebuffer {
            let mapped = colors::tone_map(*pixel);
            bytes.push((255.0 * mapped.x) as u8);
            bytes.push((255.0 * mapped.y) as u8);
            bytes.push((255.0 * mapped.z) as u8);
        }
        bytes
    }
}
