//! Background point cloud: generation, per-frame motion and the uniform
//! block the particle shader reads.

use crate::camera::Camera;
use crate::constants::*;
use glam::{EulerRot, Mat4, Vec2, Vec3};
use rand::Rng;

/// Uniform random positions in a cube of side `spread` centred on the origin.
pub fn generate_cloud<R: Rng + ?Sized>(rng: &mut R, count: usize, spread: f32) -> Vec<Vec3> {
    let half = spread * 0.5;
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-half..=half),
                rng.gen_range(-half..=half),
                rng.gen_range(-half..=half),
            )
        })
        .collect()
}

/// Pointer position relative to the viewport centre, each axis in [-0.5, 0.5].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

/// Cloud rotation (x = pitch, y = yaw) plus the camera's scroll parallax.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CloudMotion {
    pub rotation: Vec2,
    pub camera_y: f32,
}

impl CloudMotion {
    /// One animation frame. Scroll sets the base rotation, then the pointer
    /// pulls it 5% of the remaining way toward its target.
    pub fn step(&mut self, elapsed_sec: f32, scroll: f64, pointer: PointerState) {
        let scroll = scroll as f32;
        self.rotation.y = elapsed_sec * IDLE_YAW_PER_SEC + scroll * SCROLL_ROTATION_PER_PX;
        self.rotation.x = scroll * SCROLL_ROTATION_PER_PX;
        self.camera_y = -scroll * SCROLL_CAMERA_PARALLAX_PER_PX;

        let target_x = pointer.y * POINTER_TARGET_GAIN;
        let target_y = pointer.x * POINTER_TARGET_GAIN;
        self.rotation.x += POINTER_FOLLOW_RATE * (target_x - self.rotation.x);
        self.rotation.y += POINTER_FOLLOW_RATE * (target_y - self.rotation.y);
    }

    /// XYZ Euler order: pitch applied outermost, then yaw.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, 0.0)
    }

    pub fn apply_to_camera(&self, camera: &mut Camera) {
        camera.position.y = self.camera_y;
    }
}

/// `min(devicePixelRatio, 2)`. Ratios below 1 (zoomed out) pass through;
/// a non-positive or non-finite report falls back to 1.
#[inline]
pub fn capped_pixel_ratio(device_pixel_ratio: f64) -> f64 {
    if device_pixel_ratio > 0.0 && device_pixel_ratio.is_finite() {
        device_pixel_ratio.min(MAX_PIXEL_RATIO)
    } else {
        1.0
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleUniforms {
    pub model_view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    /// rgb + opacity
    pub color: [f32; 4],
    /// Backing-store size in pixels.
    pub viewport: [f32; 2],
    pub point_size: f32,
    pub _pad: f32,
}

impl ParticleUniforms {
    pub fn new(camera: &Camera, motion: &CloudMotion, viewport_px: [f32; 2]) -> Self {
        let model_view = camera.view_matrix() * motion.model_matrix();
        let [r, g, b] = particle_rgb();
        Self {
            model_view: model_view.to_cols_array_2d(),
            projection: camera.projection_matrix().to_cols_array_2d(),
            color: [r, g, b, PARTICLE_OPACITY],
            viewport: viewport_px,
            point_size: PARTICLE_SIZE,
            _pad: 0.0,
        }
    }
}

/// On-screen size in pixels of a point at view depth `depth`, matching
/// perspective point sprites: `size * (viewport_h / 2) / depth`.
#[inline]
pub fn point_size_px(size: f32, viewport_h_px: f32, depth: f32) -> f32 {
    if depth <= 0.0 {
        return 0.0;
    }
    size * (viewport_h_px * 0.5) / depth
}
