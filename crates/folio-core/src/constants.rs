// Shared tuning constants for scroll, animation and the particle scene.

// Momentum scroller
pub const SCROLL_DURATION_SEC: f64 = 1.2;
pub const SCROLL_WHEEL_MULTIPLIER: f64 = 1.0;
pub const SCROLL_TOUCH_MULTIPLIER: f64 = 2.0;

// Scroll thresholds (px)
pub const NAVBAR_COMPACT_AFTER_PX: f64 = 50.0;
pub const INDICATOR_HIDE_AFTER_PX: f64 = 50.0;
pub const BACK_TO_TOP_SHOW_AFTER_PX: f64 = 500.0;

// Particle cloud
pub const PARTICLE_COUNT: usize = 1500;
pub const PARTICLE_SPREAD: f32 = 15.0; // each axis spans [-SPREAD/2, SPREAD/2]
pub const PARTICLE_SIZE: f32 = 0.03; // world units, perspective attenuated
pub const PARTICLE_OPACITY: f32 = 0.6;
pub const PARTICLE_COLOR_HEX: u32 = 0x00ff41;

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 4.0;
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Per-frame motion
pub const IDLE_YAW_PER_SEC: f32 = 0.05;
pub const SCROLL_ROTATION_PER_PX: f32 = 0.0002;
pub const SCROLL_CAMERA_PARALLAX_PER_PX: f32 = 0.001;
pub const POINTER_TARGET_GAIN: f32 = 0.5;
pub const POINTER_FOLLOW_RATE: f32 = 0.05; // fraction of remaining distance per frame

// Reveal animation
pub const REVEAL_DURATION_SEC: f32 = 1.2;
pub const REVEAL_OFFSET_Y_PX: f32 = 100.0;
pub const REVEAL_ROTATE_X_DEG: f32 = 45.0;
pub const REVEAL_BLUR_PX: f32 = 10.0;

// Scrubbed parallax
pub const PROJECT_CARD_SHIFT_PX: f32 = -50.0;
pub const HERO_SHIFT_PERCENT: f32 = 20.0;

// Contact modal timings (ms)
pub const MODAL_LAYOUT_SETTLE_MS: i32 = 10;
pub const MODAL_TRANSITION_MS: i32 = 300;
pub const MODAL_RESET_DELAY_MS: i32 = 300;
pub const MODAL_AUTO_CLOSE_MS: i32 = 5000;

// Loader overlay
pub const LOADER_MIN_DISPLAY_MS: f64 = 1500.0;
pub const LOADER_FADE_MS: i32 = 500;

#[inline]
pub fn particle_rgb() -> [f32; 3] {
    let r = ((PARTICLE_COLOR_HEX >> 16) & 0xff) as f32 / 255.0;
    let g = ((PARTICLE_COLOR_HEX >> 8) & 0xff) as f32 / 255.0;
    let b = (PARTICLE_COLOR_HEX & 0xff) as f32 / 255.0;
    [r, g, b]
}
