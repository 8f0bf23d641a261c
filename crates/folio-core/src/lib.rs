pub mod camera;
pub mod constants;
pub mod easing;
pub mod lifecycle;
pub mod modal;
pub mod nav;
pub mod particles;
pub mod reveal;
pub mod scroll;
pub mod ticker;
pub mod trigger;
pub mod tween;

pub use camera::*;
pub use constants::*;
pub use easing::*;
pub use scroll::*;
pub use ticker::*;

// Shaders bundled as string constants
pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");
