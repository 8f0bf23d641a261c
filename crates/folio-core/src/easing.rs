/// Timing curves used by the scroller and the tweens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Straight interpolation, used by scrubbed bindings.
    #[default]
    Linear,
    /// Exponential ease-out, `min(1, 1 - 2^(-10t))`. Drives the smooth scroller.
    ExpoOut,
    /// Quartic ease-out, `1 - (1 - t)^4`. Drives the reveal tweens.
    Power4Out,
}

impl Easing {
    /// Apply easing to a normalized time parameter t ∈ [0, 1].
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::ExpoOut => (1.0 - 2.0_f32.powf(-10.0 * t)).min(1.0),
            Self::Power4Out => 1.0 - (1.0 - t).powi(4),
        }
    }

    /// Same curve in double precision; scroll offsets can reach tens of
    /// thousands of pixels.
    pub fn apply_f64(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::ExpoOut => (1.0 - 2.0_f64.powf(-10.0 * t)).min(1.0),
            Self::Power4Out => 1.0 - (1.0 - t).powi(4),
        }
    }
}
