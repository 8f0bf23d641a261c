use crate::constants::*;
use crate::easing::Easing;
use crate::trigger::{Action, ScrollRange};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Time-based tween progress. Holds no target values; callers map the eased
/// progress onto whatever they animate.
#[derive(Clone, Debug)]
pub struct Tween {
    duration: f32,
    easing: Easing,
    time: f32,
    direction: Direction,
    paused: bool,
}

impl Tween {
    /// Created paused at the start, waiting for its trigger.
    pub fn new(duration: f32, easing: Easing) -> Self {
        Self {
            duration: duration.max(f32::EPSILON),
            easing,
            time: 0.0,
            direction: Direction::Forward,
            paused: true,
        }
    }

    pub fn play(&mut self) {
        self.direction = Direction::Forward;
        self.paused = false;
    }

    pub fn reverse(&mut self) {
        self.direction = Direction::Backward;
        self.paused = false;
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Play => self.play(),
            Action::Reverse => self.reverse(),
            Action::None => {}
        }
    }

    /// Linear progress in [0, 1].
    #[inline]
    pub fn raw_progress(&self) -> f32 {
        (self.time / self.duration).clamp(0.0, 1.0)
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.easing.apply(self.raw_progress())
    }

    /// True when not moving: paused, or run to the end in its direction.
    pub fn is_settled(&self) -> bool {
        if self.paused {
            return true;
        }
        match self.direction {
            Direction::Forward => self.time >= self.duration,
            Direction::Backward => self.time <= 0.0,
        }
    }

    /// Step by `dt` seconds and return the eased progress.
    pub fn advance(&mut self, dt: f32) -> f32 {
        if !self.paused {
            let dt = dt.max(0.0);
            self.time = match self.direction {
                Direction::Forward => (self.time + dt).min(self.duration),
                Direction::Backward => (self.time - dt).max(0.0),
            };
            if self.is_settled() {
                self.paused = true;
            }
        }
        self.progress()
    }
}

/// Inline style for a reveal element at a given eased progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealPose {
    pub translate_y: f32,
    pub opacity: f32,
    pub rotate_x_deg: f32,
    pub blur_px: f32,
}

impl RevealPose {
    pub const HIDDEN: Self = Self {
        translate_y: REVEAL_OFFSET_Y_PX,
        opacity: 0.0,
        rotate_x_deg: REVEAL_ROTATE_X_DEG,
        blur_px: REVEAL_BLUR_PX,
    };

    pub const SETTLED: Self = Self {
        translate_y: 0.0,
        opacity: 1.0,
        rotate_x_deg: 0.0,
        blur_px: 0.0,
    };

    /// Interpolate from [`HIDDEN`](Self::HIDDEN) (p = 0) to [`SETTLED`](Self::SETTLED) (p = 1).
    pub fn at(p: f32) -> Self {
        let lerp = |a: f32, b: f32| a + (b - a) * p;
        let h = Self::HIDDEN;
        let s = Self::SETTLED;
        Self {
            translate_y: lerp(h.translate_y, s.translate_y),
            opacity: lerp(h.opacity, s.opacity),
            rotate_x_deg: lerp(h.rotate_x_deg, s.rotate_x_deg),
            blur_px: lerp(h.blur_px, s.blur_px),
        }
    }

    pub fn transform_css(&self) -> String {
        format!(
            "translate3d(0px, {:.3}px, 0px) rotateX({:.3}deg)",
            self.translate_y, self.rotate_x_deg
        )
    }

    pub fn filter_css(&self) -> String {
        format!("blur({:.3}px)", self.blur_px)
    }

    pub fn opacity_css(&self) -> String {
        format!("{:.4}", self.opacity)
    }
}

/// Origin the reveal rotation pivots around: left edge, vertical centre, pushed back 50px.
pub const REVEAL_TRANSFORM_ORIGIN: &str = "0% 50% -50px";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShiftUnit {
    Px,
    /// Percent of the element's own height.
    Percent,
}

/// Scroll-scrubbed vertical translation; progress is locked to scroll.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrubShift {
    pub range: ScrollRange,
    pub to: f32,
    pub unit: ShiftUnit,
    pub easing: Easing,
}

impl ScrubShift {
    pub fn new(range: ScrollRange, to: f32, unit: ShiftUnit) -> Self {
        Self {
            range,
            to,
            unit,
            easing: Easing::Linear,
        }
    }

    pub fn value_at(&self, scroll: f64) -> f32 {
        let p = self.range.progress(scroll) as f32;
        self.to * self.easing.apply(p)
    }

    pub fn transform_css(&self, scroll: f64) -> String {
        let v = self.value_at(scroll);
        match self.unit {
            ShiftUnit::Px => format!("translate3d(0px, {:.3}px, 0px)", v),
            ShiftUnit::Percent => format!("translate3d(0px, {:.3}%, 0px)", v),
        }
    }
}
