use crate::constants::*;
use crate::easing::Easing;

/// Vertical scroll position of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    /// Pixels from the top of the document.
    pub offset: f64,
    /// Maximum reachable offset (document height minus viewport height).
    pub extent: f64,
}

impl ScrollState {
    pub fn new(offset: f64, extent: f64) -> Self {
        Self { offset, extent }
    }

    /// `offset / extent`, deliberately unclamped: overscroll and stale
    /// measurements can push it slightly outside [0, 1].
    /// `None` when there is nothing to scroll.
    #[inline]
    pub fn progress(&self) -> Option<f64> {
        (self.extent > 0.0).then(|| self.offset / self.extent)
    }

    /// Inline `width` value for the progress bar.
    pub fn progress_width_css(&self) -> Option<String> {
        self.progress().map(|p| format!("{}%", p * 100.0))
    }
}

/// Options for the vertical momentum scroller.
#[derive(Clone, Debug)]
pub struct ScrollerOptions {
    pub duration_sec: f64,
    pub easing: Easing,
    pub wheel_multiplier: f64,
    pub touch_multiplier: f64,
    /// When false, touch input is left to the browser and picked up through [`Scroller::sync`].
    pub smooth_touch: bool,
}

impl Default for ScrollerOptions {
    fn default() -> Self {
        Self {
            duration_sec: SCROLL_DURATION_SEC,
            easing: Easing::ExpoOut,
            wheel_multiplier: SCROLL_WHEEL_MULTIPLIER,
            touch_multiplier: SCROLL_TOUCH_MULTIPLIER,
            smooth_touch: false,
        }
    }
}

/// Emitted whenever the scroller's position changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollEvent {
    pub scroll: f64,
    pub limit: f64,
    /// Pixels moved since the previous event.
    pub velocity: f64,
    /// 1 scrolling down, -1 scrolling up, 0 idle.
    pub direction: i8,
}

impl ScrollEvent {
    #[inline]
    pub fn state(&self) -> ScrollState {
        ScrollState::new(self.scroll, self.limit)
    }
}

#[derive(Clone, Copy, Debug)]
struct Animation {
    from: f64,
    to: f64,
    start_ms: Option<f64>,
}

/// Momentum scroller: wheel input moves a target, and every frame the
/// rendered position eases from where it was toward that target.
#[derive(Clone, Debug)]
pub struct Scroller {
    opts: ScrollerOptions,
    animated: f64,
    target: f64,
    limit: f64,
    direction: i8,
    anim: Option<Animation>,
}

impl Scroller {
    pub fn new(opts: ScrollerOptions, initial: ScrollState) -> Self {
        let animated = initial.offset.clamp(0.0, initial.extent.max(0.0));
        Self {
            opts,
            animated,
            target: animated,
            limit: initial.extent.max(0.0),
            direction: 0,
            anim: None,
        }
    }

    #[inline]
    pub fn options(&self) -> &ScrollerOptions {
        &self.opts
    }
    #[inline]
    pub fn scroll(&self) -> f64 {
        self.animated
    }
    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }
    #[inline]
    pub fn limit(&self) -> f64 {
        self.limit
    }
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.anim.is_some()
    }

    pub fn set_limit(&mut self, extent: f64) {
        self.limit = extent.max(0.0);
        self.target = self.target.clamp(0.0, self.limit);
    }

    /// Returns true when the wheel event was consumed and native scrolling
    /// should be prevented.
    pub fn on_wheel(&mut self, delta_y: f64) -> bool {
        self.animate_to(self.target + delta_y * self.opts.wheel_multiplier);
        true
    }

    /// Returns true when the touch move was consumed. With smooth touch off
    /// the browser scrolls natively and the scroller follows via [`sync`].
    ///
    /// [`sync`]: Scroller::sync
    pub fn on_touch(&mut self, delta_y: f64) -> bool {
        if !self.opts.smooth_touch {
            return false;
        }
        self.animate_to(self.target + delta_y * self.opts.touch_multiplier);
        true
    }

    /// Programmatic scroll. `immediate` jumps and returns the resulting event.
    pub fn scroll_to(&mut self, target: f64, immediate: bool) -> Option<ScrollEvent> {
        if immediate {
            self.anim = None;
            self.target = target.clamp(0.0, self.limit);
            return self.set_animated(self.target);
        }
        self.animate_to(target);
        None
    }

    /// Follow a native scroll (keyboard, scrollbar drag, touch). Ignored
    /// while an animation owns the position, since the animation itself
    /// causes native scroll notifications.
    pub fn sync(&mut self, native_offset: f64) -> Option<ScrollEvent> {
        if self.anim.is_some() {
            return None;
        }
        self.target = native_offset.clamp(0.0, self.limit);
        self.set_animated(self.target)
    }

    /// Advance the active animation to `time_ms`.
    pub fn raf(&mut self, time_ms: f64) -> Option<ScrollEvent> {
        let mut anim = self.anim?;
        let start = *anim.start_ms.get_or_insert(time_ms);
        let duration_ms = (self.opts.duration_sec * 1000.0).max(f64::EPSILON);
        let t = ((time_ms - start) / duration_ms).clamp(0.0, 1.0);
        let eased = self.opts.easing.apply_f64(t);
        let value = anim.from + (anim.to - anim.from) * eased;
        if t >= 1.0 {
            self.anim = None;
            return self.set_animated(anim.to);
        }
        self.anim = Some(anim);
        self.set_animated(value)
    }

    fn animate_to(&mut self, target: f64) {
        self.target = target.clamp(0.0, self.limit);
        if (self.target - self.animated).abs() < f64::EPSILON {
            self.anim = None;
            return;
        }
        self.anim = Some(Animation {
            from: self.animated,
            to: self.target,
            start_ms: None,
        });
    }

    fn set_animated(&mut self, value: f64) -> Option<ScrollEvent> {
        let velocity = value - self.animated;
        if velocity == 0.0 {
            return None;
        }
        self.direction = if velocity > 0.0 { 1 } else { -1 };
        self.animated = value;
        Some(ScrollEvent {
            scroll: self.animated,
            limit: self.limit,
            velocity,
            direction: self.direction,
        })
    }
}

/// How a programmatic scroll request is carried out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollRoute {
    /// Handed to the momentum scroller, which animates on later frames.
    Smooth,
    /// No scroller; the browser's own smooth scroll to this offset.
    Native(f64),
}

/// Send a scroll-to through `scroller` when there is one, otherwise tell the
/// caller to fall back to native scrolling.
pub fn route_scroll_to(scroller: Option<&mut Scroller>, target: f64) -> ScrollRoute {
    match scroller {
        Some(s) => {
            s.scroll_to(target, false);
            ScrollRoute::Smooth
        }
        None => ScrollRoute::Native(target.max(0.0)),
    }
}
