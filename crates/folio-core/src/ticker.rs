//! Frame clock shared by the scroller and the tweens.
//!
//! The browser hands `requestAnimationFrame` callbacks a millisecond
//! timestamp. The ticker turns that into seconds elapsed since its first
//! frame and a per-frame delta. Lag smoothing, when enabled, stops a long
//! stall (background tab, debugger) from turning into one huge jump.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tick {
    /// Seconds since the ticker's first frame.
    pub time: f64,
    /// Seconds since the previous frame.
    pub delta: f64,
    pub frame: u64,
}

impl Tick {
    /// Timestamp in milliseconds, the unit the scroller consumes.
    #[inline]
    pub fn time_ms(&self) -> f64 {
        self.time * 1000.0
    }
}

#[derive(Clone, Debug)]
pub struct Ticker {
    start_ms: Option<f64>,
    last_ms: f64,
    frame: u64,
    lag_threshold_ms: f64,
    adjusted_lag_ms: f64,
}

impl Default for Ticker {
    fn default() -> Self {
        Self {
            start_ms: None,
            last_ms: 0.0,
            frame: 0,
            lag_threshold_ms: 500.0,
            adjusted_lag_ms: 33.0,
        }
    }
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    /// A threshold of zero disables smoothing.
    pub fn lag_smoothing(&mut self, threshold_ms: f64, adjusted_lag_ms: f64) {
        self.lag_threshold_ms = threshold_ms.max(0.0);
        self.adjusted_lag_ms = adjusted_lag_ms.clamp(0.0, self.lag_threshold_ms);
    }

    #[inline]
    pub fn lag_smoothing_enabled(&self) -> bool {
        self.lag_threshold_ms > 0.0
    }

    pub fn tick(&mut self, now_ms: f64) -> Tick {
        let start = match self.start_ms {
            Some(s) => s,
            None => {
                self.start_ms = Some(now_ms);
                self.last_ms = now_ms;
                return Tick {
                    time: 0.0,
                    delta: 0.0,
                    frame: self.frame,
                };
            }
        };
        let mut gap = now_ms - self.last_ms;
        if self.lag_smoothing_enabled() && gap > self.lag_threshold_ms {
            // Pretend the stall lasted only `adjusted_lag_ms` by pushing the origin forward.
            let skipped = gap - self.adjusted_lag_ms;
            self.start_ms = Some(start + skipped);
            gap = self.adjusted_lag_ms;
        }
        self.last_ms = now_ms;
        self.frame += 1;
        let origin = self.start_ms.unwrap_or(start);
        Tick {
            time: (now_ms - origin) / 1000.0,
            delta: gap.max(0.0) / 1000.0,
            frame: self.frame,
        }
    }
}
