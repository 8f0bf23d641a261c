//! Frame loop bookkeeping across page hide/show.
//!
//! A page that goes into the back/forward cache gets `pagehide` and later
//! `pageshow` with `persisted = true`. Loops pause on the first and must pick
//! up again on the second. A frame callback may still be pending when the
//! page comes back, so the gate also tracks whether one is outstanding to
//! avoid running two chains at once.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoopGate {
    running: bool,
    scheduled: bool,
}

impl Default for LoopGate {
    fn default() -> Self {
        Self::new()
    }
}

impl LoopGate {
    pub fn new() -> Self {
        Self {
            running: true,
            scheduled: false,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    /// True when the caller should request an animation frame now.
    pub fn request(&mut self) -> bool {
        if self.running && !self.scheduled {
            self.scheduled = true;
            true
        } else {
            false
        }
    }

    /// Start of a frame callback. True when the frame should run; the
    /// callback then asks [`request`](Self::request) for the next one.
    pub fn enter_frame(&mut self) -> bool {
        self.scheduled = false;
        self.running
    }

    /// Returns true if the loop was running.
    pub fn pause(&mut self) -> bool {
        std::mem::replace(&mut self.running, false)
    }

    /// Re-arm after a pause. True when a new frame must be requested; false
    /// if the loop never stopped or a callback is still pending.
    pub fn resume(&mut self) -> bool {
        self.running = true;
        self.request()
    }
}

