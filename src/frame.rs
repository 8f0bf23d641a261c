use folio_core::lifecycle::LoopGate;
use folio_core::{Tick, Ticker};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Pause/resume control shared by a frame loop and the page lifecycle.
#[derive(Clone)]
pub struct LoopHandle {
    name: &'static str,
    gate: Rc<Cell<LoopGate>>,
    callback: FrameCallback,
}

impl LoopHandle {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            gate: Rc::new(Cell::new(LoopGate::new())),
            callback: Rc::new(RefCell::new(None)),
        }
    }

    /// The loop finishes its current frame and does not reschedule.
    pub fn pause(&self) {
        let mut gate = self.gate.get();
        if gate.pause() {
            log::info!("[frame] {} loop paused", self.name);
        }
        self.gate.set(gate);
    }

    /// Pick up again after [`pause`](Self::pause).
    pub fn resume(&self) {
        let mut gate = self.gate.get();
        let needs_frame = gate.resume();
        self.gate.set(gate);
        if needs_frame {
            log::info!("[frame] {} loop resumed", self.name);
            self.request_frame();
        }
    }

    fn request_frame(&self) {
        if let (Some(w), Some(cb)) = (web::window(), self.callback.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }

    fn schedule_next(&self) {
        let mut gate = self.gate.get();
        let request = gate.request();
        self.gate.set(gate);
        if request {
            self.request_frame();
        }
    }

    fn enter_frame(&self) -> bool {
        let mut gate = self.gate.get();
        let run = gate.enter_frame();
        self.gate.set(gate);
        run
    }
}

/// Drive `frame` from `requestAnimationFrame` while `handle` is running.
/// `frame` receives the rAF timestamp in milliseconds.
pub fn start_loop(handle: LoopHandle, mut frame: impl FnMut(f64) + 'static) {
    let handle_tick = handle.clone();
    *handle.callback.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        if !handle_tick.enter_frame() {
            return;
        }
        frame(now_ms);
        handle_tick.schedule_next();
    }) as Box<dyn FnMut(f64)>));
    handle.schedule_next();
    log::info!("[frame] {} loop started", handle.name);
}

type Subscriber = Box<dyn FnMut(Tick)>;

/// One frame clock for everything time-driven except the particle scene:
/// the smooth scroller and the reveal tweens both hang off it.
#[derive(Clone)]
pub struct AnimationTicker {
    ticker: Rc<RefCell<Ticker>>,
    subscribers: Rc<RefCell<Vec<Subscriber>>>,
    handle: LoopHandle,
}

impl AnimationTicker {
    pub fn new() -> Self {
        Self {
            ticker: Rc::new(RefCell::new(Ticker::new())),
            subscribers: Rc::new(RefCell::new(Vec::new())),
            handle: LoopHandle::new("ticker"),
        }
    }

    pub fn lag_smoothing(&self, threshold_ms: f64, adjusted_lag_ms: f64) {
        self.ticker
            .borrow_mut()
            .lag_smoothing(threshold_ms, adjusted_lag_ms);
    }

    /// Subscribers run in registration order every frame.
    pub fn add(&self, subscriber: impl FnMut(Tick) + 'static) {
        self.subscribers.borrow_mut().push(Box::new(subscriber));
    }

    pub fn handle(&self) -> LoopHandle {
        self.handle.clone()
    }

    pub fn start(&self) {
        let ticker = self.ticker.clone();
        let subscribers = self.subscribers.clone();
        start_loop(self.handle.clone(), move |now_ms| {
            let tick = ticker.borrow_mut().tick(now_ms);
            // Taken out while running so a subscriber may register another.
            let mut running = std::mem::take(&mut *subscribers.borrow_mut());
            for sub in running.iter_mut() {
                sub(tick);
            }
            let mut slot = subscribers.borrow_mut();
            running.append(&mut slot);
            *slot = running;
        });
    }
}
