//! Smooth-scroll bridge: wheel input goes through the momentum scroller,
//! the animation ticker advances it, and every resulting position is written
//! back to the window and to the progress bar.

use crate::constants::PROGRESS_BAR_ID;
use crate::dom;
use crate::frame::AnimationTicker;
use folio_core::{route_scroll_to, ScrollEvent, ScrollRoute, ScrollState, Scroller, ScrollerOptions};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

// Pixels per line for line-mode wheel deltas.
const WHEEL_LINE_HEIGHT: f64 = 100.0 / 6.0;

type ScrollListener = Box<dyn FnMut(&ScrollEvent)>;

/// Programmatic scrolling for any component that needs it. Cheap to clone.
#[derive(Clone)]
pub struct ScrollHandle {
    scroller: Option<Rc<RefCell<Scroller>>>,
    listeners: Rc<RefCell<Vec<ScrollListener>>>,
}

impl ScrollHandle {
    /// Handle with no scroller behind it; scrolls natively.
    pub fn native() -> Self {
        Self {
            scroller: None,
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn scroll_to(&self, target: f64) {
        let mut scroller = self.scroller.as_ref().map(|s| s.borrow_mut());
        if let ScrollRoute::Native(top) = route_scroll_to(scroller.as_deref_mut(), target) {
            native_smooth_scroll_to(top);
        }
    }

    /// Called for every scroller position change, in registration order.
    pub fn subscribe(&self, listener: impl FnMut(&ScrollEvent) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    fn emit(&self, ev: &ScrollEvent) {
        for l in self.listeners.borrow_mut().iter_mut() {
            l(ev);
        }
    }
}

fn native_smooth_scroll_to(target: f64) {
    if let Some(w) = web::window() {
        let opts = web::ScrollToOptions::new();
        opts.set_top(target);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        w.scroll_to_with_scroll_to_options(&opts);
    }
}

pub fn init(ticker: &AnimationTicker) -> anyhow::Result<ScrollHandle> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let (offset, extent) = dom::window_scroll();
    let scroller = Rc::new(RefCell::new(Scroller::new(
        ScrollerOptions::default(),
        ScrollState::new(offset, extent),
    )));
    let handle = ScrollHandle {
        scroller: Some(scroller.clone()),
        listeners: Rc::new(RefCell::new(Vec::new())),
    };

    if let Some(bar) = dom::html_by_id(&document, PROGRESS_BAR_ID) {
        handle.subscribe(move |ev| {
            if let Some(width) = ev.state().progress_width_css() {
                dom::set_style(&bar, "width", &width);
            }
        });
    } else {
        log::debug!("[scroll] #{} not found; progress bar disabled", PROGRESS_BAR_ID);
    }

    wire_wheel(scroller.clone());
    wire_touch(scroller.clone());

    // Native scrolls (keyboard, scrollbar, touch) keep the scroller in step.
    {
        let scroller = scroller.clone();
        let handle = handle.clone();
        dom::on_window("scroll", move |_: web::Event| {
            let (offset, _) = dom::window_scroll();
            let ev = scroller.borrow_mut().sync(offset);
            if let Some(ev) = ev {
                handle.emit(&ev);
            }
        });
    }
    {
        let scroller = scroller.clone();
        dom::on_window("resize", move |_: web::Event| {
            let (_, extent) = dom::window_scroll();
            scroller.borrow_mut().set_limit(extent);
        });
    }

    ticker.lag_smoothing(0.0, 0.0);
    {
        let scroller = scroller.clone();
        let handle = handle.clone();
        ticker.add(move |tick| {
            let ev = scroller.borrow_mut().raf(tick.time_ms());
            if let Some(ev) = ev {
                if let Some(w) = web::window() {
                    w.scroll_to_with_x_and_y(0.0, ev.scroll);
                }
                handle.emit(&ev);
            }
        });
    }

    log::info!(
        "[scroll] smooth scroll ready (offset={:.0}, extent={:.0})",
        offset,
        extent
    );
    Ok(handle)
}

fn wire_wheel(scroller: Rc<RefCell<Scroller>>) {
    dom::on_window_active("wheel", move |ev: web::WheelEvent| {
        // Pinch-zoom arrives as ctrl+wheel; leave it to the browser.
        if ev.ctrl_key() {
            return;
        }
        let scale = match ev.delta_mode() {
            web::WheelEvent::DOM_DELTA_LINE => WHEEL_LINE_HEIGHT,
            web::WheelEvent::DOM_DELTA_PAGE => dom::viewport_size().1,
            _ => 1.0,
        };
        let mut s = scroller.borrow_mut();
        s.set_limit(dom::window_scroll().1);
        if s.on_wheel(ev.delta_y() * scale) {
            ev.prevent_default();
        }
    });
}

fn wire_touch(scroller: Rc<RefCell<Scroller>>) {
    let last_y = Rc::new(Cell::new(None::<f64>));
    {
        let last_y = last_y.clone();
        dom::on_window("touchstart", move |ev: web::TouchEvent| {
            last_y.set(ev.touches().get(0).map(|t| t.client_y() as f64));
        });
    }
    dom::on_window_active("touchmove", move |ev: web::TouchEvent| {
        let Some(y) = ev.touches().get(0).map(|t| t.client_y() as f64) else {
            return;
        };
        let delta = last_y.get().map(|prev| prev - y).unwrap_or(0.0);
        last_y.set(Some(y));
        if scroller.borrow_mut().on_touch(delta) {
            ev.prevent_default();
        }
    });
}
