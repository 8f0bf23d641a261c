//! Reveal and parallax bindings for page content.
//!
//! Geometry is measured from layout offsets, which ignore the transforms
//! these bindings apply, so re-measuring on resize is stable.

use crate::constants::{HERO_IMAGE_SELECTOR, PROJECT_CARD_SELECTOR, REVEAL_SELECTOR};
use crate::dom;
use crate::frame::AnimationTicker;
use folio_core::reveal::{RevealBinding, ScrubBinding, ScrubKind};
use folio_core::trigger::ElementGeometry;
use folio_core::tween::{RevealPose, REVEAL_TRANSFORM_ORIGIN};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use web_sys as web;

static INITIALIZED: AtomicBool = AtomicBool::new(false);

struct Bindings {
    reveals: Vec<(web::HtmlElement, RevealBinding)>,
    scrubs: Vec<(web::HtmlElement, ScrubBinding)>,
}

impl Bindings {
    fn refresh(&mut self) {
        for (el, b) in self.reveals.iter_mut() {
            b.refresh(&measure(el));
        }
        for (el, b) in self.scrubs.iter_mut() {
            b.refresh(&measure(el));
        }
    }

    fn update(&mut self, scroll: f64, dt: f32) {
        for (el, b) in self.reveals.iter_mut() {
            if let Some(pose) = b.update(scroll, dt) {
                apply_pose(el, &pose);
            }
        }
        for (el, b) in self.scrubs.iter_mut() {
            if let Some(transform) = b.update(scroll) {
                dom::set_style(el, "transform", &transform);
            }
        }
    }
}

fn measure(el: &web::HtmlElement) -> ElementGeometry {
    let (top, height) = dom::document_geometry(el);
    ElementGeometry {
        top,
        height,
        viewport_height: dom::viewport_size().1,
    }
}

fn apply_pose(el: &web::HtmlElement, pose: &RevealPose) {
    dom::set_style(el, "transform", &pose.transform_css());
    dom::set_style(el, "opacity", &pose.opacity_css());
    dom::set_style(el, "filter", &pose.filter_css());
}

/// Bind every reveal element, project card and the hero image. Runs once
/// per page load; later calls are ignored.
pub fn init(document: &web::Document, ticker: &AnimationTicker) {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        log::warn!("[reveal] already initialised; ignoring extra call");
        return;
    }

    let reveals: Vec<_> = dom::query_all(document, REVEAL_SELECTOR)
        .into_iter()
        .map(|el| {
            let binding = RevealBinding::new(&measure(&el));
            dom::set_style(&el, "transform-origin", REVEAL_TRANSFORM_ORIGIN);
            apply_pose(&el, &RevealPose::HIDDEN);
            (el, binding)
        })
        .collect();

    let mut scrubs: Vec<_> = dom::query_all(document, PROJECT_CARD_SELECTOR)
        .into_iter()
        .map(|el| {
            let binding = ScrubBinding::new(ScrubKind::ProjectCard, &measure(&el));
            (el, binding)
        })
        .collect();
    match dom::query_all(document, HERO_IMAGE_SELECTOR).into_iter().next() {
        Some(el) => {
            let binding = ScrubBinding::new(ScrubKind::HeroImage, &measure(&el));
            scrubs.push((el, binding));
        }
        None => log::debug!("[reveal] hero image not found; parallax disabled"),
    }

    log::info!(
        "[reveal] {} reveal, {} scrub bindings",
        reveals.len(),
        scrubs.len()
    );
    let bindings = Rc::new(RefCell::new(Bindings { reveals, scrubs }));

    {
        let bindings = bindings.clone();
        dom::on_window("resize", move |_: web::Event| bindings.borrow_mut().refresh());
    }
    {
        let bindings = bindings.clone();
        dom::on_window("load", move |_: web::Event| bindings.borrow_mut().refresh());
    }
    ticker.add(move |tick| {
        let scroll = web::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0);
        bindings.borrow_mut().update(scroll, tick.delta as f32);
    });
}
