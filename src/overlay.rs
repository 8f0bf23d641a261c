//! Loading overlay shown until the page has loaded and a minimum display
//! time has passed.

use crate::constants::LOADER_ID;
use crate::dom;
use folio_core::{LOADER_FADE_MS, LOADER_MIN_DISPLAY_MS};
use instant::Instant;
use web_sys as web;

/// Milliseconds still to wait before fading, given how long the page has been up.
#[inline]
pub fn remaining_display_ms(elapsed_ms: f64) -> i32 {
    (LOADER_MIN_DISPLAY_MS - elapsed_ms).max(0.0).ceil() as i32
}

fn dismiss(loader: web::HtmlElement) {
    dom::swap_classes(&loader, &["opacity-0"], &[]);
    dom::set_timeout(LOADER_FADE_MS, move || {
        dom::set_style(&loader, "display", "none");
        log::debug!("[loader] hidden");
    });
}

/// Schedule the loader's exit on window `load`. `started` is when the
/// script began running.
pub fn wire(document: &web::Document, started: Instant) {
    let Some(loader) = dom::html_by_id(document, LOADER_ID) else {
        log::debug!("[loader] #{} not found", LOADER_ID);
        return;
    };
    let mut loader = Some(loader);
    let mut on_load = move || {
        let Some(loader) = loader.take() else {
            return;
        };
        let wait = remaining_display_ms(started.elapsed().as_secs_f64() * 1000.0);
        log::info!("[loader] page loaded; fading in {} ms", wait);
        dom::set_timeout(wait, move || dismiss(loader));
    };
    if dom::ready_state(document) == "complete" {
        on_load();
    } else {
        dom::on_window("load", move |_: web::Event| on_load());
    }
}
