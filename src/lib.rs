#![cfg(target_arch = "wasm32")]
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod modal;
mod nav;
mod overlay;
mod particles;
mod render;
mod reveal;
mod scroll;

use frame::{AnimationTicker, LoopHandle};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    let started = Instant::now();
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    overlay::wire(&document, started);

    if dom::ready_state(&document) == "loading" {
        let mut document = Some(document);
        dom::on_window("DOMContentLoaded", move |_: web::Event| {
            if let Some(d) = document.take() {
                boot(d);
            }
        });
    } else {
        boot(document);
    }
    Ok(())
}

fn boot(document: web::Document) {
    static BOOTED: AtomicBool = AtomicBool::new(false);
    if BOOTED.swap(true, Ordering::SeqCst) {
        return;
    }
    init(document);
}

fn init(document: web::Document) {
    let ticker = AnimationTicker::new();
    let loops: Rc<RefCell<Vec<LoopHandle>>> = Rc::new(RefCell::new(vec![ticker.handle()]));

    let scroll = scroll::init(&ticker).unwrap_or_else(|e| {
        log::warn!("[scroll] smooth scrolling unavailable, using native: {:?}", e);
        scroll::ScrollHandle::native()
    });
    reveal::init(&document, &ticker);
    modal::init(&document);
    nav::init(&document, &scroll);
    ticker.start();

    {
        let loops = loops.clone();
        dom::on_window("pagehide", move |_: web::Event| {
            for handle in loops.borrow().iter() {
                handle.pause();
            }
        });
    }
    {
        // Restored from the back/forward cache: the page keeps its state, so
        // the loops carry on where they stopped.
        let loops = loops.clone();
        dom::on_window("pageshow", move |ev: web::PageTransitionEvent| {
            if !ev.persisted() {
                return;
            }
            for handle in loops.borrow().iter() {
                handle.resume();
            }
        });
    }

    spawn_local(async move {
        match particles::init(&document).await {
            Ok(Some(handle)) => loops.borrow_mut().push(handle),
            Ok(None) => log::info!("[particles] scene not started"),
            Err(e) => log::error!("[particles] init error: {:?}", e),
        }
    });
    log::info!("folio-web ready");
}
