use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn html_by_id(document: &web::Document, element_id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// All elements matching `selector`, skipping anything that is not an HtmlElement.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut() + 'static,
) -> bool {
    match document.get_element_by_id(element_id) {
        Some(el) => {
            on_click(&el, handler);
            true
        }
        None => {
            log::debug!("[dom] #{} not found; click handler skipped", element_id);
            false
        }
    }
}

pub fn on_click(target: &web::EventTarget, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Window-level listener that receives the raw event.
pub fn on_window<E>(event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Like [`on_window`] but registered with `passive: false` so the handler may
/// call `prevent_default`.
pub fn on_window_active<E>(event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

/// One-shot `setTimeout`.
pub fn set_timeout(delay_ms: i32, callback: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let cb = Closure::once(callback);
    if let Err(e) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), delay_ms)
    {
        log::error!("[dom] setTimeout failed: {:?}", e);
    }
    cb.forget();
}

pub fn swap_classes(el: &web::Element, add: &[&str], remove: &[&str]) {
    let cl = el.class_list();
    for c in remove {
        _ = cl.remove_1(c);
    }
    for c in add {
        _ = cl.add_1(c);
    }
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::warn!("[dom] style {}={} rejected: {:?}", property, value, e);
    }
}

/// Current vertical scroll and the maximum reachable offset.
pub fn window_scroll() -> (f64, f64) {
    let Some(window) = web::window() else {
        return (0.0, 0.0);
    };
    let offset = window.scroll_y().unwrap_or(0.0);
    let viewport_h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let doc_h = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    (offset, (doc_h - viewport_h).max(0.0))
}

#[inline]
pub fn viewport_size() -> (f64, f64) {
    let Some(window) = web::window() else {
        return (0.0, 0.0);
    };
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w, h)
}

/// Document-space top and height of `el`, ignoring any transform applied to it.
pub fn document_geometry(el: &web::HtmlElement) -> (f64, f64) {
    let mut top = 0.0;
    let mut node = Some(el.clone());
    while let Some(n) = node {
        top += n.offset_top() as f64;
        node = n
            .offset_parent()
            .and_then(|p| p.dyn_into::<web::HtmlElement>().ok());
    }
    (top, el.offset_height() as f64)
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, pixel_ratio: f64) {
    let (w, h) = viewport_size();
    let w_px = (w * pixel_ratio) as u32;
    let h_px = (h * pixel_ratio) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
}

/// `document.readyState` as a plain string ("loading", "interactive", "complete").
pub fn ready_state(document: &web::Document) -> String {
    js_sys::Reflect::get(document, &"readyState".into())
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}
