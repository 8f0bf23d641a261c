use crate::dom;
use crate::input;
use folio_core::particles::PointerState;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

/// Keep `pointer` updated from every `pointermove` on the window.
pub fn wire_pointer_tracking(pointer: Rc<Cell<PointerState>>) {
    dom::on_window("pointermove", move |ev: web::PointerEvent| {
        let (w, h) = dom::viewport_size();
        let [x, y] = input::normalized_pointer(ev.client_x() as f64, ev.client_y() as f64, w, h);
        pointer.set(PointerState { x, y });
    });
}
