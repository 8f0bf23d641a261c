use crate::dom;
use crate::input;
use web_sys as web;

/// Escape closes whatever dialog is open. `dismiss` decides what that means.
pub fn wire_dismiss_key(mut dismiss: impl FnMut() + 'static) {
    dom::on_window("keydown", move |ev: web::KeyboardEvent| {
        if input::is_dismiss_key(&ev.key()) {
            dismiss();
        }
    });
}
