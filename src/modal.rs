//! Contact modal: DOM side of the modal state machine.

use crate::constants::*;
use crate::dom;
use crate::events;
use folio_core::modal::{check_status, ContactModal, Effect, ModalEvent, SubmitError};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

struct ModalDom {
    container: web::HtmlElement,
    content: Option<web::HtmlElement>,
    form: Option<web::HtmlFormElement>,
    submit: Option<web::HtmlButtonElement>,
    submit_label: String,
    success: Option<web::HtmlElement>,
}

pub struct ModalController {
    machine: RefCell<ContactModal>,
    dom: ModalDom,
}

impl ModalController {
    pub fn dispatch(self: &Rc<Self>, event: ModalEvent) {
        let before = self.machine.borrow().state();
        let effects = self.machine.borrow_mut().handle(event);
        let after = self.machine.borrow().state();
        if before != after {
            log::info!("[modal] {:?} -> {:?}", before, after);
        }
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(self: &Rc<Self>, effect: Effect) {
        let d = &self.dom;
        match effect {
            Effect::ShowContainer => dom::swap_classes(&d.container, &[], &[HIDDEN_CLASS]),
            Effect::HideContainer => dom::swap_classes(&d.container, &[HIDDEN_CLASS], &[]),
            Effect::AnimateIn => {
                if let Some(c) = &d.content {
                    dom::swap_classes(c, &MODAL_CONTENT_SHOWN, &MODAL_CONTENT_HIDDEN);
                }
            }
            Effect::AnimateOut => {
                if let Some(c) = &d.content {
                    dom::swap_classes(c, &MODAL_CONTENT_HIDDEN, &MODAL_CONTENT_SHOWN);
                }
            }
            Effect::Schedule {
                timer,
                token,
                delay_ms,
            } => {
                let this = self.clone();
                dom::set_timeout(delay_ms, move || {
                    this.dispatch(ModalEvent::TimerFired(timer, token));
                });
            }
            Effect::LockSubmit => {
                if let Some(b) = &d.submit {
                    b.set_disabled(true);
                    b.set_inner_html(SUBMIT_BUSY_LABEL);
                }
            }
            Effect::RestoreSubmit => {
                if let Some(b) = &d.submit {
                    b.set_disabled(false);
                    b.set_inner_html(&d.submit_label);
                }
            }
            Effect::SendForm => {
                let this = self.clone();
                let form = d.form.clone();
                spawn_local(async move {
                    let result = match form {
                        Some(f) => send_form(&f).await,
                        None => Err(SubmitError::Network("contact form missing".into())),
                    };
                    this.dispatch(ModalEvent::SubmitFinished(result));
                });
            }
            Effect::ShowSuccess => {
                if let Some(f) = &d.form {
                    dom::swap_classes(f, &[HIDDEN_CLASS], &[]);
                }
                if let Some(s) = &d.success {
                    dom::swap_classes(s, &[], &[HIDDEN_CLASS]);
                }
            }
            Effect::ResetForm => {
                if let Some(f) = &d.form {
                    f.reset();
                    dom::swap_classes(f, &[], &[HIDDEN_CLASS]);
                }
                if let Some(s) = &d.success {
                    dom::swap_classes(s, &[HIDDEN_CLASS], &[]);
                }
            }
            Effect::Alert(message) => {
                if let Some(w) = web::window() {
                    let _ = w.alert_with_message(message);
                }
            }
        }
    }
}

/// POST the form's fields as multipart data to its `action`.
async fn send_form(form: &web::HtmlFormElement) -> Result<(), SubmitError> {
    let net = |e: wasm_bindgen::JsValue| SubmitError::Network(format!("{:?}", e));
    let window = web::window().ok_or_else(|| SubmitError::Network("no window".into()))?;
    let body = web::FormData::new_with_form(form).map_err(net)?;
    let headers = web::Headers::new().map_err(net)?;
    headers.set("Accept", "application/json").map_err(net)?;
    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_body(&body);
    init.set_headers(&headers);
    let request = web::Request::new_with_str_and_init(&form.action(), &init).map_err(net)?;
    log::info!("[modal] sending form to {}", request.url());
    let response: web::Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(net)?
        .dyn_into()
        .map_err(net)?;
    check_status(response.ok(), response.status())
}

/// Wire the modal if `#contact-modal` exists.
pub fn init(document: &web::Document) -> Option<Rc<ModalController>> {
    let Some(container) = dom::html_by_id(document, MODAL_ID) else {
        log::debug!("[modal] #{} not found; contact modal disabled", MODAL_ID);
        return None;
    };
    let submit = document
        .get_element_by_id(SUBMIT_BUTTON_ID)
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok());
    let submit_label = submit.as_ref().map(|b| b.inner_html()).unwrap_or_default();
    let form = document
        .get_element_by_id(CONTACT_FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok());

    let ctrl = Rc::new(ModalController {
        machine: RefCell::new(ContactModal::new()),
        dom: ModalDom {
            container,
            content: dom::html_by_id(document, MODAL_CONTENT_ID),
            form,
            submit,
            submit_label,
            success: dom::html_by_id(document, FORM_SUCCESS_ID),
        },
    });

    {
        let c = ctrl.clone();
        dom::add_click_listener(document, MODAL_OPEN_ID, move || {
            c.dispatch(ModalEvent::OpenClicked)
        });
    }
    for el in dom::query_all(document, MODAL_OPEN_SELECTOR) {
        let c = ctrl.clone();
        dom::on_click(&el, move || c.dispatch(ModalEvent::OpenClicked));
    }
    {
        let c = ctrl.clone();
        dom::add_click_listener(document, MODAL_CLOSE_ID, move || {
            c.dispatch(ModalEvent::CloseClicked)
        });
    }
    {
        let c = ctrl.clone();
        dom::add_click_listener(document, MODAL_BACKDROP_ID, move || {
            c.dispatch(ModalEvent::BackdropClicked)
        });
    }
    {
        let c = ctrl.clone();
        events::wire_dismiss_key(move || c.dispatch(ModalEvent::CloseClicked));
    }
    if let Some(form) = &ctrl.dom.form {
        let c = ctrl.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
            c.dispatch(ModalEvent::Submit);
        }) as Box<dyn FnMut(_)>);
        let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::debug!("[modal] #{} not found; submit disabled", CONTACT_FORM_ID);
    }

    log::info!("[modal] ready");
    Some(ctrl)
}
