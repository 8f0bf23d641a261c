//! Navigation chrome: navbar style, scroll indicator, back-to-top buttons and
//! the mobile menu.

use crate::constants::*;
use crate::dom;
use crate::scroll::ScrollHandle;
use folio_core::nav::{indicator_opacity, BackToTop, MenuEvent, MenuState, NavbarStyle};
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

struct ScrollChrome {
    navbar: Option<web::HtmlElement>,
    indicator: Option<web::HtmlElement>,
    back_to_top: Vec<web::HtmlElement>,
}

impl ScrollChrome {
    fn apply(&self, offset: f64) {
        if let Some(nav) = &self.navbar {
            let style = NavbarStyle::for_offset(offset);
            dom::swap_classes(nav, style.classes(), style.other().classes());
        }
        if let Some(ind) = &self.indicator {
            dom::set_style(ind, "opacity", indicator_opacity(offset));
        }
        let btt = BackToTop::for_offset(offset);
        for b in &self.back_to_top {
            dom::swap_classes(b, btt.classes(), btt.other().classes());
        }
    }
}

fn wire_scroll_chrome(document: &web::Document, scroll: &ScrollHandle) {
    let chrome = ScrollChrome {
        navbar: dom::html_by_id(document, NAVBAR_ID),
        indicator: dom::html_by_id(document, SCROLL_INDICATOR_ID),
        back_to_top: BACK_TO_TOP_IDS
            .iter()
            .filter_map(|id| dom::html_by_id(document, id))
            .collect(),
    };
    for b in &chrome.back_to_top {
        let scroll = scroll.clone();
        dom::on_click(b, move || scroll.scroll_to(0.0));
    }
    chrome.apply(dom::window_scroll().0);
    dom::on_window("scroll", move |_: web::Event| {
        chrome.apply(dom::window_scroll().0);
    });
}

struct MobileMenu {
    state: Cell<MenuState>,
    panel: Option<web::HtmlElement>,
    icon: Option<web::HtmlElement>,
    body: Option<web::HtmlElement>,
}

impl MobileMenu {
    fn handle(&self, event: MenuEvent) {
        let next = self.state.get().transition(event);
        if next == self.state.get() && event == MenuEvent::LinkClicked {
            return;
        }
        self.state.set(next);
        let view = next.view();
        if let Some(p) = &self.panel {
            dom::swap_classes(p, &[view.panel_add], &[view.panel_remove]);
        }
        if let Some(i) = &self.icon {
            i.set_inner_text(view.icon);
        }
        if let Some(b) = &self.body {
            dom::set_style(b, "overflow", view.body_overflow);
        }
        log::debug!("[nav] menu {:?}", next);
    }
}

fn wire_mobile_menu(document: &web::Document) {
    let menu = Rc::new(MobileMenu {
        state: Cell::new(MenuState::Closed),
        panel: dom::html_by_id(document, MENU_PANEL_ID),
        icon: dom::html_by_id(document, MENU_ICON_ID),
        body: document.body(),
    });
    let m = menu.clone();
    if !dom::add_click_listener(document, MENU_BUTTON_ID, move || {
        m.handle(MenuEvent::ButtonClicked)
    }) {
        return;
    }
    for link in dom::query_all(document, MENU_LINK_SELECTOR) {
        let m = menu.clone();
        dom::on_click(&link, move || m.handle(MenuEvent::LinkClicked));
    }
}

pub fn init(document: &web::Document, scroll: &ScrollHandle) {
    wire_scroll_chrome(document, scroll);
    wire_mobile_menu(document);
    log::info!("[nav] ready");
}
