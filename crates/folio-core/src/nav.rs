//! Scroll- and click-driven navigation chrome: navbar style, scroll
//! indicator, back-to-top buttons and the mobile menu.

use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarStyle {
    /// Transparent, difference-blended, roomy padding. Top of the page.
    Expanded,
    /// Opaque, blurred, bordered, tighter padding.
    Compact,
}

impl NavbarStyle {
    #[inline]
    pub fn for_offset(offset: f64) -> Self {
        if offset > NAVBAR_COMPACT_AFTER_PX {
            NavbarStyle::Compact
        } else {
            NavbarStyle::Expanded
        }
    }

    pub fn classes(&self) -> &'static [&'static str] {
        match self {
            NavbarStyle::Expanded => &["mix-blend-difference", "py-6"],
            NavbarStyle::Compact => &["bg-black/80", "backdrop-blur-md", "border-b", "border-white/10", "py-4"],
        }
    }

    pub fn other(&self) -> Self {
        match self {
            NavbarStyle::Expanded => NavbarStyle::Compact,
            NavbarStyle::Compact => NavbarStyle::Expanded,
        }
    }
}

#[inline]
pub fn indicator_opacity(offset: f64) -> &'static str {
    if offset > INDICATOR_HIDE_AFTER_PX {
        "0"
    } else {
        "1"
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackToTop {
    Visible,
    Hidden,
}

impl BackToTop {
    #[inline]
    pub fn for_offset(offset: f64) -> Self {
        if offset > BACK_TO_TOP_SHOW_AFTER_PX {
            BackToTop::Visible
        } else {
            BackToTop::Hidden
        }
    }

    pub fn classes(&self) -> &'static [&'static str] {
        match self {
            BackToTop::Visible => &["translate-y-0", "opacity-100"],
            BackToTop::Hidden => &["translate-y-20", "opacity-0"],
        }
    }

    pub fn other(&self) -> Self {
        match self {
            BackToTop::Visible => BackToTop::Hidden,
            BackToTop::Hidden => BackToTop::Visible,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    ButtonClicked,
    LinkClicked,
}

/// Everything the DOM needs for a given menu state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuView {
    pub panel_add: &'static str,
    pub panel_remove: &'static str,
    pub icon: &'static str,
    /// Inline `overflow` for `<body>`; empty clears it.
    pub body_overflow: &'static str,
}

impl MenuState {
    pub fn transition(self, event: MenuEvent) -> Self {
        match (self, event) {
            (MenuState::Closed, MenuEvent::ButtonClicked) => MenuState::Open,
            (MenuState::Open, MenuEvent::ButtonClicked) => MenuState::Closed,
            (_, MenuEvent::LinkClicked) => MenuState::Closed,
        }
    }

    pub fn view(&self) -> MenuView {
        match self {
            MenuState::Open => MenuView {
                panel_add: "translate-x-0",
                panel_remove: "translate-x-full",
                icon: "close",
                body_overflow: "hidden",
            },
            MenuState::Closed => MenuView {
                panel_add: "translate-x-full",
                panel_remove: "translate-x-0",
                icon: "menu",
                body_overflow: "",
            },
        }
    }
}
