// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use folio_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn scroll_thresholds_are_ordered() {
    assert!(NAVBAR_COMPACT_AFTER_PX > 0.0);
    assert_eq!(NAVBAR_COMPACT_AFTER_PX, INDICATOR_HIDE_AFTER_PX);
    assert!(BACK_TO_TOP_SHOW_AFTER_PX > NAVBAR_COMPACT_AFTER_PX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn modal_timings_fit_together() {
    assert!(MODAL_LAYOUT_SETTLE_MS < MODAL_TRANSITION_MS);
    assert_eq!(MODAL_TRANSITION_MS, 300);
    assert_eq!(MODAL_RESET_DELAY_MS, 300);
    assert!(MODAL_AUTO_CLOSE_MS > MODAL_TRANSITION_MS + MODAL_RESET_DELAY_MS);
}

#[test]
fn particle_colour_is_matrix_green() {
    let [r, g, b] = particle_rgb();
    assert_eq!(r, 0.0);
    assert_eq!(g, 1.0);
    assert!((b - 65.0 / 255.0).abs() < 1e-6);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_sits_inside_the_cloud_bounds() {
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    // Camera is inside the cube, so some particles are always behind it.
    assert!(CAMERA_Z < PARTICLE_SPREAD * 0.5);
    assert!(MAX_PIXEL_RATIO >= 1.0);
}

#[test]
fn modal_content_classes_do_not_overlap() {
    for c in MODAL_CONTENT_SHOWN {
        assert!(!MODAL_CONTENT_HIDDEN.contains(&c));
    }
}

#[test]
fn dom_ids_are_unique() {
    let ids = [
        PROGRESS_BAR_ID,
        NAVBAR_ID,
        SCROLL_INDICATOR_ID,
        BACK_TO_TOP_IDS[0],
        BACK_TO_TOP_IDS[1],
        CANVAS_CONTAINER_ID,
        PARTICLE_CANVAS_ID,
        MENU_BUTTON_ID,
        MENU_PANEL_ID,
        MENU_ICON_ID,
        MODAL_ID,
        MODAL_BACKDROP_ID,
        MODAL_CONTENT_ID,
        MODAL_OPEN_ID,
        MODAL_CLOSE_ID,
        CONTACT_FORM_ID,
        SUBMIT_BUTTON_ID,
        FORM_SUCCESS_ID,
        LOADER_ID,
    ];
    let mut sorted = ids.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), ids.len());
}
