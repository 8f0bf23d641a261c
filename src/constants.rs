/// DOM contract for the page: element ids, selectors and the classes the
/// controllers toggle.
///
/// Every lookup against these is optional; a missing element only disables
/// the behaviour that needs it.
// Scroll chrome
pub const PROGRESS_BAR_ID: &str = "progress-bar";
pub const NAVBAR_ID: &str = "navbar";
pub const SCROLL_INDICATOR_ID: &str = "scroll-indicator";
pub const BACK_TO_TOP_IDS: [&str; 2] = ["back-to-top", "back-to-top-mobile"];

// Particle scene
pub const CANVAS_CONTAINER_ID: &str = "canvas-container";
pub const PARTICLE_CANVAS_ID: &str = "particle-canvas";

// Reveal / parallax targets
pub const REVEAL_SELECTOR: &str = ".reveal-text";
pub const PROJECT_CARD_SELECTOR: &str = ".project-card";
pub const HERO_IMAGE_SELECTOR: &str = "img[alt=\"Hero Image\"]";

// Mobile menu
pub const MENU_BUTTON_ID: &str = "mobile-menu-btn";
pub const MENU_PANEL_ID: &str = "mobile-menu";
pub const MENU_ICON_ID: &str = "menu-icon";
pub const MENU_LINK_SELECTOR: &str = ".mobile-link";

// Contact modal
pub const MODAL_ID: &str = "contact-modal";
pub const MODAL_BACKDROP_ID: &str = "modal-backdrop";
pub const MODAL_CONTENT_ID: &str = "modal-content";
pub const MODAL_OPEN_ID: &str = "open-modal-btn";
pub const MODAL_OPEN_SELECTOR: &str = "[data-open-contact]";
pub const MODAL_CLOSE_ID: &str = "close-modal-btn";
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const SUBMIT_BUTTON_ID: &str = "submit-btn";
pub const FORM_SUCCESS_ID: &str = "form-success";
pub const SUBMIT_BUSY_LABEL: &str = "TRANSMITTING...";

pub const MODAL_CONTENT_SHOWN: [&str; 2] = ["scale-100", "opacity-100"];
pub const MODAL_CONTENT_HIDDEN: [&str; 2] = ["scale-95", "opacity-0"];

// Loader overlay
pub const LOADER_ID: &str = "loader-wrapper";

// Shared utility classes
pub const HIDDEN_CLASS: &str = "hidden";
