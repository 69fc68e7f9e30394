// Element ids and browser-side tuning for the front-end.

pub const PARTICLES_CANVAS_ID: &str = "particles-canvas";
pub const CAROUSEL_ID: &str = "carousel";
pub const CAROUSEL_TRACK_SELECTOR: &str = ".carousel-track";
pub const CAROUSEL_ITEM_SELECTOR: &str = ".carousel-item";

pub const LIGHTBOX_ID: &str = "lightbox";
pub const LIGHTBOX_IMG_ID: &str = "lightbox-img";
pub const LIGHTBOX_TITLE_ID: &str = "lightbox-title";
pub const LIGHTBOX_CLOSE_ID: &str = "lightbox-close";

pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const NAVBAR_ID: &str = "navbar";
pub const NAV_TOGGLE_ID: &str = "nav-toggle";
pub const NAV_MENU_ID: &str = "nav-menu";
pub const NAV_LINK_SELECTOR: &str = "a.nav-link";

pub const CONTACT_FORM_ID: &str = "contact-form";
pub const FORM_SUCCESS_ID: &str = "form-success";

pub const TYPEWRITER_SELECTOR: &str = "[data-typewriter]";
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";
pub const LAZY_ROOT_MARGIN: &str = "50px";

// Rendering
pub const MAX_PIXEL_RATIO: f64 = 2.0; // cap backing-store scale on dense displays
pub const POINT_SIZE_SCALE: f32 = 60.0; // pixels per size unit at unit view distance

// Carousel frames arrive throttled in background tabs; keep one step well below a set width
pub const MAX_FRAME_DT_SEC: f64 = 0.25;
