// Shared tuning constants for the particle background and the carousel loop.

// Particle field volume (half extents, world units)
pub const PARTICLE_COUNT: usize = 400;
pub const FIELD_HALF_X: f32 = 20.0;
pub const FIELD_HALF_Y: f32 = 15.0;
pub const FIELD_HALF_Z: f32 = 10.0;

// Per-frame velocity ranges (world units per frame, not per second)
pub const VELOCITY_XZ_SPAN: f32 = 0.01; // vx, vz in [-span, span]
pub const VELOCITY_Y_MIN: f32 = 0.01; // upward bias
pub const VELOCITY_Y_MAX: f32 = 0.03;

// Render scale range
pub const SIZE_MIN: f32 = 1.0;
pub const SIZE_MAX: f32 = 4.0;

// Oscillatory drift
pub const DRIFT_X_AMPLITUDE: f32 = 0.01;
pub const DRIFT_X_PHASE_PER_Y: f32 = 0.01;
pub const DRIFT_Z_AMPLITUDE: f32 = 0.008;
pub const DRIFT_Z_PHASE_PER_X: f32 = 0.015;

// Pointer parallax (world units per CSS pixel from viewport center)
pub const PARALLAX_PER_PX: f32 = 0.0003;

// Three-entry palette, picked with equal probability
pub const PARTICLE_PALETTE: [[f32; 3]; 3] = [
    [0.39, 0.40, 0.95], // indigo
    [0.55, 0.36, 0.96], // violet
    [0.93, 0.29, 0.60], // pink
];

// Camera
pub const CAMERA_Z: f32 = 30.0;
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Carousel loop
pub const CAROUSEL_FALLBACK_WIDTH: f64 = 1000.0; // used when layout measurement fails
pub const CAROUSEL_MIN_SPEED: f64 = 30.0; // px per second
pub const CAROUSEL_TRAVERSAL_SEC: f64 = 6.0; // time to scroll one set
pub const RESIZE_RELOAD_DEBOUNCE_MS: i32 = 250;

// Contact form
pub const MIN_MESSAGE_CHARS: usize = 10;
pub const SUCCESS_NOTICE_MS: i32 = 3000;

// Theme preference
pub const THEME_STORAGE_KEY: &str = "theme";

// Typewriter
pub const TYPEWRITER_START_DELAY_MS: i32 = 500;
pub const TYPEWRITER_CHAR_DELAY_MS: i32 = 80;

// Navigation
pub const SCROLL_SPY_OFFSET_PX: f64 = 100.0;
pub const NAVBAR_SCROLLED_PX: f64 = 50.0;
