use glam::Vec2;
use web_sys as web;

/// Last known pointer position in CSS pixels.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    pub fn centered(viewport: Vec2) -> Self {
        Self {
            x: viewport.x * 0.5,
            y: viewport.y * 0.5,
        }
    }

    #[inline]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Window inner size in CSS pixels.
pub fn viewport_css_px() -> Vec2 {
    let Some(w) = web::window() else {
        return Vec2::ZERO;
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Vec2::new(width as f32, height as f32)
}
