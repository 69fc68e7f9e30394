//! Continuous-scroll loop over a doubled carousel strip.
//!
//! The strip holds every item twice; scrolling by exactly one set width lands
//! on an identical frame, so the offset can wrap without a visible jump.

use crate::constants::{CAROUSEL_FALLBACK_WIDTH, CAROUSEL_MIN_SPEED, CAROUSEL_TRAVERSAL_SEC};

#[derive(Clone, Debug)]
pub struct CarouselParams {
    pub fallback_width: f64,
    pub min_speed: f64,
    pub traversal_sec: f64,
}

impl Default for CarouselParams {
    fn default() -> Self {
        Self {
            fallback_width: CAROUSEL_FALLBACK_WIDTH,
            min_speed: CAROUSEL_MIN_SPEED,
            traversal_sec: CAROUSEL_TRAVERSAL_SEC,
        }
    }
}

/// Width of one copy of the strip: each original item plus the gap after it.
///
/// Zero, negative or non-finite results fall back to `fallback` so the loop
/// always has a positive period.
pub fn measure_single_set_width(item_widths: &[f64], gap: f64, fallback: f64) -> f64 {
    let gap = if gap.is_finite() { gap } else { 0.0 };
    let width: f64 = item_widths.iter().map(|w| w + gap).sum();
    if width.is_finite() && width > 0.0 {
        width
    } else {
        log::warn!("[carousel] measured width {} unusable; using {}", width, fallback);
        fallback
    }
}

/// Pixels per second: at least `min_speed`, otherwise one set per `traversal_sec`.
pub fn scroll_speed(single_set_width: f64, params: &CarouselParams) -> f64 {
    (single_set_width / params.traversal_sec)
        .round()
        .max(params.min_speed)
}

/// Parse a CSS length such as `"24px"` or `"1.5px"`; keywords like `normal` give `None`.
pub fn parse_px(value: &str) -> Option<f64> {
    let v = value.trim();
    let v = v.strip_suffix("px").unwrap_or(v);
    v.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

#[derive(Clone, Debug)]
pub struct CarouselLoop {
    single_set_width: f64,
    speed: f64,
    offset: f64,
    running: bool,
}

impl CarouselLoop {
    pub fn new(single_set_width: f64, params: &CarouselParams) -> Self {
        let single_set_width = if single_set_width.is_finite() && single_set_width > 0.0 {
            single_set_width
        } else {
            params.fallback_width
        };
        Self {
            single_set_width,
            speed: scroll_speed(single_set_width, params),
            offset: 0.0,
            running: true,
        }
    }

    /// Measure from item widths and build the loop in one step.
    pub fn from_measurements(item_widths: &[f64], gap: f64, params: &CarouselParams) -> Self {
        let width = measure_single_set_width(item_widths, gap, params.fallback_width);
        Self::new(width, params)
    }

    pub fn single_set_width(&self) -> f64 {
        self.single_set_width
    }

    /// Width to give the doubled track.
    pub fn track_width(&self) -> f64 {
        self.single_set_width * 2.0
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Advance by `dt_sec`. Wraps with a single subtraction: callers keep
    /// `speed * dt_sec` below one set width.
    pub fn tick(&mut self, dt_sec: f64) {
        if !self.running || dt_sec.is_nan() || dt_sec <= 0.0 {
            return;
        }
        self.offset += self.speed * dt_sec;
        if self.offset >= self.single_set_width {
            self.offset -= self.single_set_width;
        }
    }

    /// CSS transform for the current offset; only the x axis moves.
    pub fn transform(&self) -> String {
        format!("translate3d(-{:.3}px, 0, 0)", self.offset)
    }
}
