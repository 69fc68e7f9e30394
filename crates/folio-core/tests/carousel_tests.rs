// Host-side tests for the carousel width measurement and scroll loop.

use folio_core::constants::{CAROUSEL_FALLBACK_WIDTH, CAROUSEL_MIN_SPEED};
use folio_core::{measure_single_set_width, parse_px, scroll_speed, CarouselLoop, CarouselParams};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn width_sums_items_and_gaps() {
    let w = measure_single_set_width(&[300.0, 250.0, 310.0], 20.0, CAROUSEL_FALLBACK_WIDTH);
    assert!(approx(w, 300.0 + 250.0 + 310.0 + 3.0 * 20.0));
}

#[test]
fn missing_gap_counts_as_zero() {
    let w = measure_single_set_width(&[300.0, 300.0], f64::NAN, CAROUSEL_FALLBACK_WIDTH);
    assert!(approx(w, 600.0));
}

#[test]
fn unusable_measurements_fall_back_to_exactly_1000() {
    let params = CarouselParams::default();
    assert_eq!(measure_single_set_width(&[], 0.0, params.fallback_width), 1000.0);
    assert_eq!(measure_single_set_width(&[0.0, 0.0], 0.0, params.fallback_width), 1000.0);
    assert_eq!(measure_single_set_width(&[f64::NAN, 200.0], 10.0, params.fallback_width), 1000.0);
    assert_eq!(measure_single_set_width(&[f64::INFINITY], 0.0, params.fallback_width), 1000.0);

    assert_eq!(CarouselLoop::new(0.0, &params).single_set_width(), 1000.0);
    assert_eq!(CarouselLoop::new(f64::NAN, &params).single_set_width(), 1000.0);
}

#[test]
fn speed_is_one_set_per_six_seconds_with_a_floor() {
    let params = CarouselParams::default();
    assert_eq!(scroll_speed(1200.0, &params), 200.0);
    assert_eq!(scroll_speed(1003.0, &params), 167.0); // 167.17 rounds down
    assert_eq!(scroll_speed(100.0, &params), CAROUSEL_MIN_SPEED);
    assert_eq!(scroll_speed(1000.0, &params), 167.0);
}

#[test]
fn track_is_twice_the_set_width() {
    let lp = CarouselLoop::from_measurements(&[400.0, 400.0], 24.0, &CarouselParams::default());
    assert!(approx(lp.single_set_width(), 848.0));
    assert!(approx(lp.track_width(), 1696.0));
}

#[test]
fn offset_matches_speed_times_time_mod_width() {
    let mut lp = CarouselLoop::new(1200.0, &CarouselParams::default());
    let dt = 1.0 / 60.0;
    let frames = 1000;
    for _ in 0..frames {
        lp.tick(dt);
        assert!(lp.offset() >= 0.0 && lp.offset() < lp.single_set_width());
    }
    let total = lp.speed() * dt * frames as f64;
    let expected = total % lp.single_set_width();
    assert!((lp.offset() - expected).abs() < 1e-6, "offset={} expected={}", lp.offset(), expected);
}

#[test]
fn uneven_frame_intervals_still_track_the_modulus() {
    let mut lp = CarouselLoop::new(900.0, &CarouselParams::default());
    let intervals = [0.016, 0.033, 0.008, 0.1, 0.016, 0.25];
    let mut total = 0.0;
    for i in 0..600 {
        let dt = intervals[i % intervals.len()];
        total += dt;
        lp.tick(dt);
    }
    let expected = (lp.speed() * total) % lp.single_set_width();
    assert!((lp.offset() - expected).abs() < 1e-6);
}

#[test]
fn pause_freezes_offset_and_resume_continues_from_it() {
    let mut lp = CarouselLoop::new(1200.0, &CarouselParams::default());
    for _ in 0..30 {
        lp.tick(0.016);
    }
    let frozen = lp.offset();
    assert!(frozen > 0.0);

    lp.set_running(false);
    for _ in 0..500 {
        lp.tick(0.016);
    }
    assert_eq!(lp.offset(), frozen);

    lp.set_running(true);
    lp.tick(0.1);
    assert!(approx(lp.offset(), frozen + lp.speed() * 0.1));
}

#[test]
fn non_positive_or_nan_intervals_are_ignored() {
    let mut lp = CarouselLoop::new(1200.0, &CarouselParams::default());
    lp.tick(-1.0);
    lp.tick(f64::NAN);
    lp.tick(0.0);
    assert_eq!(lp.offset(), 0.0);
}

#[test]
fn transform_only_moves_horizontally() {
    let mut lp = CarouselLoop::new(1200.0, &CarouselParams::default());
    lp.tick(0.5);
    assert_eq!(lp.transform(), "translate3d(-100.000px, 0, 0)");
}

#[test]
fn css_lengths_parse() {
    assert_eq!(parse_px("24px"), Some(24.0));
    assert_eq!(parse_px(" 1.5px "), Some(1.5));
    assert_eq!(parse_px("0"), Some(0.0));
    assert_eq!(parse_px("normal"), None);
    assert_eq!(parse_px(""), None);
}
