// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn durations_are_positive() {
    for d in [
        CURSOR_DOT_DURATION,
        CURSOR_OUTLINE_DURATION,
        CURSOR_HOVER_DURATION,
        TILT_DURATION,
        SCROLL_DURATION,
        HEADER_TINT_DURATION,
        REVEAL_DURATION,
        PRESS_DURATION,
        PARALLAX_GROUP_1.1,
        PARALLAX_GROUP_2.1,
        PARALLAX_GROUP_3.1,
    ] {
        assert!(d > 0.0);
    }
    assert!(RESIZE_DEBOUNCE_MS > 0.0);
    assert!(NAVIGATION_DELAY_MS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ranges_are_ordered() {
    for (lo, hi) in [DRIFT_OFFSET_RANGE, DRIFT_SCALE_RANGE, DRIFT_DURATION_RANGE] {
        assert!(lo < hi);
    }
    assert!(DRIFT_SCALE_RANGE.0 > 0.0);
    assert!(DRIFT_DURATION_RANGE.0 > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn outline_trails_wider_and_slower_than_dot() {
    assert!(CURSOR_OUTLINE_OFFSET > CURSOR_DOT_OFFSET);
    assert!(CURSOR_OUTLINE_DURATION > CURSOR_DOT_DURATION);
    assert!(CURSOR_HOVER_SCALE > 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn header_gets_more_opaque_when_scrolled() {
    assert!(HEADER_BG_SCROLLED.ends_with("0.8)"));
    assert!(HEADER_BG_TOP.ends_with("0.5)"));
    assert_eq!(SCROLL_HEADER_OFFSET, HEADER_SCROLL_THRESHOLD);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn mesh_wave_stays_within_a_cell() {
    assert!(MESH_AMPLITUDE < MESH_CELL_SIZE);
    assert!(MESH_CELL_SIZE > 0.0);
    assert!(MESH_MAX_CELLS_PER_AXIS > 0);
    assert!(MESH_LINE_WIDTH > 0.0);
    assert!(PRESS_SCALE < 1.0);
    assert!(MOBILE_DURATION_FACTOR > 1.0);
}
