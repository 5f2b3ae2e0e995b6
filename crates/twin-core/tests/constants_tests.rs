// Sanity checks for tuning constants and their relationships.

use twin_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn slider_ranges_are_valid_physics() {
    assert!(DISTANCE_MIN_LY > 0.0);
    assert!(DISTANCE_MAX_LY > DISTANCE_MIN_LY);
    assert!(VELOCITY_MIN_C > 0.0);
    assert!(VELOCITY_MAX_C < 1.0);
    assert!(VELOCITY_MAX_C > VELOCITY_MIN_C);
    assert!(DISTANCE_STEP_LY > 0.0 && VELOCITY_STEP_C > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn defaults_lie_inside_ranges() {
    assert!((DISTANCE_MIN_LY..=DISTANCE_MAX_LY).contains(&DEFAULT_DISTANCE_LY));
    assert!((VELOCITY_MIN_C..=VELOCITY_MAX_C).contains(&DEFAULT_VELOCITY_C));
    assert!((PLAYBACK_SPEED_MIN..=PLAYBACK_SPEED_MAX).contains(&PLAYBACK_SPEED_DEFAULT));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn grid_emphasis_ordering() {
    // superimposed frames are drawn fainter than a single frame
    assert!(GRID_EMPHASIS_SUPERIMPOSED < GRID_EMPHASIS);
    assert!(GRID_EMPHASIS <= 1.0 && GRID_EMPHASIS_SUPERIMPOSED > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn viewport_margins_and_tolerance() {
    assert!(VIEW_MARGIN_BEFORE > 0.0 && VIEW_MARGIN_AFTER > 0.0);
    assert!(LIGHT_CONE_LENGTH > 0.0);
    assert!(TIME_EPSILON > 0.0 && TIME_EPSILON < 1e-6);
}
