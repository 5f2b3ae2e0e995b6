// Shared physics and pacing constants used by both web and native frontends.

// Default mission (textbook problem: v = sqrt(0.75) c, 5.2 ly)
pub const DEFAULT_DISTANCE_LY: f64 = 5.2;
pub const DEFAULT_VELOCITY_C: f64 = 0.866;

// Input ranges exposed by the sliders; values are clamped into these
pub const DISTANCE_MIN_LY: f64 = 1.0;
pub const DISTANCE_MAX_LY: f64 = 10.0;
pub const DISTANCE_STEP_LY: f64 = 0.1;
pub const VELOCITY_MIN_C: f64 = 0.1;
pub const VELOCITY_MAX_C: f64 = 0.99;
pub const VELOCITY_STEP_C: f64 = 0.01;

// Playback: progress units added per display tick
pub const PLAYBACK_SPEED_DEFAULT: f64 = 0.005;
pub const PLAYBACK_SPEED_MIN: f64 = 0.001;
pub const PLAYBACK_SPEED_MAX: f64 = 0.02;
pub const PLAYBACK_SPEED_STEP: f64 = 0.001;

// Viewport margins around the trip, in ly / years
pub const VIEW_MARGIN_BEFORE: f64 = 1.0;
pub const VIEW_MARGIN_AFTER: f64 = 2.0;

// Length of the light-cone rays drawn from the origin
pub const LIGHT_CONE_LENGTH: f64 = 10.0;

// Boosted grid emphasis (opacity) for a single frame vs. superimposed frames
pub const GRID_EMPHASIS: f32 = 0.5;
pub const GRID_EMPHASIS_SUPERIMPOSED: f32 = 0.3;

// Tolerance for lab-time comparisons (emission/reception ordering)
pub const TIME_EPSILON: f64 = 1e-9;
