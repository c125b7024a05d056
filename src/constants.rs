// Layout, motion and timing constants for the landing page effects.
//
// Values are in CSS pixels, seconds or milliseconds as named. Keeping them
// here keeps magic numbers out of the behavior code.

// Layout breakpoint: strictly wider viewports count as desktop
pub const DESKTOP_BREAKPOINT_PX: f64 = 768.0;

// Wireframe mesh
pub const MESH_CELL_SIZE: f64 = 50.0;
pub const MESH_AMPLITUDE: f64 = 20.0;
pub const MESH_WAVE_FREQUENCY: f64 = 0.15; // phase offset per row/column
pub const MESH_ROTATION_STEP: f64 = 0.001; // per frame
pub const MESH_TIME_STEP: f64 = 0.005; // per frame
pub const MESH_STROKE_STYLE: &str = "rgba(0, 245, 255, 0.15)";
pub const MESH_LINE_WIDTH: f64 = 0.8;
pub const MESH_CANVAS_ID: &str = "bgCanvas";
pub const MESH_MAX_CELLS_PER_AXIS: usize = 1024; // bounds rows and cols

// Cursor follower (offsets are half the element size)
pub const CURSOR_DOT_OFFSET: f64 = 4.0;
pub const CURSOR_OUTLINE_OFFSET: f64 = 16.0;
pub const CURSOR_DOT_DURATION: f64 = 0.3;
pub const CURSOR_OUTLINE_DURATION: f64 = 0.6;
pub const CURSOR_HOVER_SCALE: f64 = 1.5;
pub const CURSOR_HOVER_DURATION: f64 = 0.3;

// Ambient shape drift
pub const DRIFT_OFFSET_RANGE: (f64, f64) = (-100.0, 100.0);
pub const DRIFT_SCALE_RANGE: (f64, f64) = (0.9, 1.1);
pub const DRIFT_DURATION_RANGE: (f64, f64) = (15.0, 25.0);
pub const DRIFT_STAGGER_SEC: f64 = 0.3;

// Pointer parallax: (factor, duration) per shape group
pub const PARALLAX_GROUP_1: (f64, f64) = (50.0, 1.5);
pub const PARALLAX_GROUP_2: (f64, f64) = (-40.0, 1.7);
pub const PARALLAX_GROUP_3: (f64, f64) = (60.0, 1.3);

// Card tilt
pub const TILT_DIVISOR: f64 = 20.0; // px of pointer travel per degree
pub const TILT_PERSPECTIVE: f64 = 1000.0;
pub const TILT_DURATION: f64 = 0.5;

// Anchor smooth scroll
pub const SCROLL_HEADER_OFFSET: f64 = 100.0;
pub const SCROLL_DURATION: f64 = 1.0;

// Header tint
pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;
pub const HEADER_BG_TOP: &str = "rgba(5, 5, 5, 0.5)";
pub const HEADER_BG_SCROLLED: &str = "rgba(5, 5, 5, 0.8)";
pub const HEADER_TINT_DURATION: f64 = 0.3;

// Section reveals
pub const REVEAL_START: &str = "top 80%";
pub const REVEAL_OFFSET_Y: f64 = 40.0;
pub const REVEAL_DURATION: f64 = 0.8;
pub const REVEAL_STAGGER: f64 = 0.2;

// Hero particles
pub const PARTICLE_COUNT: usize = 10;
pub const PARTICLE_SIZE_MIN_PX: f64 = 2.0;
pub const PARTICLE_SIZE_SPAN_PX: f64 = 8.0;
pub const PARTICLE_DELAY_MAX_SEC: f64 = 5.0;
pub const PARTICLE_CLASS: &str = "particle";

// Mobile adaptation
pub const MOBILE_DURATION_FACTOR: f64 = 2.0;

// Join buttons
pub const PRESS_SCALE: f64 = 0.95;
pub const PRESS_DURATION: f64 = 0.1;
pub const NAVIGATION_DELAY_MS: i32 = 200;
pub const NAVIGATION_TARGET: &str = "_blank";
pub const NAVIGATION_FEATURES: &str = "noopener,noreferrer";

// Focus mode
pub const KEYBOARD_NAV_CLASS: &str = "keyboard-nav";

// Resize handling
pub const RESIZE_DEBOUNCE_MS: f64 = 250.0;
