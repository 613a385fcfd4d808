use std::time::Duration;

// Drag-to-scrub tuning shared by every front-end.

// Press-to-overlay delay; a release inside this window is a plain click
pub const SHOW_DELAY: Duration = Duration::from_millis(100);

// Horizontal pixels per increment step
pub const ACCEL_PX: f32 = 15.0;

// Tier magnitudes, topmost zone first
pub const DEFAULT_MAGNITUDES: [f64; 3] = [100.0, 10.0, 1.0];

// Exponent window probed when picking the starting tier
pub const INITIAL_EXPONENT_MIN: i32 = -2;
pub const INITIAL_EXPONENT_MAX: i32 = 2;
pub const FALLBACK_EXPONENT: i32 = 0; // used when no exponent in the window fits
