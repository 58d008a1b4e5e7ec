//! Shared gesture constants for touch/pointer handling.
//!
//! Values are in logical pixels (or logical pixels per second).

/// Distance a pointer must travel before a drag is recognised.
///
/// Matches common platform conventions (Android uses ~8dp for
/// ViewConfiguration.TOUCH_SLOP).
pub const TOUCH_SLOP: f32 = 8.0;

/// Width of the band along each container edge that counts as an edge touch.
pub const EDGE_SIZE: f32 = 20.0;

/// Sensitivity 1.0 keeps the touch slop as configured. Larger values make
/// drags start sooner.
pub const DEFAULT_SENSITIVITY: f32 = 1.0;

/// Maximum release velocity in logical pixels per second.
///
/// Matches Android's default maximum fling velocity (ViewConfiguration) on a
/// baseline density.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;
