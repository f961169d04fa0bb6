//! Circle Cut - a puzzle where overlapping circles are cut apart along their shared arcs
//!
//! Core modules:
//! - `sim`: Deterministic geometry engine (overlap arcs, merging, stroke hit-tests, board state)
//! - `session`: Player identity and per-run summary statistics
//! - `settings`: Data-driven game configuration

pub mod session;
pub mod settings;
pub mod sim;

pub use session::{PlayerIdentity, RunSummary, Session, SessionStats};
pub use settings::Settings;
pub use sim::BoardError;

use glam::DVec2;
use std::f64::consts::{PI, TAU};

/// Game configuration constants
pub mod consts {
    /// Slack (world units) added to a stroke's bounding box on each axis when
    /// accepting a line/circle intersection point
    pub const SEGMENT_TOLERANCE: f64 = 0.1;
    /// Two arcs on one circle closer than this (radians) are merged
    pub const MERGE_EPSILON: f64 = 1e-9;
    /// A circle whose remaining boundary spans less than this (radians) is erased
    pub const ERASE_EPSILON: f64 = 1e-6;
    /// Default number of foul strokes allowed before the board is lost
    pub const DEFAULT_LIVES: u32 = 3;
}

/// Normalize an angle to [0, 2π)
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid rounds tiny negative inputs up to exactly TAU
    if a >= TAU { 0.0 } else { a }
}

/// Normalize an angle to (-π, π], the range produced by `atan2`
#[inline]
pub fn normalize_signed(angle: f64) -> f64 {
    let a = normalize_angle(angle);
    if a > PI { a - TAU } else { a }
}

/// Convert polar (r, theta) around `center` to cartesian
#[inline]
pub fn polar_to_cartesian(center: DVec2, r: f64, theta: f64) -> DVec2 {
    center + DVec2::new(r * theta.cos(), r * theta.sin())
}

/// Angle of `point` as seen from `center`, in (-π, π]
#[inline]
pub fn angle_of(center: DVec2, point: DVec2) -> f64 {
    let d = point - center;
    d.y.atan2(d.x)
}
