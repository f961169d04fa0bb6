//! Arc geometry on a board circle
//!
//! An arc is the counter-clockwise span from `start` to `end` around its
//! owning circle's center. Angles are stored as produced (not pre-normalized);
//! every consumer normalizes into [0, 2π) before comparing.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use super::circle::CircleId;
use crate::{normalize_angle, normalize_signed};

/// A span of a circle's circumference, referencing the circle by id
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    /// Owning circle (arena index on the board)
    pub circle: CircleId,
    /// Start angle (radians)
    pub start: f64,
    /// End angle (radians), reached counter-clockwise from `start`
    pub end: f64,
}

impl Arc {
    pub fn new(circle: CircleId, start: f64, end: f64) -> Self {
        Self { circle, start, end }
    }

    /// The whole circumference, `[0, 2π]`
    pub fn full(circle: CircleId) -> Self {
        Self::new(circle, 0.0, TAU)
    }

    /// Start and end mapped into [0, 2π)
    #[inline]
    pub fn normalized_bounds(&self) -> (f64, f64) {
        (normalize_angle(self.start), normalize_angle(self.end))
    }

    /// True when the normalized span crosses the 0/2π seam
    pub fn wraps(&self) -> bool {
        let (start, end) = self.normalized_bounds();
        start > end
    }

    /// Angular span of the arc (counter-clockwise, handles wraparound)
    ///
    /// Arcs stored in natural `start < end` form (boundary fragments, the full
    /// circle) report their raw length so `[0, 2π]` measures 2π, not zero.
    pub fn angular_span(&self) -> f64 {
        let raw = self.end - self.start;
        if raw > 0.0 && raw <= TAU {
            return raw;
        }
        let (start, end) = self.normalized_bounds();
        let mut span = end - start;
        if span < 0.0 {
            span += TAU;
        }
        span
    }

    /// Check if an angle is within the arc's angular extent (inclusive)
    pub fn contains_angle(&self, theta: f64) -> bool {
        let theta = normalize_angle(theta);
        let (start, end) = self.normalized_bounds();

        if start < end {
            theta >= start && theta <= end
        } else {
            // Wraparound case (e.g., start=5.5, end=1.0); also the full circle
            theta >= start || theta <= end
        }
    }

    /// Angle halfway along the counter-clockwise span, in (-π, π]
    pub fn directed_midpoint(&self) -> f64 {
        directed_midpoint(self.start, self.end)
    }
}

/// Angle halfway along the counter-clockwise span from `start` to `end`
///
/// Both bounds are normalized first; the result is re-normalized to (-π, π]
/// to match the `atan2` convention.
pub fn directed_midpoint(start: f64, end: f64) -> f64 {
    let start = normalize_angle(start);
    let end = normalize_angle(end);
    let mut span = end - start;
    if span < 0.0 {
        span += TAU;
    }
    normalize_signed(start + span / 2.0)
}
