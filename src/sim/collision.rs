//! Stroke hit-testing against arcs
//!
//! A stroke is one frame of cutting motion. It hits an arc when some point lies
//! on both the finite segment and the angular span of the arc, not merely on
//! the arc's supporting circle.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::arc::Arc;
use crate::angle_of;
use crate::consts::SEGMENT_TOLERANCE;

/// One frame's worth of cutting motion, in world coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: DVec2,
    pub end: DVec2,
}

impl Segment {
    pub fn new(start: DVec2, end: DVec2) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Zero-length strokes (pointer held still) cut nothing
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }

    /// Whether `p` lies in the segment's bounding box, inflated by `SEGMENT_TOLERANCE`
    pub fn bbox_contains(&self, p: DVec2) -> bool {
        let min = self.start.min(self.end) - DVec2::splat(SEGMENT_TOLERANCE);
        let max = self.start.max(self.end) + DVec2::splat(SEGMENT_TOLERANCE);
        p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
    }
}

/// Intersections of the infinite line through `segment` with a circle
///
/// Returns zero, one (tangent) or two points in world coordinates.
pub fn line_circle_points(segment: &Segment, center: DVec2, radius: f64) -> Vec<DVec2> {
    let p1 = segment.start - center;
    let p2 = segment.end - center;
    let d = p2 - p1;
    let dr_sq = d.length_squared();
    if dr_sq == 0.0 {
        return Vec::new();
    }

    // Cross product of the shifted endpoints
    let cross = p1.perp_dot(p2);
    let disc = radius * radius * dr_sq - cross * cross;
    if disc < 0.0 {
        return Vec::new();
    }

    let sgn = if d.y < 0.0 { -1.0 } else { 1.0 };
    let root = disc.sqrt();
    let point = |s: f64| {
        DVec2::new(
            (cross * d.y + s * sgn * d.x * root) / dr_sq,
            (-cross * d.x + s * d.y.abs() * root) / dr_sq,
        ) + center
    };

    if disc == 0.0 {
        vec![point(1.0)]
    } else {
        vec![point(1.0), point(-1.0)]
    }
}

/// Whether `segment` crosses `arc` on a circle at `center` with `radius`
///
/// Candidate points must sit inside the stroke's (slightly inflated) bounding
/// box and inside the arc's angular span.
pub fn segment_arc_intersects(segment: &Segment, arc: &Arc, center: DVec2, radius: f64) -> bool {
    line_circle_points(segment, center, radius)
        .into_iter()
        .any(|p| segment.bbox_contains(p) && arc.contains_angle(angle_of(center, p)))
}
