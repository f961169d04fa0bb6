//! Board circles and circle-circle intersection
//!
//! Two crossing circles share a lens-shaped overlap. Its border is made of one
//! arc from each circle: the part of that circle's rim lying inside the other.
//! Those two arcs are what the player has to cut.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::arc::{Arc, directed_midpoint};
use crate::{angle_of, polar_to_cartesian};

/// Index of a circle in its board's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CircleId(pub u32);

impl CircleId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Plain 2D point as it appears in board files
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointDef {
    pub x: f64,
    pub y: f64,
}

impl From<PointDef> for DVec2 {
    fn from(p: PointDef) -> Self {
        DVec2::new(p.x, p.y)
    }
}

/// Circle descriptor consumed at board construction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleDef {
    pub center: PointDef,
    pub radius: f64,
}

impl CircleDef {
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self {
            center: PointDef { x, y },
            radius,
        }
    }
}

/// A live circle on the board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circle {
    pub id: CircleId,
    pub center: DVec2,
    pub radius: f64,
    /// Remaining uncut perimeter, disjoint fragments in `[0, 2π]`
    pub boundary: Vec<Arc>,
    /// Whole perimeter has been cut away
    pub erased: bool,
}

impl Circle {
    pub fn new(id: CircleId, center: DVec2, radius: f64) -> Self {
        Self {
            id,
            center,
            radius,
            boundary: vec![Arc::full(id)],
            erased: false,
        }
    }

    /// Total angle still covered by the boundary fragments
    pub fn remaining_span(&self) -> f64 {
        self.boundary.iter().map(Arc::angular_span).sum()
    }

    /// Point on the rim at angle `theta`
    #[inline]
    pub fn point_at(&self, theta: f64) -> DVec2 {
        polar_to_cartesian(self.center, self.radius, theta)
    }

    /// Strict interior test
    #[inline]
    pub fn contains_point(&self, p: DVec2) -> bool {
        p.distance(self.center) < self.radius
    }
}

/// Intersection points of two circle rims
///
/// Returns `None` when the circles are apart, nested, concentric or tangent;
/// a tangency has no usable overlap arcs.
pub fn circle_intersections(a: &Circle, b: &Circle) -> Option<[DVec2; 2]> {
    let ab = b.center - a.center;
    let d = ab.length();

    if d > a.radius + b.radius || d < (a.radius - b.radius).abs() || d == 0.0 {
        return None;
    }

    // Distance from a's center to the common chord, along ab
    let along = (d * d - b.radius * b.radius + a.radius * a.radius) / (2.0 * d);
    let h_sq = a.radius * a.radius - along * along;
    if h_sq <= 0.0 {
        return None;
    }
    let h = h_sq.sqrt();

    let mid = a.center + ab * (along / d);
    let offset = DVec2::new(-ab.y, ab.x) * (h / d);

    Some([mid + offset, mid - offset])
}

/// The two arcs bounding the overlap of `a` and `b` (one per circle)
///
/// Each circle offers two candidate arcs between the intersection points; the
/// one whose directed midpoint lies strictly inside the other circle is kept.
pub fn overlap_arcs(a: &Circle, b: &Circle) -> Vec<Arc> {
    let Some([p1, p2]) = circle_intersections(a, b) else {
        return Vec::new();
    };

    let mut arcs = Vec::with_capacity(2);
    for (own, other) in [(a, b), (b, a)] {
        let t1 = angle_of(own.center, p1);
        let t2 = angle_of(own.center, p2);

        let inside = [(t1, t2), (t2, t1)]
            .into_iter()
            .find(|&(start, end)| other.contains_point(own.point_at(directed_midpoint(start, end))));

        if let Some((start, end)) = inside {
            arcs.push(Arc::new(own.id, start, end));
        }
    }

    // A genuine crossing yields exactly one arc per circle
    if arcs.len() == 2 { arcs } else { Vec::new() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn circle(id: u32, x: f64, y: f64, r: f64) -> Circle {
        Circle::new(CircleId(id), DVec2::new(x, y), r)
    }

    #[test]
    fn test_two_point_crossing() {
        let a = circle(0, 0.0, 0.0, 50.0);
        let b = circle(1, 60.0, 0.0, 50.0);

        let [p1, p2] = circle_intersections(&a, &b).expect("circles cross");
        for p in [p1, p2] {
            assert!((p.distance(a.center) - 50.0).abs() < 1e-9);
            assert!((p.distance(b.center) - 50.0).abs() < 1e-9);
            assert!((p.x - 30.0).abs() < 1e-9);
            assert!((p.y.abs() - 40.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_intersection_symmetry() {
        let a = circle(0, 3.0, -2.0, 7.0);
        let b = circle(1, 9.0, 4.0, 5.5);

        let ab = circle_intersections(&a, &b).unwrap();
        let ba = circle_intersections(&b, &a).unwrap();
        for p in ab {
            assert!(ba.iter().any(|q| q.distance(p) < 1e-9));
        }
    }

    #[test]
    fn test_no_intersection_cases() {
        let a = circle(0, 0.0, 0.0, 10.0);
        // Too far apart
        assert!(circle_intersections(&a, &circle(1, 30.0, 0.0, 10.0)).is_none());
        // Nested
        assert!(circle_intersections(&a, &circle(1, 1.0, 0.0, 2.0)).is_none());
        // Concentric, same radius
        assert!(circle_intersections(&a, &circle(1, 0.0, 0.0, 10.0)).is_none());
        // Externally tangent
        assert!(overlap_arcs(&a, &circle(1, 20.0, 0.0, 10.0)).is_empty());
    }

    #[test]
    fn test_overlap_arcs_face_each_other() {
        let a = circle(0, 0.0, 0.0, 50.0);
        let b = circle(1, 60.0, 0.0, 50.0);

        let arcs = overlap_arcs(&a, &b);
        assert_eq!(arcs.len(), 2);

        let on_a = arcs.iter().find(|arc| arc.circle == a.id).unwrap();
        let on_b = arcs.iter().find(|arc| arc.circle == b.id).unwrap();

        // a's overlap arc faces +x, b's faces -x
        assert!(on_a.contains_angle(0.0));
        assert!(!on_a.contains_angle(PI));
        assert!(on_b.contains_angle(PI));
        assert!(!on_b.contains_angle(0.0));

        let expected = 2.0 * (40.0f64).atan2(30.0);
        assert!((on_a.angular_span() - expected).abs() < 1e-9);
        assert!((on_b.angular_span() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_overlap_arc_of_small_circle_is_major_arc() {
        // Small circle mostly inside the big one: its inside part is the long way round
        let big = circle(0, 0.0, 0.0, 50.0);
        let small = circle(1, 45.0, 0.0, 10.0);

        let arcs = overlap_arcs(&big, &small);
        let on_small = arcs.iter().find(|arc| arc.circle == small.id).unwrap();
        assert!(on_small.angular_span() > PI);
        assert!(on_small.contains_angle(PI));
    }
}
