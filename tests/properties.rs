//! Property-based tests for the geometry engine using the `proptest` crate.

use std::f64::consts::TAU;

use glam::DVec2;
use proptest::prelude::*;

use circle_cut::sim::{
    Arc, Board, Circle, CircleDef, CircleId, circle_intersections, merge_arcs, subtract_arc,
};

const C: CircleId = CircleId(0);
const TOL: f64 = 1e-9;

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn arb_circle(id: u32) -> impl Strategy<Value = Circle> {
    (-100.0f64..100.0, -100.0f64..100.0, 1.0f64..80.0)
        .prop_map(move |(x, y, r)| Circle::new(CircleId(id), DVec2::new(x, y), r))
}

/// Arbitrary arc bounds, unnormalized like `atan2` output or sums of it
fn arb_arc() -> impl Strategy<Value = Arc> {
    (-TAU..TAU, 0.01f64..6.0).prop_map(|(start, span)| Arc::new(C, start, start + span))
}

/// A natural-form minuend inside [0, 2π]
fn arb_fragment() -> impl Strategy<Value = Arc> {
    (0.0f64..TAU, 0.0f64..TAU).prop_filter_map("empty fragment", |(a, b)| {
        let (start, end) = if a < b { (a, b) } else { (b, a) };
        (end - start > 1e-6).then(|| Arc::new(C, start, end))
    })
}

/// Length of `[start, end]` covered by arc `b`, for a natural-form interval
fn covered_length(start: f64, end: f64, b: &Arc) -> f64 {
    let (bs, be) = b.normalized_bounds();
    let intervals = if be < bs {
        vec![(bs, TAU), (0.0, be)]
    } else {
        vec![(bs, be)]
    };
    intervals
        .into_iter()
        .map(|(s, e)| (end.min(e) - start.max(s)).max(0.0))
        .sum()
}

// ---------------------------------------------------------------------------
// Circle-circle intersection
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn intersection_points_are_symmetric(a in arb_circle(0), b in arb_circle(1)) {
        let ab = circle_intersections(&a, &b);
        let ba = circle_intersections(&b, &a);
        prop_assert_eq!(ab.is_some(), ba.is_some());
        if let (Some(ab), Some(ba)) = (ab, ba) {
            for p in ab {
                prop_assert!(ba.iter().any(|q| q.distance(p) < 1e-4),
                    "point {:?} missing from {:?}", p, ba);
            }
        }
    }

    #[test]
    fn intersection_points_lie_on_both_rims(a in arb_circle(0), b in arb_circle(1)) {
        if let Some(points) = circle_intersections(&a, &b) {
            for p in points {
                prop_assert!((p.distance(a.center) - a.radius).abs() < 1e-4);
                prop_assert!((p.distance(b.center) - b.radius).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn nested_or_distant_circles_never_intersect(a in arb_circle(0), b in arb_circle(1)) {
        let d = a.center.distance(b.center);
        if d > a.radius + b.radius || d < (a.radius - b.radius).abs() {
            prop_assert!(circle_intersections(&a, &b).is_none());
        }
    }
}

// ---------------------------------------------------------------------------
// Subtraction
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn subtracting_self_is_empty(a in arb_fragment()) {
        prop_assert!(subtract_arc(&a, &a).is_empty());
    }

    #[test]
    fn subtraction_conserves_measure(a in arb_fragment(), b in arb_arc()) {
        let pieces = subtract_arc(&a, &b);
        let remaining: f64 = pieces.iter().map(|p| p.end - p.start).sum();
        let removed = covered_length(a.start, a.end, &b);
        prop_assert!((remaining + removed - (a.end - a.start)).abs() < 1e-9,
            "remaining {} + removed {} != {}", remaining, removed, a.end - a.start);

        for piece in &pieces {
            prop_assert!(piece.start >= a.start && piece.end <= a.end);
            prop_assert!(piece.start < piece.end);
        }
    }
}

// ---------------------------------------------------------------------------
// Merging
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn merged_arcs_are_disjoint(arcs in prop::collection::vec(arb_arc(), 1..8)) {
        let merged = merge_arcs(C, &arcs);
        let total: f64 = merged.iter().map(Arc::angular_span).sum();
        prop_assert!(total <= TAU + TOL);

        for (i, a) in merged.iter().enumerate() {
            for b in &merged[i + 1..] {
                prop_assert!(!a.contains_angle(b.directed_midpoint()),
                    "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn merging_preserves_coverage(
        arcs in prop::collection::vec(arb_arc(), 1..8),
        probe in 0.0f64..TAU,
    ) {
        // Skip probes sitting on an endpoint, where inclusivity is a tie
        let near_edge = arcs.iter().any(|a| {
            let (s, e) = a.normalized_bounds();
            [s, e].iter().any(|&x| (x - probe).abs() < 1e-6 || (x - probe).abs() > TAU - 1e-6)
        });
        prop_assume!(!near_edge);

        let before = arcs.iter().any(|a| a.contains_angle(probe));
        let after = merge_arcs(C, &arcs).iter().any(|a| a.contains_angle(probe));
        prop_assert_eq!(before, after);
    }

    #[test]
    fn merging_is_idempotent(arcs in prop::collection::vec(arb_arc(), 1..8)) {
        let once = merge_arcs(C, &arcs);
        let twice = merge_arcs(C, &once);
        prop_assert_eq!(once.len(), twice.len());

        let mut once_spans: Vec<f64> = once.iter().map(Arc::angular_span).collect();
        let mut twice_spans: Vec<f64> = twice.iter().map(Arc::angular_span).collect();
        once_spans.sort_by(f64::total_cmp);
        twice_spans.sort_by(f64::total_cmp);
        for (x, y) in once_spans.iter().zip(&twice_spans) {
            prop_assert!((x - y).abs() < 1e-9);
        }
    }
}

// ---------------------------------------------------------------------------
// Board construction
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn board_live_set_disjoint_per_circle(
        circles in prop::collection::vec((-60.0f64..60.0, -60.0f64..60.0, 5.0f64..50.0), 1..6),
    ) {
        let defs: Vec<CircleDef> = circles
            .into_iter()
            .map(|(x, y, r)| CircleDef::new(x, y, r))
            .collect();
        let board = Board::from_defs(&defs).unwrap();
        let live = board.live_arcs();

        prop_assert_eq!(board.total_count(), live.len());
        prop_assert!(board.progress() == 0.0 || live.is_empty());

        for (i, a) in live.iter().enumerate() {
            for b in &live[i + 1..] {
                if a.circle == b.circle {
                    prop_assert!(!a.contains_angle(b.directed_midpoint()),
                        "{:?} overlaps {:?}", a, b);
                }
            }
        }
    }
}
