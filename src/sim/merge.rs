//! Sweep-line merging of arcs on a shared circle
//!
//! Overlap arcs from different circle pairs can cover the same stretch of a
//! circle's rim. The sweep collapses them into maximal disjoint arcs so the
//! live set never holds two touching arcs on one circle.

use std::collections::BTreeMap;
use std::f64::consts::TAU;

use super::arc::Arc;
use super::circle::CircleId;
use crate::consts::MERGE_EPSILON;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Start,
    End,
}

/// Merge arcs that all belong to `circle` into disjoint maximal arcs
///
/// Output bounds are normalized into [0, 2π]; an arc crossing the seam comes
/// back with `start > end`, full coverage as `[0, 2π]`. Zero-width inputs
/// are ignored.
pub fn merge_arcs(circle: CircleId, arcs: &[Arc]) -> Vec<Arc> {
    if arcs.iter().any(|arc| arc.angular_span() >= TAU) {
        return vec![Arc::full(circle)];
    }

    let mut events: Vec<(f64, Edge)> = Vec::with_capacity(arcs.len() * 2);
    // Arcs already covering angle 0 when the sweep begins
    let mut coverage: usize = 0;

    for arc in arcs {
        let (start, end) = arc.normalized_bounds();
        if start == end {
            continue;
        }
        if start > end {
            coverage += 1;
        }
        events.push((start, Edge::Start));
        events.push((end, Edge::End));
    }
    events.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut merged: Vec<Arc> = Vec::new();
    let mut prev = 0.0;
    for (angle, edge) in events {
        if coverage > 0 && angle > prev {
            emit(&mut merged, circle, prev, angle);
        }
        match edge {
            Edge::Start => coverage += 1,
            Edge::End => coverage = coverage.saturating_sub(1),
        }
        prev = angle;
    }
    if coverage > 0 && TAU > prev {
        emit(&mut merged, circle, prev, TAU);
    }

    // Rejoin the two halves of an arc that was split at the seam
    if merged.len() > 1 {
        let first_at_zero = merged[0].start <= MERGE_EPSILON;
        let last_at_tau = merged[merged.len() - 1].end >= TAU - MERGE_EPSILON;
        if first_at_zero && last_at_tau {
            if let Some(last) = merged.pop() {
                merged[0].start = last.start;
            }
        }
    }

    merged
}

/// Extend the last emitted arc when the new span touches it, else start a new one
fn emit(merged: &mut Vec<Arc>, circle: CircleId, from: f64, to: f64) {
    match merged.last_mut() {
        Some(last) if (from - last.end).abs() <= MERGE_EPSILON => last.end = to,
        _ => merged.push(Arc::new(circle, from, to)),
    }
}

/// Group arcs by owning circle, merge each group, and flatten
///
/// Groups are visited in circle-id order so the output is deterministic.
pub fn merge_by_circle(arcs: impl IntoIterator<Item = Arc>) -> Vec<Arc> {
    let mut groups: BTreeMap<CircleId, Vec<Arc>> = BTreeMap::new();
    for arc in arcs {
        groups.entry(arc.circle).or_default().push(arc);
    }

    groups
        .into_iter()
        .flat_map(|(circle, group)| merge_arcs(circle, &group))
        .collect()
}
