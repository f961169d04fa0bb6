//! Angular set difference between arcs on one circle
//!
//! Used to carve cut material out of a circle's remaining boundary. The
//! minuend is always in natural `start < end` form inside `[0, 2π]` (the full
//! circle or an earlier fragment); the cutter can be any arc and is split at
//! the seam when it wraps.

use std::f64::consts::TAU;

use super::arc::Arc;

/// `a − b`: the zero, one or two pieces of `a` that `b` does not cover
///
/// Pieces carry `a`'s circle. Empty or out-of-range pieces are dropped.
pub fn subtract_arc(a: &Arc, b: &Arc) -> Vec<Arc> {
    let span = b.angular_span();
    if span <= 0.0 {
        return vec![*a];
    }
    if span >= TAU {
        return Vec::new();
    }

    let (b_start, b_end) = b.normalized_bounds();

    let cutters: Vec<(f64, f64)> = if b_end < b_start {
        vec![(b_start, TAU), (0.0, b_end)]
    } else {
        vec![(b_start, b_end)]
    };

    let mut pieces = vec![(a.start, a.end)];
    for (cut_start, cut_end) in cutters {
        pieces = pieces
            .into_iter()
            .flat_map(|(start, end)| subtract_interval(start, end, cut_start, cut_end))
            .collect();
    }

    pieces
        .into_iter()
        .filter(|&(start, end)| end > start && start >= 0.0 && end <= TAU)
        .map(|(start, end)| Arc::new(a.circle, start, end))
        .collect()
}

/// Remove `[b_start, b_end]` from `[a_start, a_end]` (both non-wrapping)
fn subtract_interval(a_start: f64, a_end: f64, b_start: f64, b_end: f64) -> Vec<(f64, f64)> {
    if b_end <= a_start || b_start >= a_end {
        // No overlap
        vec![(a_start, a_end)]
    } else if b_start <= a_start && b_end >= a_end {
        // Fully covered
        Vec::new()
    } else if b_start <= a_start {
        // Left edge bitten off
        vec![(b_end, a_end)]
    } else if b_end >= a_end {
        // Right edge bitten off
        vec![(a_start, b_start)]
    } else {
        // Hole punched in the middle
        vec![(a_start, b_start), (b_end, a_end)]
    }
}

/// Subtract `cut` from every fragment in `boundary`
pub fn subtract_from_all(boundary: &[Arc], cut: &Arc) -> Vec<Arc> {
    boundary
        .iter()
        .flat_map(|fragment| subtract_arc(fragment, cut))
        .collect()
}
