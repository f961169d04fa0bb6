//! Deterministic geometry engine
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Synchronous, one stroke per frame
//! - Stable iteration order (by circle id)
//! - No rendering, input or platform dependencies

pub mod arc;
pub mod board;
pub mod circle;
pub mod collision;
pub mod error;
pub mod merge;
pub mod state;
pub mod subtract;
pub mod tick;

pub use arc::{Arc, directed_midpoint};
pub use board::{Board, BoardDef, BoardSnapshot, CircleSnapshot, CutOutcome};
pub use circle::{Circle, CircleDef, CircleId, PointDef, circle_intersections, overlap_arcs};
pub use collision::{Segment, line_circle_points, segment_arc_intersects};
pub use error::BoardError;
pub use merge::{merge_arcs, merge_by_circle};
pub use state::{GameEvent, GamePhase, GameState};
pub use subtract::{subtract_arc, subtract_from_all};
pub use tick::{TickInput, tick};
