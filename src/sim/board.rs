//! Intersection region registry
//!
//! The board owns the circle arena and the live set of overlap arcs. Every
//! query a frame needs (did this stroke cut anything, was it a foul, how far
//! along is the player) goes through here.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::arc::Arc;
use super::circle::{Circle, CircleDef, CircleId, overlap_arcs};
use super::collision::{Segment, segment_arc_intersects};
use super::error::BoardError;
use super::merge::merge_by_circle;
use super::subtract::subtract_from_all;
use crate::consts::ERASE_EPSILON;

/// Board document: an ordered list of circle descriptors
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardDef {
    pub circles: Vec<CircleDef>,
}

/// What a single stroke did to the board
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CutOutcome {
    /// Live overlap arcs the stroke crossed (and removed)
    pub hits: usize,
    /// Circles whose whole boundary is now cut away
    pub erased: Vec<CircleId>,
}

/// Read-only view of one circle for renderers
#[derive(Debug, Clone, Serialize)]
pub struct CircleSnapshot {
    pub id: CircleId,
    pub center: DVec2,
    pub radius: f64,
    pub boundary: Vec<Arc>,
}

/// Read-only view of the whole board for renderers
#[derive(Debug, Clone, Serialize)]
pub struct BoardSnapshot {
    pub circles: Vec<CircleSnapshot>,
    pub live: Vec<Arc>,
    pub progress: f64,
}

#[derive(Debug, Clone)]
pub struct Board {
    /// Arena; `CircleId` indexes into it. Erased circles stay in place.
    circles: Vec<Circle>,
    /// Uncut overlap arcs, disjoint per circle
    live: Vec<Arc>,
    /// Live arc count at load time, the fixed progress denominator
    total: usize,
    remove_erased: bool,
}

impl Board {
    /// Build a board from circle descriptors
    ///
    /// Computes the overlap arcs of every unordered circle pair and merges
    /// them per circle into the live set.
    pub fn from_defs(defs: &[CircleDef]) -> Result<Self, BoardError> {
        let circles = defs
            .iter()
            .enumerate()
            .map(|(index, def)| {
                let center = DVec2::from(def.center);
                if !center.is_finite() || !def.radius.is_finite() {
                    log::warn!("Rejecting circle {index}: non-finite geometry");
                    return Err(BoardError::NonFiniteCircle { index });
                }
                if def.radius <= 0.0 {
                    log::warn!("Rejecting circle {index}: radius {}", def.radius);
                    return Err(BoardError::NonPositiveRadius {
                        index,
                        radius: def.radius,
                    });
                }
                Ok(Circle::new(CircleId(index as u32), center, def.radius))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut raw = Vec::new();
        for (i, a) in circles.iter().enumerate() {
            for b in &circles[i + 1..] {
                raw.extend(overlap_arcs(a, b));
            }
        }
        let raw_count = raw.len();
        let live = merge_by_circle(raw);

        log::debug!(
            "Built board: {} circles, {} overlap arcs ({} after merge)",
            circles.len(),
            raw_count,
            live.len()
        );

        Ok(Self {
            total: live.len(),
            circles,
            live,
            remove_erased: true,
        })
    }

    /// Parse a `BoardDef` JSON document and build it
    pub fn from_json(json: &str) -> Result<Self, BoardError> {
        let def: BoardDef = serde_json::from_str(json)?;
        Self::from_defs(&def.circles)
    }

    /// Whether fully cut circles are dropped from the board
    pub fn set_remove_erased(&mut self, remove: bool) {
        self.remove_erased = remove;
    }

    /// Test a stroke against every live overlap arc and carve out what it hits
    ///
    /// Each hit arc leaves the live set for good and is subtracted from its
    /// circle's remaining boundary.
    pub fn cut(&mut self, segment: &Segment) -> CutOutcome {
        let circles = &self.circles;
        let (hit, kept): (Vec<Arc>, Vec<Arc>) =
            std::mem::take(&mut self.live).into_iter().partition(|arc| {
                let circle = &circles[arc.circle.index()];
                segment_arc_intersects(segment, arc, circle.center, circle.radius)
            });
        self.live = kept;

        let mut outcome = CutOutcome {
            hits: hit.len(),
            erased: Vec::new(),
        };
        for arc in &hit {
            let circle = &mut self.circles[arc.circle.index()];
            circle.boundary = subtract_from_all(&circle.boundary, arc);

            if self.remove_erased && !circle.erased && circle.remaining_span() < ERASE_EPSILON {
                circle.erased = true;
                log::info!("Circle {} fully cut away", circle.id.0);
                outcome.erased.push(circle.id);
            }
        }

        if outcome.hits > 0 {
            log::debug!("Stroke cut {} arcs, {} live", outcome.hits, self.live.len());
        }
        outcome
    }

    /// Number of live overlap arcs a stroke crossed (and removed)
    pub fn check_intersection(&mut self, segment: &Segment) -> usize {
        self.cut(segment).hits
    }

    /// Whether a stroke crosses solid circle material
    ///
    /// Solid material is a circle's remaining boundary outside its uncut
    /// overlap arcs. Erased circles are ignored.
    pub fn check_loss(&self, segment: &Segment) -> bool {
        self.circles().any(|circle| {
            self.solid_arcs(circle.id)
                .iter()
                .any(|arc| segment_arc_intersects(segment, arc, circle.center, circle.radius))
        })
    }

    /// A circle's remaining boundary minus its live overlap arcs
    pub fn solid_arcs(&self, id: CircleId) -> Vec<Arc> {
        let Some(circle) = self.circle(id) else {
            return Vec::new();
        };
        self.live
            .iter()
            .filter(|arc| arc.circle == id)
            .fold(circle.boundary.clone(), |fragments, live| {
                subtract_from_all(&fragments, live)
            })
    }

    /// Percentage of the board's overlap arcs cut so far, in [0, 100]
    ///
    /// A board without overlaps is complete from the start.
    pub fn progress(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        let remaining = self.live.len() as f64 / self.total as f64;
        ((1.0 - remaining) * 100.0).clamp(0.0, 100.0)
    }

    /// `progress()` formatted to two decimals
    pub fn progress_label(&self) -> String {
        format!("{:.2}", self.progress())
    }

    /// Every overlap arc has been cut
    pub fn victory(&self) -> bool {
        self.live.is_empty()
    }

    pub fn live_arcs(&self) -> &[Arc] {
        &self.live
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn total_count(&self) -> usize {
        self.total
    }

    /// Circles still on the board
    pub fn circles(&self) -> impl Iterator<Item = &Circle> {
        self.circles.iter().filter(|c| !c.erased)
    }

    /// Look up a circle that is still on the board
    pub fn circle(&self, id: CircleId) -> Option<&Circle> {
        self.circles.get(id.index()).filter(|c| !c.erased)
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            circles: self
                .circles()
                .map(|c| CircleSnapshot {
                    id: c.id,
                    center: c.center,
                    radius: c.radius,
                    boundary: c.boundary.clone(),
                })
                .collect(),
            live: self.live.clone(),
            progress: self.progress(),
        }
    }
}
