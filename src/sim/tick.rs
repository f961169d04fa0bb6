//! Per-frame stroke processing
//!
//! Advances a game by one frame of player input. The cut is applied first and
//! the foul check runs on the post-cut board; since fouls only look at solid
//! material, a stroke through an uncut overlap is never penalised either way.

use super::collision::Segment;
use super::error::BoardError;
use super::state::{GameEvent, GamePhase, GameState};

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer motion since the previous frame, in world coordinates
    pub segment: Option<Segment>,
}

impl TickInput {
    pub fn stroke(segment: Segment) -> Self {
        Self {
            segment: Some(segment),
        }
    }
}

/// Advance the game by one frame
///
/// Frames after the board is cleared or lost are ignored. A stroke with
/// non-finite endpoints is rejected without touching the board.
pub fn tick(state: &mut GameState, input: &TickInput) -> Result<Vec<GameEvent>, BoardError> {
    let mut events = Vec::new();

    if state.phase.is_terminal() {
        return Ok(events);
    }
    let Some(segment) = input.segment else {
        return Ok(events);
    };
    if !segment.is_finite() {
        log::warn!("Rejecting stroke with non-finite endpoints: {segment:?}");
        return Err(BoardError::NonFiniteSegment);
    }
    if segment.is_degenerate() {
        return Ok(events);
    }
    state.strokes += 1;

    let outcome = state.board.cut(&segment);
    if outcome.hits > 0 {
        state.hits += outcome.hits as u32;
        events.push(GameEvent::Cut { hits: outcome.hits });
    }
    events.extend(
        outcome
            .erased
            .into_iter()
            .map(|circle| GameEvent::CircleErased { circle }),
    );

    if state.board.victory() {
        state.phase = GamePhase::Cleared;
        log::info!(
            "Board cleared after {} strokes ({} fouls)",
            state.strokes,
            state.fouls
        );
        events.push(GameEvent::Cleared);
        return Ok(events);
    }

    if state.board.check_loss(&segment) {
        state.fouls += 1;
        state.lives = state.lives.saturating_sub(1);
        events.push(GameEvent::Foul {
            lives_left: state.lives,
        });

        if state.lives == 0 {
            state.phase = GamePhase::Lost;
            log::info!("Board lost at {}% progress", state.board.progress_label());
            events.push(GameEvent::Lost);
        }
    }

    Ok(events)
}
