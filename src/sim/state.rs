//! Game state and frame events
//!
//! Wraps a board with the bookkeeping one play-through needs: lives, stroke
//! counters and the phase machine `Playing → Cleared | Lost`.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::circle::CircleId;
use crate::settings::Settings;

/// Current phase of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Board loaded, strokes are being processed
    Playing,
    /// Every overlap arc has been cut
    Cleared,
    /// Out of lives after foul strokes
    Lost,
}

impl GamePhase {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// Something a frame did, for scoring/animation/sound collaborators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Stroke cut one or more overlap arcs
    Cut { hits: usize },
    /// Stroke crossed solid circle material
    Foul { lives_left: u32 },
    /// A circle's whole rim has been cut away
    CircleErased { circle: CircleId },
    Cleared,
    Lost,
}

/// Complete state of one board play-through
#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub phase: GamePhase,
    pub lives: u32,
    /// Non-degenerate strokes processed
    pub strokes: u32,
    /// Overlap arcs cut so far
    pub hits: u32,
    /// Foul strokes so far
    pub fouls: u32,
}

impl GameState {
    /// Start playing `board` with the given settings
    ///
    /// A board without overlap arcs is cleared on arrival.
    pub fn new(mut board: Board, settings: &Settings) -> Self {
        board.set_remove_erased(settings.remove_erased_circles);
        let phase = if board.victory() {
            GamePhase::Cleared
        } else {
            GamePhase::Playing
        };
        Self {
            board,
            phase,
            lives: settings.lives,
            strokes: 0,
            hits: 0,
            fouls: 0,
        }
    }
}
