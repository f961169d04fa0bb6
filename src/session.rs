//! Player session and run summaries
//!
//! The identity is an explicit value handed to the session at login and
//! dropped with it at logout. A finished board produces a `RunSummary`, which
//! is all an outside storage/leaderboard service ever sees.

use serde::{Deserialize, Serialize};

use crate::sim::{GamePhase, GameState};

/// Who is playing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerIdentity {
    pub name: String,
    pub guest: bool,
}

impl PlayerIdentity {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            guest: false,
        }
    }

    pub fn guest() -> Self {
        Self {
            name: "Guest".to_string(),
            guest: true,
        }
    }
}

/// Outcome of a single board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    Cleared,
    Lost,
    /// Left before clearing or losing
    Abandoned,
}

/// Summary statistics for one board, handed to storage collaborators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub player: String,
    pub guest: bool,
    pub level: u32,
    pub outcome: RunOutcome,
    pub strokes: u32,
    pub hits: u32,
    pub fouls: u32,
    /// Progress label at the end of the run, e.g. "50.00"
    pub progress: String,
}

/// Totals across every board played this session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub boards_played: u32,
    pub boards_cleared: u32,
    pub boards_lost: u32,
    pub strokes: u32,
    pub hits: u32,
    pub fouls: u32,
}

impl SessionStats {
    /// Cuts per non-idle stroke, 0 when nothing was attempted
    pub fn accuracy(&self) -> f64 {
        if self.strokes == 0 {
            0.0
        } else {
            self.hits as f64 / self.strokes as f64
        }
    }
}

/// A logged-in player's session
#[derive(Debug, Clone)]
pub struct Session {
    identity: PlayerIdentity,
    stats: SessionStats,
}

impl Session {
    pub fn new(identity: PlayerIdentity) -> Self {
        log::info!("Session started for {}", identity.name);
        Self {
            identity,
            stats: SessionStats::default(),
        }
    }

    pub fn identity(&self) -> &PlayerIdentity {
        &self.identity
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Fold a finished (or abandoned) board into the session totals
    pub fn record(&mut self, level: u32, state: &GameState) -> RunSummary {
        let outcome = match state.phase {
            GamePhase::Cleared => RunOutcome::Cleared,
            GamePhase::Lost => RunOutcome::Lost,
            GamePhase::Playing => RunOutcome::Abandoned,
        };

        self.stats.boards_played += 1;
        match outcome {
            RunOutcome::Cleared => self.stats.boards_cleared += 1,
            RunOutcome::Lost => self.stats.boards_lost += 1,
            RunOutcome::Abandoned => {}
        }
        self.stats.strokes += state.strokes;
        self.stats.hits += state.hits;
        self.stats.fouls += state.fouls;

        RunSummary {
            player: self.identity.name.clone(),
            guest: self.identity.guest,
            level,
            outcome,
            strokes: state.strokes,
            hits: state.hits,
            fouls: state.fouls,
            progress: state.board.progress_label(),
        }
    }

    /// End the session, handing back the final totals
    pub fn logout(self) -> SessionStats {
        log::info!(
            "Session ended for {} ({} boards)",
            self.identity.name,
            self.stats.boards_played
        );
        self.stats
    }
}
