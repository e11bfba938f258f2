use crate::Player;
use serde::{Deserialize, Serialize};

/// Where a game stands.
///
/// `Draw` is reported for a full board without a recorded winner. It is
/// informational only: marking still fails cell by cell and
/// `evaluate_winner` keeps answering "not over".
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GameState {
    Won { winner: Player },
    Draw,
    InProgress { last_mover: Option<Player> },
}

impl GameState {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, GameState::InProgress { .. })
    }
}
