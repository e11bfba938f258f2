use crate::{GameState, Move, Player, Players};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Serializable copy of a game, including the full move ledger.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GameData {
    pub game_id: Uuid,
    pub players: Players,
    pub turn: usize,
    pub winner: Option<Player>,
    pub state: GameState,
    pub moves: Vec<Move>,
}
