use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// One of the two fixed seats of a game.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slot())
    }
}

impl Player {
    pub fn slot(&self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    pub fn other(&self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// The display names of both seats, in slot order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Players {
    pub player1: String,
    pub player2: String,
}

impl Players {
    pub fn new(player1: impl Into<String>, player2: impl Into<String>) -> Self {
        Self {
            player1: player1.into(),
            player2: player2.into(),
        }
    }

    pub fn name(&self, player: Player) -> &str {
        match player {
            Player::One => &self.player1,
            Player::Two => &self.player2,
        }
    }

    /// Resolves a name to its slot by exact match. Slot 1 is checked first, so
    /// a name shared by both seats always resolves to `Player::One`.
    pub fn resolve(&self, name: &str) -> Option<Player> {
        [Player::One, Player::Two]
            .into_iter()
            .find(|player| self.name(*player) == name)
    }
}
