use crate::{Location, Player};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A committed claim of one cell. Never modified after creation.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub player: Player,
    pub location: Location,
    pub turn: usize,
    pub time: DateTime<Utc>,
}

impl Move {
    pub fn new(player: Player, location: Location, turn: usize) -> Self {
        Self {
            player,
            location,
            turn,
            time: Utc::now(),
        }
    }
}
