use crate::{Move, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Vacant,
    Occupied { mark: Move },
}

impl Field {
    pub fn player(&self) -> Option<Player> {
        match self {
            Field::Vacant => None,
            Field::Occupied { mark } => Some(mark.player),
        }
    }

    /// The digit shown for this cell on a rendered board, 0 when vacant.
    pub fn slot(&self) -> u8 {
        self.player().map(|player| player.slot()).unwrap_or(0)
    }
}
