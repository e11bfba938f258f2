use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use crate::{Game, GameData, InvalidMove, Player};

/// A `Game` behind a reader/writer lock.
///
/// `mark` and `evaluate_winner` take the write side, rendering and snapshots
/// take the read side. `Game` validates before it mutates, so a guard poisoned
/// by a panicking holder still protects a consistent game and is recovered.
#[derive(Debug)]
pub struct SharedGame {
    game_id: Uuid,
    inner: RwLock<Game>,
}

impl SharedGame {
    pub fn new(player1: impl Into<String>, player2: impl Into<String>) -> Self {
        let game = Game::new(player1, player2);
        Self {
            game_id: game.game_id,
            inner: RwLock::new(game),
        }
    }

    pub fn game_id(&self) -> Uuid {
        self.game_id
    }

    fn read(&self) -> RwLockReadGuard<'_, Game> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Game> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn mark(&self, player_name: &str, location: &str) -> Result<(), InvalidMove> {
        self.write().mark(player_name, location)
    }

    pub fn evaluate_winner(&self) -> (bool, Option<Player>) {
        self.write().evaluate_winner()
    }

    pub fn render_board(&self) -> String {
        self.read().render()
    }

    pub fn snapshot(&self) -> GameData {
        self.read().snapshot()
    }
}
