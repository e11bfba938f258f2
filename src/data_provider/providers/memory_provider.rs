use std::sync::{Arc, PoisonError, RwLock};

use log::{debug, info};

use crate::{DataProvider, GameData, InvalidMove, Player, SharedGame};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryProviderArgs {
    pub player1: String,
    pub player2: String,
}

impl Default for MemoryProviderArgs {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryProviderArgs {
    const DEFAULT_PLAYER1: &'static str = "player1";
    const DEFAULT_PLAYER2: &'static str = "player2";

    pub fn new() -> Self {
        Self {
            player1: Self::DEFAULT_PLAYER1.to_string(),
            player2: Self::DEFAULT_PLAYER2.to_string(),
        }
    }

    pub fn from_env() -> Self {
        let player1 =
            std::env::var("PLAYER1_NAME").unwrap_or_else(|_| Self::DEFAULT_PLAYER1.to_string());
        let player2 =
            std::env::var("PLAYER2_NAME").unwrap_or_else(|_| Self::DEFAULT_PLAYER2.to_string());

        Self { player1, player2 }
    }
}

/// Keeps the single current game in memory.
///
/// Clones share the same slot. A reset builds the new game off to the side and
/// swaps the pointer in one write, so every operation runs against either the
/// old game or the new one, never a mix.
#[derive(Clone, Debug)]
pub struct MemoryProvider {
    current: Arc<RwLock<Arc<SharedGame>>>,
}

impl Default for MemoryProvider {
    fn default() -> Self {
        Self::new(MemoryProviderArgs::default())
    }
}

impl MemoryProvider {
    /// the game that is current right now; later resets don't affect it
    pub fn current(&self) -> Arc<SharedGame> {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&current)
    }
}

impl DataProvider for MemoryProvider {
    type Args = MemoryProviderArgs;

    fn new(args: Self::Args) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(SharedGame::new(
                args.player1,
                args.player2,
            )))),
        }
    }

    fn reset(&self, player1: &str, player2: &str) -> String {
        let fresh = Arc::new(SharedGame::new(player1, player2));
        let board = fresh.render_board();

        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let replaced = std::mem::replace(&mut *current, fresh);
        info!(
            "Reset: game {} replaced by {}",
            replaced.game_id(),
            current.game_id()
        );
        board
    }

    fn play(&self, player: &str, location: Option<&str>) -> Result<String, InvalidMove> {
        let game = self.current();
        if let Some(location) = location {
            game.mark(player, location)?;
        }
        let (over, winner) = game.evaluate_winner();
        debug!("game {}: over={} winner={:?}", game.game_id(), over, winner);
        Ok(game.render_board())
    }

    fn mark(&self, player: &str, location: &str) -> Result<(), InvalidMove> {
        self.current().mark(player, location)
    }

    fn evaluate_winner(&self) -> (bool, Option<Player>) {
        self.current().evaluate_winner()
    }

    fn render_board(&self) -> String {
        self.current().render_board()
    }

    fn snapshot(&self) -> GameData {
        self.current().snapshot()
    }
}
