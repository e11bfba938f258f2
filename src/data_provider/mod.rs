mod providers;

pub use providers::*;

use crate::{GameData, InvalidMove, Player};

/// DataProvider is the interface the transport layer talks to. It owns the
/// current game and decides how it is stored and replaced; callers only see
/// names, location strings and rendered boards.
pub trait DataProvider: Send + Sync + Clone {
    type Args: Clone;

    fn new(args: Self::Args) -> Self
    where
        Self: Sized;

    /// replaces the current game with a fresh one and returns its rendered board.
    fn reset(&self, player1: &str, player2: &str) -> String;

    /// marks `location` (if given) for `player`, evaluates the winner and
    /// returns the rendered board, all against the same game instance.
    fn play(&self, player: &str, location: Option<&str>) -> Result<String, InvalidMove>;

    fn mark(&self, player: &str, location: &str) -> Result<(), InvalidMove>;

    fn evaluate_winner(&self) -> (bool, Option<Player>);

    fn render_board(&self) -> String;

    /// returns a serializable copy of the current game, including the ledger.
    fn snapshot(&self) -> GameData;
}
