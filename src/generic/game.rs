use log::{debug, info};
use std::fmt::Display;
use uuid::Uuid;

use crate::{Board, Field, GameData, GameState, Location, Move, Player, Players};

/// Reasons a mark is rejected. None of them change the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidMove {
    UnknownPlayer { name: String },
    OutOfTurn,
    GameOver,
    LocationOccupied { location: Location, player: Player },
    InvalidLocation,
}

impl Display for InvalidMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMove::UnknownPlayer { name } => write!(f, "invalid player name: {}", name),
            InvalidMove::OutOfTurn => write!(f, "not this player's turn"),
            InvalidMove::GameOver => write!(f, "game already over"),
            InvalidMove::LocationOccupied { location, player } => {
                write!(f, "location: {} already taken player: {}", location, player)
            }
            InvalidMove::InvalidLocation => write!(f, "location, invalid"),
        }
    }
}

impl std::error::Error for InvalidMove {}

/// A single two-player game without any locking. See `SharedGame` for the
/// guarded version handed to concurrent callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub game_id: Uuid,
    players: Players,
    board: Board,
    ledger: Vec<Move>,
    turn: usize,
    winner: Option<Player>,
}

impl Game {
    pub fn new(player1: impl Into<String>, player2: impl Into<String>) -> Self {
        let game = Self {
            game_id: Uuid::new_v4(),
            players: Players::new(player1, player2),
            board: Board::new(),
            ledger: Vec::new(),
            turn: 0,
            winner: None,
        };
        info!(
            "Created game {} for {:?} [1] vs {:?} [2]",
            game.game_id, game.players.player1, game.players.player2
        );
        game
    }

    pub fn players(&self) -> &Players {
        &self.players
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn ledger(&self) -> &[Move] {
        &self.ledger
    }

    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn last_mover(&self) -> Option<Player> {
        self.ledger.last().map(|last_move| last_move.player)
    }

    /// Claims `location` for the player called `player_name`.
    ///
    /// Checks run in a fixed order: player name, turn, game over, location
    /// syntax, occupancy. Nothing is modified unless every check passes.
    pub fn mark(&mut self, player_name: &str, location: &str) -> Result<(), InvalidMove> {
        let (player, location) = self.validate_mark(player_name, location)?;

        self.turn += 1;
        let new_move = Move::new(player, location, self.turn);
        self.board.place(new_move);
        self.ledger.push(new_move);
        debug!(
            "game {}: turn {} player {} marked {}",
            self.game_id, self.turn, player, location
        );
        Ok(())
    }

    fn validate_mark(
        &self,
        player_name: &str,
        location: &str,
    ) -> Result<(Player, Location), InvalidMove> {
        let player = self
            .players
            .resolve(player_name)
            .ok_or_else(|| InvalidMove::UnknownPlayer {
                name: player_name.to_string(),
            })?;

        if self.last_mover() == Some(player) {
            return Err(InvalidMove::OutOfTurn);
        }

        if self.winner.is_some() {
            return Err(InvalidMove::GameOver);
        }

        let location: Location = location.parse()?;
        if let Field::Occupied { mark } = self.board.get(location) {
            return Err(InvalidMove::LocationOccupied {
                location,
                player: mark.player,
            });
        }

        Ok((player, location))
    }

    /// Scans the win lines and records the first winner found. Once a winner is
    /// recorded it is returned without scanning again.
    pub fn evaluate_winner(&mut self) -> (bool, Option<Player>) {
        if let Some(winner) = self.winner {
            return (true, Some(winner));
        }

        match self.board.winner() {
            Some(winner) => {
                info!("game {}: player {} wins", self.game_id, winner);
                self.winner = Some(winner);
                (true, Some(winner))
            }
            None => (false, None),
        }
    }

    pub fn state(&self) -> GameState {
        match self.winner {
            Some(winner) => GameState::Won { winner },
            None if self.board.is_full() && self.board.winner().is_none() => GameState::Draw,
            None => GameState::InProgress {
                last_mover: self.last_mover(),
            },
        }
    }

    /// Human readable snapshot: header, three rows of cells and, once decided,
    /// the winner.
    pub fn render(&self) -> String {
        let mut out = format!(
            "Players - {} [{}] vs {} [{}]\n",
            self.players.player1,
            Player::One,
            self.players.player2,
            Player::Two
        );
        out.push_str(&self.board.render());
        if let Some(winner) = self.winner {
            out.push_str(&format!(
                "Winner is Player: {} [{}]",
                self.players.name(winner),
                winner
            ));
        }
        out
    }

    pub fn snapshot(&self) -> GameData {
        GameData {
            game_id: self.game_id,
            players: self.players.clone(),
            turn: self.turn,
            winner: self.winner,
            state: self.state(),
            moves: self.ledger.clone(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn alice_and_bob() -> Game {
        Game::new("Alice", "Bob")
    }

    fn play(game: &mut Game, moves: &[(&str, &str)]) {
        for (index, (player, location)) in moves.iter().enumerate() {
            game.mark(player, location)
                .unwrap_or_else(|e| panic!("move {} ({} {}) failed: {}", index, player, location, e));
        }
    }

    #[test]
    fn new_game_is_empty() {
        let game = alice_and_bob();
        assert_eq!(game.turn(), 0);
        assert!(game.ledger().is_empty());
        assert_eq!(game.winner(), None);
        assert_eq!(game.board().occupied(), 0);
        assert_eq!(game.state(), GameState::InProgress { last_mover: None });
        assert!(game.state().is_in_progress());
    }

    #[test]
    fn either_player_may_open_on_any_cell() {
        for location in Location::all() {
            for name in ["Alice", "Bob"] {
                let mut game = alice_and_bob();
                assert_eq!(game.mark(name, &location.to_string()), Ok(()));
                assert_eq!(game.turn(), 1);
            }
            let mut game = alice_and_bob();
            assert_eq!(
                game.mark("Carol", &location.to_string()),
                Err(InvalidMove::UnknownPlayer {
                    name: "Carol".to_string()
                })
            );
        }
    }

    #[test]
    fn players_alternate() {
        let mut game = alice_and_bob();
        play(&mut game, &[("Alice", "0,0")]);
        assert_eq!(game.mark("Alice", "0,1"), Err(InvalidMove::OutOfTurn));
        assert_eq!(game.mark("Bob", "0,1"), Ok(()));
        assert_eq!(game.mark("Bob", "0,2"), Err(InvalidMove::OutOfTurn));
        assert_eq!(game.turn(), 2);
    }

    #[test]
    fn occupied_location_is_rejected_without_changes() {
        let mut game = alice_and_bob();
        play(&mut game, &[("Alice", "1,1")]);
        let before = game.clone();

        assert_eq!(
            game.mark("Bob", "1,1"),
            Err(InvalidMove::LocationOccupied {
                location: "1,1".parse().unwrap(),
                player: Player::One
            })
        );
        assert_eq!(game, before);
        assert_eq!(
            game.mark("Bob", "1,1").unwrap_err().to_string(),
            "location: 1,1 already taken player: 1"
        );
    }

    #[test]
    fn invalid_location_is_rejected() {
        let mut game = alice_and_bob();
        for location in ["3,3", "", "1 1", "center"] {
            assert_eq!(
                game.mark("Alice", location),
                Err(InvalidMove::InvalidLocation)
            );
        }
        assert_eq!(game.turn(), 0);
        assert!(game.ledger().is_empty());
    }

    #[test]
    fn check_order() {
        let mut game = alice_and_bob();
        play(&mut game, &[("Alice", "0,0")]);
        // unknown player beats everything
        assert!(matches!(
            game.mark("Carol", "9,9"),
            Err(InvalidMove::UnknownPlayer { .. })
        ));
        // turn order is checked before the location
        assert_eq!(game.mark("Alice", "9,9"), Err(InvalidMove::OutOfTurn));
        assert_eq!(game.mark("Alice", "0,0"), Err(InvalidMove::OutOfTurn));
    }

    #[test]
    fn turn_counter_matches_ledger() {
        let mut game = alice_and_bob();
        play(
            &mut game,
            &[("Bob", "2,2"), ("Alice", "0,0"), ("Bob", "1,1"), ("Alice", "0,2")],
        );
        assert_eq!(game.turn(), game.ledger().len());
        let turns: Vec<usize> = game.ledger().iter().map(|m| m.turn).collect();
        assert_eq!(turns, vec![1, 2, 3, 4]);
        assert_eq!(game.ledger()[0].player, Player::Two);
        assert!(game
            .ledger()
            .windows(2)
            .all(|pair| pair[0].time <= pair[1].time));
    }

    #[test]
    fn top_row_win() {
        let mut game = alice_and_bob();
        play(
            &mut game,
            &[
                ("Alice", "0,0"),
                ("Bob", "1,0"),
                ("Alice", "0,1"),
                ("Bob", "1,1"),
                ("Alice", "0,2"),
            ],
        );
        assert_eq!(game.evaluate_winner(), (true, Some(Player::One)));
        assert_eq!(game.winner(), Some(Player::One));
        assert_eq!(game.state(), GameState::Won { winner: Player::One });

        assert_eq!(game.mark("Bob", "2,2"), Err(InvalidMove::GameOver));
        // Alice moved last, so she is still out of turn
        assert_eq!(game.mark("Alice", "2,2"), Err(InvalidMove::OutOfTurn));
        assert_eq!(game.turn(), 5);
    }

    #[test]
    fn win_is_only_recorded_by_evaluation() {
        let mut game = alice_and_bob();
        play(
            &mut game,
            &[
                ("Alice", "0,0"),
                ("Bob", "1,0"),
                ("Alice", "0,1"),
                ("Bob", "1,1"),
                ("Alice", "0,2"),
            ],
        );
        assert_eq!(game.winner(), None);
        assert_eq!(game.mark("Bob", "2,2"), Ok(()));
        assert_eq!(game.evaluate_winner(), (true, Some(Player::One)));
    }

    #[test]
    fn evaluate_winner_is_idempotent() {
        let mut game = alice_and_bob();
        play(
            &mut game,
            &[
                ("Bob", "0,0"),
                ("Alice", "0,1"),
                ("Bob", "1,1"),
                ("Alice", "0,2"),
                ("Bob", "2,2"),
            ],
        );
        let first = game.evaluate_winner();
        let ledger = game.ledger().to_vec();
        let board = game.board().clone();
        for _ in 0..5 {
            assert_eq!(game.evaluate_winner(), first);
        }
        assert_eq!(first, (true, Some(Player::Two)));
        assert_eq!(game.ledger(), ledger.as_slice());
        assert_eq!(game.board(), &board);
    }

    #[test]
    fn full_board_without_line_is_not_over() {
        // 1 2 1
        // 1 2 2
        // 2 1 1
        let mut game = alice_and_bob();
        play(
            &mut game,
            &[
                ("Alice", "0,0"),
                ("Bob", "0,1"),
                ("Alice", "0,2"),
                ("Bob", "1,1"),
                ("Alice", "1,0"),
                ("Bob", "1,2"),
                ("Alice", "2,1"),
                ("Bob", "2,0"),
                ("Alice", "2,2"),
            ],
        );
        assert!(game.board().is_full());
        assert_eq!(game.evaluate_winner(), (false, None));
        assert_eq!(game.winner(), None);
        assert_eq!(game.state(), GameState::Draw);
        assert!(!game.state().is_in_progress());

        assert!(matches!(
            game.mark("Bob", "1,1"),
            Err(InvalidMove::LocationOccupied { .. })
        ));
        assert_eq!(game.mark("Bob", "3,3"), Err(InvalidMove::InvalidLocation));
        assert_eq!(game.turn(), 9);
    }

    #[test]
    fn render_layout() {
        let mut game = alice_and_bob();
        assert_eq!(
            game.render(),
            "Players - Alice [1] vs Bob [2]\n[ 0 ][ 0 ][ 0 ]\n[ 0 ][ 0 ][ 0 ]\n[ 0 ][ 0 ][ 0 ]\n"
        );

        play(
            &mut game,
            &[
                ("Alice", "0,0"),
                ("Bob", "1,0"),
                ("Alice", "0,1"),
                ("Bob", "1,1"),
                ("Alice", "0,2"),
            ],
        );
        game.evaluate_winner();
        assert_eq!(
            game.render(),
            "Players - Alice [1] vs Bob [2]\n\
             [ 1 ][ 1 ][ 1 ]\n\
             [ 2 ][ 2 ][ 0 ]\n\
             [ 0 ][ 0 ][ 0 ]\n\
             Winner is Player: Alice [1]"
        );
    }

    #[test]
    fn render_is_read_only() {
        let mut game = alice_and_bob();
        play(&mut game, &[("Alice", "0,0"), ("Bob", "2,2")]);
        let before = game.clone();
        for _ in 0..10 {
            game.render();
        }
        assert_eq!(game, before);
    }

    #[test]
    fn snapshot_lists_ledger() {
        let mut game = alice_and_bob();
        play(&mut game, &[("Bob", "1,1"), ("Alice", "0,0")]);
        let data = game.snapshot();
        assert_eq!(data.game_id, game.game_id);
        assert_eq!(data.turn, 2);
        assert_eq!(data.moves, game.ledger());
        assert_eq!(
            data.state,
            GameState::InProgress {
                last_mover: Some(Player::One)
            }
        );
    }
}
