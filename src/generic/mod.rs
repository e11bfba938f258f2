pub mod boards;
mod field;
mod game;
mod game_data;
mod gamestate;
mod location;
mod r#move;
mod player;
mod shared_game;

pub use boards::{check_matrix, Board};
pub use field::Field;
pub use game::{Game, InvalidMove};
pub use game_data::GameData;
pub use gamestate::GameState;
pub use location::Location;
pub use player::{Player, Players};
pub use r#move::Move;
pub use shared_game::SharedGame;
