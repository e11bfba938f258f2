mod board;
mod matrix_checker;

pub use board::Board;
pub use matrix_checker::check_matrix;
