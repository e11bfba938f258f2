use crate::{Field, Player};
use ndarray::{s, Array2, ArrayView1};
use std::iter::once;

/// Checks if a matrix of fields contains a winner
///
/// if one player has all fields in a row, column or diagonal, they win.
/// Lines are checked rows top to bottom, then columns left to right, then the
/// main diagonal and finally the anti-diagonal; the first complete line wins.
pub fn check_matrix(matrix: &Array2<Field>) -> Option<Player> {
    // the main diagonal of the upside-down matrix is the anti-diagonal
    let flipped = matrix.slice(s![..;-1, ..]);

    matrix
        .rows()
        .into_iter()
        .chain(matrix.columns())
        .chain(once(matrix.diag()))
        .chain(once(flipped.diag()))
        .find_map(get_winner_in_line)
}

/// Returns the owner of the line if every field in it is occupied by the
/// same player.
fn get_winner_in_line(line: ArrayView1<Field>) -> Option<Player> {
    let potential_winner = line.get(0)?.player()?;

    line.iter()
        .all(|field| field.player() == Some(potential_winner))
        .then_some(potential_winner)
}
