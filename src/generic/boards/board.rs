use itertools::Itertools;
use ndarray::Array2;

use crate::{generic::boards::check_matrix, Field, Location, Move, Player};

/// The 3x3 grid. A cell is either vacant or permanently owned by the move
/// that claimed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub data: Array2<Field>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            data: Array2::from_elem((Location::SIZE, Location::SIZE), Field::Vacant),
        }
    }

    pub fn get(&self, location: Location) -> Field {
        self.data[location.index()]
    }

    /// Places a move on its cell. Callers must have checked that the cell is
    /// vacant.
    pub(crate) fn place(&mut self, mark: Move) {
        debug_assert_eq!(self.get(mark.location), Field::Vacant);
        self.data[mark.location.index()] = Field::Occupied { mark };
    }

    pub fn occupied(&self) -> usize {
        self.data
            .iter()
            .filter(|field| !matches!(field, Field::Vacant))
            .count()
    }

    pub fn is_full(&self) -> bool {
        self.occupied() == self.data.len()
    }

    pub fn winner(&self) -> Option<Player> {
        check_matrix(&self.data)
    }

    /// Renders the cells row by row, e.g. `[ 1 ][ 0 ][ 2 ]`, one line per row.
    pub fn render(&self) -> String {
        self.data
            .rows()
            .into_iter()
            .map(|row| {
                let cells = row
                    .iter()
                    .map(|field| format!("[ {} ]", field.slot()))
                    .join("");
                format!("{}\n", cells)
            })
            .collect()
    }
}
