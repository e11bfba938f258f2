use std::{fmt::Display, str::FromStr};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::InvalidMove;

/// A cell of the 3x3 grid, written as `"row,col"` on the wire.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(into = "String", try_from = "String")]
pub struct Location {
    pub row: usize,
    pub column: usize,
}

impl Location {
    pub const SIZE: usize = 3;

    /// Returns `None` when either coordinate falls outside the grid.
    pub fn new(row: usize, column: usize) -> Option<Self> {
        (row < Self::SIZE && column < Self::SIZE).then_some(Self { row, column })
    }

    /// All nine cells in row-major order.
    pub fn all() -> impl Iterator<Item = Location> {
        (0..Self::SIZE)
            .cartesian_product(0..Self::SIZE)
            .map(|(row, column)| Location { row, column })
    }

    pub fn index(&self) -> (usize, usize) {
        (self.row, self.column)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.column)
    }
}

fn parse_coordinate(part: &str) -> Option<usize> {
    match part {
        "0" => Some(0),
        "1" => Some(1),
        "2" => Some(2),
        _ => None,
    }
}

impl FromStr for Location {
    type Err = InvalidMove;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, column) = s.split_once(',').ok_or(InvalidMove::InvalidLocation)?;
        match (parse_coordinate(row), parse_coordinate(column)) {
            (Some(row), Some(column)) => Ok(Location { row, column }),
            _ => Err(InvalidMove::InvalidLocation),
        }
    }
}

impl From<Location> for String {
    fn from(location: Location) -> Self {
        location.to_string()
    }
}

impl TryFrom<String> for Location {
    type Error = InvalidMove;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
