//! Square grid of cell states, used both for a player's own ships and for
//! their record of shots at the opponent.

use alloc::vec;
use alloc::vec::Vec;

use crate::common::{BoardError, Coordinate};
use crate::ship::ShipId;

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Empty,
    Ship(ShipId),
    Hit,
    Miss,
}

/// Raw result of firing at a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Shot {
    Miss,
    Hit(ShipId),
}

/// N×N grid stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawBoard")
)]
pub struct Board {
    size: u8,
    cells: Vec<Cell>,
}

#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct RawBoard {
    size: u8,
    cells: Vec<Cell>,
}

#[cfg(feature = "std")]
impl TryFrom<RawBoard> for Board {
    type Error = String;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let expected = usize::from(raw.size) * usize::from(raw.size);
        if raw.cells.len() != expected {
            return Err(format!(
                "board of size {} needs {} cells, got {}",
                raw.size,
                expected,
                raw.cells.len()
            ));
        }
        Ok(Board {
            size: raw.size,
            cells: raw.cells,
        })
    }
}

impl Board {
    /// Create an empty `size`×`size` board.
    pub fn new(size: u8) -> Self {
        let n = usize::from(size);
        Board {
            size,
            cells: vec![Cell::Empty; n * n],
        }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.col < self.size && coord.row < self.size
    }

    fn index(&self, coord: Coordinate) -> Option<usize> {
        self.contains(coord)
            .then(|| usize::from(coord.row) * usize::from(self.size) + usize::from(coord.col))
    }

    /// Cell at `coord`, or `None` when off the grid.
    pub fn get(&self, coord: Coordinate) -> Option<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(usize::from(self.size.max(1)))
    }

    /// Every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coordinate> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Coordinate::new(col, row)))
    }

    /// Number of cells matching `pred`.
    pub fn count(&self, pred: impl Fn(Cell) -> bool) -> usize {
        self.cells.iter().filter(|&&c| pred(c)).count()
    }

    /// Coordinates occupied by ship `id`, whether hit or not yet.
    pub fn cells_of(&self, id: ShipId) -> impl Iterator<Item = Coordinate> + '_ {
        self.coords()
            .filter(move |&c| self.get(c) == Some(Cell::Ship(id)))
    }

    /// Mark `cells` as belonging to ship `id`.
    ///
    /// Performs no validation; see [`crate::placement::validate_placement`].
    pub fn place_ship(&mut self, id: ShipId, cells: &[Coordinate]) {
        for &coord in cells {
            if let Some(i) = self.index(coord) {
                self.cells[i] = Cell::Ship(id);
            }
        }
    }

    /// Fire at `coord`, turning a ship cell into `Hit` and water into `Miss`.
    pub fn attack(&mut self, coord: Coordinate) -> Result<Shot, BoardError> {
        let i = self.index(coord).ok_or(BoardError::OutOfBounds(coord))?;
        match self.cells[i] {
            Cell::Hit | Cell::Miss => Err(BoardError::DuplicateAttack(coord)),
            Cell::Ship(id) => {
                self.cells[i] = Cell::Hit;
                Ok(Shot::Hit(id))
            }
            Cell::Empty => {
                self.cells[i] = Cell::Miss;
                Ok(Shot::Miss)
            }
        }
    }

    /// Write the outcome of a shot onto a tracking board.
    pub fn record(&mut self, coord: Coordinate, shot: Shot) {
        if let Some(i) = self.index(coord) {
            self.cells[i] = match shot {
                Shot::Hit(_) => Cell::Hit,
                Shot::Miss => Cell::Miss,
            };
        }
    }
}
