//! Ship placement checks.
//!
//! Ships may touch each other on any side; only covering a cell that already
//! holds a ship is rejected.

use alloc::vec::Vec;
use rand::Rng;

use crate::board::{Board, Cell};
use crate::common::{BoardError, Coordinate, Orientation, Placement};

const RANDOM_ATTEMPTS: usize = 100;

/// Cells a ship of `length` covers when laid from `origin` along
/// `orientation` on a `size`×`size` board.
pub fn ship_cells(
    origin: Coordinate,
    length: u8,
    orientation: Orientation,
    size: u8,
) -> Result<Vec<Coordinate>, BoardError> {
    (0..length)
        .map(|i| -> Result<Coordinate, BoardError> {
            let cell = origin
                .step(orientation, i)
                .ok_or(BoardError::OutOfBounds(origin))?;
            // report the first cell past the edge
            if cell.col >= size || cell.row >= size {
                return Err(BoardError::OutOfBounds(cell));
            }
            Ok(cell)
        })
        .collect()
}

/// Check that a ship fits on `board` and return the cells it would occupy.
///
/// Nothing is written; commit the result with [`Board::place_ship`].
pub fn validate_placement(
    board: &Board,
    origin: Coordinate,
    length: u8,
    orientation: Orientation,
) -> Result<Vec<Coordinate>, BoardError> {
    let cells = ship_cells(origin, length, orientation, board.size())?;
    if let Some(&taken) = cells
        .iter()
        .find(|&&c| board.get(c) != Some(Cell::Empty))
    {
        return Err(BoardError::Overlap(taken));
    }
    Ok(cells)
}

/// Returns a random legal placement for a ship of `length`.
pub fn random_placement<R: Rng>(
    board: &Board,
    length: u8,
    rng: &mut R,
) -> Result<Placement, BoardError> {
    let size = board.size();
    if length == 0 || length > size {
        return Err(BoardError::NoRoom { length });
    }
    for _ in 0..RANDOM_ATTEMPTS {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let (max_col, max_row) = match orientation {
            Orientation::Horizontal => (size - length, size - 1),
            Orientation::Vertical => (size - 1, size - length),
        };
        let origin = Coordinate::new(rng.random_range(0..=max_col), rng.random_range(0..=max_row));
        if validate_placement(board, origin, length, orientation).is_ok() {
            return Ok(Placement::new(origin, orientation));
        }
    }
    // crowded board: fall back to a full scan before giving up
    board
        .coords()
        .flat_map(|c| {
            [Orientation::Horizontal, Orientation::Vertical]
                .into_iter()
                .map(move |o| Placement::new(c, o))
        })
        .find(|p| validate_placement(board, p.origin, length, p.orientation).is_ok())
        .ok_or(BoardError::NoRoom { length })
}
