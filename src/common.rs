//! Common types for Broadside: coordinates, orientation and error kinds.

use core::fmt;

use crate::ship::ShipId;

/// A cell position on a board: `col` from the letter axis, `row` from the
/// numbered axis. Both are 0-based internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub col: u8,
    pub row: u8,
}

impl Coordinate {
    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// The cell `steps` cells away along `orientation`, or `None` on overflow.
    pub fn step(self, orientation: Orientation, steps: u8) -> Option<Self> {
        match orientation {
            Orientation::Horizontal => self.col.checked_add(steps).map(|col| Self { col, ..self }),
            Orientation::Vertical => self.row.checked_add(steps).map(|row| Self { row, ..self }),
        }
    }
}

/// Renders as the external `A1` form: column letter, 1-based row.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = b'A'.wrapping_add(self.col) as char;
        write!(f, "{}{}", letter, self.row as u16 + 1)
    }
}

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends towards increasing columns.
    Horizontal,
    /// Extends towards increasing rows.
    Vertical,
}

/// Where and how a ship is laid down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub origin: Coordinate,
    pub orientation: Orientation,
}

impl Placement {
    pub const fn new(origin: Coordinate, orientation: Orientation) -> Self {
        Self {
            origin,
            orientation,
        }
    }
}

/// Errors caused by player input against a board. All are recoverable: the
/// board is left untouched and the same player may try again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// A placement extent or attack target falls outside the grid.
    OutOfBounds(Coordinate),
    /// A placement would cover a cell already holding a ship.
    Overlap(Coordinate),
    /// The target cell has already been resolved as a hit or a miss.
    DuplicateAttack(Coordinate),
    /// No legal position could be found for a ship of this length.
    NoRoom { length: u8 },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds(c) if c.col < 26 => write!(f, "{} is off the board", c),
            BoardError::OutOfBounds(c) => {
                write!(f, "column {} row {} is off the board", c.col as u16 + 1, c.row as u16 + 1)
            }
            BoardError::Overlap(c) => write!(f, "{} is already occupied by a ship", c),
            BoardError::DuplicateAttack(c) => write!(f, "{} has already been fired at", c),
            BoardError::NoRoom { length } => {
                write!(f, "no room left for a ship of length {}", length)
            }
        }
    }
}

/// Internal consistency failures in fleet bookkeeping. These signal a broken
/// invariant, never bad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleetError {
    /// No ship with this id belongs to the fleet.
    UnknownShip(ShipId),
    /// A hit was registered against a ship that is already sunk.
    Overkill(ShipId),
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetError::UnknownShip(id) => write!(f, "ship {} is not part of this fleet", id),
            FleetError::Overkill(id) => write!(f, "ship {} was hit after being sunk", id),
        }
    }
}

/// Errors returned by match operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Rejected input; nothing was changed.
    Board(BoardError),
    /// Fleet bookkeeping went out of sync with the board.
    Fleet(FleetError),
    /// A placement was attempted after setup ended.
    NotInSetup,
    /// An attack was attempted before both fleets were placed.
    NotInPlay,
    /// The match already has a winner.
    GameOver,
}

impl GameError {
    /// True when the error reveals a broken invariant rather than bad input.
    pub fn is_defect(&self) -> bool {
        matches!(self, GameError::Fleet(_))
    }
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl From<FleetError> for GameError {
    fn from(err: FleetError) -> Self {
        GameError::Fleet(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "{}", e),
            GameError::Fleet(e) => write!(f, "fleet invariant violated: {}", e),
            GameError::NotInSetup => write!(f, "ships can only be placed during setup"),
            GameError::NotInPlay => write!(f, "attacks are only allowed once both fleets are placed"),
            GameError::GameOver => write!(f, "the match is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for FleetError {}
#[cfg(feature = "std")]
impl std::error::Error for GameError {}
