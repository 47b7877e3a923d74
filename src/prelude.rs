//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, Cell, Coordinate, GameConfig, GameError, GameEvent, Match, Orientation, Phase,
    Placement, Player, PlayerId, Session, ShipId,
};

#[cfg(feature = "std")]
pub use crate::{CliPlayer, Console};
