//! Hit, miss and sink resolution.

use alloc::vec::Vec;

use crate::board::{Board, Shot};
use crate::common::{Coordinate, GameError};
use crate::fleet::Fleet;
use crate::game::{GameEvent, PlayerId};
use crate::ship::ShipId;

/// Result of a resolved attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    Miss,
    Hit { ship: ShipId, sunk: bool },
}

impl AttackOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, AttackOutcome::Hit { .. })
    }

    /// Events reported for this outcome, in order.
    pub fn events(&self) -> Vec<GameEvent> {
        let mut events = Vec::with_capacity(2);
        match *self {
            AttackOutcome::Miss => events.push(GameEvent::Miss),
            AttackOutcome::Hit { ship, sunk } => {
                events.push(GameEvent::Hit(ship));
                if sunk {
                    events.push(GameEvent::ShipSunk(ship));
                }
            }
        }
        events
    }

    /// Events for this outcome followed by a victory announcement.
    pub fn events_with_winner(&self, winner: PlayerId) -> Vec<GameEvent> {
        let mut events = self.events();
        events.push(GameEvent::PlayerWins(winner));
        events
    }
}

/// Fire at `coord` on the opponent's `target` board.
///
/// The ownership board decides whether a cell was already fired at;
/// `tracking` mirrors the outcome.
pub fn resolve_attack(
    target: &mut Board,
    target_fleet: &mut Fleet,
    tracking: &mut Board,
    coord: Coordinate,
) -> Result<AttackOutcome, GameError> {
    let shot = target.attack(coord)?;
    let outcome = match shot {
        Shot::Miss => AttackOutcome::Miss,
        Shot::Hit(ship) => {
            target_fleet.register_hit(ship)?;
            let sunk = target_fleet.is_sunk(ship)?;
            AttackOutcome::Hit { ship, sunk }
        }
    };
    tracking.record(coord, shot);
    log::debug!("attack at {} resolved as {:?}", coord, outcome);
    Ok(outcome)
}
