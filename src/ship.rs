//! Ship identity and hit bookkeeping.

use core::fmt;

use crate::common::FleetError;

/// Stable ship identifier, 1-based in placement order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId(pub u8);

impl ShipId {
    /// Position of this ship in its fleet.
    pub fn index(self) -> usize {
        usize::from(self.0).wrapping_sub(1)
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

/// A ship and the number of hits it can still absorb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    id: ShipId,
    length: u8,
    remaining: u8,
}

impl Ship {
    pub fn new(id: ShipId, length: u8) -> Self {
        Self {
            id,
            length,
            remaining: length,
        }
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    pub fn length(&self) -> u8 {
        self.length
    }

    /// Hits left before the ship sinks.
    pub fn remaining(&self) -> u8 {
        self.remaining
    }

    pub fn is_sunk(&self) -> bool {
        self.remaining == 0
    }

    /// Take one hit. A sunk ship stays sunk and refuses further hits.
    pub fn register_hit(&mut self) -> Result<(), FleetError> {
        self.remaining = self
            .remaining
            .checked_sub(1)
            .ok_or(FleetError::Overkill(self.id))?;
        Ok(())
    }
}
