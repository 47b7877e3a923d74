//! One player's ships and their sink state.

use alloc::vec::Vec;

use crate::common::FleetError;
use crate::config::{ConfigError, GameConfig, SHIP_COUNT_RANGE};
use crate::ship::{Ship, ShipId};

/// Ships owned by one player, indexed by [`ShipId`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    /// One ship per length, with ids `1..=k` in the given order.
    ///
    /// The lengths must be exactly `1, 2, ..., k` with `k` in
    /// [`SHIP_COUNT_RANGE`].
    pub fn new<I>(lengths: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = u8>,
    {
        let max = *SHIP_COUNT_RANGE.end();
        let mut ships = Vec::new();
        for (i, length) in lengths.into_iter().enumerate() {
            let id = match u8::try_from(i + 1) {
                Ok(id) if id <= max => id,
                _ => return Err(ConfigError::ShipCount(max.saturating_add(1))),
            };
            if length != id {
                return Err(ConfigError::ShipLength { ship: id, length });
            }
            ships.push(Ship::new(ShipId(id), length));
        }
        if ships.is_empty() {
            return Err(ConfigError::ShipCount(0));
        }
        Ok(Fleet { ships })
    }

    /// The fleet described by `config`.
    pub fn for_config(config: &GameConfig) -> Self {
        let ships = config
            .ship_lengths()
            .map(|length| Ship::new(ShipId(length), length))
            .collect();
        Fleet { ships }
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    pub fn get(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id.index())
    }

    /// Record a hit on `id`.
    pub fn register_hit(&mut self, id: ShipId) -> Result<(), FleetError> {
        self.ships
            .get_mut(id.index())
            .ok_or(FleetError::UnknownShip(id))?
            .register_hit()
    }

    pub fn is_sunk(&self, id: ShipId) -> Result<bool, FleetError> {
        self.get(id)
            .map(Ship::is_sunk)
            .ok_or(FleetError::UnknownShip(id))
    }

    /// Returns `true` when every ship is sunk.
    pub fn is_defeated(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Ships still afloat.
    pub fn remaining_ships(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// Hits still needed to defeat the fleet.
    pub fn remaining_cells(&self) -> usize {
        self.ships.iter().map(|s| usize::from(s.remaining())).sum()
    }
}
