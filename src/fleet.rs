//! A player's fleet: the ships it owns and the pure queries over them.

use alloc::vec::Vec;

use crate::common::Coord;
use crate::ship::{Ship, ShipSpec};

/// The set of ships owned by one player.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    /// Build a fleet from its compile-time specs, fresh and undamaged.
    pub fn from_specs(specs: &[ShipSpec]) -> Self {
        Fleet {
            ships: specs.iter().map(Ship::from_spec).collect(),
        }
    }

    /// All ships in the fleet.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// The ship occupying `coord`, if any. Out-of-range coordinates simply
    /// match no ship.
    pub fn ship_at(&self, coord: Coord) -> Option<&Ship> {
        self.ships.iter().find(|s| s.occupies(coord))
    }

    pub(crate) fn ship_at_mut(&mut self, coord: Coord) -> Option<&mut Ship> {
        self.ships.iter_mut().find(|s| s.occupies(coord))
    }

    /// The ship with the given id, if present.
    pub fn get(&self, id: &str) -> Option<&Ship> {
        self.ships.iter().find(|s| s.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Ship> {
        self.ships.iter_mut().find(|s| s.id() == id)
    }

    /// True iff every ship in the fleet is sunk.
    pub fn is_destroyed(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }
}
