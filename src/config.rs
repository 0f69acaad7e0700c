//! Fixed game configuration: grid size and the initial fleet layouts.

use crate::ship::{Orientation, ShipSpec};

/// Side length of each player's square grid.
pub const GRID_SIZE: usize = 5;

/// Ships per fleet.
pub const FLEET_SIZE: usize = 2;

/// Player 1's initial layout.
pub const PLAYER_ONE_SHIPS: [ShipSpec; FLEET_SIZE] = [
    ShipSpec::new("P1_Destroyer", 3, Orientation::Vertical, 0, 1),
    ShipSpec::new("P1_Submarine", 2, Orientation::Horizontal, 4, 3),
];

/// Player 2's initial layout.
pub const PLAYER_TWO_SHIPS: [ShipSpec; FLEET_SIZE] = [
    ShipSpec::new("P2_Destroyer", 3, Orientation::Vertical, 1, 3),
    ShipSpec::new("P2_Submarine", 2, Orientation::Horizontal, 0, 0),
];
