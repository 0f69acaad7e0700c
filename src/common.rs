//! Common types shared across the engine: coordinates, players, move
//! outcomes and the error taxonomy.

use alloc::string::String;
use core::fmt;

/// (row, col) grid coordinate.
pub type Coord = (usize, usize);

/// One of the two hotseat players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// The opposing player.
    pub fn other(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Index into per-player arrays of boards and fleets.
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::One => write!(f, "Player 1"),
            PlayerId::Two => write!(f, "Player 2"),
        }
    }
}

/// Result of a resolved attack.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// Attack landed on open water.
    Miss,
    /// Attack hit a ship segment without sinking it, carrying the ship's id.
    Hit(String),
    /// Attack hit the ship's final segment, carrying the ship's id.
    Sunk(String),
}

/// Result of a fortify-mode click that did not fail validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FortifyEvent {
    /// An undamaged ship was selected as the move candidate.
    Selected(String),
    /// The selected ship was clicked again and deselected.
    Deselected,
    /// A different ship was clicked; the original selection is retained.
    SelectionKept(String),
    /// An empty cell was clicked with nothing selected.
    NothingHere,
    /// The selected ship was moved to a new anchor.
    Moved(String),
}

/// Errors returned by engine operations. All are recoverable and leave the
/// game state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// Attack on a cell that is already HIT or MISS.
    AlreadyRevealed { row: usize, col: usize },
    /// Fortify destination overlaps a revealed HIT or MISS cell.
    DestinationRevealed { row: usize, col: usize },
    /// Fortify destination overlaps another ship in the same fleet.
    ShipCollision(String),
    /// Fortify destination is identical to the ship's current position.
    NoOpMove,
    /// Attempted to select a damaged ship for fortifying.
    ShipDamaged(String),
    /// Fortify click received while fortify mode is off.
    NotInFortifyMode,
    /// Selected ship id not present in the acting fleet.
    UnknownShip(String),
    /// Mutating call after the game has ended.
    GameAlreadyOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::OutOfBounds { row, col } => {
                write!(f, "({}, {}) is out of bounds", row, col)
            }
            GameError::AlreadyRevealed { row, col } => {
                write!(f, "already attacked ({}, {})", row, col)
            }
            GameError::DestinationRevealed { row, col } => {
                write!(f, "cannot move onto revealed cell ({}, {})", row, col)
            }
            GameError::ShipCollision(id) => write!(f, "collides with {}", id),
            GameError::NoOpMove => write!(f, "already at that location"),
            GameError::ShipDamaged(id) => write!(f, "{} is damaged and cannot be moved", id),
            GameError::NotInFortifyMode => write!(f, "not in fortify mode"),
            GameError::UnknownShip(id) => write!(f, "no ship named {} in fleet", id),
            GameError::GameAlreadyOver => write!(f, "the game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
