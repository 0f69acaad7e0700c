//! Ship definitions: compile-time fleet specs and runtime ship state.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::common::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Contiguous run of `len` coordinates starting at `anchor`, extending
    /// right if horizontal and down if vertical. No bounds checking; callers
    /// validate against the grid.
    pub fn run(self, anchor: Coord, len: usize) -> Vec<Coord> {
        let (row, col) = anchor;
        (0..len)
            .map(|i| match self {
                Orientation::Horizontal => (row, col + i),
                Orientation::Vertical => (row + i, col),
            })
            .collect()
    }
}

/// Compile-time description of a ship's identity and initial placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipSpec {
    id: &'static str,
    size: usize,
    orientation: Orientation,
    row: usize,
    col: usize,
}

impl ShipSpec {
    /// Create a new ship spec anchored at (`row`, `col`).
    pub const fn new(
        id: &'static str,
        size: usize,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Self {
        Self {
            id,
            size,
            orientation,
            row,
            col,
        }
    }

    /// Ship's identifier.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Number of cells the ship occupies.
    pub fn size(&self) -> usize {
        self.size
    }
}

/// A ship placed on the board, tracking its coordinate run and damage.
///
/// Identity is carried by `id`: repositioning replaces the coordinate run
/// but never the id, and `hits` never exceeds `size`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    id: String,
    size: usize,
    coords: Vec<Coord>,
    orientation: Orientation,
    hits: usize,
}

impl Ship {
    /// Instantiate a ship from its spec, undamaged and at its initial run.
    pub fn from_spec(spec: &ShipSpec) -> Self {
        Ship {
            id: spec.id.to_string(),
            size: spec.size,
            coords: spec.orientation.run((spec.row, spec.col), spec.size),
            orientation: spec.orientation,
            hits: 0,
        }
    }

    /// Ship's identifier, unique within its fleet.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Number of cells the ship occupies.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Ordered coordinate run, anchor first.
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// First coordinate of the run, the reference point for repositioning.
    pub fn anchor(&self) -> Coord {
        self.coords[0]
    }

    /// Orientation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of segments hit so far.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Whether the ship currently occupies `coord`.
    pub fn occupies(&self, coord: Coord) -> bool {
        self.coords.contains(&coord)
    }

    /// A ship is sunk once every segment has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hits >= self.size
    }

    /// Register one hit, saturating at the ship's size.
    pub(crate) fn record_hit(&mut self) {
        if self.hits < self.size {
            self.hits += 1;
        }
    }

    /// Replace the coordinate run, preserving id, size and orientation.
    pub(crate) fn set_coords(&mut self, coords: Vec<Coord>) {
        self.coords = coords;
    }
}
