//! Per-player grid of cell states.

use alloc::vec;
use alloc::vec::Vec;

use crate::common::{Coord, GameError};
use crate::fleet::Fleet;

/// State of a single grid cell.
///
/// `Empty` and `Ship` are unrevealed from the attacker's perspective; `Hit`
/// and `Miss` are terminal: once revealed, a cell never changes again except
/// when a fortify move clears a ship's old `Ship` cells back to `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Empty,
    Ship,
    Hit,
    Miss,
}

/// A square grid of cell states, one per player. The owner's board is the
/// single authoritative copy; the opponent's "view" is the same grid with
/// `Ship` rendered as unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    size: usize,
    cells: Vec<CellState>,
}

impl Board {
    /// Create an empty board of `size` x `size` cells.
    pub fn new(size: usize) -> Self {
        Board {
            size,
            cells: vec![CellState::Empty; size * size],
        }
    }

    /// Create a board with `Ship` cells derived from the fleet's current
    /// coordinate runs. Coordinates outside the grid are ignored.
    pub fn from_fleet(size: usize, fleet: &Fleet) -> Self {
        let mut board = Board::new(size);
        for ship in fleet.ships() {
            for &(row, col) in ship.coords() {
                if row < size && col < size {
                    board.cells[row * size + col] = CellState::Ship;
                }
            }
        }
        board
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether (`row`, `col`) lies on the grid.
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// State of the cell at (`row`, `col`).
    pub fn cell(&self, row: usize, col: usize) -> Result<CellState, GameError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[row * self.size + col])
    }

    /// Whether the cell at `coord` has been revealed as `Hit` or `Miss`.
    pub fn is_revealed(&self, coord: Coord) -> Result<bool, GameError> {
        let cell = self.cell(coord.0, coord.1)?;
        Ok(matches!(cell, CellState::Hit | CellState::Miss))
    }

    /// Overwrite the cell at (`row`, `col`).
    pub(crate) fn set_cell(
        &mut self,
        row: usize,
        col: usize,
        state: CellState,
    ) -> Result<(), GameError> {
        self.check_bounds(row, col)?;
        self.cells[row * self.size + col] = state;
        Ok(())
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), GameError> {
        if self.in_bounds(row, col) {
            Ok(())
        } else {
            Err(GameError::OutOfBounds { row, col })
        }
    }
}
