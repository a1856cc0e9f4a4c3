//! Game board: grid state, ship placement and shot resolution.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::{BitBoard, BitBoardError};
use crate::common::{Coord, ShotError, ShotOutcome, WrongPlacement};
use crate::ship::Ship;

/// Cell set sized for any board up to 11×11.
pub type CellSet<const N: usize> = BitBoard<u128, N>;

/// The eight neighbours of a cell plus the cell itself.
const NEAR: [(i32, i32); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Display state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Occupied,
    Hit,
    Miss,
    /// Revealed water around a sunk ship.
    SunkContour,
}

/// An N×N board with its fleet.
///
/// `reserved` holds every ship cell and its halo and only grows during
/// placement. `targeted` holds every cell shot at or revealed after a
/// sinking; it is what makes a second shot at the same cell illegal.
#[derive(Clone, PartialEq, Eq)]
pub struct Board<const N: usize> {
    grid: [[Cell; N]; N],
    ships: Vec<Ship>,
    reserved: CellSet<N>,
    targeted: CellSet<N>,
    sunk_count: usize,
    hidden: bool,
}

impl<const N: usize> Board<N> {
    /// Create an empty, visible board.
    pub fn new() -> Self {
        Self {
            grid: [[Cell::Empty; N]; N],
            ships: Vec::new(),
            reserved: CellSet::new(),
            targeted: CellSet::new(),
            sunk_count: 0,
            hidden: false,
        }
    }

    /// Side length of the grid.
    pub const fn size(&self) -> usize {
        N
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Conceal ships when rendering.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn sunk_count(&self) -> usize {
        self.sunk_count
    }

    /// Ship cells and their halos.
    pub fn reserved(&self) -> &CellSet<N> {
        &self.reserved
    }

    /// Cells that can no longer be shot at.
    pub fn targeted(&self) -> &CellSet<N> {
        &self.targeted
    }

    /// Raw state of a cell, `None` when off the board.
    pub fn cell(&self, c: Coord) -> Option<Cell> {
        if self.is_out_of_bounds(c) {
            None
        } else {
            Some(self.grid[c.row as usize][c.col as usize])
        }
    }

    fn set_cell(&mut self, c: Coord, cell: Cell) {
        self.grid[c.row as usize][c.col as usize] = cell;
    }

    pub fn is_out_of_bounds(&self, c: Coord) -> bool {
        let n = N as i32;
        !((0..n).contains(&c.row) && (0..n).contains(&c.col))
    }

    /// Mark the ship's cells and their 8-connected halo.
    ///
    /// Without `paint` the cells are reserved against further placement.
    /// With `paint` every cell not yet targeted becomes targeted and is
    /// shown as `SunkContour`.
    pub fn mark_adjacency(&mut self, ship: &Ship, paint: bool) {
        for cell in ship.occupied_cells() {
            for (dr, dc) in NEAR {
                let cur = cell.offset(dr, dc);
                if self.is_out_of_bounds(cur) {
                    continue;
                }
                if paint {
                    if self.targeted.set(cur) {
                        self.set_cell(cur, Cell::SunkContour);
                    }
                } else {
                    self.reserved.set(cur);
                }
            }
        }
    }

    /// Place a ship, all or nothing.
    ///
    /// Ships of length zero or longer than the board are refused at the
    /// bow before any cell is computed.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), WrongPlacement> {
        if ship.length() == 0 || ship.length() > N {
            return Err(WrongPlacement { cell: ship.bow() });
        }
        let cells = CellSet::<N>::from_cells(ship.occupied_cells())
            .map_err(|BitBoardError::IndexOutOfBounds(cell)| WrongPlacement { cell })?;
        if let Some(cell) = (cells & self.reserved).iter().next() {
            return Err(WrongPlacement { cell });
        }
        for cell in cells.iter() {
            self.set_cell(cell, Cell::Occupied);
        }
        self.ships.push(ship);
        self.mark_adjacency(&ship, false);
        Ok(())
    }

    /// Fire at `target`.
    pub fn resolve_shot(&mut self, target: Coord) -> Result<ShotOutcome, ShotError> {
        if self.is_out_of_bounds(target) {
            return Err(ShotError::OutOfBounds(target));
        }
        if self.targeted.contains(target) {
            return Err(ShotError::AlreadyTargeted(target));
        }
        self.targeted.set(target);

        let Some(idx) = self.ships.iter().position(|s| s.is_hit_by(target)) else {
            self.set_cell(target, Cell::Miss);
            return Ok(ShotOutcome::Miss);
        };

        self.ships[idx].register_hit();
        self.set_cell(target, Cell::Hit);
        let ship = self.ships[idx];
        if ship.is_sunk() {
            self.sunk_count += 1;
            self.mark_adjacency(&ship, true);
            log::info!("ship of length {} at {} sunk", ship.length(), ship.bow());
            Ok(ShotOutcome::Sunk)
        } else {
            Ok(ShotOutcome::Hit)
        }
    }

    /// Forget every shot received. Reservations and cell states stay.
    pub fn reset_targeting_memory(&mut self) {
        self.targeted.clear();
    }

    /// True once every ship of a non-empty fleet is sunk.
    pub fn is_defeated(&self) -> bool {
        !self.ships.is_empty() && self.sunk_count == self.ships.len()
    }

    /// Cells as they should be displayed, ships masked when hidden.
    pub fn render_rows(&self) -> Vec<Vec<Cell>> {
        self.grid
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&cell| match cell {
                        Cell::Occupied if self.hidden => Cell::Empty,
                        other => other,
                    })
                    .collect()
            })
            .collect()
    }
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for Board<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board<{}> {{\n  sunk: {}/{},\n  hidden: {},\n  ships: {:?},\n  reserved: {:?},\n  targeted: {:?}\n}}",
            N,
            self.sunk_count,
            self.ships.len(),
            self.hidden,
            self.ships,
            self.reserved,
            self.targeted
        )
    }
}
