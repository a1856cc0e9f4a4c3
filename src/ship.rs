//! Ship definition: a straight line of cells growing from its bow.

use crate::common::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Cells extend along the row, to increasing columns.
    Horizontal,
    /// Cells extend down the column, to increasing rows.
    Vertical,
}

impl Orientation {
    #[inline]
    fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// A ship with its remaining hit points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    bow: Coord,
    length: usize,
    orientation: Orientation,
    hits_remaining: usize,
}

impl Ship {
    /// A fresh, undamaged ship. Whether it fits is the board's business.
    pub fn new(bow: Coord, length: usize, orientation: Orientation) -> Self {
        Self {
            bow,
            length,
            orientation,
            hits_remaining: length,
        }
    }

    /// Cells covered by the ship, starting at the bow.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Coord> {
        let (dr, dc) = self.orientation.step();
        let bow = self.bow;
        (0..self.length as i32).map(move |i| bow.offset(dr * i, dc * i))
    }

    /// True if `target` is one of the ship's cells.
    pub fn is_hit_by(&self, target: Coord) -> bool {
        self.occupied_cells().any(|c| c == target)
    }

    /// Takes one point of damage.
    pub(crate) fn register_hit(&mut self) {
        self.hits_remaining = self.hits_remaining.saturating_sub(1);
    }

    pub fn is_sunk(&self) -> bool {
        self.hits_remaining == 0
    }

    pub fn bow(&self) -> Coord {
        self.bow
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn hits_remaining(&self) -> usize {
        self.hits_remaining
    }
}
