//! A fixed-size set of board cells packed into an unsigned integer.
//!
//! The type is `no_std` friendly and avoids heap allocations. An `N×N`
//! grid maps to the low `N * N` bits of `T` in row-major order. Coordinates
//! outside the grid are never members.

use core::fmt;
use core::ops::BitAnd;
use num_traits::{PrimInt, Unsigned, Zero};

use crate::common::Coord;

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBoardError {
    /// Coordinate lies outside `[0, N)` on some axis.
    IndexOutOfBounds(Coord),
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::IndexOutOfBounds(c) => {
                write!(f, "IndexOutOfBounds: row={}, col={}", c.row, c.col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BitBoardError {}

/// A set of cells on an N×N grid stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Fails to compile when the grid does not fit in `T`.
    const FITS: () = assert!(N * N <= core::mem::size_of::<T>() * 8);

    /// Create an empty set.
    #[inline]
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::FITS;
        BitBoard { bits: T::zero() }
    }

    #[inline]
    fn index(c: Coord) -> Option<usize> {
        let n = N as i32;
        if (0..n).contains(&c.row) && (0..n).contains(&c.col) {
            Some((c.row * n + c.col) as usize)
        } else {
            None
        }
    }

    /// Number of cells in the set.
    pub fn count(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no cell is set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Membership test; out-of-grid coordinates are never members.
    pub fn contains(&self, c: Coord) -> bool {
        match Self::index(c) {
            Some(idx) => ((self.bits >> idx) & T::one()) != T::zero(),
            None => false,
        }
    }

    /// Adds `c`, returning whether it was newly added.
    pub fn insert(&mut self, c: Coord) -> Result<bool, BitBoardError> {
        if Self::index(c).is_none() {
            return Err(BitBoardError::IndexOutOfBounds(c));
        }
        Ok(self.set(c))
    }

    /// Adds a cell the caller has already bounds-checked. Off-grid cells
    /// are ignored and reported as not added.
    pub(crate) fn set(&mut self, c: Coord) -> bool {
        let Some(idx) = Self::index(c) else {
            return false;
        };
        let bit = T::one() << idx;
        let fresh = (self.bits & bit).is_zero();
        self.bits = self.bits | bit;
        fresh
    }

    /// Empties the set.
    #[inline]
    pub fn clear(&mut self) {
        self.bits = T::zero();
    }

    /// Builds a set from coordinates, failing on the first out-of-grid one.
    pub fn from_cells<I>(cells: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut board = Self::new();
        for c in cells {
            board.insert(c)?;
        }
        Ok(board)
    }

    /// Iterator over member cells in row-major order.
    pub fn iter(&self) -> Cells<'_, T, N> {
        Cells {
            board: self,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}>:", N)?;
        for r in 0..N as i32 {
            for c in 0..N as i32 {
                let bit = if self.contains(Coord::new(r, c)) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the cells of a bitboard.
#[derive(Clone, Copy)]
pub struct Cells<'a, T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T, N>,
    idx: usize,
}

impl<'a, T, const N: usize> Iterator for Cells<'a, T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.board.bits >> idx) & T::one()) != T::zero() {
                return Some(Coord::new((idx / N) as i32, (idx % N) as i32));
            }
        }
        None
    }
}

impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits & rhs.bits,
        }
    }
}
