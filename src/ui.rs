#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, Write};

use crate::board::{Board, Cell};
use crate::common::ShotError;
use crate::game::{GameSession, ShotRecord, Side};

/// Character shown for a cell.
pub fn glyph(cell: Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::Occupied => '■',
        Cell::Hit => 'X',
        Cell::Miss => 'o',
        Cell::SunkContour => '*',
    }
}

/// Text rendering of a board, respecting its hidden flag.
///
/// ```text
///     1  2  3  4  5  6
/// 1   ■  ■  .  .  .  .
/// 2   .  .  *  X  o  .
/// ```
pub struct BoardView<'a, const N: usize>(pub &'a Board<N>);

impl<const N: usize> fmt::Display for BoardView<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for c in 0..N {
            write!(f, " {:>2}", c + 1)?;
        }
        for (r, row) in self.0.render_rows().iter().enumerate() {
            writeln!(f)?;
            write!(f, "{:<2}", r + 1)?;
            for &cell in row {
                write!(f, "  {}", glyph(cell))?;
            }
        }
        Ok(())
    }
}

/// Both boards, the first side's one on top.
pub fn print_boards<W: Write, const N: usize>(
    out: &mut W,
    session: &GameSession<N>,
) -> io::Result<()> {
    let rule = "-".repeat(20);
    for side in [Side::First, Side::Second] {
        writeln!(out, "{}", rule)?;
        writeln!(out, "{} board:", session.label(side))?;
        writeln!(out, "{}", BoardView(session.board(side)))?;
    }
    writeln!(out, "{}", rule)
}

/// One line describing an accepted shot, e.g. `Computer fires at 3 4: Miss.`
pub fn describe_shot<const N: usize>(session: &GameSession<N>, record: &ShotRecord) -> String {
    format!(
        "{} fires at {}: {}",
        session.label(record.shooter),
        record.shot.target,
        record.shot.outcome
    )
}

/// One line for a target the board refused, e.g. `Computer: 7 1 is off the board, retrying.`
pub fn describe_rejection(label: &str, err: &ShotError) -> String {
    format!("{}: {}, retrying.", label, err)
}
