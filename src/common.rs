//! Common types for the game: coordinates, shot outcomes and errors.

use core::fmt;

/// A cell position on the board, 0-based.
///
/// Components are signed so that neighbour offsets and user input such as
/// `0 0` simply produce an out-of-bounds coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Coordinate shifted by `(dr, dc)`.
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

/// Shows the coordinate the way the player types it: 1-based, row first.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row + 1, self.col + 1)
    }
}

/// Result of a shot that the board accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Hit a ship that is still afloat.
    Hit,
    /// Hit the last live segment of a ship.
    Sunk,
    /// No ship at the target.
    Miss,
}

impl ShotOutcome {
    /// Only a plain hit gives the shooter another shot.
    pub fn repeats_turn(self) -> bool {
        matches!(self, ShotOutcome::Hit)
    }
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotOutcome::Hit => write!(f, "Hit! Shoot again."),
            ShotOutcome::Sunk => write!(f, "Ship sunk!"),
            ShotOutcome::Miss => write!(f, "Miss."),
        }
    }
}

/// Reasons a board refuses a shot. The shooter picks another target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotError {
    /// Target lies outside the grid.
    OutOfBounds(Coord),
    /// Target was already shot at or revealed around a sunk ship.
    AlreadyTargeted(Coord),
}

impl fmt::Display for ShotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotError::OutOfBounds(c) => write!(f, "{} is off the board", c),
            ShotError::AlreadyTargeted(c) => write!(f, "{} has already been fired at", c),
        }
    }
}

/// A ship leaves the grid or touches a cell reserved by another ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrongPlacement {
    /// First offending ship cell.
    pub cell: Coord,
}

impl fmt::Display for WrongPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ship cannot occupy {}", self.cell)
    }
}

/// Fleet generation gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    FleetSetupFailed { attempts: usize },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::FleetSetupFailed { attempts } => {
                write!(f, "could not place the fleet after {} boards", attempts)
            }
        }
    }
}

/// Why a line of player input is not a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Expected exactly two tokens, got this many.
    WrongTokenCount(usize),
    /// A token is not a non-negative integer.
    NotANumber,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::WrongTokenCount(n) => {
                write!(f, "enter exactly two numbers, row and column (got {})", n)
            }
            InputError::NotANumber => write!(f, "row and column must be numbers"),
        }
    }
}

/// A player can no longer produce targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerError {
    /// The input source reached end of stream.
    InputClosed,
    /// Reading from the input source failed.
    InputFailed,
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerError::InputClosed => write!(f, "input closed"),
            PlayerError::InputFailed => write!(f, "failed to read input"),
        }
    }
}

/// Errors that stop a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    Setup(SetupError),
    Player(PlayerError),
}

impl From<SetupError> for GameError {
    fn from(err: SetupError) -> Self {
        GameError::Setup(err)
    }
}

impl From<PlayerError> for GameError {
    fn from(err: PlayerError) -> Self {
        GameError::Player(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Setup(e) => write!(f, "setup error: {}", e),
            GameError::Player(e) => write!(f, "player error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ShotError {}
#[cfg(feature = "std")]
impl std::error::Error for WrongPlacement {}
#[cfg(feature = "std")]
impl std::error::Error for SetupError {}
#[cfg(feature = "std")]
impl std::error::Error for InputError {}
#[cfg(feature = "std")]
impl std::error::Error for PlayerError {}
#[cfg(feature = "std")]
impl std::error::Error for GameError {}
