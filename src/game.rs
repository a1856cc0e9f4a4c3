use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use rand::{rngs::SmallRng, Rng};

use crate::{
    board::Board,
    common::{Coord, GameError, SetupError, ShotError},
    config::{BOARD_ATTEMPTS, BOARD_SIZE, FLEET, PLACEMENT_ATTEMPTS},
    player::{take_turn_reporting, Player, TurnShot},
    ship::{Orientation, Ship},
};

/// One of the two seats at the table. `First` moves on even turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Finished(Side),
}

/// What happened in one call to [`GameSession::run_turn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResult {
    /// Control passed to the other side.
    Continue,
    /// The same side shoots again.
    RepeatTurn,
    /// The given side has sunk the whole enemy fleet.
    Win(Side),
}

/// The last accepted shot and who fired it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShotRecord {
    pub shooter: Side,
    pub shot: TurnShot,
}

/// Random ship of `length` with its bow anywhere on the grid.
fn random_ship<const N: usize>(rng: &mut SmallRng, length: usize) -> Ship {
    let n = N as i32;
    let bow = Coord::new(rng.random_range(0..n), rng.random_range(0..n));
    let orientation = if rng.random_bool(0.5) {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    Ship::new(bow, length, orientation)
}

/// One pass at filling a fresh board, `None` when the attempt budget runs out.
fn random_place<const N: usize>(rng: &mut SmallRng) -> Option<Board<N>> {
    let mut board = Board::<N>::new();
    let mut attempts = 0;
    for &length in FLEET.iter() {
        loop {
            attempts += 1;
            if attempts > PLACEMENT_ATTEMPTS {
                return None;
            }
            let ship = random_ship::<N>(rng, length);
            match board.place_ship(ship) {
                Ok(()) => break,
                Err(e) => log::trace!("placement rejected: {}", e),
            }
        }
    }
    board.reset_targeting_memory();
    Some(board)
}

/// Build a board holding the whole fleet at random positions.
pub fn setup_fleet<const N: usize>(rng: &mut SmallRng) -> Result<Board<N>, SetupError> {
    for attempt in 1..=BOARD_ATTEMPTS {
        if let Some(board) = random_place::<N>(rng) {
            log::debug!("fleet placed on board attempt {}", attempt);
            return Ok(board);
        }
        log::debug!("board attempt {} ran out of placements", attempt);
    }
    Err(SetupError::FleetSetupFailed {
        attempts: BOARD_ATTEMPTS,
    })
}

/// Two players, two boards and the turn order between them.
///
/// Players and boards live in separate arrays so that a turn can borrow
/// the active player together with the *opponent's* board only.
pub struct GameSession<const N: usize = BOARD_SIZE> {
    players: [Box<dyn Player>; 2],
    boards: [Board<N>; 2],
    labels: [&'static str; 2],
    rng: SmallRng,
    turn_index: usize,
    status: GameStatus,
    last_shot: Option<ShotRecord>,
    shots: [usize; 2],
    rejections: Vec<ShotError>,
}

impl<const N: usize> GameSession<N> {
    /// Set up random fleets for both sides. The second side's ships are
    /// hidden when its board is rendered.
    pub fn new(
        first: Box<dyn Player>,
        second: Box<dyn Player>,
        mut rng: SmallRng,
    ) -> Result<Self, GameError> {
        let first_board = setup_fleet::<N>(&mut rng)?;
        let mut second_board = setup_fleet::<N>(&mut rng)?;
        second_board.set_hidden(true);
        Ok(Self::with_boards(
            first,
            second,
            [first_board, second_board],
            rng,
        ))
    }

    /// Start from prepared boards, `boards[i]` belonging to side `i`.
    pub fn with_boards(
        first: Box<dyn Player>,
        second: Box<dyn Player>,
        boards: [Board<N>; 2],
        rng: SmallRng,
    ) -> Self {
        Self {
            players: [first, second],
            boards,
            labels: ["Player", "Computer"],
            rng,
            turn_index: 0,
            status: GameStatus::NotStarted,
            last_shot: None,
            shots: [0; 2],
            rejections: Vec::new(),
        }
    }

    /// Names used when the session reports to a screen.
    pub fn with_labels(mut self, first: &'static str, second: &'static str) -> Self {
        self.labels = [first, second];
        self
    }

    pub fn label(&self, side: Side) -> &'static str {
        self.labels[side.index()]
    }

    pub fn turn_index(&self) -> usize {
        self.turn_index
    }

    pub fn active_side(&self) -> Side {
        if self.turn_index % 2 == 0 {
            Side::First
        } else {
            Side::Second
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The board owned by `side`.
    pub fn board(&self, side: Side) -> &Board<N> {
        &self.boards[side.index()]
    }

    pub fn last_shot(&self) -> Option<ShotRecord> {
        self.last_shot
    }

    /// Accepted shots fired by `side`.
    pub fn shots_fired(&self, side: Side) -> usize {
        self.shots[side.index()]
    }

    /// Targets refused during the most recent turn, oldest first.
    pub fn last_rejections(&self) -> &[ShotError] {
        &self.rejections
    }

    /// Play one accepted shot for the active side.
    pub fn run_turn(&mut self) -> Result<TurnResult, GameError> {
        self.play_turn(|_| {})
    }

    fn play_turn<F>(&mut self, mut on_reject: F) -> Result<TurnResult, GameError>
    where
        F: FnMut(&ShotError),
    {
        self.rejections.clear();
        if let GameStatus::Finished(winner) = self.status {
            return Ok(TurnResult::Win(winner));
        }
        self.status = GameStatus::InProgress;

        let side = self.active_side();
        let shooter = side.index();
        let target = side.opponent().index();
        let rejections = &mut self.rejections;
        let shot = take_turn_reporting(
            &mut *self.players[shooter],
            &mut self.rng,
            &mut self.boards[target],
            |err| {
                rejections.push(*err);
                on_reject(err);
            },
        )?;
        self.shots[shooter] += 1;
        self.last_shot = Some(ShotRecord { shooter: side, shot });

        let repeat = shot.repeat();
        if !repeat {
            self.turn_index += 1;
        }

        let winner = if self.boards[Side::Second.index()].is_defeated() {
            Some(Side::First)
        } else if self.boards[Side::First.index()].is_defeated() {
            Some(Side::Second)
        } else {
            None
        };
        if let Some(winner) = winner {
            log::info!("{} wins after {} turns", self.label(winner), self.turn_index);
            self.status = GameStatus::Finished(winner);
            return Ok(TurnResult::Win(winner));
        }

        Ok(if repeat {
            TurnResult::RepeatTurn
        } else {
            TurnResult::Continue
        })
    }

    /// Play until someone wins, reporting every step to `out`.
    ///
    /// Rejected targets are reported as they happen unless the player
    /// already shows them to its user.
    #[cfg(feature = "std")]
    pub fn run<W: std::io::Write>(&mut self, out: &mut W) -> anyhow::Result<Side> {
        loop {
            crate::ui::print_boards(out, self)?;
            let side = self.active_side();
            let label = self.label(side);
            writeln!(out, "{} to move.", label)?;
            let announce = !self.players[side.index()].reports_rejections();
            let mut write_failure = None;
            let result = self.play_turn(|err| {
                if !announce || write_failure.is_some() {
                    return;
                }
                let line = crate::ui::describe_rejection(label, err);
                if let Err(e) = writeln!(out, "{}", line) {
                    write_failure = Some(e);
                }
            });
            if let Some(e) = write_failure {
                return Err(e.into());
            }
            let result = result?;
            if let Some(record) = self.last_shot {
                writeln!(out, "{}", crate::ui::describe_shot(self, &record))?;
            }
            if let TurnResult::Win(winner) = result {
                crate::ui::print_boards(out, self)?;
                writeln!(out, "{}", "-".repeat(20))?;
                writeln!(out, "{} won!", self.label(winner))?;
                return Ok(winner);
            }
        }
    }
}

impl<const N: usize> fmt::Debug for GameSession<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("boards", &self.boards)
            .field("labels", &self.labels)
            .field("turn_index", &self.turn_index)
            .field("status", &self.status)
            .field("last_shot", &self.last_shot)
            .finish()
    }
}
