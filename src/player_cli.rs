#![cfg(feature = "std")]

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};
use std::string::String;

use rand::rngs::SmallRng;

use crate::common::{Coord, InputError, PlayerError, ShotError};
use crate::player::Player;

/// Parse `"row col"`, both 1-based, into a 0-based coordinate.
///
/// Only the shape is checked here. `0` or values past the board edge come
/// back as out-of-bounds coordinates for the board to reject.
pub fn parse_target(line: &str) -> Result<Coord, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = tokens.as_slice() else {
        return Err(InputError::WrongTokenCount(tokens.len()));
    };
    let row = parse_number(row)?;
    let col = parse_number(col)?;
    Ok(Coord::new(row - 1, col - 1))
}

fn parse_number(token: &str) -> Result<i32, InputError> {
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotANumber);
    }
    token.parse().map_err(|_| InputError::NotANumber)
}

/// Human player typing coordinates.
pub struct InteractivePlayer<R, W> {
    input: R,
    output: W,
}

impl InteractivePlayer<StdinLock<'static>, Stdout> {
    /// Player on the process's terminal.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> InteractivePlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Hands back the output sink, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, msg: core::fmt::Arguments<'_>) {
        // Write failures are only logged; a dead terminal shows up on read.
        if let Err(e) = writeln!(self.output, "{}", msg) {
            log::warn!("failed to write to player: {}", e);
        }
    }

    fn read_line(&mut self) -> Result<String, PlayerError> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Err(PlayerError::InputClosed),
            Ok(_) => Ok(line),
            Err(e) => {
                log::error!("failed to read player input: {}", e);
                Err(PlayerError::InputFailed)
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for InteractivePlayer<R, W> {
    fn choose_target(&mut self, _rng: &mut SmallRng, _size: usize) -> Result<Coord, PlayerError> {
        loop {
            write!(self.output, "Your shot (row col): ").map_err(|_| PlayerError::InputFailed)?;
            self.output.flush().map_err(|_| PlayerError::InputFailed)?;
            let line = self.read_line()?;
            match parse_target(&line) {
                Ok(coord) => return Ok(coord),
                Err(e) => self.say(format_args!(" {}", e)),
            }
        }
    }

    fn handle_rejected(&mut self, _coord: Coord, err: &ShotError) {
        self.say(format_args!(" {}, try again.", err));
    }

    fn reports_rejections(&self) -> bool {
        true
    }
}
