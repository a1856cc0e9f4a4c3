use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{Coord, PlayerError, ShotError, ShotOutcome},
};

/// Interface implemented by the automated and interactive players.
///
/// A player only picks targets. Boards belong to the game session, which
/// hands the opponent's board to [`take_turn`].
pub trait Player {
    /// Choose the next target on an opponent board of side `size`.
    fn choose_target(&mut self, rng: &mut SmallRng, size: usize) -> Result<Coord, PlayerError>;

    /// Inform the player that the board refused its target.
    fn handle_rejected(&mut self, coord: Coord, err: &ShotError) {
        log::debug!("target {} rejected: {}", coord, err);
    }

    /// Inform the player of the result of an accepted shot.
    fn handle_shot_result(&mut self, _coord: Coord, _outcome: ShotOutcome) {}

    /// True when the player shows rejected targets to its user itself, so
    /// the session need not repeat them.
    fn reports_rejections(&self) -> bool {
        false
    }
}

/// One accepted shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct TurnShot {
    pub target: Coord,
    pub outcome: ShotOutcome,
}

impl TurnShot {
    /// The shooter goes again.
    pub fn repeat(&self) -> bool {
        self.outcome.repeats_turn()
    }
}

/// Let `player` fire at `target_board` until the board accepts a shot.
///
/// Rejected targets are reported back to the player and do not use up
/// the turn.
pub fn take_turn<const N: usize>(
    player: &mut dyn Player,
    rng: &mut SmallRng,
    target_board: &mut Board<N>,
) -> Result<TurnShot, PlayerError> {
    take_turn_reporting(player, rng, target_board, |_| {})
}

/// [`take_turn`], also handing every rejection to `on_reject` after the
/// player has been told.
pub fn take_turn_reporting<const N: usize, F>(
    player: &mut dyn Player,
    rng: &mut SmallRng,
    target_board: &mut Board<N>,
    mut on_reject: F,
) -> Result<TurnShot, PlayerError>
where
    F: FnMut(&ShotError),
{
    loop {
        let target = player.choose_target(rng, N)?;
        match target_board.resolve_shot(target) {
            Ok(outcome) => {
                player.handle_shot_result(target, outcome);
                return Ok(TurnShot { target, outcome });
            }
            Err(err) => {
                player.handle_rejected(target, &err);
                on_reject(&err);
            }
        }
    }
}
