use rand::{rngs::SmallRng, Rng};

use crate::common::{Coord, PlayerError, ShotOutcome};
use crate::player::Player;

/// Automated player firing at uniformly random cells.
///
/// It keeps no history, so it may pick a used cell; the board rejects it
/// and [`crate::take_turn`] asks again.
#[derive(Debug, Default, Clone, Copy)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        AiPlayer
    }
}

impl Player for AiPlayer {
    fn choose_target(&mut self, rng: &mut SmallRng, size: usize) -> Result<Coord, PlayerError> {
        let n = size as i32;
        Ok(Coord::new(rng.random_range(0..n), rng.random_range(0..n)))
    }

    fn handle_shot_result(&mut self, coord: Coord, outcome: ShotOutcome) {
        log::debug!("computer fired at {}: {:?}", coord, outcome);
    }
}
