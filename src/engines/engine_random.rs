//! Random-move baseline engine.
//!
//! Picks uniformly among the owner's legal moves. Useful as a sparring
//! partner and in tests; seed it for reproducible play.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::SearchError;
use crate::game_state::game_position::GamePosition;
use crate::search::deadline::TimeLeft;

pub struct RandomEngine<P: GamePosition> {
    owner: P::Player,
    rng: StdRng,
}

impl<P: GamePosition> RandomEngine<P> {
    pub fn new(owner: P::Player) -> Self {
        Self {
            owner,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(owner: P::Player, seed: u64) -> Self {
        Self {
            owner,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<P> Engine<P> for RandomEngine<P>
where
    P: GamePosition,
    P::Player: Send,
{
    fn name(&self) -> &str {
        "Random Mover"
    }

    fn choose_move(
        &mut self,
        position: &P,
        _time_left: &dyn TimeLeft,
    ) -> Result<EngineOutput<P::Move>, SearchError> {
        let legal_moves = position.legal_moves(self.owner);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));
        out.best_move = legal_moves.as_slice().choose(&mut self.rng).cloned();
        Ok(out)
    }
}
