//! Seeded random scrambles.
//!
//! Moves are drawn uniformly from the 18 face turns; a draw on the same face
//! as the previous move is rejected and redrawn, so no scramble contains
//! `R R'` or `U U2`.

use serde::{Deserialize, Serialize};

use crate::core::{CubeRng, CubeRngState, CubeState, ScrambleConfig};
use crate::engine::PuzzleState;
use crate::moves::{Move, MoveSequence};

/// A scrambled cube and the moves that produced it from solved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scramble {
    pub state: CubeState,
    pub moves: MoveSequence,
}

/// Stream of scrambles from one seed.
#[derive(Clone, Debug)]
pub struct Scrambler {
    rng: CubeRng,
    length: usize,
}

impl Scrambler {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_config(&ScrambleConfig::default().with_seed(seed))
    }

    #[must_use]
    pub fn from_config(config: &ScrambleConfig) -> Self {
        Self {
            rng: CubeRng::new(config.seed),
            length: config.length,
        }
    }

    /// Resume a stream saved with [`Scrambler::rng_state`].
    #[must_use]
    pub fn from_rng_state(state: &CubeRngState, length: usize) -> Self {
        Self {
            rng: CubeRng::from_state(state),
            length,
        }
    }

    #[must_use]
    pub fn rng_state(&self) -> CubeRngState {
        self.rng.state()
    }

    /// Next scramble of the configured length.
    pub fn generate(&mut self) -> Scramble {
        let length = self.length;
        self.next_scramble(length)
    }

    /// Next scramble of `length` moves.
    pub fn next_scramble(&mut self, length: usize) -> Scramble {
        let moves = random_moves(&mut self.rng, length);
        let state = CubeState::solved().apply_sequence(&moves);
        Scramble { state, moves }
    }

    /// `count` scrambles, each drawn from its own forked stream.
    ///
    /// Scramble `i` of a batch does not depend on how long the other
    /// scrambles are, only on the seed and `i`.
    pub fn scramble_many(&mut self, count: usize, length: usize) -> Vec<Scramble> {
        (0..count)
            .map(|_| {
                let mut rng = self.rng.fork();
                let moves = random_moves(&mut rng, length);
                Scramble {
                    state: CubeState::solved().apply_sequence(&moves),
                    moves,
                }
            })
            .collect()
    }
}

fn random_moves(rng: &mut CubeRng, length: usize) -> MoveSequence {
    let mut moves = MoveSequence::new();
    let mut previous: Option<Move> = None;
    while moves.len() < length {
        let mv = Move::ALL[rng.gen_index(Move::ALL.len())];
        if previous.is_some_and(|prev| prev.face == mv.face) {
            continue;
        }
        moves.push(mv);
        previous = Some(mv);
    }
    moves
}

/// Scramble a solved cube with `length` random moves from `seed`.
#[must_use]
pub fn scramble(length: usize, seed: u64) -> Scramble {
    Scrambler::new(seed).next_scramble(length)
}
