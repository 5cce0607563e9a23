//! Deterministic random number generation for scrambles.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical scrambles
//! - **Forkable**: Independent streams for batches of scrambles
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use cube_engine::core::CubeRng;
//!
//! let mut rng = CubeRng::new(42);
//! let mut batch_rng = rng.fork();
//!
//! // Original and fork produce different sequences
//! let a: Vec<_> = (0..8).map(|_| rng.gen_index(18)).collect();
//! let b: Vec<_> = (0..8).map(|_| batch_rng.gen_index(18)).collect();
//! assert_ne!(a, b);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG with forking.
///
/// Uses ChaCha8 for speed; the stream for a seed is stable across platforms.
#[derive(Clone, Debug)]
pub struct CubeRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl CubeRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent stream.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Uniform index in `0..bound`.
    ///
    /// # Panics
    /// If `bound` is zero.
    pub fn gen_index(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> CubeRngState {
        CubeRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &CubeRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG state for resuming a scramble stream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = CubeRng::new(42);
        let mut rng2 = CubeRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_index(18), rng2.gen_index(18));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = CubeRng::new(1);
        let mut rng2 = CubeRng::new(2);

        let seq1: Vec<_> = (0..16).map(|_| rng1.gen_index(1000)).collect();
        let seq2: Vec<_> = (0..16).map(|_| rng2.gen_index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = CubeRng::new(42);
        let mut rng2 = CubeRng::new(42);

        let forked1 = rng1.fork();
        let forked2 = rng2.fork();

        assert_eq!(forked1.seed(), forked2.seed());
        assert_ne!(forked1.seed(), rng1.fork().seed());
    }

    #[test]
    fn test_gen_index_in_bounds() {
        let mut rng = CubeRng::new(7);
        let mut seen = [false; 18];
        for _ in 0..1000 {
            seen[rng.gen_index(18)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_state_round_trip() {
        let mut rng = CubeRng::new(42);
        for _ in 0..100 {
            rng.gen_index(1000);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.gen_index(1000)).collect();

        let mut restored = CubeRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.gen_index(1000)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = CubeRngState {
            seed: 42,
            word_pos: 12345,
            fork_counter: 5,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: CubeRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_state_preserves_fork_counter() {
        let mut rng = CubeRng::new(42);
        let _ = rng.fork();
        let _ = rng.fork();

        let state = rng.state();
        assert_eq!(state.fork_counter, 2);
        assert_eq!(CubeRng::from_state(&state).state().fork_counter, 2);
    }
}
