//! Deterministic random number generation for duel resolution.
//!
//! Randomness enters the engine in exactly two places: the Gamble coin-flip
//! in the resolver and the single roll an opponent policy makes per
//! decision. Both take an explicit [`RandomSource`] so callers control
//! seeding and replay.
//!
//! `GameRng` wraps ChaCha8 so a seed means the same stream on every
//! platform. Matches get their own stream through [`GameRng::fork`], and a
//! checkpoint is just the seed plus the ChaCha word position.
//!
//! Two peers that seed a `GameRng` identically and feed it the same moves
//! resolve identical outcomes:
//!
//! ```
//! use duel_core::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42).for_context("gamble");
//! let mut b = GameRng::new(42).for_context("gamble");
//! assert_eq!(a.next_unit(), b.next_unit());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::hash::{Hash, Hasher};

/// Odd constant spreading fork seeds apart.
const FORK_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// A source of uniform draws in `[0, 1)`.
///
/// The resolver and opponent policies only ever need a unit draw, so this
/// is the whole seam. Object safe; policies take `&mut dyn RandomSource`.
pub trait RandomSource {
    /// Draw a uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

/// Seeded ChaCha8 stream.
#[derive(Clone, Debug)]
pub struct GameRng {
    stream: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    /// Start a stream from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            stream: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive a child stream. The n-th fork of a given seed is always the
    /// same stream, independent of how many draws the parent has made.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(FORK_STRIDE)))
    }

    /// Derive a named stream, e.g. one for gamble rolls and one for
    /// decisions. Uses `FxHasher` so the derived seed is stable across
    /// toolchains.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Checkpoint the stream position.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.stream.get_word_pos(),
            forks: self.forks,
        }
    }

    /// Resume from a checkpoint.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut rng = Self::new(state.seed);
        rng.stream.set_word_pos(state.word_pos);
        rng.forks = state.forks;
        rng
    }
}

impl RandomSource for GameRng {
    fn next_unit(&mut self) -> f64 {
        self.stream.gen::<f64>()
    }
}

/// Checkpoint of a [`GameRng`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha8 word position.
    pub word_pos: u128,
    /// Forks taken so far.
    pub forks: u64,
}

/// Replays a fixed list of draws, then repeats a fallback value.
///
/// Used to replay a turn from recorded rolls, or to pin a gamble outcome.
/// Counts every draw taken so callers can assert how much randomness a
/// resolution consumed.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRolls {
    queued: VecDeque<f64>,
    fallback: f64,
    taken: usize,
}

impl ScriptedRolls {
    /// Create a source that yields `rolls` in order, then `0.0` forever.
    pub fn new(rolls: impl IntoIterator<Item = f64>) -> Self {
        Self {
            queued: rolls.into_iter().collect(),
            fallback: 0.0,
            taken: 0,
        }
    }

    /// Create a source that always yields `value`.
    #[must_use]
    pub fn constant(value: f64) -> Self {
        Self {
            queued: VecDeque::new(),
            fallback: value,
            taken: 0,
        }
    }

    /// Number of draws taken so far.
    #[must_use]
    pub fn taken(&self) -> usize {
        self.taken
    }
}

impl RandomSource for ScriptedRolls {
    fn next_unit(&mut self) -> f64 {
        self.taken += 1;
        self.queued.pop_front().unwrap_or(self.fallback)
    }
}
