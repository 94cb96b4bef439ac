//! Deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Context streams**: Independent sequences for different purposes
//!
//! The deck uses two context streams derived from the game seed: one for the
//! construction shuffle and one for per-draw selection.
//!
//! ```
//! use property_deal::core::GameRng;
//!
//! let rng = GameRng::new(42);
//! let mut shuffle = rng.for_context("deck-shuffle");
//! let mut draw = rng.for_context("deck-draw");
//!
//! // Same context, same seed: same stream
//! let mut again = GameRng::new(42).for_context("deck-draw");
//! assert_eq!(draw.gen_range_usize(0..1000), again.gen_range_usize(0..1000));
//! # let _ = shuffle.gen_range_usize(0..10);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

/// Context name for the deck construction shuffle.
pub const SHUFFLE_CONTEXT: &str = "deck-shuffle";

/// Context name for per-draw card selection.
pub const DRAW_CONTEXT: &str = "deck-draw";

/// Deterministic RNG.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    /// FxHasher is used because its output is stable across runs.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        let context_seed = hasher.finish();

        Self::new(context_seed)
    }

    /// Generate a random usize in the given range.
    ///
    /// Panics on an empty range, like `rand`.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
