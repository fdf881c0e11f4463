//! Deterministic random engine.
//!
//! The engine is the single source of randomness for every generator in
//! this crate. It wraps a ChaCha8 stream seeded from a `u64`; the stream is
//! portable, so identical seeds and identical call sequences reproduce
//! identical output on every platform.
//!
//! One *draw unit* is one 64-bit word pulled from the stream. Bounded
//! integer draws consume one word, plus one more per rejection (probability
//! below `span / 2^64`). Rejections depend only on the stream, so the word
//! count stays identical across runs.
//!
//! An `Engine` is an owned value. It is not meant to be shared between
//! threads without external synchronization; wrap it in a `Mutex` if
//! several tasks must draw from the same session.

use crate::error::DataError;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

/// Scale factor turning 53 random bits into a float in `[0, 1)`.
const UNIT_SCALE: f64 = 1.0 / (1u64 << 53) as f64;

/// Seedable pseudo-random engine.
#[derive(Debug, Clone)]
pub struct Engine {
    /// Seed the current stream was started from
    seed: u64,
    /// ChaCha8 stream
    rng: ChaCha8Rng,
    /// Words consumed since the last reseed
    words: u64,
}

impl Engine {
    /// Create an engine from an explicit seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            words: 0,
        }
    }

    /// Create an engine seeded from system entropy.
    ///
    /// The chosen seed is available through [`Engine::seed`] so the session
    /// can be replayed later.
    pub fn from_entropy() -> Self {
        let seed = rand::random::<u64>();
        debug!(seed, "seeded engine from entropy");
        Self::new(seed)
    }

    /// Get the seed the current stream started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Reset the stream.
    ///
    /// With `Some(seed)` the engine restarts from that seed. With `None` a
    /// fresh seed is drawn from system entropy. Either way the seed now in
    /// effect is returned.
    pub fn reseed(&mut self, seed: Option<u64>) -> u64 {
        let seed = seed.unwrap_or_else(rand::random::<u64>);
        self.seed = seed;
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self.words = 0;
        trace!(seed, "reseeded engine");
        seed
    }

    /// Number of 64-bit words drawn since the last (re)seed.
    pub fn words_drawn(&self) -> u64 {
        self.words
    }

    /// Draw one raw 64-bit word.
    pub fn next_u64(&mut self) -> u64 {
        self.words += 1;
        self.rng.next_u64()
    }

    /// Draw a float uniformly distributed in `[0, 1)`.
    ///
    /// Uses the top 53 bits of one word, so every representable output is
    /// equally likely.
    pub fn next_unit_float(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * UNIT_SCALE
    }

    /// Draw an integer uniformly distributed over `min..=max`.
    ///
    /// Fails with [`DataError::InvalidRange`] when `min > max`. A degenerate
    /// range still consumes a draw so call sequences stay aligned.
    pub fn int_in_range(&mut self, min: i64, max: i64) -> Result<i64, DataError> {
        if min > max {
            return Err(DataError::inverted(min, max));
        }
        Ok(self.int_between(min, max))
    }

    /// Bounded draw for callers that already guarantee `min <= max`.
    pub(crate) fn int_between(&mut self, min: i64, max: i64) -> i64 {
        debug_assert!(min <= max);
        // Two's complement: the distance always fits in a u64.
        let span = max.wrapping_sub(min) as u64;
        min.wrapping_add(self.uniform_u64(span) as i64)
    }

    /// Draw uniformly from `0..=span` without modulo bias.
    ///
    /// Lemire's widening multiply: the high half of `word * range` is the
    /// result, and words whose low half falls under `2^64 mod range` are
    /// rejected.
    pub fn uniform_u64(&mut self, span: u64) -> u64 {
        if span == u64::MAX {
            return self.next_u64();
        }
        let range = span + 1;
        let mut product = u128::from(self.next_u64()) * u128::from(range);
        let mut low = product as u64;
        if low < range {
            let threshold = range.wrapping_neg() % range;
            while low < threshold {
                product = u128::from(self.next_u64()) * u128::from(range);
                low = product as u64;
            }
        }
        (product >> 64) as u64
    }

    /// Draw uniformly from `0..=span` for spans wider than 64 bits.
    pub fn uniform_u128(&mut self, span: u128) -> u128 {
        if let Ok(narrow) = u64::try_from(span) {
            return u128::from(self.uniform_u64(narrow));
        }
        let shift = span.leading_zeros();
        loop {
            let high = u128::from(self.next_u64());
            let low = u128::from(self.next_u64());
            let candidate = ((high << 64) | low) >> shift;
            if candidate <= span {
                return candidate;
            }
        }
    }
}

/// Lets `rand`'s slice and distribution helpers draw from the engine.
/// Every word still goes through [`Engine::next_u64`], so `words_drawn`
/// stays accurate.
impl RngCore for Engine {
    fn next_u32(&mut self) -> u32 {
        (Engine::next_u64(self) >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        Engine::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let word = Engine::next_u64(self).to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }
}
