//! Random (version 4) engine.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha12Rng;

use crate::build::build;
use crate::{Uuid, Version};

/// Generates version 4 UUIDs from two independent random number streams.
///
/// One stream supplies the 64 bits packed as the timestamp and the other the 64 bits packed as
/// the clock sequence and node; 122 of those bits survive in each UUID. Successive UUIDs have
/// no particular order.
///
/// # Examples
///
/// ```rust
/// use uuid_rfc4122::{RandomEngine, Version};
///
/// let mut g = RandomEngine::new();
/// let uuid = g.generate();
/// assert_eq!(uuid.version(), Some(Version::Random));
///
/// // identical seeds replay identical sequences
/// let a: Vec<_> = RandomEngine::with_seed(42).take(4).collect();
/// let b: Vec<_> = RandomEngine::with_seed(42).take(4).collect();
/// assert_eq!(a, b);
/// ```
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct RandomEngine<R = ChaCha12Rng> {
    /// Stream for the timestamp field.
    timestamp_rng: R,

    /// Stream for the clock sequence and node fields.
    clock_and_node_rng: R,
}

impl RandomEngine {
    /// Creates an engine with both streams seeded from OS entropy.
    pub fn new() -> Self {
        Self::from_rngs(ChaCha12Rng::from_entropy(), ChaCha12Rng::from_entropy())
    }

    /// Creates an engine whose output is fully determined by `seed`.
    ///
    /// Both streams derive from the same key but run on distinct ChaCha stream ids.
    pub fn with_seed(seed: u64) -> Self {
        let timestamp_rng = ChaCha12Rng::seed_from_u64(seed);
        let mut clock_and_node_rng = timestamp_rng.clone();
        clock_and_node_rng.set_stream(1);
        Self::from_rngs(timestamp_rng, clock_and_node_rng)
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> RandomEngine<R> {
    /// Creates an engine from two caller-supplied random number generators.
    pub const fn from_rngs(timestamp_rng: R, clock_and_node_rng: R) -> Self {
        Self {
            timestamp_rng,
            clock_and_node_rng,
        }
    }

    /// Generates a new UUID.
    pub fn generate(&mut self) -> Uuid {
        let timestamp = self.timestamp_rng.next_u64();
        let clock_and_node = self.clock_and_node_rng.next_u64();
        build(Version::Random, timestamp, clock_and_node)
    }
}

/// Supports operations as an infinite iterator that produces a new UUID for each call of
/// `next()`.
impl<R: RngCore> Iterator for RandomEngine<R> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RngCore> std::iter::FusedIterator for RandomEngine<R> {}
