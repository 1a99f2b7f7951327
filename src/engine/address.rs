//! Time- and node-based (version 1) engine.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha12Rng;

use super::{platform, EngineError};
use crate::build::{build_with_node, MAX_TIMESTAMP};
use crate::{Uuid, Version};

/// Number of 100-nanosecond intervals between 1582-10-15T00:00:00Z and the Unix epoch.
const GREGORIAN_OFFSET: u64 = 0x01b2_1dd2_1381_4000;

/// Generates version 1 UUIDs from a node identifier, a clock sequence, and the system clock.
///
/// The node and clock sequence are fixed for the lifetime of the engine; only the timestamp
/// changes between calls. Each call takes the current count of 100-nanosecond intervals since
/// the Gregorian reform (1582-10-15T00:00:00Z). If that count is not greater than the one used
/// by the previous call, because the clock did not advance or moved backwards, the engine
/// uses the previous count plus one instead, so one instance yields strictly ascending UUIDs
/// until the count saturates at [`MAX_TIMESTAMP`].
///
/// # Examples
///
/// ```rust
/// use uuid_rfc4122::{AddressEngine, Version};
///
/// let mut g = AddressEngine::with_random_node();
/// let (a, b) = (g.generate(), g.generate());
/// assert!(a < b);
/// assert_eq!(a.version(), Some(Version::TimeBased));
/// assert_eq!(a.node(), b.node());
/// ```
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AddressEngine {
    node: [u8; 6],
    clock_seq: u16,

    /// Timestamp of the most recent UUID.
    timestamp: u64,
}

impl AddressEngine {
    /// Creates an engine from the host's network hardware address and a time-seeded clock
    /// sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the host has no usable hardware address or the lookup fails.
    pub fn new() -> Result<Self, EngineError> {
        Self::with_host_node(init_clock_seq())
    }

    /// Creates an engine from the host's network hardware address and the given clock
    /// sequence.
    pub(crate) fn with_host_node(clock_seq: u16) -> Result<Self, EngineError> {
        let node = match platform::host_node() {
            Ok(node) => node,
            Err(err) => {
                tracing::warn!(error = %err, "cannot derive uuid node from hardware address");
                return Err(err);
            }
        };
        tracing::debug!(node = ?node, clock_seq, "acquired hardware address for uuid node");
        Ok(Self::with_node(node, clock_seq))
    }

    /// Creates an engine with an explicit node identifier and clock sequence.
    ///
    /// Only the low 14 bits of `clock_seq` appear in generated UUIDs.
    pub const fn with_node(node: [u8; 6], clock_seq: u16) -> Self {
        Self {
            node,
            clock_seq,
            timestamp: 0,
        }
    }

    /// Creates an engine with a random node identifier for hosts without a usable hardware
    /// address.
    ///
    /// The multicast bit of the node is set so that it cannot collide with a real hardware
    /// address.
    pub fn with_random_node() -> Self {
        let mut rng = ChaCha12Rng::from_entropy();
        let mut node = [0u8; 6];
        rng.fill_bytes(&mut node);
        node[0] |= 0x01;
        Self::with_node(node, rng.next_u32() as u16)
    }

    /// Returns the node identifier.
    pub const fn node(&self) -> [u8; 6] {
        self.node
    }

    /// Returns the clock sequence.
    pub const fn clock_seq(&self) -> u16 {
        self.clock_seq
    }

    /// Generates a new UUID from the current time.
    pub fn generate(&mut self) -> Uuid {
        self.generate_core(gregorian_timestamp())
    }

    /// Generates a new UUID from a count of 100-nanosecond intervals since
    /// 1582-10-15T00:00:00Z.
    ///
    /// Bits above the 60th are ignored. A `timestamp` not greater than the previous one is
    /// replaced by the previous one plus one.
    ///
    /// The timestamp saturates at [`MAX_TIMESTAMP`] (in the year 5236): once reached, every
    /// further call returns the same UUID instead of wrapping around to the smallest one.
    pub fn generate_core(&mut self, timestamp: u64) -> Uuid {
        let timestamp = timestamp & MAX_TIMESTAMP;
        if timestamp > self.timestamp {
            self.timestamp = timestamp;
        } else if self.timestamp < MAX_TIMESTAMP {
            // go on from the previous timestamp if the clock stalled or moved back
            self.timestamp += 1;
        }
        build_with_node(Version::TimeBased, self.timestamp, self.clock_seq, self.node)
    }
}

/// Supports operations as an infinite iterator that produces a new UUID for each call of
/// `next()`.
impl Iterator for AddressEngine {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl std::iter::FusedIterator for AddressEngine {}

/// Returns the current count of 100-nanosecond intervals since 1582-10-15T00:00:00Z.
///
/// A system clock set before the Unix epoch reads as the epoch.
pub(crate) fn gregorian_timestamp() -> u64 {
    let since_epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    GREGORIAN_OFFSET + (since_epoch.as_nanos() / 100) as u64
}

/// Draws a clock sequence from a generator seeded with the current time.
pub(crate) fn init_clock_seq() -> u16 {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64;
    ChaCha12Rng::seed_from_u64(seed).next_u32() as u16
}
