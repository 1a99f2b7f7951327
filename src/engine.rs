//! UUID generation engines and the configuration that selects one.
//!
//! Three strategies produce UUIDs:
//!
//! | Engine             | Version | State per instance          | Order              |
//! | ------------------ | ------- | --------------------------- | ------------------ |
//! | [`AddressEngine`]  | 1       | node, clock sequence, clock | Strictly ascending |
//! | [`RandomEngine`]   | 4       | two random streams          | None               |
//! | [`SystemEngine`]   | OS      | none                        | Platform-defined   |
//!
//! Every engine implements [`Engine`], and [`Generator`] holds whichever one a [`Config`]
//! selects. Engines carry no shared state: distinct instances may run on different threads
//! freely, while one instance shared across threads needs a lock.
//!
//! # Examples
//!
//! ```rust
//! use std::{sync, thread};
//! use uuid_rfc4122::RandomEngine;
//!
//! let g = sync::Arc::new(sync::Mutex::new(RandomEngine::new()));
//! thread::scope(|s| {
//!     for i in 0..4 {
//!         let g = sync::Arc::clone(&g);
//!         s.spawn(move || {
//!             for _ in 0..8 {
//!                 println!("{} by thread {}", g.lock().unwrap().generate(), i);
//!                 thread::yield_now();
//!             }
//!         });
//!     }
//! });
//! ```

use std::{convert::Infallible, fmt, io, str};

use crate::{ParseError, Uuid};

mod address;
mod platform;
mod random;
mod system;

pub use address::AddressEngine;
pub use random::RandomEngine;
pub use system::SystemEngine;

/// A source of UUIDs.
pub trait Engine {
    /// The error returned when a UUID cannot be produced.
    type Error;

    /// Produces one UUID.
    fn try_generate(&mut self) -> Result<Uuid, Self::Error>;
}

/// Error raised when an engine cannot obtain what it needs from the host.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The host has no usable network hardware address.
    #[error("no network hardware address available for the node identifier")]
    NodeUnavailable,

    /// Looking up the network hardware address failed.
    #[error("could not look up the network hardware address: {0}")]
    NodeLookup(#[source] mac_address::MacAddressError),

    /// The OS-native UUID facility reported a failure.
    #[error("native UUID facility failed: {0}")]
    System(#[from] io::Error),

    /// The OS-native UUID facility produced something that is not a UUID.
    #[error("native UUID facility returned a malformed value: {0}")]
    Malformed(#[from] ParseError),
}

/// Names a generation strategy.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum EngineKind {
    /// Time and node based, see [`AddressEngine`].
    Address,
    /// Pseudo-random, see [`RandomEngine`].
    #[default]
    Random,
    /// OS-native, see [`SystemEngine`].
    System,
}

impl EngineKind {
    /// Returns the lowercase name accepted by [`str::FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::Random => "random",
            Self::System => "system",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing an unknown engine name.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[error("unknown engine {0:?}; expected one of \"address\", \"random\", \"system\"")]
pub struct UnknownEngine(String);

impl str::FromStr for EngineKind {
    type Err = UnknownEngine;

    /// Accepts `address` (or `v1`), `random` (or `v4`), and `system`, ignoring ASCII case.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        match src.to_ascii_lowercase().as_str() {
            "address" | "v1" => Ok(Self::Address),
            "random" | "v4" => Ok(Self::Random),
            "system" => Ok(Self::System),
            _ => Err(UnknownEngine(src.to_owned())),
        }
    }
}

/// Settings from which a [`Generator`] is built.
///
/// Unset fields fall back to host-derived values: the host's hardware address and a
/// time-seeded clock sequence for the address engine, OS entropy for the random engine.
///
/// # Examples
///
/// ```rust
/// use uuid_rfc4122::{Config, EngineKind, Generator, Version};
///
/// let config = Config {
///     engine: EngineKind::Address,
///     node: Some([0x02, 0x00, 0x5e, 0x10, 0x00, 0x01]),
///     clock_seq: Some(0x1234),
///     ..Default::default()
/// };
/// let mut g = Generator::from_config(&config)?;
/// let uuid = g.generate()?;
/// assert_eq!(uuid.version(), Some(Version::TimeBased));
/// assert_eq!(uuid.node(), [0x02, 0x00, 0x5e, 0x10, 0x00, 0x01]);
/// # Ok::<(), uuid_rfc4122::EngineError>(())
/// ```
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct Config {
    /// Strategy to use.
    pub engine: EngineKind,

    /// Seed for the random engine; entropy-seeded if `None`.
    pub seed: Option<u64>,

    /// Node identifier for the address engine; the host's hardware address if `None`.
    pub node: Option<[u8; 6]>,

    /// Clock sequence for the address engine; time-seeded if `None`.
    pub clock_seq: Option<u16>,
}

/// One of the engines, selected at construction time.
#[derive(Clone, Debug)]
pub enum Generator {
    /// Wraps an [`AddressEngine`].
    Address(AddressEngine),
    /// Wraps a [`RandomEngine`].
    Random(RandomEngine),
    /// Wraps a [`SystemEngine`].
    System(SystemEngine),
}

impl Generator {
    /// Creates a generator of the given kind with host-derived settings.
    pub fn new(kind: EngineKind) -> Result<Self, EngineError> {
        Self::from_config(&Config {
            engine: kind,
            ..Default::default()
        })
    }

    /// Creates the generator a configuration describes.
    pub fn from_config(config: &Config) -> Result<Self, EngineError> {
        let generator = match config.engine {
            EngineKind::Address => {
                let clock_seq = config.clock_seq.unwrap_or_else(address::init_clock_seq);
                Self::Address(match config.node {
                    Some(node) => AddressEngine::with_node(node, clock_seq),
                    None => AddressEngine::with_host_node(clock_seq)?,
                })
            }
            EngineKind::Random => Self::Random(match config.seed {
                Some(seed) => RandomEngine::with_seed(seed),
                None => RandomEngine::new(),
            }),
            EngineKind::System => Self::System(SystemEngine::new()),
        };
        tracing::debug!(engine = %generator.kind(), "uuid generator ready");
        Ok(generator)
    }

    /// Returns the kind of the wrapped engine.
    pub const fn kind(&self) -> EngineKind {
        match self {
            Self::Address(_) => EngineKind::Address,
            Self::Random(_) => EngineKind::Random,
            Self::System(_) => EngineKind::System,
        }
    }

    /// Generates a new UUID with the wrapped engine.
    ///
    /// Only the system engine can fail.
    pub fn generate(&mut self) -> Result<Uuid, EngineError> {
        match self {
            Self::Address(g) => Ok(g.generate()),
            Self::Random(g) => Ok(g.generate()),
            Self::System(g) => g.generate(),
        }
    }
}

impl Engine for Generator {
    type Error = EngineError;

    fn try_generate(&mut self) -> Result<Uuid, Self::Error> {
        self.generate()
    }
}

impl Engine for AddressEngine {
    type Error = Infallible;

    fn try_generate(&mut self) -> Result<Uuid, Self::Error> {
        Ok(self.generate())
    }
}

impl<R: rand::RngCore> Engine for RandomEngine<R> {
    type Error = Infallible;

    fn try_generate(&mut self) -> Result<Uuid, Self::Error> {
        Ok(self.generate())
    }
}

impl Engine for SystemEngine {
    type Error = EngineError;

    fn try_generate(&mut self) -> Result<Uuid, Self::Error> {
        self.generate()
    }
}

#[cfg(test)]
mod tests;
