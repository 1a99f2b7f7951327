//! RFC 4122 UUIDs: a value type, its textual codec, and three generation engines
//!
//! ```rust
//! use uuid_rfc4122::{AddressEngine, RandomEngine, Uuid};
//!
//! let uuid = RandomEngine::new().generate();
//! println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! let mut g = AddressEngine::with_random_node();
//! assert!(g.generate() < g.generate());
//!
//! let parsed: Uuid = "01ee0c5a-1234-1678-8101-001b21dd2138".parse()?;
//! assert_eq!(parsed.to_string(), "01ee0c5a-1234-1678-8101-001b21dd2138");
//! # Ok::<(), uuid_rfc4122::ParseError>(())
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122).
//!
//! # Field and bit layout
//!
//! [`build`] and the engines produce identifiers with the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                       timestamp (59..28)                      |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |      timestamp (27..12)       |  ver  |  timestamp (11..0)    |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|        clock_seq          |             node              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             node                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 60-bit `timestamp` is written most significant bit first, so the byte order of two
//!   UUIDs with the same clock sequence and node follows the order of their timestamps.
//! - The 4-bit `ver` field holds the [`Version`].
//! - The 2-bit `var` field is set at `10` ([`Variant::Rfc4122`]).
//! - The 14-bit `clock_seq` and the 48-bit `node` are copied from the inputs.
//!
//! The [`AddressEngine`] fills `timestamp` with 100-nanosecond intervals since
//! 1582-10-15T00:00:00Z and `node` with a network hardware address. The [`RandomEngine`] fills
//! every field with random bits. The [`SystemEngine`] returns whatever the operating system
//! produces and may not follow this layout.
//!
//! # Crate features
//!
//! - `serde` enables the string (or byte array) serialization of [`Uuid`] and the
//!   deserialization of [`Config`].
//! - `uuid` enables conversions from and to `uuid::Uuid`.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod id;
pub use id::Uuid;

mod codec;
pub use codec::{ParseError, ParseErrorKind};

pub mod layout;
pub use layout::{Variant, Version};

mod build;
pub use build::{build, build_with_node, MAX_TIMESTAMP};

pub mod engine;
#[doc(inline)]
pub use engine::{
    AddressEngine, Config, Engine, EngineError, EngineKind, Generator, RandomEngine,
    SystemEngine, UnknownEngine,
};
