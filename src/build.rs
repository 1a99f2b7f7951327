//! Assembles version- and variant-tagged UUIDs from raw field values.
//!
//! The 60 least significant bits of the timestamp are written most significant first across
//! bytes 0 through 7, stepping over the version nibble at the top of byte 6, so that the byte
//! order of two UUIDs built from the same clock sequence and node follows the order of their
//! timestamps. The top 4 bits of the timestamp are discarded.

use crate::layout::{Version, CLOCK_SEQ, NODE, TIME_HI_AND_VERSION};
use crate::Uuid;

/// Largest timestamp that survives packing.
pub const MAX_TIMESTAMP: u64 = (1 << 60) - 1;

/// Builds a UUID from a timestamp and a 64-bit value whose top 16 bits are the clock sequence
/// and whose low 48 bits are the node.
///
/// Produces the same bytes as [`build_with_node`] called with the split fields.
///
/// # Examples
///
/// ```rust
/// use uuid_rfc4122::{build, Version};
///
/// let uuid = build(Version::TimeBased, 0x0123_4567_89ab_cdef, 0x8899_aabb_ccdd_eeff);
/// assert_eq!(uuid.to_string(), "12345678-9abc-1def-8899-aabbccddeeff");
/// ```
pub const fn build(version: Version, timestamp: u64, clock_and_node: u64) -> Uuid {
    let bytes = clock_and_node.to_be_bytes();
    build_with_node(
        version,
        timestamp,
        (clock_and_node >> 48) as u16,
        [bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7]],
    )
}

/// Builds a UUID from a timestamp, a clock sequence, and a node identifier.
///
/// The top 2 bits of `clock_seq` are replaced by the RFC 4122 variant and the node bytes are
/// copied verbatim.
pub const fn build_with_node(
    version: Version,
    timestamp: u64,
    clock_seq: u16,
    node: [u8; 6],
) -> Uuid {
    let ts = timestamp & MAX_TIMESTAMP;
    let mut bytes = [0u8; 16];

    // 48 high bits, then the version nibble, then the 12 low bits
    let mut i = 0;
    while i < TIME_HI_AND_VERSION.start {
        bytes[i] = (ts >> (12 + 8 * (TIME_HI_AND_VERSION.start - 1 - i))) as u8;
        i += 1;
    }
    bytes[TIME_HI_AND_VERSION.start] = (version.nibble() << 4) | ((ts >> 8) as u8 & 0x0f);
    bytes[TIME_HI_AND_VERSION.start + 1] = ts as u8;

    bytes[CLOCK_SEQ.start] = 0x80 | ((clock_seq >> 8) as u8 & 0x3f);
    bytes[CLOCK_SEQ.start + 1] = clock_seq as u8;

    let mut j = 0;
    while j < node.len() {
        bytes[NODE.start + j] = node[j];
        j += 1;
    }

    Uuid::from_bytes(bytes)
}
