//! Field offsets, textual lengths, and the version and variant tags of RFC 4122 UUIDs.

use std::ops::Range;

/// Byte range of the `time_low` field.
pub const TIME_LOW: Range<usize> = 0..4;

/// Byte range of the `time_mid` field.
pub const TIME_MID: Range<usize> = 4..6;

/// Byte range of the `time_hi_and_version` field. The version occupies the top 4 bits of its
/// first byte.
pub const TIME_HI_AND_VERSION: Range<usize> = 6..8;

/// Byte range of `clock_seq_hi_and_reserved` and `clock_seq_low`. The variant occupies the top
/// bits of its first byte.
pub const CLOCK_SEQ: Range<usize> = 8..10;

/// Byte range of the 48-bit `node` field.
pub const NODE: Range<usize> = 10..16;

/// Byte length of a UUID.
pub const BYTE_LEN: usize = 16;

/// Length of the compact form: 32 hex digits without separators.
pub const COMPACT_LEN: usize = 2 * BYTE_LEN;

/// Length of the canonical 8-4-4-4-12 form.
pub const CANONICAL_LEN: usize = COMPACT_LEN + HYPHEN_POSITIONS.len();

/// Byte offsets in the canonical form after which a `-` is emitted.
pub(crate) const GROUP_ENDS: [usize; 4] = [
    TIME_LOW.end,
    TIME_MID.end,
    TIME_HI_AND_VERSION.end,
    CLOCK_SEQ.end,
];

/// Indices of the hyphens in the canonical form (8, 13, 18, 23): twice the byte offset of each
/// group end plus the hyphens already emitted before it.
pub const HYPHEN_POSITIONS: [usize; 4] = [
    2 * GROUP_ENDS[0],
    2 * GROUP_ENDS[1] + 1,
    2 * GROUP_ENDS[2] + 2,
    2 * GROUP_ENDS[3] + 3,
];

/// Returns true if index `i` of a canonical string must hold a hyphen.
pub(crate) const fn is_hyphen_position(i: usize) -> bool {
    let mut j = 0;
    while j < HYPHEN_POSITIONS.len() {
        if HYPHEN_POSITIONS[j] == i {
            return true;
        }
        j += 1;
    }
    false
}

/// The algorithm that produced a UUID, stored in the top 4 bits of byte 6.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[repr(u8)]
pub enum Version {
    /// Time-based version (`0001`).
    TimeBased = 1,
    /// DCE security version (`0010`).
    DceSecurity = 2,
    /// Name-based version with MD5 hashing (`0011`).
    NameMd5 = 3,
    /// Randomly or pseudo-randomly generated version (`0100`).
    Random = 4,
    /// Name-based version with SHA-1 hashing (`0101`).
    NameSha1 = 5,
}

impl Version {
    /// Returns the version matching a 4-bit version number, if any.
    pub const fn from_nibble(nibble: u8) -> Option<Self> {
        match nibble {
            1 => Some(Self::TimeBased),
            2 => Some(Self::DceSecurity),
            3 => Some(Self::NameMd5),
            4 => Some(Self::Random),
            5 => Some(Self::NameSha1),
            _ => None,
        }
    }

    /// Returns the 4-bit version number.
    pub const fn nibble(self) -> u8 {
        self as u8
    }
}

/// The layout family of a UUID, stored in the most significant bits of byte 8.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Variant {
    /// `0xxx`: reserved, NCS backward compatibility.
    Ncs,
    /// `10xx`: the variant specified in RFC 4122.
    Rfc4122,
    /// `110x`: reserved, Microsoft Corporation backward compatibility.
    Microsoft,
    /// `111x`: reserved for future definition.
    Future,
}

impl Variant {
    /// Classifies the `clock_seq_hi_and_reserved` byte.
    pub const fn from_byte(byte: u8) -> Self {
        match byte >> 5 {
            0b000..=0b011 => Self::Ncs,
            0b100 | 0b101 => Self::Rfc4122,
            0b110 => Self::Microsoft,
            _ => Self::Future,
        }
    }
}
