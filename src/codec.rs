//! Canonical and compact string representations.
//!
//! The decoders are `const fn`s over bytes that report the first offending position; the
//! public entry points on [`Uuid`](crate::Uuid) turn that into either a bare
//! [`ParseErrorKind`] or a descriptive [`ParseError`].

use crate::layout::{is_hyphen_position, BYTE_LEN, CANONICAL_LEN, COMPACT_LEN, GROUP_ENDS};
use fstr::FStr;

/// Classifies the reason a string was rejected.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ParseErrorKind {
    /// The input does not have the length the decoder accepts.
    InvalidLength,
    /// A hyphen position of the canonical form holds something else.
    MissingHyphen,
    /// A digit position holds a character that is not a hexadecimal digit.
    InvalidDigit,
}

/// Error parsing an invalid string representation of UUID.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum ParseError {
    /// The input length is neither of the accepted lengths.
    #[error("invalid string length {found}; expected {expected}")]
    InvalidLength {
        /// Length in bytes of the rejected input.
        found: usize,
        /// Human-readable description of the accepted lengths.
        expected: &'static str,
    },

    /// A canonical-form hyphen position holds something else.
    #[error("expected '-' at index {index}, found {found:?}")]
    MissingHyphen {
        /// Byte index of the offending character.
        index: usize,
        /// The offending character.
        found: char,
    },

    /// A digit position holds a non-hexadecimal character.
    #[error("invalid hexadecimal digit {found:?} at index {index}")]
    InvalidDigit {
        /// Byte index of the offending character.
        index: usize,
        /// The offending character.
        found: char,
    },
}

impl ParseError {
    /// Returns the structured error code.
    pub const fn kind(&self) -> ParseErrorKind {
        match self {
            Self::InvalidLength { .. } => ParseErrorKind::InvalidLength,
            Self::MissingHyphen { .. } => ParseErrorKind::MissingHyphen,
            Self::InvalidDigit { .. } => ParseErrorKind::InvalidDigit,
        }
    }

    /// Expands a decoder fault into a descriptive error by looking at the rejected input.
    pub(crate) fn from_fault(fault: Fault, src: &str, expected: &'static str) -> Self {
        // every byte before `fault.index` is ASCII, so the index is a char boundary
        let found = || {
            src.get(fault.index..)
                .and_then(|s| s.chars().next())
                .unwrap_or(char::REPLACEMENT_CHARACTER)
        };
        match fault.kind {
            ParseErrorKind::InvalidLength => Self::InvalidLength {
                found: src.len(),
                expected,
            },
            ParseErrorKind::MissingHyphen => Self::MissingHyphen {
                index: fault.index,
                found: found(),
            },
            ParseErrorKind::InvalidDigit => Self::InvalidDigit {
                index: fault.index,
                found: found(),
            },
        }
    }
}

/// First position at which a decoder gave up.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) struct Fault {
    pub kind: ParseErrorKind,
    pub index: usize,
}

pub(crate) const CANONICAL_EXPECTED: &str = "36";
pub(crate) const COMPACT_EXPECTED: &str = "32";
pub(crate) const ANY_EXPECTED: &str = "36 or 32";

/// Decodes the 8-4-4-4-12 form.
pub(crate) const fn decode_canonical(src: &[u8]) -> Result<[u8; BYTE_LEN], Fault> {
    decode(src, true)
}

/// Decodes the 32-digit form without separators.
pub(crate) const fn decode_compact(src: &[u8]) -> Result<[u8; BYTE_LEN], Fault> {
    decode(src, false)
}

const fn decode(src: &[u8], hyphenated: bool) -> Result<[u8; BYTE_LEN], Fault> {
    let expected = if hyphenated { CANONICAL_LEN } else { COMPACT_LEN };
    if src.len() != expected {
        return Err(Fault {
            kind: ParseErrorKind::InvalidLength,
            index: 0,
        });
    }

    let mut dst = [0u8; BYTE_LEN];
    let mut nibbles = 0;
    let mut i = 0;
    while i < src.len() {
        if hyphenated && is_hyphen_position(i) {
            if src[i] != b'-' {
                return Err(Fault {
                    kind: ParseErrorKind::MissingHyphen,
                    index: i,
                });
            }
        } else {
            let value = match hex_value(src[i]) {
                Some(v) => v,
                None => {
                    return Err(Fault {
                        kind: ParseErrorKind::InvalidDigit,
                        index: i,
                    })
                }
            };
            // most significant nibble first
            if nibbles % 2 == 0 {
                dst[nibbles / 2] = value << 4;
            } else {
                dst[nibbles / 2] |= value;
            }
            nibbles += 1;
        }
        i += 1;
    }
    Ok(dst)
}

const fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Renders the 8-4-4-4-12 form in lowercase.
pub(crate) fn encode_canonical(src: &[u8; BYTE_LEN]) -> FStr<CANONICAL_LEN> {
    const DIGITS: &[u8; 16] = b"0123456789abcdef";

    let mut buffer = [0u8; CANONICAL_LEN];
    let mut j = 0;
    for (i, e) in src.iter().enumerate() {
        buffer[j] = DIGITS[(e >> 4) as usize];
        buffer[j + 1] = DIGITS[(e & 15) as usize];
        j += 2;
        if GROUP_ENDS.contains(&(i + 1)) {
            buffer[j] = b'-';
            j += 1;
        }
    }
    debug_assert!(j == CANONICAL_LEN && buffer.is_ascii());
    // SAFETY: the buffer consists of ASCII code points only
    unsafe { FStr::from_bytes_unchecked(buffer) }
}

#[cfg(test)]
mod tests {
    use super::{decode_canonical, decode_compact, encode_canonical, Fault, ParseErrorKind};

    /// Decodes mixed-case digits most significant nibble first
    #[test]
    fn decodes_mixed_case_digits_most_significant_nibble_first() {
        let bytes = decode_canonical(b"6BA7b810-9dAd-11d1-80b4-00C04fd430c8").unwrap();
        assert_eq!(
            bytes,
            [
                0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f,
                0xd4, 0x30, 0xc8
            ]
        );
        assert_eq!(
            decode_compact(b"6ba7b8109dad11d180b400c04fd430c8"),
            Ok(bytes)
        );
    }

    /// Reports the first offending position
    #[test]
    fn reports_the_first_offending_position() {
        let cases: &[(&[u8], ParseErrorKind, usize)] = &[
            (b"", ParseErrorKind::InvalidLength, 0),
            (
                b"6ba7b810-9dad-11d1-80b4-00c04fd430c",
                ParseErrorKind::InvalidLength,
                0,
            ),
            (
                b"6ba7b810_9dad-11d1-80b4-00c04fd430c8",
                ParseErrorKind::MissingHyphen,
                8,
            ),
            (
                b"6ba7b810-9dad-11d1-80b4-00c04fd430cg",
                ParseErrorKind::InvalidDigit,
                35,
            ),
            (
                b"6ba7b810-9dad-11d1-80b4000c04fd430c8",
                ParseErrorKind::MissingHyphen,
                23,
            ),
            (
                b"-ba7b810-9dad-11d1-80b4-00c04fd430c8",
                ParseErrorKind::InvalidDigit,
                0,
            ),
        ];
        for &(src, kind, index) in cases {
            assert_eq!(decode_canonical(src), Err(Fault { kind, index }));
        }
    }

    /// Rejects hyphens in the compact form
    #[test]
    fn rejects_hyphens_in_the_compact_form() {
        assert_eq!(
            decode_compact(b"6ba7b810-9dad-11d1-80b4-00c04fd4"),
            Err(Fault {
                kind: ParseErrorKind::InvalidDigit,
                index: 8
            })
        );
    }

    /// Encodes lowercase digits with hyphens after field groups
    #[test]
    fn encodes_lowercase_digits_with_hyphens_after_field_groups() {
        let bytes = [
            0xAA, 0xAA, 0xAA, 0xAA, 0xBB, 0xBB, 0xCC, 0xCC, 0xDD, 0xDD, 0xEE, 0xEE, 0xEE, 0xEE,
            0xEE, 0xEE,
        ];
        assert_eq!(
            &encode_canonical(&bytes) as &str,
            "aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee"
        );
        assert_eq!(
            &encode_canonical(&[0; 16]) as &str,
            "00000000-0000-0000-0000-000000000000"
        );
    }
}
