use std::{fmt, ops, str};

use crate::codec::{self, ParseError, ParseErrorKind};
use crate::layout::{
    Variant, Version, BYTE_LEN, CANONICAL_LEN, CLOCK_SEQ, COMPACT_LEN, NODE, TIME_HI_AND_VERSION,
};

/// Represents a Universally Unique IDentifier.
///
/// Equality, ordering, and hashing follow the 16 bytes read as a big-endian unsigned 128-bit
/// integer. The all-zero value is the null UUID.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[repr(C, align(16))]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Creates an object from a 16-byte big-endian array.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Creates an object from the four fields of a Microsoft GUID.
    ///
    /// `d1`, `d2`, and `d3` are native integers and are written big-endian regardless of the
    /// target; `d4` is copied verbatim.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid_rfc4122::Uuid;
    ///
    /// let d4 = [0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8];
    /// let x = Uuid::from_fields(0x6ba7b810, 0x9dad, 0x11d1, &d4);
    /// assert_eq!(x.to_string(), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// ```
    pub const fn from_fields(d1: u32, d2: u16, d3: u16, d4: &[u8; 8]) -> Self {
        let a = d1.to_be_bytes();
        let b = d2.to_be_bytes();
        let c = d3.to_be_bytes();
        Self([
            a[0], a[1], a[2], a[3], b[0], b[1], c[0], c[1], d4[0], d4[1], d4[2], d4[3], d4[4],
            d4[5], d4[6], d4[7],
        ])
    }

    /// Creates an object from a byte slice that must be exactly 16 bytes long.
    ///
    /// A slice of any other length is a caller bug: debug builds panic, release builds copy the
    /// bytes that fit and zero-fill the rest. Use `Uuid::try_from(slice)` to check at runtime.
    pub fn from_slice(src: &[u8]) -> Self {
        debug_assert_eq!(src.len(), BYTE_LEN, "UUID byte slice must be 16 bytes long");
        let mut dst = [0u8; 16];
        let n = src.len().min(BYTE_LEN);
        dst[..n].copy_from_slice(&src[..n]);
        Self(dst)
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns a mutable reference to the underlying byte array.
    pub fn as_bytes_mut(&mut self) -> &mut [u8; 16] {
        &mut self.0
    }

    /// Consumes the object and returns the underlying byte array.
    pub const fn into_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Returns true if at least one byte is nonzero.
    pub const fn has_value(&self) -> bool {
        u128::from_be_bytes(self.0) != 0
    }

    /// Returns true if this is the Nil UUID.
    pub const fn is_nil(&self) -> bool {
        !self.has_value()
    }

    /// Resets this object to the Nil UUID.
    pub fn clear(&mut self) {
        self.0 = [0; 16];
    }

    /// Reports the variant field value of the UUID.
    pub const fn variant(&self) -> Variant {
        Variant::from_byte(self.0[CLOCK_SEQ.start])
    }

    /// Returns the version field value of the UUID or `None` if the UUID does not have the
    /// RFC 4122 variant or carries an unassigned version number.
    pub const fn version(&self) -> Option<Version> {
        match self.variant() {
            Variant::Rfc4122 => Version::from_nibble(self.0[TIME_HI_AND_VERSION.start] >> 4),
            _ => None,
        }
    }

    /// Returns the 60-bit timestamp packed around the version nibble.
    ///
    /// For values produced by [`AddressEngine`](crate::AddressEngine) this is the count of
    /// 100-nanosecond intervals since 1582-10-15T00:00:00Z.
    pub const fn timestamp(&self) -> u64 {
        let b = &self.0;
        let mut high = 0u64;
        let mut i = 0;
        while i < TIME_HI_AND_VERSION.start {
            high = (high << 8) | b[i] as u64;
            i += 1;
        }
        let v = TIME_HI_AND_VERSION.start;
        (high << 12) | ((b[v] as u64 & 0x0f) << 8) | b[v + 1] as u64
    }

    /// Returns the 14-bit clock sequence with the variant bits removed.
    pub const fn clock_seq(&self) -> u16 {
        (((self.0[CLOCK_SEQ.start] & 0x3f) as u16) << 8) | self.0[CLOCK_SEQ.start + 1] as u16
    }

    /// Returns the 48-bit node identifier.
    pub const fn node(&self) -> [u8; 6] {
        let b = &self.0;
        let n = NODE.start;
        [b[n], b[n + 1], b[n + 2], b[n + 3], b[n + 4], b[n + 5]]
    }

    /// Parses the 8-4-4-4-12 form or the 32-digit compact form, choosing by input length.
    ///
    /// A 36-character input is decoded as the canonical form and a 32-character input as the
    /// compact form; any other length is rejected. The two forms never mix: a canonical string
    /// with its hyphens stripped is only accepted because it is exactly the compact form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid_rfc4122::Uuid;
    ///
    /// let x = Uuid::parse("6ba7b810-9dad-11d1-80b4-00c04fd430c8")?;
    /// let y = Uuid::parse("6BA7B8109DAD11D180B400C04FD430C8")?;
    /// assert_eq!(x, y);
    /// # Ok::<(), uuid_rfc4122::ParseError>(())
    /// ```
    pub fn parse(src: &str) -> Result<Self, ParseError> {
        match src.len() {
            CANONICAL_LEN => Self::parse_canonical(src),
            COMPACT_LEN => Self::parse_compact(src),
            _ => Err(ParseError::InvalidLength {
                found: src.len(),
                expected: codec::ANY_EXPECTED,
            }),
        }
    }

    /// Parses the 8-4-4-4-12 form only, reporting the bad length or the offending character.
    pub fn parse_canonical(src: &str) -> Result<Self, ParseError> {
        codec::decode_canonical(src.as_bytes())
            .map(Self)
            .map_err(|fault| ParseError::from_fault(fault, src, codec::CANONICAL_EXPECTED))
    }

    /// Parses the 32-digit form without hyphens only.
    pub fn parse_compact(src: &str) -> Result<Self, ParseError> {
        codec::decode_compact(src.as_bytes())
            .map(Self)
            .map_err(|fault| ParseError::from_fault(fault, src, codec::COMPACT_EXPECTED))
    }

    /// Parses the 8-4-4-4-12 form only, returning a bare error code.
    ///
    /// This never allocates or panics and is usable in constant expressions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid_rfc4122::{ParseErrorKind, Uuid};
    ///
    /// const NAMESPACE_DNS: Uuid = match Uuid::try_parse("6ba7b810-9dad-11d1-80b4-00c04fd430c8") {
    ///     Ok(e) => e,
    ///     Err(_) => panic!("invalid UUID literal"),
    /// };
    /// assert!(NAMESPACE_DNS.has_value());
    /// assert_eq!(Uuid::try_parse("6ba7b8109dad11d180b400c04fd430c8"), Err(ParseErrorKind::InvalidLength));
    /// ```
    pub const fn try_parse(src: &str) -> Result<Self, ParseErrorKind> {
        match codec::decode_canonical(src.as_bytes()) {
            Ok(bytes) => Ok(Self(bytes)),
            Err(fault) => Err(fault.kind),
        }
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// structure that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid_rfc4122::Uuid;
    ///
    /// let x = "6ba7b810-9dad-11d1-80b4-00c04fd430c8".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// assert_eq!(format!("{}", y), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// # Ok::<(), uuid_rfc4122::ParseError>(())
    /// ```
    pub fn encode(&self) -> impl ops::Deref<Target = str> + fmt::Display {
        codec::encode_canonical(&self.0)
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the canonical or compact hexadecimal string representation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::parse(src)
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = std::array::TryFromSliceError;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        <[u8; 16]>::try_from(src).map(Self)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl TryFrom<String> for Uuid {
    type Error = ParseError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Uuid::parse(value).map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Uuid::try_from(value).map_err(de::Error::custom)
        }
    }

}
