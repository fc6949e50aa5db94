#[cfg(not(feature = "std"))]
use core as std;

use std::{fmt, str};

use crate::base::{convert_base, decode_digit_chars};
use fstr::FStr;

/// The primary value type containing the Uuid25 representation of a UUID.
///
/// A value of this type always holds the canonical 25-digit lowercase Base36 string whose
/// numeric value fits in 128 bits. It can only be constructed through [`Uuid25::from_bytes()`],
/// one of the `parse*` functions, or the conversion traits built on them.
///
/// # Examples
///
/// ```rust
/// use uuid25::Uuid25;
///
/// let x = Uuid25::parse("e7a1d63b-7117-4423-8988-afcf12161878")?;
/// assert_eq!(x.as_str(), "dpoadk8izg9y4tte7vy1xt94o");
/// assert_eq!(x.to_hex().as_str(), "e7a1d63b711744238988afcf12161878");
/// assert_eq!(x.to_urn().as_str(), "urn:uuid:e7a1d63b-7117-4423-8988-afcf12161878");
/// # Ok::<(), uuid25::ParseError>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Uuid25([u8; 25]);

/// The Base36 digit characters in the order of their values.
const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

impl Uuid25 {
    /// Nil UUID (`0000000000000000000000000`)
    pub const NIL: Self = Self(*b"0000000000000000000000000");

    /// Max UUID (`f5lxx1zz5pnorynqglhzmsp33`), equal to 2^128 - 1
    pub const MAX: Self = Self(*b"f5lxx1zz5pnorynqglhzmsp33");

    /// Returns the 25-digit Uuid25 representation as a string slice.
    pub fn as_str(&self) -> &str {
        debug_assert!(self.0.is_ascii());
        unsafe { str::from_utf8_unchecked(&self.0) }
    }

    /// Creates an instance from an array of Base36 digit values, rejecting values larger than
    /// 2^128 - 1.
    fn from_digit_values(digit_values: &[u8; 25]) -> Result<Self, ParseError> {
        let mut buffer = [0u8; 25];
        let mut maybe_too_large = true;
        for (i, &e) in digit_values.iter().enumerate() {
            if e >= 36 {
                return Err(ParseErrorKind::InvalidCharacter.into());
            }
            buffer[i] = DIGITS[e as usize];

            // fixed-width digit strings compare in the same order as their values
            if maybe_too_large && buffer[i] > Self::MAX.0[i] {
                return Err(ParseErrorKind::Overflow.into());
            } else if buffer[i] < Self::MAX.0[i] {
                maybe_too_large = false;
            }
        }
        Ok(Self(buffer))
    }

    /// Returns the Base36 digit values of the receiver.
    fn to_digit_values(self) -> [u8; 25] {
        let mut digit_values = [0u8; 25];
        match decode_digit_chars(&self.0, &mut digit_values, 36) {
            Ok(()) => digit_values,
            Err(_) => unreachable!("receiver not constructed properly"),
        }
    }

    /// Creates an instance from a 16-byte UUID binary representation.
    pub fn from_bytes(uuid_bytes: &[u8; 16]) -> Self {
        let mut buffer = [0u8; 25];
        if convert_base(uuid_bytes, &mut buffer, 256, 36).is_ok() {
            if let Ok(uuid25) = Self::from_digit_values(&buffer) {
                return uuid25;
            }
        }
        unreachable!("128-bit value must fit in 25 Base36 digits")
    }

    /// Converts the receiver into the 16-byte binary representation of a UUID.
    pub fn to_bytes(&self) -> [u8; 16] {
        let mut uuid_bytes = [0u8; 16];
        match convert_base(&self.to_digit_values(), &mut uuid_bytes, 36, 256) {
            Ok(()) => uuid_bytes,
            Err(_) => unreachable!("receiver not constructed properly"),
        }
    }

    /// Creates an instance from a UUID string representation.
    ///
    /// This method accepts the following formats:
    ///
    /// - 25-digit Base36 Uuid25 format: `3ud3gtvgolimgu9lah6aie99o`
    /// - 32-digit hexadecimal format without hyphens: `40eb9860cf3e45e2a90eb82236ac806c`
    /// - 8-4-4-4-12 hyphenated format: `40eb9860-cf3e-45e2-a90e-b82236ac806c`
    /// - Hyphenated format with surrounding braces: `{40eb9860-cf3e-45e2-a90e-b82236ac806c}`
    /// - RFC 4122 URN format: `urn:uuid:40eb9860-cf3e-45e2-a90e-b82236ac806c`
    ///
    /// Letters are accepted in either case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid25::Uuid25;
    ///
    /// let x = Uuid25::parse("3ud3gtvgolimgu9lah6aie99o")?;
    /// let y = Uuid25::parse("{40EB9860-CF3E-45E2-A90E-B82236AC806C}")?;
    /// assert_eq!(x, y);
    /// assert!(Uuid25::parse("40eb9860-cf3e-45e2-a90e-b82236ac806").is_err());
    /// # Ok::<(), uuid25::ParseError>(())
    /// ```
    pub fn parse(uuid_string: &str) -> Result<Self, ParseError> {
        Self::parse_ascii(uuid_string.as_bytes())
    }

    fn parse_ascii(src: &[u8]) -> Result<Self, ParseError> {
        match src.len() {
            25 => Self::parse_uuid25_ascii(src),
            32 => Self::parse_hex_ascii(src),
            36 => Self::parse_hyphenated_ascii(src),
            38 => Self::parse_braced_ascii(src),
            45 => Self::parse_urn_ascii(src),
            _ => Err(ParseErrorKind::MalformedFormat.into()),
        }
    }

    /// Creates an instance from the 25-digit Base36 Uuid25 format: `3ud3gtvgolimgu9lah6aie99o`.
    pub fn parse_uuid25(uuid_string: &str) -> Result<Self, ParseError> {
        Self::parse_uuid25_ascii(uuid_string.as_bytes())
    }

    fn parse_uuid25_ascii(src: &[u8]) -> Result<Self, ParseError> {
        if src.len() != 25 {
            return Err(ParseErrorKind::MalformedFormat.into());
        }
        let mut buffer = [0u8; 25];
        decode_digit_chars(src, &mut buffer, 36)?;
        Self::from_digit_values(&buffer)
    }

    /// Creates an instance from the 32-digit hexadecimal format without hyphens:
    /// `40eb9860cf3e45e2a90eb82236ac806c`.
    pub fn parse_hex(uuid_string: &str) -> Result<Self, ParseError> {
        Self::parse_hex_ascii(uuid_string.as_bytes())
    }

    fn parse_hex_ascii(src: &[u8]) -> Result<Self, ParseError> {
        if src.len() != 32 {
            return Err(ParseErrorKind::MalformedFormat.into());
        }
        let mut digit_values = [0u8; 32];
        decode_digit_chars(src, &mut digit_values, 16)?;
        let mut buffer = [0u8; 25];
        convert_base(&digit_values, &mut buffer, 16, 36)?;
        Self::from_digit_values(&buffer)
    }

    /// Creates an instance from the 8-4-4-4-12 hyphenated format:
    /// `40eb9860-cf3e-45e2-a90e-b82236ac806c`.
    pub fn parse_hyphenated(uuid_string: &str) -> Result<Self, ParseError> {
        Self::parse_hyphenated_ascii(uuid_string.as_bytes())
    }

    fn parse_hyphenated_ascii(src: &[u8]) -> Result<Self, ParseError> {
        if src.len() != 36 || src[8] != b'-' || src[13] != b'-' || src[18] != b'-' || src[23] != b'-'
        {
            return Err(ParseErrorKind::MalformedFormat.into());
        }

        let mut hex = [0u8; 32];
        hex[..8].copy_from_slice(&src[..8]);
        hex[8..12].copy_from_slice(&src[9..13]);
        hex[12..16].copy_from_slice(&src[14..18]);
        hex[16..20].copy_from_slice(&src[19..23]);
        hex[20..].copy_from_slice(&src[24..]);
        Self::parse_hex_ascii(&hex)
    }

    /// Creates an instance from the hyphenated format with surrounding braces:
    /// `{40eb9860-cf3e-45e2-a90e-b82236ac806c}`.
    pub fn parse_braced(uuid_string: &str) -> Result<Self, ParseError> {
        Self::parse_braced_ascii(uuid_string.as_bytes())
    }

    fn parse_braced_ascii(src: &[u8]) -> Result<Self, ParseError> {
        if src.len() != 38 || src[0] != b'{' || src[37] != b'}' {
            return Err(ParseErrorKind::MalformedFormat.into());
        }
        Self::parse_hyphenated_ascii(&src[1..37])
    }

    /// Creates an instance from the RFC 4122 URN format:
    /// `urn:uuid:40eb9860-cf3e-45e2-a90e-b82236ac806c`.
    ///
    /// The `urn:uuid:` prefix is matched case-insensitively.
    pub fn parse_urn(uuid_string: &str) -> Result<Self, ParseError> {
        Self::parse_urn_ascii(uuid_string.as_bytes())
    }

    fn parse_urn_ascii(src: &[u8]) -> Result<Self, ParseError> {
        if src.len() != 45 || !src[..9].eq_ignore_ascii_case(b"urn:uuid:") {
            return Err(ParseErrorKind::MalformedFormat.into());
        }
        Self::parse_hyphenated_ascii(&src[9..])
    }

    /// Formats the receiver in the 32-digit hexadecimal format without hyphens:
    /// `40eb9860cf3e45e2a90eb82236ac806c`.
    ///
    /// The result is stored in a stack-allocated [`FStr`] that dereferences to `str`, so this
    /// method is available in `no_std` environments as well.
    pub fn to_hex(&self) -> FStr<32> {
        let mut buffer = [0u8; 32];
        if convert_base(&self.to_digit_values(), &mut buffer, 36, 16).is_err() {
            unreachable!("receiver not constructed properly");
        }
        for e in buffer.iter_mut() {
            *e = DIGITS[*e as usize];
        }
        debug_assert!(buffer.is_ascii());
        unsafe { FStr::from_inner_unchecked(buffer) }
    }

    /// Formats the receiver in the 8-4-4-4-12 hyphenated format:
    /// `40eb9860-cf3e-45e2-a90e-b82236ac806c`.
    pub fn to_hyphenated(&self) -> FStr<36> {
        let hex = self.to_hex();
        let hex = hex.as_bytes();
        let mut buffer = [b'-'; 36];
        buffer[..8].copy_from_slice(&hex[..8]);
        buffer[9..13].copy_from_slice(&hex[8..12]);
        buffer[14..18].copy_from_slice(&hex[12..16]);
        buffer[19..23].copy_from_slice(&hex[16..20]);
        buffer[24..].copy_from_slice(&hex[20..]);
        debug_assert!(buffer.is_ascii());
        unsafe { FStr::from_inner_unchecked(buffer) }
    }

    /// Formats the receiver in the hyphenated format with surrounding braces:
    /// `{40eb9860-cf3e-45e2-a90e-b82236ac806c}`.
    pub fn to_braced(&self) -> FStr<38> {
        let mut buffer = [0u8; 38];
        buffer[0] = b'{';
        buffer[1..37].copy_from_slice(self.to_hyphenated().as_bytes());
        buffer[37] = b'}';
        debug_assert!(buffer.is_ascii());
        unsafe { FStr::from_inner_unchecked(buffer) }
    }

    /// Formats the receiver in the RFC 4122 URN format:
    /// `urn:uuid:40eb9860-cf3e-45e2-a90e-b82236ac806c`.
    pub fn to_urn(&self) -> FStr<45> {
        let mut buffer = [0u8; 45];
        buffer[..9].copy_from_slice(b"urn:uuid:");
        buffer[9..].copy_from_slice(self.to_hyphenated().as_bytes());
        debug_assert!(buffer.is_ascii());
        unsafe { FStr::from_inner_unchecked(buffer) }
    }
}

impl Default for Uuid25 {
    fn default() -> Self {
        Self::NIL
    }
}

impl fmt::Display for Uuid25 {
    /// Returns the 25-digit Uuid25 representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Uuid25 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Uuid25").field(&self.as_str()).finish()
    }
}

impl str::FromStr for Uuid25 {
    type Err = ParseError;

    /// Creates an instance from any of the supported UUID string representations.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::parse(src)
    }
}

impl AsRef<str> for Uuid25 {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<[u8; 16]> for Uuid25 {
    fn from(src: [u8; 16]) -> Self {
        Self::from_bytes(&src)
    }
}

impl From<&[u8; 16]> for Uuid25 {
    fn from(src: &[u8; 16]) -> Self {
        Self::from_bytes(src)
    }
}

impl From<Uuid25> for [u8; 16] {
    fn from(src: Uuid25) -> Self {
        src.to_bytes()
    }
}

impl From<u128> for Uuid25 {
    fn from(src: u128) -> Self {
        Self::from_bytes(&src.to_be_bytes())
    }
}

impl From<Uuid25> for u128 {
    fn from(src: Uuid25) -> Self {
        Self::from_be_bytes(src.to_bytes())
    }
}

impl TryFrom<&str> for Uuid25 {
    type Error = ParseError;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        Self::parse(src)
    }
}

impl TryFrom<&[u8]> for Uuid25 {
    type Error = ParseError;

    /// Creates an instance from a 16-byte binary representation or, for other lengths, from
    /// the ASCII bytes of any of the supported string representations.
    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        match <&[u8; 16]>::try_from(src) {
            Ok(uuid_bytes) => Ok(Self::from_bytes(uuid_bytes)),
            Err(_) => Self::parse_ascii(src),
        }
    }
}

/// Error parsing an invalid string representation of UUID.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {
    kind: ParseErrorKind,
}

/// The reason a UUID representation was rejected.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// A character is outside the digit set permitted by the format.
    InvalidCharacter,
    /// The decoded value exceeds 2^128 - 1.
    Overflow,
    /// The length, hyphen positions, braces, or URN prefix do not match any format.
    MalformedFormat,
}

impl ParseError {
    /// Returns the reason the input was rejected.
    pub const fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

impl From<ParseErrorKind> for ParseError {
    fn from(kind: ParseErrorKind) -> Self {
        Self { kind }
    }
}

impl From<crate::base::InvalidDigit> for ParseError {
    fn from(_: crate::base::InvalidDigit) -> Self {
        ParseErrorKind::InvalidCharacter.into()
    }
}

impl From<crate::base::DestinationTooSmall> for ParseError {
    fn from(_: crate::base::DestinationTooSmall) -> Self {
        ParseErrorKind::Overflow.into()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not parse a UUID string: ")?;
        match self.kind {
            ParseErrorKind::InvalidCharacter => write!(f, "invalid digit character"),
            ParseErrorKind::Overflow => write!(f, "value out of 128-bit range"),
            ParseErrorKind::MalformedFormat => write!(f, "unrecognized format"),
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::{ParseError, Uuid25};

    impl From<Uuid25> for String {
        fn from(src: Uuid25) -> Self {
            src.as_str().to_owned()
        }
    }

    impl TryFrom<String> for Uuid25 {
        type Error = ParseError;

        fn try_from(src: String) -> Result<Self, Self::Error> {
            Self::parse(&src)
        }
    }

    impl std::error::Error for ParseError {}
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid25;

    impl From<Uuid25> for uuid::Uuid {
        fn from(src: Uuid25) -> Self {
            uuid::Uuid::from_bytes(src.to_bytes())
        }
    }

    impl From<uuid::Uuid> for Uuid25 {
        fn from(src: uuid::Uuid) -> Self {
            Self::from_bytes(src.as_bytes())
        }
    }

}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid25};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid25 {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(self.as_str())
            } else {
                serializer.serialize_bytes(&self.to_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid25 {
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
        type Value = Uuid25;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Self::Value::parse(value).map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Self::Value::try_from(value).map_err(de::Error::custom)
        }
    }

}
