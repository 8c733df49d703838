use std::{fmt, str};

use fstr::FStr;

use crate::codec;

/// Represents a Universally Unique IDentifier.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Creates a UUID from its 16-byte big-endian representation.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Creates a UUID from arbitrary bytes, overwriting the version nibble of byte 6 with
    /// `version` and the top two bits of byte 8 with the `10` variant.
    pub(crate) fn stamp(mut bytes: [u8; 16], version: u8) -> Self {
        bytes[6] = (bytes[6] & 0x0f) | (version << 4);
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        Self(bytes)
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuidkit::Uuid;
    ///
    /// let x = "6ba7b810-9dad-11d1-80b4-00c04fd430c8".parse::<Uuid>()?;
    /// assert_eq!(x.encode().as_str(), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// # Ok::<(), uuidkit::ParseError>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        codec::encode_hyphenated(&self.0)
    }

    /// Reports the variant field value of the UUID.
    pub fn variant(&self) -> Variant {
        match self.0[8] >> 4 {
            0x0..=0x7 if self.0 == Self::NIL.0 => Variant::VarNil,
            0x0..=0x7 => Variant::Var0,
            0x8..=0xb => Variant::Var10,
            0xc..=0xd => Variant::Var110,
            _ if self.0 == Self::MAX.0 => Variant::VarMax,
            _ => Variant::VarReserved,
        }
    }

    /// Returns the version field value of the UUID or `None` if the UUID does not have the
    /// variant field value of `0b10`.
    pub fn version(&self) -> Option<u8> {
        match self.variant() {
            Variant::Var10 => Some(self.0[6] >> 4),
            _ => None,
        }
    }
}

/// UUID variants defined by RFC 4122.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// Nil UUID.
    VarNil,

    /// The variant field value of `0b0`, except Nil UUID.
    Var0,

    /// The variant field value of `0b10`, produced by every generator in this crate.
    Var10,

    /// The variant field value of `0b110`.
    Var110,

    /// The reserved variant field value of `0b111`, except Max UUID.
    VarReserved,

    /// Max UUID.
    VarMax,
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation or from the
    /// 32-digit hexadecimal string without hyphens. Digits are case-insensitive.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        const ERR: ParseError = ParseError {};
        let hyphenated = match src.len() {
            36 => true,
            32 => false,
            _ => return Err(ERR),
        };

        let mut dst = [0u8; 16];
        let mut iter = src.chars();
        for (i, e) in dst.iter_mut().enumerate() {
            let hi = iter.next().ok_or(ERR)?.to_digit(16).ok_or(ERR)? as u8;
            let lo = iter.next().ok_or(ERR)?.to_digit(16).ok_or(ERR)? as u8;
            *e = (hi << 4) | lo;
            if hyphenated && matches!(i, 3 | 5 | 7 | 9) && iter.next().ok_or(ERR)? != '-' {
                return Err(ERR);
            }
        }
        if iter.next().is_none() {
            Ok(Self(dst))
        } else {
            Err(ERR)
        }
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
        src.encode().as_str().to_owned()
    }
}

impl TryFrom<String> for Uuid {
    type Error = ParseError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

/// Error parsing an invalid string representation of UUID.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[error("invalid string representation")]
pub struct ParseError {}

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
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(de::Error::custom)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::{Uuid, Variant};

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [([u8; 16], &'static str)] {
        &[
            ([0x00; 16], "00000000-0000-0000-0000-000000000000"),
            ([0xff; 16], "ffffffff-ffff-ffff-ffff-ffffffffffff"),
            (
                [
                    0x6b, 0xa7, 0xb8, 0x11, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f,
                    0xd4, 0x30, 0xc8,
                ],
                "6ba7b811-9dad-11d1-80b4-00c04fd430c8",
            ),
            (
                [
                    0x90, 0x73, 0x92, 0x6b, 0x92, 0x9f, 0x31, 0xc2, 0xab, 0xc9, 0xfa, 0xd7, 0x7a,
                    0xe3, 0xe8, 0xeb,
                ],
                "9073926b-929f-31c2-abc9-fad77ae3e8eb",
            ),
        ]
    }

    /// Encodes and decodes prepared cases correctly
    #[test]
    fn encodes_and_decodes_prepared_cases_correctly() {
        for (bytes, text) in prepare_cases() {
            let e = Uuid::from(*bytes);
            assert_eq!(Ok(e), text.parse());
            assert_eq!(Ok(e), text.to_uppercase().parse());
            assert_eq!(Ok(e), text.replace('-', "").parse());
            assert_eq!(e.encode().as_str(), *text);
            assert_eq!(&e.to_string(), text);
            assert_eq!(&String::from(e), text);
        }
    }

    /// Returns error to invalid string representation
    #[test]
    fn returns_error_to_invalid_string_representation() {
        let cases = [
            "",
            " 6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "6ba7b810-9dad-11d1-80b4-00c04fd430c8 ",
            "+6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "-ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "6ba7b8109dad11d180b400c04fd430c",
            "6ba7b8109dad11d180b400c04fd430c8a",
            "6ba7b810-9dad11d1-80b4-00c04fd430c8",
            "{6ba7b810-9dad-11d1-80b4-00c04fd430c8}",
            "6ba7b810-9dad-11 1-80b4-00c04fd430c8",
            "6ba7b81g-9dad-11d1-80b4-00c04fd430c8",
            "6ba7b810-9dad-11d1-80b4_00c04fd430c8",
            "6ba7b810-9dad-11d1-80b4-00c04fd430cé",
        ];

        for e in cases {
            assert!(e.parse::<Uuid>().is_err(), "{}", e);
        }
    }

    /// Returns Nil and Max UUIDs
    #[test]
    fn returns_nil_and_max_uuids() {
        assert_eq!(
            Uuid::NIL.encode().as_str(),
            "00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(
            Uuid::MAX.encode().as_str(),
            "ffffffff-ffff-ffff-ffff-ffffffffffff"
        );
        assert_eq!(Uuid::NIL.variant(), Variant::VarNil);
        assert_eq!(Uuid::MAX.variant(), Variant::VarMax);
        assert_eq!(Uuid::NIL.version(), None);
    }

    /// Reports variant and version fields
    #[test]
    fn reports_variant_and_version_fields() {
        let cases = [
            ("6ba7b810-9dad-11d1-80b4-00c04fd430c8", Variant::Var10, Some(1)),
            ("9073926b-929f-31c2-abc9-fad77ae3e8eb", Variant::Var10, Some(3)),
            ("cfbff0d1-9375-5685-968c-48ce8b15ae17", Variant::Var10, Some(5)),
            ("00000000-0000-4000-7fff-000000000000", Variant::Var0, None),
            ("00000000-0000-4000-c000-000000000000", Variant::Var110, None),
            ("00000000-0000-4000-e000-000000000000", Variant::VarReserved, None),
        ];
        for (text, variant, version) in cases {
            let e = text.parse::<Uuid>().unwrap();
            assert_eq!(e.variant(), variant, "{}", text);
            assert_eq!(e.version(), version, "{}", text);
        }
    }

    /// Overwrites version and variant bits when stamping
    #[test]
    fn overwrites_version_and_variant_bits_when_stamping() {
        for version in 1..=5 {
            let e = Uuid::stamp([0xff; 16], version);
            assert_eq!(e.version(), Some(version));
            let e = Uuid::stamp([0x00; 16], version);
            assert_eq!(e.version(), Some(version));
        }
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        for (bytes, _) in prepare_cases() {
            let e = Uuid::from(*bytes);
            assert_eq!(Uuid::from(<[u8; 16]>::from(e)), e);
            assert_eq!(Uuid::from(u128::from(e)), e);
            assert_eq!(e.encode().parse(), Ok(e));
            assert_eq!(Uuid::try_from(e.to_string()), Ok(e));
            assert_eq!(Uuid::try_from(e.to_string().to_uppercase()), Ok(e));
            #[cfg(feature = "uuid")]
            assert_eq!(Uuid::from(<uuid::Uuid>::from(e)), e);
        }
    }
}
