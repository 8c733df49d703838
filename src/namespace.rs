//! Well-known namespace UUIDs from RFC 4122 Appendix C.

use crate::Uuid;

/// Name string is a fully-qualified domain name.
pub const NAMESPACE_DNS: &str = "6ba7b810-9dad-11d1-80b4-00c04fd430c8";

/// Name string is a URL.
pub const NAMESPACE_URL: &str = "6ba7b811-9dad-11d1-80b4-00c04fd430c8";

/// Name string is an ISO OID.
pub const NAMESPACE_OID: &str = "6ba7b812-9dad-11d1-80b4-00c04fd430c8";

/// Name string is an X.500 DN (in DER or a text output format).
pub const NAMESPACE_X500: &str = "6ba7b814-9dad-11d1-80b4-00c04fd430c8";

impl Uuid {
    /// Parsed form of [`NAMESPACE_DNS`].
    pub const NAMESPACE_DNS: Self = namespace(0x10);

    /// Parsed form of [`NAMESPACE_URL`].
    pub const NAMESPACE_URL: Self = namespace(0x11);

    /// Parsed form of [`NAMESPACE_OID`].
    pub const NAMESPACE_OID: Self = namespace(0x12);

    /// Parsed form of [`NAMESPACE_X500`].
    pub const NAMESPACE_X500: Self = namespace(0x14);
}

/// The four namespaces differ only in the last byte of `time_low`.
const fn namespace(discriminator: u8) -> Uuid {
    Uuid::from_bytes([
        0x6b,
        0xa7,
        0xb8,
        discriminator,
        0x9d,
        0xad,
        0x11,
        0xd1,
        0x80,
        0xb4,
        0x00,
        0xc0,
        0x4f,
        0xd4,
        0x30,
        0xc8,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Matches typed constants to strings
    #[test]
    fn matches_typed_constants_to_strings() {
        let cases = [
            (Uuid::NAMESPACE_DNS, NAMESPACE_DNS),
            (Uuid::NAMESPACE_URL, NAMESPACE_URL),
            (Uuid::NAMESPACE_OID, NAMESPACE_OID),
            (Uuid::NAMESPACE_X500, NAMESPACE_X500),
        ];
        for (typed, text) in cases {
            assert_eq!(typed.to_string(), text);
            assert_eq!(text.parse::<Uuid>(), Ok(typed));
            assert_eq!(typed.version(), Some(1));
        }
    }
}
