//! Conversions between UUID strings, raw hex strings and byte sequences.

use fstr::FStr;

use crate::{Error, Result};

pub(crate) const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Formats 16 bytes as the 8-4-4-4-12 lowercase hexadecimal string.
pub(crate) fn encode_hyphenated(bytes: &[u8; 16]) -> FStr<36> {
    let mut buffer = [0u8; 36];
    let mut pos = 0;
    for (i, e) in bytes.iter().enumerate() {
        if matches!(i, 4 | 6 | 8 | 10) {
            buffer[pos] = b'-';
            pos += 1;
        }
        buffer[pos] = DIGITS[(e >> 4) as usize];
        buffer[pos + 1] = DIGITS[(e & 15) as usize];
        pos += 2;
    }
    debug_assert!(buffer.is_ascii());
    // SAFETY: the buffer holds ASCII hex digits and hyphens only
    unsafe { FStr::from_inner_unchecked(buffer) }
}

/// Formats a 16-byte sequence as a UUID string with hyphens after the 8th, 12th, 16th and 20th
/// hex digits.
///
/// Returns [`Error::MalformedInput`] if `bytes` is not exactly 16 bytes long.
///
/// # Examples
///
/// ```rust
/// use uuidkit::codec::bytes_to_uuid;
///
/// let bytes = [0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0, 0xc0, 0x4f, 0xd4, 0x30, 0xc8];
/// assert_eq!(bytes_to_uuid(&bytes)?, "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
/// assert!(bytes_to_uuid(&bytes[..15]).is_err());
/// # Ok::<(), uuidkit::Error>(())
/// ```
pub fn bytes_to_uuid(bytes: &[u8]) -> Result<String> {
    let bytes = <&[u8; 16]>::try_from(bytes).map_err(|_| Error::MalformedInput)?;
    Ok(encode_hyphenated(bytes).as_str().to_owned())
}

/// Parses a hyphen-free hex string two digits at a time into bytes.
///
/// Returns [`Error::MalformedInput`] if `hex` has odd length or contains a non-hex character.
/// Both upper and lower case digits are accepted.
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>> {
    let src = hex.as_bytes();
    if src.len() % 2 != 0 {
        return Err(Error::MalformedInput);
    }
    src.chunks_exact(2)
        .map(|pair| -> Result<u8> {
            Ok((decode_digit(pair[0])? << 4) | decode_digit(pair[1])?)
        })
        .collect()
}

/// Encodes text as UTF-8 bytes without normalization.
pub fn string_to_bytes(text: &str) -> &[u8] {
    text.as_bytes()
}

fn decode_digit(c: u8) -> Result<u8> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(Error::MalformedInput),
    }
}
