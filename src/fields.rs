//! Fixed-width hex packing of integer fields and the RFC 4122 field view of a UUID.
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          time_low                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |       time_mid                |         time_hi_and_version   |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |clk_seq_hi_res |  clk_seq_low  |         node (0-1)            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                         node (2-5)                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```

use std::str;

use fstr::FStr;

use crate::codec::DIGITS;
use crate::{Error, Result, Uuid};

/// Formats an 8-bit field as 2 lowercase hex digits.
pub fn pack_u8(value: u8) -> FStr<2> {
    pack(value.into())
}

/// Formats a 16-bit field as 4 lowercase hex digits.
pub fn pack_u16(value: u16) -> FStr<4> {
    pack(value.into())
}

/// Formats a 32-bit field as 8 lowercase hex digits.
pub fn pack_u32(value: u32) -> FStr<8> {
    pack(value.into())
}

/// Formats the lower 48 bits of `value` as 12 lowercase hex digits.
pub fn pack_u48(value: u64) -> FStr<12> {
    pack(value & 0xffff_ffff_ffff)
}

fn pack<const N: usize>(value: u64) -> FStr<N> {
    let mut buffer = [b'0'; N];
    for (i, e) in buffer.iter_mut().rev().enumerate().take(16) {
        *e = DIGITS[((value >> (4 * i)) & 15) as usize];
    }
    debug_assert!(buffer.is_ascii());
    // SAFETY: the buffer holds ASCII hex digits only
    unsafe { FStr::from_inner_unchecked(buffer) }
}

/// Parses a field packed by one of the `pack_*` functions.
///
/// Returns [`Error::MalformedInput`] unless `hex` consists of exactly `width` hex digits, where
/// `width` is at most 16.
pub fn unpack(hex: &str, width: usize) -> Result<u64> {
    if hex.len() != width || width > 16 {
        return Err(Error::MalformedInput);
    }
    hex.chars().try_fold(0u64, |acc, c| {
        let digit = c.to_digit(16).ok_or(Error::MalformedInput)?;
        Ok((acc << 4) | digit as u64)
    })
}

/// RFC 4122 field view of a UUID.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Fields {
    /// The low 32 bits of the timestamp.
    pub time_low: u32,

    /// The middle 16 bits of the timestamp.
    pub time_mid: u16,

    /// The high 12 bits of the timestamp, under the 4-bit version.
    pub time_hi_and_version: u16,

    /// The high 6 bits of the clock sequence, under the 2-bit variant.
    pub clock_seq_hi_and_reserved: u8,

    /// The low 8 bits of the clock sequence.
    pub clock_seq_low: u8,

    /// The 48-bit node identifier.
    pub node: [u8; 6],
}

impl Fields {
    /// Splits a 60-bit timestamp and a 14-bit clock sequence into fields, setting the version and
    /// the `10` variant.
    ///
    /// # Panics
    ///
    /// Panics if `version` is not a 4-bit, `timestamp` is not a 60-bit or `clock_seq` is not a
    /// 14-bit unsigned integer.
    pub const fn from_timestamp(version: u8, timestamp: u64, clock_seq: u16, node: [u8; 6]) -> Self {
        assert!(version < 1 << 4, "`version` must be a 4-bit unsigned integer");
        assert!(timestamp < 1 << 60, "`timestamp` must be a 60-bit unsigned integer");
        assert!(clock_seq < 1 << 14, "`clock_seq` must be a 14-bit unsigned integer");

        Self {
            time_low: timestamp as u32,
            time_mid: (timestamp >> 32) as u16,
            time_hi_and_version: ((version as u16) << 12) | ((timestamp >> 48) as u16 & 0x0fff),
            clock_seq_hi_and_reserved: 0x80 | (clock_seq >> 8) as u8,
            clock_seq_low: clock_seq as u8,
            node,
        }
    }

    /// Returns the 60-bit timestamp of a time-based UUID.
    pub const fn timestamp(&self) -> u64 {
        ((self.time_hi_and_version as u64 & 0x0fff) << 48)
            | ((self.time_mid as u64) << 32)
            | self.time_low as u64
    }

    /// Returns the 14-bit clock sequence.
    pub const fn clock_seq(&self) -> u16 {
        ((self.clock_seq_hi_and_reserved as u16 & 0x3f) << 8) | self.clock_seq_low as u16
    }

    /// Returns the node identifier as a 48-bit integer.
    pub fn node_u48(&self) -> u64 {
        let mut buffer = [0u8; 8];
        buffer[2..].copy_from_slice(&self.node);
        u64::from_be_bytes(buffer)
    }

    /// Composes the 8-4-4-4-12 string field by field.
    pub fn encode(&self) -> String {
        [
            pack_u32(self.time_low).as_str(),
            "-",
            pack_u16(self.time_mid).as_str(),
            "-",
            pack_u16(self.time_hi_and_version).as_str(),
            "-",
            pack_u8(self.clock_seq_hi_and_reserved).as_str(),
            pack_u8(self.clock_seq_low).as_str(),
            "-",
            pack_u48(self.node_u48()).as_str(),
        ]
        .concat()
    }
}

impl From<Fields> for Uuid {
    fn from(src: Fields) -> Self {
        let mut bytes = [0u8; 16];
        bytes[..4].copy_from_slice(&src.time_low.to_be_bytes());
        bytes[4..6].copy_from_slice(&src.time_mid.to_be_bytes());
        bytes[6..8].copy_from_slice(&src.time_hi_and_version.to_be_bytes());
        bytes[8] = src.clock_seq_hi_and_reserved;
        bytes[9] = src.clock_seq_low;
        bytes[10..].copy_from_slice(&src.node);
        Uuid::from(bytes)
    }
}

impl From<Uuid> for Fields {
    fn from(src: Uuid) -> Self {
        let b = src.as_bytes();
        Self {
            time_low: u32::from_be_bytes([b[0], b[1], b[2], b[3]]),
            time_mid: u16::from_be_bytes([b[4], b[5]]),
            time_hi_and_version: u16::from_be_bytes([b[6], b[7]]),
            clock_seq_hi_and_reserved: b[8],
            clock_seq_low: b[9],
            node: [b[10], b[11], b[12], b[13], b[14], b[15]],
        }
    }
}

impl str::FromStr for Fields {
    type Err = Error;

    /// Unpacks the 8-4-4-4-12 hexadecimal string representation group by group.
    fn from_str(src: &str) -> Result<Self> {
        let mut groups = src.split('-');
        let mut next = |width| unpack(groups.next().ok_or(Error::MalformedInput)?, width);
        let time_low = next(8)? as u32;
        let time_mid = next(4)? as u16;
        let time_hi_and_version = next(4)? as u16;
        let clock_seq = next(4)? as u16;
        let node = next(12)?.to_be_bytes();
        if groups.next().is_some() {
            return Err(Error::MalformedInput);
        }

        Ok(Self {
            time_low,
            time_mid,
            time_hi_and_version,
            clock_seq_hi_and_reserved: (clock_seq >> 8) as u8,
            clock_seq_low: clock_seq as u8,
            node: [node[2], node[3], node[4], node[5], node[6], node[7]],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{pack_u16, pack_u32, pack_u48, pack_u8, unpack, Fields};
    use crate::{Error, Uuid};

    /// Pads fields with zeros to fixed width
    #[test]
    fn pads_fields_with_zeros_to_fixed_width() {
        assert_eq!(pack_u8(0).as_str(), "00");
        assert_eq!(pack_u8(0x0a).as_str(), "0a");
        assert_eq!(pack_u8(0xff).as_str(), "ff");
        assert_eq!(pack_u16(0x00b4).as_str(), "00b4");
        assert_eq!(pack_u16(u16::MAX).as_str(), "ffff");
        assert_eq!(pack_u32(0x1d1).as_str(), "000001d1");
        assert_eq!(pack_u32(0x6ba7b810).as_str(), "6ba7b810");
        assert_eq!(pack_u48(0x00c0_4fd4_30c8).as_str(), "00c04fd430c8");
        assert_eq!(pack_u48(u64::MAX).as_str(), "ffffffffffff");
    }

    /// Unpacks what was packed
    #[test]
    fn unpacks_what_was_packed() {
        for value in [0u32, 1, 0xabcd, 0x8000_0000, u32::MAX] {
            assert_eq!(unpack(&pack_u32(value), 8).unwrap(), value as u64);
        }
        assert!(matches!(unpack("abc", 4), Err(Error::MalformedInput)));
        assert!(matches!(unpack("abcx", 4), Err(Error::MalformedInput)));
        assert!(matches!(
            unpack("00000000000000000", 17),
            Err(Error::MalformedInput)
        ));
    }

    /// Splits timestamp and clock sequence into fields
    #[test]
    fn splits_timestamp_and_clock_sequence_into_fields() {
        // the DNS namespace UUID is itself a version 1 UUID
        let fields = Fields::from_timestamp(
            1,
            0x1d19dad6ba7b810,
            0x00b4,
            [0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8],
        );
        assert_eq!(fields.encode(), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
        assert_eq!(fields.timestamp(), 0x1d19dad6ba7b810);
        assert_eq!(fields.clock_seq(), 0x00b4);

        let max = Fields::from_timestamp(1, (1 << 60) - 1, (1 << 14) - 1, [0xff; 6]);
        assert_eq!(max.encode(), "ffffffff-ffff-1fff-bfff-ffffffffffff");
    }

    /// Composes the same string as the byte codec
    #[test]
    fn composes_the_same_string_as_the_byte_codec() {
        let cases = [
            "00000000-0000-0000-0000-000000000000",
            "6ba7b814-9dad-11d1-80b4-00c04fd430c8",
            "c232ab00-9414-11ec-b3c8-9f6bdeced846",
            "ffffffff-ffff-ffff-ffff-ffffffffffff",
        ];
        for text in cases {
            let e = text.parse::<Uuid>().unwrap();
            let fields = Fields::from(e);
            assert_eq!(fields.encode(), e.to_string());
            assert_eq!(Uuid::from(fields), e);
            assert_eq!(text.parse::<Fields>().unwrap(), fields);
        }
    }

    /// Returns error to malformed field groups
    #[test]
    fn returns_error_to_malformed_field_groups() {
        let cases = [
            "",
            "6ba7b810-9dad-11d1-80b4",
            "6ba7b810-9dad-11d1-80b4-00c04fd430c8-00",
            "6ba7b810-9dad-11d1-80b-400c04fd430c8",
            "6ba7b810-9dad-11d1-80b4-00c04fd430cg",
        ];
        for e in cases {
            assert!(e.parse::<Fields>().is_err(), "{}", e);
        }
    }

    /// Panics on out-of-range timestamp
    #[test]
    #[should_panic]
    fn panics_on_out_of_range_timestamp() {
        Fields::from_timestamp(1, 1 << 60, 0, [0; 6]);
    }

    /// Panics on version out of four bits
    #[test]
    #[should_panic]
    fn panics_on_version_out_of_four_bits() {
        Fields::from_timestamp(16, 0, 0, [0; 6]);
    }

    /// Accepts every four-bit version
    #[test]
    fn accepts_every_four_bit_version() {
        for version in 0..16 {
            let e = Fields::from_timestamp(version, (1 << 60) - 1, 0x3fff, [0xff; 6]);
            assert_eq!(e.time_hi_and_version >> 12, version as u16);
            assert_eq!(e.timestamp(), (1 << 60) - 1);
            assert_eq!(e.clock_seq(), 0x3fff);
        }
    }
}
