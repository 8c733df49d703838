//! Time-based (versions 1 and 2) and random (version 4) UUID generator.
//!
//! The time-based layout follows RFC 4122 with two deliberate approximations: the 14-bit clock
//! sequence and the 48-bit node are drawn fresh from the random source on every call rather
//! than persisted, and no hardware address is consulted. Version 1 UUIDs produced here are
//! therefore unique only to the extent that the clock and the random fields make them so.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{CryptoRng, RngCore};

use crate::{fields::Fields, Error, Result, Uuid};

/// Milliseconds from the UUID time epoch (1582-10-15T00:00:00Z) to the Unix epoch.
const GREGORIAN_OFFSET_MS: i64 = 12_219_292_800_000;

/// A point in time counted in 100-nanosecond intervals since 1582-10-15T00:00:00Z.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Returns the current system time with millisecond precision.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClockOutOfRange`] if the system clock is set outside the range
    /// representable by a 60-bit timestamp.
    pub fn now() -> Result<Self> {
        Self::from_system_time(SystemTime::now())
    }

    /// Creates a timestamp from a [`SystemTime`] with millisecond precision.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClockOutOfRange`] if `time` precedes the UUID time epoch or does not fit
    /// in 60 bits.
    pub fn from_system_time(time: SystemTime) -> Result<Self> {
        let unix_ms = match time.duration_since(UNIX_EPOCH) {
            Ok(elapsed) => i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX),
            Err(err) => i64::try_from(err.duration().as_millis()).map_or(i64::MIN, |ms| -ms),
        };
        Self::try_from_unix_ms(unix_ms).ok_or_else(|| {
            tracing::warn!(unix_ms, "system time out of range of UUID timestamp");
            Error::ClockOutOfRange
        })
    }

    /// Creates a timestamp from milliseconds since the Unix epoch, which may be negative.
    ///
    /// # Panics
    ///
    /// Panics if the time precedes the UUID time epoch or does not fit in 60 bits.
    pub const fn from_unix_ms(unix_ms: i64) -> Self {
        match Self::try_from_unix_ms(unix_ms) {
            Some(timestamp) => timestamp,
            None => panic!("`unix_ms` out of range of 60-bit UUID timestamp"),
        }
    }

    /// Creates a timestamp from milliseconds since the Unix epoch, returning `None` if the time
    /// precedes the UUID time epoch or does not fit in 60 bits.
    pub const fn try_from_unix_ms(unix_ms: i64) -> Option<Self> {
        const MAX_MS: i64 = ((1u64 << 60) / 10_000) as i64;

        let ms = unix_ms.saturating_add(GREGORIAN_OFFSET_MS);
        if 0 <= ms && ms < MAX_MS {
            Some(Self(ms as u64 * 10_000))
        } else {
            None
        }
    }

    /// Creates a timestamp from 100-nanosecond intervals since the UUID time epoch.
    ///
    /// # Panics
    ///
    /// Panics if `ticks` is not a 60-bit unsigned integer.
    pub const fn from_ticks(ticks: u64) -> Self {
        assert!(ticks < 1 << 60, "`ticks` must be a 60-bit unsigned integer");
        Self(ticks)
    }

    /// Returns the number of 100-nanosecond intervals since the UUID time epoch.
    pub const fn ticks(self) -> u64 {
        self.0
    }

    /// Returns the milliseconds since the Unix epoch, truncating sub-millisecond precision.
    pub const fn to_unix_ms(self) -> i64 {
        (self.0 / 10_000) as i64 - GREGORIAN_OFFSET_MS
    }
}

/// Represents a UUID generator that draws clock sequences, node identifiers and random bits from
/// a cryptographically secure random number generator.
///
/// The generator keeps no state other than the random number generator; every call is
/// independent of the previous ones.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use uuidkit::generator::Generator;
///
/// let mut g = Generator::new(OsRng);
/// println!("{}", g.generate_v1()?);
/// println!("{}", g.generate_v4()?);
/// # Ok::<(), uuidkit::Error>(())
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Generator<R> {
    /// Random number generator used by the generator.
    rng: R,
}

impl<R: RngCore + CryptoRng> Generator<R> {
    /// Creates a generator instance.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a new version 1 UUID from the current system time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClockOutOfRange`] if the system clock cannot be expressed as a UUID
    /// timestamp, and [`Error::RandomSourceUnavailable`] if the random source fails.
    pub fn generate_v1(&mut self) -> Result<Uuid> {
        self.generate_v1_core(Timestamp::now()?)
    }

    /// Generates a new version 1 UUID from the `timestamp` passed.
    pub fn generate_v1_core(&mut self, timestamp: Timestamp) -> Result<Uuid> {
        let mut random = [0u8; 8];
        self.fill(&mut random)?;
        let clock_seq = u16::from_be_bytes([random[0], random[1]]) & 0x3fff;
        let node = [
            random[2], random[3], random[4], random[5], random[6], random[7],
        ];

        let uuid = Uuid::from(Fields::from_timestamp(1, timestamp.ticks(), clock_seq, node));
        tracing::trace!(version = 1, %uuid, "generated time-based UUID");
        Ok(uuid)
    }

    /// Generates a new version 2 UUID from the current system time, putting `local_id` in place
    /// of the low 32 bits of the timestamp.
    ///
    /// # Errors
    ///
    /// Fails for the same reasons as [`Generator::generate_v1`].
    pub fn generate_v2(&mut self, local_id: u32) -> Result<Uuid> {
        self.generate_v2_core(Timestamp::now()?, local_id)
    }

    /// Generates a new version 2 UUID from the `timestamp` passed, putting `local_id` in place of
    /// the low 32 bits of the timestamp.
    pub fn generate_v2_core(&mut self, timestamp: Timestamp, local_id: u32) -> Result<Uuid> {
        let mut fields = Fields::from(self.generate_v1_core(timestamp)?);
        fields.time_low = local_id;
        fields.time_hi_and_version = 0x2000 | (fields.time_hi_and_version & 0x0fff);
        Ok(Uuid::from(fields))
    }

    /// Generates a new version 4 UUID.
    pub fn generate_v4(&mut self) -> Result<Uuid> {
        let mut bytes = [0u8; 16];
        self.fill(&mut bytes)?;
        let uuid = Uuid::stamp(bytes, 4);
        tracing::trace!(version = 4, %uuid, "generated random UUID");
        Ok(uuid)
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        self.rng.try_fill_bytes(dest).map_err(|err| {
            tracing::warn!(%err, "secure random source failed");
            Error::from(err)
        })
    }
}


#[cfg(test)]
mod tests_v2 {
    use super::{Generator, Timestamp};
    use crate::fields::Fields;
    use rand::rngs::OsRng;

    /// Replaces time low field with local identifier
    #[test]
    fn replaces_time_low_field_with_local_identifier() {
        let pattern = r"^00000000-[0-9a-f]{4}-2[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$";
        let re = regex::Regex::new(pattern).unwrap();
        let mut g = Generator::new(OsRng);
        for _ in 0..1_000 {
            let e = g.generate_v2(0).unwrap();
            assert!(re.is_match(&e.to_string()));
            assert_eq!(e.version(), Some(2));
        }

        let ts = Timestamp::from_ticks(0x0123_4567_89ab_cdef);
        let e = g.generate_v2_core(ts, 0x0000_03e8).unwrap();
        assert!(e.to_string().starts_with("000003e8-4567-2123-"));
        assert_eq!(Fields::from(e).time_low, 1_000);
    }
}
