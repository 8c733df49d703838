//! RFC 4122 UUID generation: versions 1, 2, 3, 4 and 5
//!
//! ```rust
//! use uuidkit::{v1, v3, v4, v5, NAMESPACE_DNS};
//!
//! println!("{}", v4()?); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! println!("{}", v1()?); // e.g. "c232ab00-9414-11ec-b3c8-9f6bdeced846"
//!
//! assert_eq!(v3(NAMESPACE_DNS, "example.com")?, "9073926b-929f-31c2-abc9-fad77ae3e8eb");
//! assert_eq!(v5(NAMESPACE_DNS, "example.com")?, "cfbff0d1-9375-5685-968c-48ce8b15ae17");
//! # Ok::<(), uuidkit::Error>(())
//! ```
//!
//! The `v*` functions return canonical strings; the `uuid*` functions return [`Uuid`] objects
//! that can be inspected and converted:
//!
//! ```rust
//! use uuidkit::{uuid5, Uuid, Variant};
//!
//! let uuid = uuid5(&Uuid::NAMESPACE_URL, "https://example.com/")?;
//! assert_eq!(uuid.version(), Some(5));
//! assert_eq!(uuid.variant(), Variant::Var10);
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//! # Ok::<(), uuidkit::Error>(())
//! ```
//!
//! # Field and bit layout
//!
//! Every generator produces the RFC 4122 variant (`10` in the top two bits of byte 8) and
//! writes its version into the top four bits of byte 6:
//!
//! - Version 1 splits a 60-bit count of 100-nanosecond intervals since 1582-10-15 into
//!   `time_low`, `time_mid` and `time_hi`, followed by a 14-bit clock sequence and a 48-bit
//!   node. Both the clock sequence and the node are random and drawn anew for each UUID.
//! - Version 2 is version 1 with `time_low` replaced by a local domain identifier.
//! - Versions 3 and 5 are the leading 16 bytes of the MD5 or SHA-1 digest of the namespace
//!   bytes followed by the UTF-8 name.
//! - Version 4 fills the remaining 122 bits from a cryptographically secure random source.
//!
//! # Crate features
//!
//! - `serde`: `Serialize` and `Deserialize` for [`Uuid`].
//! - `uuid`: conversions to and from `uuid::Uuid`.
//! - `cli`: the `uuidkit` command.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod id;
pub use id::{ParseError, Uuid, Variant};

mod error;
pub use error::{Error, Result};

pub mod codec;
pub mod fields;
pub mod generator;
pub mod name;

mod namespace;
pub use namespace::{NAMESPACE_DNS, NAMESPACE_OID, NAMESPACE_URL, NAMESPACE_X500};

mod entry;
pub use entry::{uuid1, uuid2, uuid3, uuid4, uuid5, v1, v2, v3, v4, v5};
