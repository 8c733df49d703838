//! Name-based UUID generation (versions 3 and 5).
//!
//! A name-based UUID is the digest of the namespace UUID's 16 bytes followed by the UTF-8 bytes
//! of the name, truncated to 16 bytes, with the version and variant bits overwritten. The result
//! is a pure function of its inputs.
//!
//! ```rust
//! use uuidkit::name::{generate, Algorithm};
//! use uuidkit::NAMESPACE_DNS;
//!
//! let uuid = generate(NAMESPACE_DNS, "example.com", Algorithm::Sha1, 5)?;
//! assert_eq!(uuid.to_string(), "cfbff0d1-9375-5685-968c-48ce8b15ae17");
//! # Ok::<(), uuidkit::Error>(())
//! ```

use std::fmt;

use md5::{Digest, Md5};
use sha1::Sha1;

use crate::{codec, Error, Result, Uuid};

/// Digest algorithm used to hash a namespace and a name.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Algorithm {
    /// MD5, used by version 3.
    Md5,

    /// SHA-1, used by version 5. Only the leading 16 of its 20 output bytes are kept.
    Sha1,
}

impl Algorithm {
    /// Returns the UUID version that conventionally goes with the algorithm.
    pub const fn version(self) -> u8 {
        match self {
            Self::Md5 => 3,
            Self::Sha1 => 5,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA-1",
        })
    }
}

/// A trait that defines the digest interface consumed by the name-based generator.
///
/// Implementations return [`Error::UnsupportedAlgorithm`] for algorithms they do not provide.
pub trait DigestProvider {
    /// Returns the digest of `data` computed with `algorithm`.
    fn digest(&self, algorithm: Algorithm, data: &[u8]) -> Result<Vec<u8>>;
}

/// The default [`DigestProvider`] backed by the `md-5` and `sha1` crates.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct RustCrypto;

impl DigestProvider for RustCrypto {
    fn digest(&self, algorithm: Algorithm, data: &[u8]) -> Result<Vec<u8>> {
        Ok(match algorithm {
            Algorithm::Md5 => Md5::digest(data).to_vec(),
            Algorithm::Sha1 => Sha1::digest(data).to_vec(),
        })
    }
}

/// Generates a name-based UUID from a namespace UUID string using the default digest provider.
///
/// Hyphens anywhere in `namespace` are ignored; the remainder must be 32 hex digits.
///
/// # Errors
///
/// Returns [`Error::InvalidNamespace`] if `namespace` is not a well-formed UUID string, and
/// [`Error::MalformedInput`] if `version` does not fit in four bits.
pub fn generate(namespace: &str, name: &str, algorithm: Algorithm, version: u8) -> Result<Uuid> {
    generate_with(&RustCrypto, namespace, name, algorithm, version)
}

/// Generates a name-based UUID from a namespace UUID string using `provider` to compute the
/// digest.
///
/// # Errors
///
/// Returns [`Error::InvalidNamespace`] if `namespace` is not a well-formed UUID string, and
/// propagates any error from `provider`. A digest shorter than 16 bytes or a `version` that does
/// not fit in four bits is reported as [`Error::MalformedInput`].
pub fn generate_with<P: DigestProvider + ?Sized>(
    provider: &P,
    namespace: &str,
    name: &str,
    algorithm: Algorithm,
    version: u8,
) -> Result<Uuid> {
    let namespace = parse_namespace(namespace)?;
    hash_with(provider, &namespace, name, algorithm, version)
}

/// Strips hyphens and hex-decodes the rest into exactly 16 bytes.
fn parse_namespace(namespace: &str) -> Result<Uuid> {
    codec::hex_to_bytes(&namespace.replace('-', ""))
        .ok()
        .and_then(|bytes| <[u8; 16]>::try_from(bytes).ok())
        .map(Uuid::from)
        .ok_or_else(|| {
            tracing::debug!(namespace, "rejected malformed namespace");
            Error::InvalidNamespace
        })
}

/// Generates a name-based UUID from a parsed namespace.
pub(crate) fn hash_with<P: DigestProvider + ?Sized>(
    provider: &P,
    namespace: &Uuid,
    name: &str,
    algorithm: Algorithm,
    version: u8,
) -> Result<Uuid> {
    if version > 0x0f {
        return Err(Error::MalformedInput);
    }

    let name = codec::string_to_bytes(name);
    let mut data = Vec::with_capacity(16 + name.len());
    data.extend_from_slice(namespace.as_bytes());
    data.extend_from_slice(name);

    let digest = provider.digest(algorithm, &data).map_err(|err| {
        if let Error::UnsupportedAlgorithm(algorithm) = err {
            tracing::debug!(%algorithm, "digest provider rejected algorithm");
        }
        err
    })?;
    let bytes = digest
        .get(..16)
        .and_then(|head| <[u8; 16]>::try_from(head).ok())
        .ok_or(Error::MalformedInput)?;

    let uuid = Uuid::stamp(bytes, version);
    tracing::trace!(version, %uuid, "generated name-based UUID");
    Ok(uuid)
}
