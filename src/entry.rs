//! Entry point functions.
//!
//! The `uuid*` functions return [`Uuid`] objects, and the `v*` functions return the canonical
//! 8-4-4-4-12 strings. The random fields come from [`OsRng`] on every call, so these functions
//! share no state and may be called concurrently from any number of threads.

use rand::rngs::OsRng;

use crate::generator::Generator;
use crate::name::{self, Algorithm, RustCrypto};
use crate::{Result, Uuid};

/// Generates a version 1 (time-based) UUID object.
///
/// The clock sequence and node fields are random; see [`crate::generator`].
///
/// # Examples
///
/// ```rust
/// let uuid = uuidkit::uuid1()?;
/// assert_eq!(uuid.version(), Some(1));
/// # Ok::<(), uuidkit::Error>(())
/// ```
pub fn uuid1() -> Result<Uuid> {
    Generator::new(OsRng).generate_v1()
}

/// Generates a version 2 (DCE security flavored) UUID object with the local domain identifier
/// set to zero.
pub fn uuid2() -> Result<Uuid> {
    Generator::new(OsRng).generate_v2(0)
}

/// Generates a version 3 (MD5 name-based) UUID object.
///
/// # Examples
///
/// ```rust
/// use uuidkit::{uuid3, Uuid};
///
/// let uuid = uuid3(&Uuid::NAMESPACE_DNS, "example.com")?;
/// assert_eq!(uuid.to_string(), "9073926b-929f-31c2-abc9-fad77ae3e8eb");
/// # Ok::<(), uuidkit::Error>(())
/// ```
pub fn uuid3(namespace: &Uuid, name: &str) -> Result<Uuid> {
    name::hash_with(&RustCrypto, namespace, name, Algorithm::Md5, Algorithm::Md5.version())
}

/// Generates a version 4 (random) UUID object.
///
/// # Examples
///
/// ```rust
/// let uuid = uuidkit::uuid4()?;
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
/// # Ok::<(), uuidkit::Error>(())
/// ```
pub fn uuid4() -> Result<Uuid> {
    Generator::new(OsRng).generate_v4()
}

/// Generates a version 5 (SHA-1 name-based) UUID object.
pub fn uuid5(namespace: &Uuid, name: &str) -> Result<Uuid> {
    name::hash_with(&RustCrypto, namespace, name, Algorithm::Sha1, Algorithm::Sha1.version())
}

/// Generates a version 1 UUID string.
pub fn v1() -> Result<String> {
    uuid1().map(String::from)
}

/// Generates a version 2 UUID string.
pub fn v2() -> Result<String> {
    uuid2().map(String::from)
}

/// Generates a version 3 UUID string from a namespace UUID string and a name.
///
/// # Examples
///
/// ```rust
/// use uuidkit::{v3, NAMESPACE_DNS};
///
/// assert_eq!(v3(NAMESPACE_DNS, "example.com")?, "9073926b-929f-31c2-abc9-fad77ae3e8eb");
/// assert!(v3("not a uuid", "example.com").is_err());
/// # Ok::<(), uuidkit::Error>(())
/// ```
pub fn v3(namespace: &str, name: &str) -> Result<String> {
    name::generate(namespace, name, Algorithm::Md5, 3).map(String::from)
}

/// Generates a version 4 UUID string.
pub fn v4() -> Result<String> {
    uuid4().map(String::from)
}

/// Generates a version 5 UUID string from a namespace UUID string and a name.
///
/// # Examples
///
/// ```rust
/// use uuidkit::{v5, NAMESPACE_DNS};
///
/// assert_eq!(v5(NAMESPACE_DNS, "example.com")?, "cfbff0d1-9375-5685-968c-48ce8b15ae17");
/// # Ok::<(), uuidkit::Error>(())
/// ```
pub fn v5(namespace: &str, name: &str) -> Result<String> {
    name::generate(namespace, name, Algorithm::Sha1, 5).map(String::from)
}
