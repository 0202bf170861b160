//! Driven port for deriving and checking stored password digests.

use std::fmt;

use super::define_port_error;

/// Opaque stored form of a password.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Wrap an encoded digest produced by a [`PasswordHasher`].
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Encoded digest as stored.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordDigest(..)")
    }
}

define_port_error! {
    /// Errors raised while deriving a digest.
    pub enum PasswordHashError {
        /// The hashing backend rejected the input or its parameters.
        Hash { message: String } => "password hashing failed: {message}",
    }
}

/// Hashing strategy used by account stores.
pub trait PasswordHasher: Send + Sync {
    /// Derive a digest for a new password.
    fn hash(&self, password: &str) -> Result<PasswordDigest, PasswordHashError>;

    /// Check `password` against a previously derived digest.
    ///
    /// Malformed digests never verify.
    fn verify(&self, password: &str, digest: &PasswordDigest) -> bool;
}
