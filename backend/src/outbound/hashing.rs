//! Argon2 password digests for the in-memory account store.
//!
//! Digests are stored in PHC string format, so the salt and Argon2
//! parameters travel with each digest and verification needs nothing else.

use argon2::password_hash::{PasswordHash, SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHasher as _, PasswordVerifier};

use crate::domain::ports::{PasswordDigest, PasswordHashError, PasswordHasher};

/// [`PasswordHasher`] backed by Argon2id with default parameters.
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2PasswordHasher;

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<PasswordDigest, PasswordHashError> {
        let salt = SaltString::generate(&mut OsRng);
        let encoded = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|err| PasswordHashError::hash(err.to_string()))?;
        Ok(PasswordDigest::new(encoded.to_string()))
    }

    fn verify(&self, password: &str, digest: &PasswordDigest) -> bool {
        let Ok(parsed) = PasswordHash::new(digest.as_str()) else {
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn hasher() -> Argon2PasswordHasher {
        Argon2PasswordHasher
    }

    #[rstest]
    fn verifies_matching_password(hasher: Argon2PasswordHasher) {
        let digest = hasher.hash("correct horse").expect("hash");
        assert!(digest.as_str().starts_with("$argon2id$"));
        assert!(hasher.verify("correct horse", &digest));
        assert!(!hasher.verify("wrong horse", &digest));
    }

    #[rstest]
    fn salts_differ_between_calls(hasher: Argon2PasswordHasher) {
        assert_ne!(
            hasher.hash("same").expect("hash"),
            hasher.hash("same").expect("hash")
        );
    }

    #[rstest]
    #[case("")]
    #[case("no-separator")]
    #[case("$argon2id$v=19$broken")]
    fn malformed_digests_never_verify(hasher: Argon2PasswordHasher, #[case] encoded: &str) {
        assert!(!hasher.verify("anything", &PasswordDigest::new(encoded)));
    }
}
