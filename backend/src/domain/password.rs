//! Salted one-way password hashing.
//!
//! Registrations hand their plaintext to [`PasswordDigest::derive`] and only
//! the resulting PHC string is ever stored. Verification re-parses the stored
//! string, so digests survive parameter upgrades of the underlying algorithm.

use argon2::Argon2;
use argon2::password_hash::{PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng};

/// Failures raised while deriving or parsing a password digest.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordHashError {
    /// The hashing primitive rejected the input.
    #[error("password hashing failed: {message}")]
    Hash {
        /// Underlying failure description.
        message: String,
    },
    /// A stored digest did not parse as a PHC string.
    #[error("stored password digest is malformed: {message}")]
    MalformedDigest {
        /// Underlying failure description.
        message: String,
    },
}

/// Argon2id digest of a password, stored as a PHC string.
///
/// The digest deliberately implements neither `Display` nor `Serialize`; it
/// leaves the process only through explicit persistence calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Hash a plaintext password with a freshly generated random salt.
    pub fn derive(plain: &str) -> Result<Self, PasswordHashError> {
        let salt = SaltString::generate(&mut OsRng);
        let digest = Argon2::default()
            .hash_password(plain.as_bytes(), &salt)
            .map_err(|err| PasswordHashError::Hash {
                message: err.to_string(),
            })?;
        Ok(Self(digest.to_string()))
    }

    /// Reconstruct a digest from a persisted PHC string.
    pub fn from_phc(stored: impl Into<String>) -> Result<Self, PasswordHashError> {
        let stored = stored.into();
        argon2::password_hash::PasswordHash::new(&stored).map_err(|err| {
            PasswordHashError::MalformedDigest {
                message: err.to_string(),
            }
        })?;
        Ok(Self(stored))
    }

    /// Check a candidate password against the digest.
    pub fn verify(&self, candidate: &str) -> bool {
        argon2::password_hash::PasswordHash::new(self.0.as_str())
            .map(|parsed| {
                Argon2::default()
                    .verify_password(candidate.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }

    /// PHC string for persistence adapters.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn derive_produces_verifiable_phc_string() {
        let digest = PasswordDigest::derive("sekret").expect("derive digest");
        assert!(digest.as_str().starts_with("$argon2"));
        assert!(digest.verify("sekret"));
        assert!(!digest.verify("wrong"));
    }

    #[rstest]
    fn derive_salts_each_digest_independently() {
        let first = PasswordDigest::derive("sekret").expect("derive digest");
        let second = PasswordDigest::derive("sekret").expect("derive digest");
        assert_ne!(first, second);
    }

    #[rstest]
    fn stored_digests_round_trip() {
        let digest = PasswordDigest::derive("sekret").expect("derive digest");
        let restored = PasswordDigest::from_phc(digest.as_str()).expect("parse stored digest");
        assert!(restored.verify("sekret"));
    }

    #[rstest]
    fn malformed_stored_digests_are_rejected() {
        let err = PasswordDigest::from_phc("not-a-phc-string").expect_err("must fail");
        assert!(matches!(err, PasswordHashError::MalformedDigest { .. }));
    }
}
