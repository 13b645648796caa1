//! PBKDF2-SHA256 password hashes, stored as PHC strings
//! (`$pbkdf2-sha256$i=<rounds>,l=32$<salt>$<hash>`).

use pbkdf2::password_hash::{
    Error as HashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
};
use pbkdf2::{Params, Pbkdf2};

/// Iteration count for new hashes. Existing hashes carry their own count.
pub const PBKDF2_ROUNDS: u32 = 29_000;

/// Hashes `password` under a fresh random 16-byte salt.
pub fn hash_password(password: &str) -> Result<String, HashError> {
    let salt = SaltString::encode_b64(&rand::random::<[u8; 16]>())?;
    let params = Params {
        rounds: PBKDF2_ROUNDS,
        output_length: 32,
    };
    let hash = Pbkdf2.hash_password_customized(password.as_bytes(), None, None, params, &salt)?;
    Ok(hash.to_string())
}

/// Checks `password` against a PHC string produced by [`hash_password`].
///
/// The digest comparison is constant-time. Unparseable input never verifies.
pub fn verify_password(password: &str, stored: &str) -> bool {
    PasswordHash::new(stored)
        .and_then(|hash| Pbkdf2.verify_password(password.as_bytes(), &hash))
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_and_hides_plaintext() {
        let stored = hash_password("correct horse").unwrap();
        assert!(!stored.contains("correct horse"));
        assert!(stored.starts_with("$pbkdf2-sha256$i=29000,l=32$"));
        assert!(verify_password("correct horse", &stored));
        assert!(!verify_password("wrong horse", &stored));
    }

    #[test]
    fn salts_differ_between_hashes() {
        assert_ne!(
            hash_password("same-password").unwrap(),
            hash_password("same-password").unwrap()
        );
    }

    #[test]
    fn rounds_are_read_from_the_stored_hash() {
        let salt = SaltString::encode_b64(b"fixed-salt-bytes").unwrap();
        let params = Params {
            rounds: 1_000,
            output_length: 32,
        };
        let stored = Pbkdf2
            .hash_password_customized(b"pw", None, None, params, &salt)
            .unwrap()
            .to_string();
        assert!(verify_password("pw", &stored));
    }

    #[test]
    fn malformed_hashes_never_verify() {
        assert!(!verify_password("x", ""));
        assert!(!verify_password("x", "sha256$00$00"));
        assert!(!verify_password("x", "$md5$abc$def"));
    }
}
