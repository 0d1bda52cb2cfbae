//! Password hashing: PBKDF2-SHA256 with a per-user random salt.
//!
//! Stored format: `pbkdf2-sha256$<iterations>$<salt b64>$<digest b64>`.
//! Verification never errors — a malformed stored hash just fails to match.

use base64::engine::general_purpose::STANDARD_NO_PAD as B64;
use base64::Engine;
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use subtle::ConstantTimeEq;

pub const PBKDF2_ITERATIONS: u32 = 600_000;
const SALT_LENGTH: usize = 16;
const DIGEST_LENGTH: usize = 32;
const SCHEME: &str = "pbkdf2-sha256";

pub fn hash_password(password: &str) -> String {
    let salt = generate_salt();
    let digest = derive(password, &salt, PBKDF2_ITERATIONS);
    format!(
        "{SCHEME}${PBKDF2_ITERATIONS}${}${}",
        B64.encode(salt),
        B64.encode(digest)
    )
}

pub fn verify_password(password: &str, stored: &str) -> bool {
    let mut parts = stored.split('$');
    let (Some(scheme), Some(iterations), Some(salt), Some(digest)) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    if scheme != SCHEME || parts.next().is_some() {
        return false;
    }
    let Ok(iterations) = iterations.parse::<u32>() else {
        return false;
    };
    let (Ok(salt), Ok(expected)) = (B64.decode(salt), B64.decode(digest)) else {
        return false;
    };

    let actual = derive(password, &salt, iterations);
    actual.ct_eq(&expected).into()
}

fn derive(password: &str, salt: &[u8], iterations: u32) -> [u8; DIGEST_LENGTH] {
    let mut digest = [0u8; DIGEST_LENGTH];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut digest);
    digest
}

fn generate_salt() -> [u8; SALT_LENGTH] {
    use rand::RngCore;
    let mut salt = [0u8; SALT_LENGTH];
    rand::thread_rng().fill_bytes(&mut salt);
    salt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_roundtrip() {
        let stored = hash_password("correct horse battery staple");
        assert!(verify_password("correct horse battery staple", &stored));
    }

    #[test]
    fn wrong_password_rejected() {
        let stored = hash_password("password-one");
        assert!(!verify_password("password-two", &stored));
    }

    #[test]
    fn salts_are_unique_per_hash() {
        let h1 = hash_password("same password");
        let h2 = hash_password("same password");
        assert_ne!(h1, h2);
        // But both verify
        assert!(verify_password("same password", &h1));
        assert!(verify_password("same password", &h2));
    }

    #[test]
    fn malformed_stored_hash_rejected() {
        assert!(!verify_password("anything", ""));
        assert!(!verify_password("anything", "not-a-hash"));
        assert!(!verify_password("anything", "pbkdf2-sha256$abc$!!$!!"));
        assert!(!verify_password("anything", "md5$1$c2FsdA$aGFzaA"));
        assert!(!verify_password("anything", "pbkdf2-sha256$1$c2FsdA$aGFzaA$extra"));
    }

    #[test]
    fn stored_format_has_scheme_prefix() {
        let stored = hash_password("pw");
        assert!(stored.starts_with("pbkdf2-sha256$600000$"));
        assert_eq!(stored.split('$').count(), 4);
    }
}
