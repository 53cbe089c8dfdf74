// src/auth/token.rs
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

pub const SESSION_TOKEN_BYTES: usize = 32;

/// Random session token from the OS RNG.
pub fn new_session_token() -> String {
    generate_token(&mut OsRng, SESSION_TOKEN_BYTES)
}

/// URL-safe base64 (no padding) over `nbytes` random bytes, so the token can
/// sit in a cookie without escaping.
pub fn generate_token<R: RngCore>(rng: &mut R, nbytes: usize) -> String {
    let mut buf = vec![0u8; nbytes];
    rng.fill_bytes(&mut buf);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buf)
}

/// SHA-256 of the token. Only this digest is ever kept server side.
pub fn hash_token(token: &str) -> [u8; 32] {
    Sha256::digest(token.as_bytes()).into()
}

/// Compares two byte strings without short-circuiting on the first mismatch.
pub fn hashes_equal(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |diff, (x, y)| diff | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn token_is_cookie_safe() {
        let mut rng = StdRng::seed_from_u64(7);
        let t = generate_token(&mut rng, SESSION_TOKEN_BYTES);

        assert!(t
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        assert_eq!(t.len(), 43);
    }

    #[test]
    fn tokens_differ_between_calls() {
        assert_ne!(new_session_token(), new_session_token());
    }

    #[test]
    fn hash_compare() {
        let a = hash_token("admin123");
        let b = hash_token("admin123");
        let c = hash_token("admin124");

        assert!(hashes_equal(&a, &b));
        assert!(!hashes_equal(&a, &c));
        assert!(!hashes_equal(&a, &c[..16]));
    }
}
