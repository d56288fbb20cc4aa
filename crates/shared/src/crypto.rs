//! Cryptographic utilities for unsubscribe tokens and admin token hashing.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

/// Length of the hex-encoded unsubscribe token embedded in email links.
pub const UNSUBSCRIBE_TOKEN_LEN: usize = 32;

/// Computes SHA-256 hash of the input and returns it as a hex string.
pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

/// Derives the unsubscribe token for an email address.
///
/// The token is an HMAC-SHA256 over the lowercased address, keyed by the
/// server secret, hex-encoded and truncated to [`UNSUBSCRIBE_TOKEN_LEN`]
/// characters. It lets an unauthenticated link recipient opt out of
/// notifications without letting third parties opt out addresses they do
/// not control.
pub fn unsubscribe_token(secret: &str, email: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(email.to_lowercase().as_bytes());
    let digest = hex::encode(mac.finalize().into_bytes());
    digest[..UNSUBSCRIBE_TOKEN_LEN].to_string()
}

/// Verifies an unsubscribe token against an email address.
pub fn verify_unsubscribe_token(secret: &str, email: &str, token: &str) -> bool {
    unsubscribe_token(secret, email) == token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_hex() {
        let hash = sha256_hex("test");
        assert_eq!(hash.len(), 64);
        assert_eq!(
            hash,
            "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08"
        );
    }

    #[test]
    fn test_sha256_hex_deterministic() {
        assert_eq!(sha256_hex("same_input"), sha256_hex("same_input"));
    }

    #[test]
    fn test_unsubscribe_token_length() {
        let token = unsubscribe_token("secret", "user@example.com");
        assert_eq!(token.len(), UNSUBSCRIBE_TOKEN_LEN);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_unsubscribe_token_deterministic() {
        let a = unsubscribe_token("secret", "user@example.com");
        let b = unsubscribe_token("secret", "user@example.com");
        assert_eq!(a, b);
    }

    #[test]
    fn test_unsubscribe_token_case_insensitive_email() {
        let lower = unsubscribe_token("secret", "user@example.com");
        let mixed = unsubscribe_token("secret", "User@Example.COM");
        assert_eq!(lower, mixed);
    }

    #[test]
    fn test_unsubscribe_token_differs_per_email() {
        let a = unsubscribe_token("secret", "a@example.com");
        let b = unsubscribe_token("secret", "b@example.com");
        assert_ne!(a, b);
    }

    #[test]
    fn test_unsubscribe_token_differs_per_secret() {
        let a = unsubscribe_token("secret-one", "user@example.com");
        let b = unsubscribe_token("secret-two", "user@example.com");
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_unsubscribe_token() {
        let token = unsubscribe_token("secret", "user@example.com");
        assert!(verify_unsubscribe_token("secret", "user@example.com", &token));
        assert!(verify_unsubscribe_token("secret", "USER@EXAMPLE.COM", &token));
    }

    #[test]
    fn test_verify_rejects_token_for_other_email() {
        let token = unsubscribe_token("secret", "a@example.com");
        assert!(!verify_unsubscribe_token("secret", "b@example.com", &token));
    }

    #[test]
    fn test_verify_rejects_garbage() {
        assert!(!verify_unsubscribe_token(
            "secret",
            "user@example.com",
            "not-a-token"
        ));
        assert!(!verify_unsubscribe_token("secret", "user@example.com", ""));
    }
}
