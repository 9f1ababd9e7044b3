//! Administrator password verification.
//!
//! The config stores only the lowercase hex SHA-256 of the admin password.
//! The CLI `hash-password` command produces that value via [`sha256_hex`].

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Lowercase hex SHA-256 of the given string.
pub fn sha256_hex(input: &str) -> String {
    use std::fmt::Write as _;
    let digest = Sha256::digest(input.as_bytes());
    let mut out = String::with_capacity(64);
    for byte in digest {
        let _ = write!(out, "{byte:02x}");
    }
    out
}

/// Verify an administrator sign-in attempt.
///
/// True only when the username matches exactly AND the hash of the supplied
/// password equals the configured hash. The hash comparison is constant-time.
/// An empty configured hash fails closed.
pub fn verify_admin(
    username: &str,
    password: &str,
    configured_user: &str,
    configured_hash: &str,
) -> bool {
    let configured = configured_hash.trim().to_ascii_lowercase();
    if configured.is_empty() || username != configured_user {
        return false;
    }
    let supplied = sha256_hex(password);
    supplied.as_bytes().ct_eq(configured.as_bytes()).into()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_hex_known_vector() {
        // echo -n "abc" | sha256sum
        assert_eq!(
            sha256_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn correct_credentials_verify() {
        let hash = sha256_hex("hunter2");
        assert!(verify_admin("admin", "hunter2", "admin", &hash));
    }

    #[test]
    fn wrong_password_rejected() {
        let hash = sha256_hex("hunter2");
        assert!(!verify_admin("admin", "hunter3", "admin", &hash));
        assert!(!verify_admin("admin", "", "admin", &hash));
    }

    #[test]
    fn wrong_username_rejected() {
        let hash = sha256_hex("hunter2");
        assert!(!verify_admin("root", "hunter2", "admin", &hash));
        assert!(!verify_admin("Admin", "hunter2", "admin", &hash));
    }

    #[test]
    fn empty_configured_hash_fails_closed() {
        assert!(!verify_admin("admin", "hunter2", "admin", ""));
        assert!(!verify_admin("admin", "", "admin", "   "));
    }

    #[test]
    fn configured_hash_case_insensitive() {
        let hash = sha256_hex("hunter2").to_uppercase();
        assert!(verify_admin("admin", "hunter2", "admin", &hash));
    }
}
