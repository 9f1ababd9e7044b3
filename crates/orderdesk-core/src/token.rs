//! Stateless signed editor tokens.
//!
//! Token shape: `base64url(claims_json) + "." + base64url(hmac_sha256_sig)`.
//! Verification recomputes the signature with the server secret, so no
//! server-side token registry is needed. Tokens survive process restarts
//! and work across independent instances.

use crate::error::{OrderdeskError, Result};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

pub const MIN_HOURS: u32 = 1;
pub const MAX_HOURS: u32 = 72;

/// Signed token payload. Field order is fixed by the struct declaration, so
/// the serialized bytes (and therefore the signature) are deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorClaims {
    pub role: String,
    pub company: String,
    /// Issued-at, unix seconds.
    pub iat: i64,
    /// Expiry, unix seconds.
    pub exp: i64,
}

/// Mint an editor token for `company`, valid for `hours_valid` hours.
pub fn issue(secret: &str, company: &str, hours_valid: u32) -> Result<String> {
    issue_at(secret, company, hours_valid, chrono::Utc::now().timestamp())
}

pub fn issue_at(secret: &str, company: &str, hours_valid: u32, now: i64) -> Result<String> {
    if secret.is_empty() {
        return Err(OrderdeskError::MissingSecret);
    }
    if !(MIN_HOURS..=MAX_HOURS).contains(&hours_valid) {
        return Err(OrderdeskError::InvalidHours {
            min: MIN_HOURS,
            max: MAX_HOURS,
            got: hours_valid,
        });
    }
    let claims = EditorClaims {
        role: "editor".to_string(),
        company: company.to_string(),
        iat: now,
        exp: now + i64::from(hours_valid) * 3600,
    };
    let body = serde_json::to_vec(&claims)?;
    let sig = mac(secret, &body).finalize().into_bytes();
    Ok(format!(
        "{}.{}",
        URL_SAFE_NO_PAD.encode(&body),
        URL_SAFE_NO_PAD.encode(sig)
    ))
}

/// Verify a token and return its claims, or `None` for anything invalid:
/// malformed encoding, signature mismatch, wrong role, or past expiry.
///
/// The signature is checked in constant time BEFORE the payload is parsed,
/// so an attacker cannot forge claims or learn which check failed.
pub fn verify(secret: &str, token: &str) -> Option<EditorClaims> {
    verify_at(secret, token, chrono::Utc::now().timestamp())
}

pub fn verify_at(secret: &str, token: &str, now: i64) -> Option<EditorClaims> {
    if secret.is_empty() {
        return None;
    }
    let (body_b64, sig_b64) = token.split_once('.')?;
    let body = URL_SAFE_NO_PAD.decode(body_b64).ok()?;
    let sig = URL_SAFE_NO_PAD.decode(sig_b64).ok()?;
    mac(secret, &body).verify_slice(&sig).ok()?;

    let claims: EditorClaims = serde_json::from_slice(&body).ok()?;
    if claims.role != "editor" || now > claims.exp {
        return None;
    }
    Some(claims)
}

fn mac(secret: &str, body: &[u8]) -> HmacSha256 {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(body);
    mac
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test_secret";

    #[test]
    fn issue_then_verify_roundtrips_claims() {
        for hours in [MIN_HOURS, 4, MAX_HOURS] {
            let token = issue_at(SECRET, "Acme Logistics", hours, 1_700_000_000).unwrap();
            let claims = verify_at(SECRET, &token, 1_700_000_000).unwrap();
            assert_eq!(claims.role, "editor");
            assert_eq!(claims.company, "Acme Logistics");
            assert_eq!(claims.exp, 1_700_000_000 + i64::from(hours) * 3600);
        }
    }

    #[test]
    fn expired_token_verifies_to_none() {
        let token = issue_at(SECRET, "Acme", 1, 1_700_000_000).unwrap();
        // One second past expiry.
        assert!(verify_at(SECRET, &token, 1_700_000_000 + 3601).is_none());
        // Exactly at expiry is still valid.
        assert!(verify_at(SECRET, &token, 1_700_000_000 + 3600).is_some());
    }

    #[test]
    fn tampered_payload_fails_verification() {
        let token = issue_at(SECRET, "Acme", 4, 1_700_000_000).unwrap();
        let (body_b64, sig_b64) = token.split_once('.').unwrap();

        // Re-encode a doctored payload with the original signature.
        let mut body = URL_SAFE_NO_PAD.decode(body_b64).unwrap();
        let pos = body.iter().position(|b| *b == b'A').unwrap();
        body[pos] = b'Z';
        let forged = format!("{}.{}", URL_SAFE_NO_PAD.encode(&body), sig_b64);
        assert!(verify_at(SECRET, &forged, 1_700_000_000).is_none());
    }

    #[test]
    fn tampered_signature_fails_verification() {
        let token = issue_at(SECRET, "Acme", 4, 1_700_000_000).unwrap();
        let mut bytes = token.into_bytes();
        let last = bytes.len() - 1;
        bytes[last] = if bytes[last] == b'x' { b'y' } else { b'x' };
        let forged = String::from_utf8(bytes).unwrap();
        assert!(verify_at(SECRET, &forged, 1_700_000_000).is_none());
    }

    #[test]
    fn wrong_secret_fails_verification() {
        let token = issue_at(SECRET, "Acme", 4, 1_700_000_000).unwrap();
        assert!(verify_at("other_secret", &token, 1_700_000_000).is_none());
    }

    #[test]
    fn hours_out_of_range_is_rejected() {
        assert!(matches!(
            issue_at(SECRET, "Acme", 0, 0),
            Err(OrderdeskError::InvalidHours { got: 0, .. })
        ));
        assert!(matches!(
            issue_at(SECRET, "Acme", 73, 0),
            Err(OrderdeskError::InvalidHours { got: 73, .. })
        ));
    }

    #[test]
    fn empty_secret_fails_closed() {
        assert!(matches!(
            issue_at("", "Acme", 4, 0),
            Err(OrderdeskError::MissingSecret)
        ));
        let token = issue_at(SECRET, "Acme", 4, 1_700_000_000).unwrap();
        assert!(verify_at("", &token, 1_700_000_000).is_none());
    }

    #[test]
    fn garbage_tokens_verify_to_none() {
        for garbage in ["", "no-dot", "a.b", "!!!.???", "a.b.c"] {
            assert!(verify_at(SECRET, garbage, 0).is_none(), "{garbage:?}");
        }
    }
}
