//! Webhook signature verification.
//!
//! The platform signs `body ‖ timestamp` with HMAC-SHA256 keyed by the API
//! key and sends `v=<unix millis>,d=<hex digest>` in the signature header.

use std::sync::LazyLock;

use chrono::Utc;
use hmac::{Hmac, Mac};
use regex::Regex;
use sha2::Sha256;

use crate::constants::DEFAULT_SIGNATURE_TOLERANCE_SECS;

type HmacSha256 = Hmac<Sha256>;

static SIGNATURE_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v=(\d+),d=([0-9a-fA-F]+)$").unwrap());

/// Checks signatures against a shared secret.
///
/// Fails closed: no secret, no header, a malformed header or a stale
/// timestamp all yield `false`.
#[derive(Clone)]
pub struct SignatureVerifier {
    secret: Option<String>,
    tolerance_ms: u64,
}

impl std::fmt::Debug for SignatureVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignatureVerifier")
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .field("tolerance_ms", &self.tolerance_ms)
            .finish()
    }
}

impl SignatureVerifier {
    #[must_use]
    pub fn new(secret: Option<String>) -> Self {
        Self {
            secret: secret.filter(|s| !s.is_empty()),
            tolerance_ms: DEFAULT_SIGNATURE_TOLERANCE_SECS.saturating_mul(1000),
        }
    }

    /// Replay window around the verifier's clock.
    #[must_use]
    pub fn with_tolerance_secs(self, secs: u64) -> Self {
        Self { tolerance_ms: secs.saturating_mul(1000), ..self }
    }

    pub fn has_secret(&self) -> bool {
        self.secret.is_some()
    }

    /// Verifies against the current wall clock.
    pub fn verify(&self, body: &[u8], signature: Option<&str>) -> bool {
        self.verify_at(body, signature, Utc::now().timestamp_millis())
    }

    /// Verifies as if the current time were `now_ms` (unix millis).
    pub fn verify_at(&self, body: &[u8], signature: Option<&str>, now_ms: i64) -> bool {
        let (Some(secret), Some(signature)) = (self.secret.as_deref(), signature) else {
            return false;
        };
        let Some(captures) = SIGNATURE_FORMAT.captures(signature.trim()) else {
            tracing::debug!("signature header has unexpected format");
            return false;
        };
        let stamp = &captures[1];
        let Ok(signed_at) = stamp.parse::<i64>() else {
            return false;
        };
        if signed_at.abs_diff(now_ms) > self.tolerance_ms {
            tracing::debug!(signed_at, now_ms, "signature timestamp outside tolerance");
            return false;
        }
        let Ok(digest) = hex::decode(&captures[2]) else {
            return false;
        };
        let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
            return false;
        };
        mac.update(body);
        mac.update(stamp.as_bytes());
        mac.verify_slice(&digest).is_ok()
    }
}

/// Produces a signature header value for `body` signed at `timestamp_ms`.
#[must_use]
pub fn sign(body: &[u8], secret: &str, timestamp_ms: i64) -> String {
    let stamp = timestamp_ms.to_string();
    // HMAC pads or hashes keys of any length; `new_from_slice` only errors
    // for fixed-key MACs, so this cannot fail.
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(body);
    mac.update(stamp.as_bytes());
    format!("v={stamp},d={}", hex::encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "key_test_secret";
    const NOW: i64 = 1_730_000_000_000;
    const BODY: &[u8] = br#"{"event":"call_ended","call":{"call_id":"abc"}}"#;

    fn verifier() -> SignatureVerifier {
        SignatureVerifier::new(Some(SECRET.to_owned()))
    }

    #[test]
    fn test_valid_signature_accepted() {
        let header = sign(BODY, SECRET, NOW);
        assert!(verifier().verify_at(BODY, Some(&header), NOW));
    }

    #[test]
    fn test_missing_header_rejected() {
        assert!(!verifier().verify_at(BODY, None, NOW));
    }

    #[test]
    fn test_missing_secret_rejected() {
        let header = sign(BODY, SECRET, NOW);
        assert!(!SignatureVerifier::new(None).verify_at(BODY, Some(&header), NOW));
        assert!(!SignatureVerifier::new(Some(String::new())).verify_at(BODY, Some(&header), NOW));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let header = sign(BODY, "another_key", NOW);
        assert!(!verifier().verify_at(BODY, Some(&header), NOW));
    }

    #[test]
    fn test_body_is_byte_exact() {
        let header = sign(BODY, SECRET, NOW);
        let reformatted = br#"{"event": "call_ended", "call": {"call_id": "abc"}}"#;
        assert!(!verifier().verify_at(reformatted, Some(&header), NOW));
    }

    #[test]
    fn test_stale_timestamp_rejected() {
        let header = sign(BODY, SECRET, NOW);
        let six_minutes = 6 * 60 * 1000;
        assert!(!verifier().verify_at(BODY, Some(&header), NOW + six_minutes));
        assert!(verifier().with_tolerance_secs(600).verify_at(BODY, Some(&header), NOW + six_minutes));
    }

    #[test]
    fn test_malformed_header_rejected() {
        for header in ["", "garbage", "v=abc,d=00", "v=1730000000000", "v=1730000000000,d=zz"] {
            assert!(!verifier().verify_at(BODY, Some(header), NOW), "accepted {header:?}");
        }
    }

    #[test]
    fn test_sign_accepts_any_key_length() {
        let long_key = "k".repeat(200);
        let signature = sign(BODY, &long_key, NOW);
        let verifier = SignatureVerifier::new(Some(long_key));
        assert!(verifier.verify_at(BODY, Some(&signature), NOW));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let rendered = format!("{:?}", verifier());
        assert!(!rendered.contains(SECRET));
    }
}
