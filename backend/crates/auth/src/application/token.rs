//! Session Token
//!
//! The cookie value is `"{session_id}.{signature}"` where the signature is
//! the URL-safe base64 (unpadded) HMAC-SHA256 of the session id string under
//! the application session secret. The token only references a server-side
//! session; it carries no claims of its own, so a forged or tampered token
//! is rejected before the store is ever consulted.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

use platform::crypto::{constant_time_eq, from_base64_url, to_base64_url};

type HmacSha256 = Hmac<Sha256>;

/// Sign a session ID into a cookie token
pub fn generate_session_token(session_id: Uuid, secret: &[u8; 32]) -> String {
    let id_str = session_id.to_string();
    let signature = sign(id_str.as_bytes(), secret);
    format!("{}.{}", id_str, to_base64_url(&signature))
}

/// Parse and verify a cookie token, returning the session ID
///
/// Returns `None` for malformed tokens and for valid-looking tokens whose
/// signature does not verify. Verification is constant-time.
pub fn parse_session_token(token: &str, secret: &[u8; 32]) -> Option<Uuid> {
    let (id_str, sig_str) = token.split_once('.')?;

    let session_id = Uuid::parse_str(id_str).ok()?;
    let provided = from_base64_url(sig_str).ok()?;
    let expected = sign(id_str.as_bytes(), secret);

    if constant_time_eq(&provided, &expected) {
        Some(session_id)
    } else {
        None
    }
}

fn sign(data: &[u8], secret: &[u8; 32]) -> [u8; 32] {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: [u8; 32] = [7u8; 32];

    #[test]
    fn test_token_roundtrip() {
        let session_id = Uuid::new_v4();
        let token = generate_session_token(session_id, &SECRET);
        assert_eq!(parse_session_token(&token, &SECRET), Some(session_id));
    }

    #[test]
    fn test_token_rejects_wrong_secret() {
        let session_id = Uuid::new_v4();
        let token = generate_session_token(session_id, &SECRET);
        let other_secret = [8u8; 32];
        assert_eq!(parse_session_token(&token, &other_secret), None);
    }

    #[test]
    fn test_token_rejects_tampered_id() {
        let token = generate_session_token(Uuid::new_v4(), &SECRET);
        let (_, sig) = token.split_once('.').unwrap();
        let forged = format!("{}.{}", Uuid::new_v4(), sig);
        assert_eq!(parse_session_token(&forged, &SECRET), None);
    }

    #[test]
    fn test_token_rejects_malformed_input() {
        assert_eq!(parse_session_token("", &SECRET), None);
        assert_eq!(parse_session_token("no-dot-here", &SECRET), None);
        assert_eq!(parse_session_token("not-a-uuid.c2ln", &SECRET), None);

        let session_id = Uuid::new_v4();
        let bad_sig = format!("{}.!!!not-base64!!!", session_id);
        assert_eq!(parse_session_token(&bad_sig, &SECRET), None);
    }
}
