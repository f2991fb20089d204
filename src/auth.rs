//! Bearer-token signing for the Constellix v4 API.
//!
//! The API proves possession of the secret key without transmitting it: each
//! request carries `<apiKey>:<base64(HMAC-SHA1(secret, epochMillis))>:<epochMillis>`
//! and the server accepts the token for a short window around its timestamp.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use ring::hmac;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::Error;

#[derive(Debug)]
pub struct TokenSigner {
    api_key: String,
    secret_key: String,
}

impl TokenSigner {
    pub fn new(api_key: &str, secret_key: &str) -> Result<Self, Error> {
        if api_key.is_empty() {
            return Err(Error::Credential("API key is empty".to_string()));
        }
        if secret_key.is_empty() {
            return Err(Error::Credential("secret key is empty".to_string()));
        }
        Ok(Self {
            api_key: api_key.to_string(),
            secret_key: secret_key.to_string(),
        })
    }

    /// Sign a token for the current wall-clock time. The clock is sampled
    /// freshly on every call.
    pub fn sign(&self) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before Unix epoch");
        self.sign_at(now.as_millis() as u64)
    }

    /// Sign a token for a fixed timestamp. Deterministic: the same
    /// credentials and timestamp always produce the same token.
    pub fn sign_at(&self, epoch_millis: u64) -> String {
        let timestamp = epoch_millis.to_string();
        let key = hmac::Key::new(hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY, self.secret_key.as_bytes());
        let tag = hmac::sign(&key, timestamp.as_bytes());
        let signature = STANDARD.encode(tag.as_ref());

        format!("{}:{}:{}", self.api_key, signature, timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_sign_at_known_value() {
        let signer = TokenSigner::new("K1", "S1").unwrap();
        assert_eq!(signer.sign_at(1000), "K1:9fRPigkbzs4EteLbuv2eFpboCgg=:1000");
    }

    #[test]
    fn test_sign_at_is_deterministic() {
        let signer = TokenSigner::new("acc", "sekrit").unwrap();
        let first = signer.sign_at(1712345678901);
        let second = signer.sign_at(1712345678901);
        assert_eq!(first, second);
        assert_eq!(first, "acc:8HTmXyWOXY+y1ig9blE9G/inuFA=:1712345678901");
    }

    #[test]
    fn test_timestamp_changes_signature() {
        let signer = TokenSigner::new("K1", "S1").unwrap();
        assert_eq!(signer.sign_at(1001), "K1:9rYfH+nXp8mk3bI1YWAJEAWQG64=:1001");
        assert_ne!(signer.sign_at(1000), signer.sign_at(1001));
    }

    #[test]
    fn test_token_format() {
        let signer = TokenSigner::new("key", "secret").unwrap();
        let token = signer.sign();
        let fields: Vec<&str> = token.split(':').collect();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0], "key");
        assert!(fields[2].parse::<u64>().is_ok());
    }

    #[test]
    fn test_empty_credentials_rejected() {
        assert_matches!(TokenSigner::new("", "secret"), Err(Error::Credential(_)));
        assert_matches!(TokenSigner::new("key", ""), Err(Error::Credential(_)));
    }
}
