/*
[INPUT]:  Message bytes and API secret
[OUTPUT]: Lowercase hex HMAC-SHA384 signatures
[POS]:    Auth layer - cryptographic signing for request authentication
[UPDATE]: When changing signing algorithm or digest encoding
*/

use hmac::{Hmac, Mac};
use sha2::Sha384;

use super::Credentials;

type HmacSha384 = Hmac<Sha384>;

/// HMAC-SHA384 signer keyed by the raw API secret
#[derive(Clone)]
pub struct HmacSigner {
    secret: Vec<u8>,
}

impl HmacSigner {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
        }
    }

    pub fn from_credentials(credentials: &Credentials) -> Self {
        Self::new(credentials.api_secret())
    }

    /// Sign a message and return the hex-encoded digest
    pub fn sign(&self, message: &[u8]) -> String {
        let mut mac = HmacSha384::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(message);
        hex::encode(mac.finalize().into_bytes())
    }

    /// Verify a hex-encoded signature against a message
    pub fn verify(&self, message: &[u8], signature_hex: &str) -> bool {
        let Ok(expected) = hex::decode(signature_hex) else {
            return false;
        };
        let Ok(mut mac) = HmacSha384::new_from_slice(&self.secret) else {
            return false;
        };
        mac.update(message);
        mac.verify_slice(&expected).is_ok()
    }
}

impl std::fmt::Debug for HmacSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacSigner")
            .field("secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 4231 test case 2
    const RFC4231_KEY: &str = "Jefe";
    const RFC4231_DATA: &str = "what do ya want for nothing?";
    const RFC4231_SHA384: &str = "af45d2e376484031617f78d2b58a6b1b9c7ef464f5a01b47e42ec3736322445e8e2240ca5e69e2c78b3239ecfab21649";

    #[test]
    fn test_sign_matches_rfc4231_vector() {
        let signer = HmacSigner::new(RFC4231_KEY);
        assert_eq!(signer.sign(RFC4231_DATA.as_bytes()), RFC4231_SHA384);
    }

    #[test]
    fn test_signature_is_hex_sha384() {
        let signer = HmacSigner::new("secret");
        let signature = signer.sign(b"payload");

        assert_eq!(signature.len(), 96);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_sign_and_verify() {
        let signer = HmacSigner::new("secret");
        let signature = signer.sign(b"payload");

        assert!(signer.verify(b"payload", &signature));
        assert!(!signer.verify(b"other", &signature));
        assert!(!HmacSigner::new("other-secret").verify(b"payload", &signature));
        assert!(!signer.verify(b"payload", "not-hex"));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let signer = HmacSigner::new("top-secret");
        assert!(!format!("{signer:?}").contains("top-secret"));
    }
}
