/*
[INPUT]:  Final parameter set (including request and nonce) and API credentials
[OUTPUT]: Signed header set (X-GEMINI-APIKEY / PAYLOAD / SIGNATURE)
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or header format
*/

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use reqwest::RequestBuilder;
use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE};

use crate::auth::{Credentials, HmacSigner};
use crate::http::{GeminiError, Params, Result};

pub const API_KEY_HEADER: &str = "X-GEMINI-APIKEY";
pub const PAYLOAD_HEADER: &str = "X-GEMINI-PAYLOAD";
pub const SIGNATURE_HEADER: &str = "X-GEMINI-SIGNATURE";

/// Headers authenticating one private request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    pub api_key: String,
    /// Base64 of the exact JSON bytes that were signed
    pub payload: String,
    /// Hex HMAC-SHA384 of `payload`
    pub signature: String,
}

impl SignedHeaders {
    /// Attach the signed headers to a request.
    ///
    /// The body stays empty; the parameters travel only inside the payload header.
    pub fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header(CONTENT_TYPE, "text/plain")
            .header(CACHE_CONTROL, "no-cache")
            .header(API_KEY_HEADER, &self.api_key)
            .header(PAYLOAD_HEADER, &self.payload)
            .header(SIGNATURE_HEADER, &self.signature)
    }

    /// Decode the payload header back into the JSON it carries
    pub fn decode_payload(&self) -> Result<serde_json::Value> {
        let bytes = BASE64
            .decode(&self.payload)
            .map_err(|e| GeminiError::Config(format!("payload header is not base64: {e}")))?;
        serde_json::from_slice(&bytes).map_err(GeminiError::Decode)
    }
}

/// Builds signed headers for private requests
#[derive(Debug, Clone)]
pub struct RequestSigner {
    api_key: String,
    signer: HmacSigner,
}

impl RequestSigner {
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            api_key: credentials.api_key().to_string(),
            signer: HmacSigner::from_credentials(credentials),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Sign a parameter set.
    ///
    /// The set is serialized once; the signature covers the base64 text of those bytes,
    /// not the JSON itself.
    pub fn build_auth_headers(&self, params: &Params) -> Result<SignedHeaders> {
        let json = params.to_json_bytes()?;
        let payload = BASE64.encode(json);
        let signature = self.signer.sign(payload.as_bytes());

        Ok(SignedHeaders {
            api_key: self.api_key.clone(),
            payload,
            signature,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::distributions::Alphanumeric;
    use rand::{Rng, thread_rng};
    use std::collections::HashSet;

    fn request_signer() -> RequestSigner {
        RequestSigner::new(&Credentials::new("mykey", "1234abcd"))
    }

    fn order_params() -> Params {
        Params::new()
            .with("request", "/v1/order/status")
            .with("nonce", 123_456_i64)
            .with("order_id", "18834")
    }

    #[test]
    fn test_headers_are_deterministic() {
        let signer = request_signer();
        let first = signer.build_auth_headers(&order_params()).unwrap();
        let second = signer.build_auth_headers(&order_params()).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.api_key, "mykey");
    }

    #[test]
    fn test_payload_is_base64_of_serialized_params() {
        let signer = request_signer();
        let headers = signer.build_auth_headers(&order_params()).unwrap();

        let decoded = BASE64.decode(&headers.payload).unwrap();
        assert_eq!(
            String::from_utf8(decoded).unwrap(),
            r#"{"nonce":123456,"order_id":"18834","request":"/v1/order/status"}"#
        );
    }

    #[test]
    fn test_signature_covers_base64_payload() {
        let signer = request_signer();
        let headers = signer.build_auth_headers(&order_params()).unwrap();
        let hmac = HmacSigner::new("1234abcd");

        assert_eq!(headers.signature, hmac.sign(headers.payload.as_bytes()));
        assert!(hmac.verify(headers.payload.as_bytes(), &headers.signature));

        let json = order_params().to_json_bytes().unwrap();
        assert_ne!(headers.signature, hmac.sign(&json));
    }

    #[test]
    fn test_decode_payload_roundtrip() {
        let headers = request_signer().build_auth_headers(&order_params()).unwrap();
        let payload = headers.decode_payload().unwrap();

        assert_eq!(payload["request"], "/v1/order/status");
        assert_eq!(payload["nonce"], 123_456);
        assert_eq!(payload["order_id"], "18834");
    }

    #[test]
    fn test_single_field_change_changes_signature() {
        let signer = request_signer();
        let mut rng = thread_rng();
        let mut signatures = HashSet::new();

        for _ in 0..1_000 {
            let value: String = (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(16)
                .map(char::from)
                .collect();
            let base = Params::new()
                .with("symbol", "btcusd")
                .with("client_order_id", value.clone());
            let altered = base.clone().with("client_order_id", format!("{value}x"));

            let a = signer.build_auth_headers(&base).unwrap();
            let b = signer.build_auth_headers(&altered).unwrap();

            assert_ne!(a.payload, b.payload);
            assert_ne!(a.signature, b.signature);
            signatures.insert(a.signature);
        }

        assert_eq!(signatures.len(), 1_000);
    }
}
