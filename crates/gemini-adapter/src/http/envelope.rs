/*
[INPUT]:  Raw response body bytes
[OUTPUT]: Untouched success payload or a typed exchange error
[POS]:    HTTP layer - shared success/error envelope classification
[UPDATE]: When the exchange error envelope changes shape
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::http::{GeminiError, Result};

const ERROR_RESULT: &str = "error";

/// Error envelope returned by the exchange: `{"result":"error","reason":..,"message":..}`
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("[{reason}] {message}")]
pub struct ApiError {
    pub reason: String,
    pub message: String,
}

/// Classify a response body.
///
/// An object whose `result` is `"error"` becomes [`GeminiError::Api`]. Anything else,
/// including bodies that are not JSON at all, is handed back unchanged so the endpoint
/// caller can decode it into its own shape (and fail there if it must).
pub fn decode(body: Vec<u8>) -> Result<Vec<u8>> {
    let envelope = match serde_json::from_slice::<Value>(&body) {
        Ok(value) => value,
        Err(err) => {
            debug!(error = %err, len = body.len(), "response body is not JSON, passing through");
            return Ok(body);
        }
    };

    match error_from_envelope(&envelope) {
        Some(api_error) => {
            warn!(
                reason = %api_error.reason,
                message = %api_error.message,
                "exchange rejected request"
            );
            Err(GeminiError::Api(api_error))
        }
        None => Ok(body),
    }
}

fn error_from_envelope(envelope: &Value) -> Option<ApiError> {
    let object = envelope.as_object()?;
    if object.get("result").and_then(Value::as_str) != Some(ERROR_RESULT) {
        return None;
    }

    Some(ApiError {
        reason: text_field(object.get("reason")),
        message: text_field(object.get("message")),
    })
}

fn text_field(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn success_envelope_is_returned_unchanged() {
        let body = br#"{"result":"ok","foo":1}"#.to_vec();
        let decoded = decode(body.clone()).expect("success body");
        assert_eq!(decoded, body);
    }

    #[test]
    fn error_envelope_becomes_api_error() {
        let body = br#"{"result":"error","reason":"InvalidSignature","message":"bad sig"}"#.to_vec();

        match decode(body) {
            Err(GeminiError::Api(err)) => {
                assert_eq!(err.reason, "InvalidSignature");
                assert_eq!(err.message, "bad sig");
                assert_eq!(err.to_string(), "[InvalidSignature] bad sig");
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[test]
    fn error_envelope_without_message_keeps_reason() {
        let body = br#"{"result":"error","reason":"RateLimited"}"#.to_vec();
        let err = decode(body).unwrap_err();
        assert_eq!(err.api_reason(), Some("RateLimited"));
    }

    #[rstest]
    #[case(b"".to_vec())]
    #[case(b"<html>502 Bad Gateway</html>".to_vec())]
    #[case(b"{\"result\":".to_vec())]
    fn malformed_bodies_pass_through(#[case] body: Vec<u8>) {
        let decoded = decode(body.clone()).expect("malformed body passes through");
        assert_eq!(decoded, body);
    }

    #[rstest]
    #[case(br#"["btcusd","ethusd"]"#.to_vec())]
    #[case(br#"{"bid":"1","ask":"2"}"#.to_vec())]
    #[case(br#"{"result":"ok"}"#.to_vec())]
    #[case(br#"{"result":1}"#.to_vec())]
    fn non_error_shapes_are_success(#[case] body: Vec<u8>) {
        assert_eq!(decode(body.clone()).expect("success"), body);
    }
}
