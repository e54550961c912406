/*
[INPUT]:  Endpoint-specific request fields
[OUTPUT]: Ordered parameter sets for query strings and signed payloads
[POS]:    HTTP layer - typed parameter model shared by public and private calls
[UPDATE]: When the exchange accepts a new parameter value shape
*/

use std::collections::BTreeMap;

use serde::Serialize;

use crate::http::{GeminiError, Result};

/// Key the private pipeline fills with the request path
pub const REQUEST_KEY: &str = "request";
/// Key the private pipeline fills with a fresh nonce
pub const NONCE_KEY: &str = "nonce";

/// A single parameter value accepted by the exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Bool(bool),
    List(Vec<String>),
}

impl ParamValue {
    /// Borrow the value if it is a plain string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(value) => Some(value),
            _ => None,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ParamValue::Str(_) => "string",
            ParamValue::Int(_) => "integer",
            ParamValue::Bool(_) => "boolean",
            ParamValue::List(_) => "list",
        }
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Str(value.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        ParamValue::List(value)
    }
}

/// Parameter set for one request.
///
/// Keys are kept sorted so the same set always serializes to the same bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder-style insert that skips `None`
    pub fn with_opt<V: Into<ParamValue>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.insert_opt(key, value);
        self
    }

    /// Insert or replace a value, returning the previous one
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Option<ParamValue> {
        self.0.insert(key.into(), value.into())
    }

    pub fn insert_opt<V: Into<ParamValue>>(&mut self, key: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Render the set as URL query pairs. Only string values are allowed.
    pub fn to_query_pairs(&self) -> Result<Vec<(&str, &str)>> {
        self.0
            .iter()
            .map(|(key, value)| match value.as_str() {
                Some(text) => Ok((key.as_str(), text)),
                None => {
                    tracing::debug!(key = %key, kind = value.kind(), "rejecting non-string query parameter");
                    Err(GeminiError::InvalidParameter { key: key.clone() })
                }
            })
            .collect()
    }

    /// Serialize the set to the JSON bytes that get signed
    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(GeminiError::Encoding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_pairs_render_strings() {
        let params = Params::new()
            .with("limit_bids", "5")
            .with("limit_asks", "10");

        let pairs = params.to_query_pairs().expect("string params");
        assert_eq!(pairs, vec![("limit_asks", "10"), ("limit_bids", "5")]);
    }

    #[test]
    fn query_pairs_reject_non_strings() {
        let params = Params::new().with("limit_trades", 50_i64);

        match params.to_query_pairs() {
            Err(GeminiError::InvalidParameter { key }) => assert_eq!(key, "limit_trades"),
            other => panic!("expected invalid parameter, got {other:?}"),
        }
    }

    #[test]
    fn json_serialization_is_ordered_and_typed() {
        let params = Params::new()
            .with("symbol", "btcusd")
            .with("nonce", 42_i64)
            .with("is_hidden", false)
            .with("options", vec!["maker-or-cancel".to_string()]);

        let json = String::from_utf8(params.to_json_bytes().unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"is_hidden":false,"nonce":42,"options":["maker-or-cancel"],"symbol":"btcusd"}"#
        );
    }

    #[test]
    fn insert_replaces_reserved_keys() {
        let mut params = Params::new().with(REQUEST_KEY, "/spoofed");
        let previous = params.insert(REQUEST_KEY, "/v1/balances");

        assert_eq!(previous, Some(ParamValue::Str("/spoofed".to_string())));
        assert_eq!(params.get(REQUEST_KEY).and_then(ParamValue::as_str), Some("/v1/balances"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn with_opt_skips_none() {
        let params = Params::new()
            .with_opt("since", None::<String>)
            .with_opt("limit", Some("3"));

        assert!(!params.contains_key("since"));
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["limit"]);
    }
}
