/*
[INPUT]:  Declarative endpoint descriptors (path, access, parameters, response type)
[OUTPUT]: Typed responses through a single generic caller
[POS]:    HTTP layer - glue between request structs and the dispatch pipeline
[UPDATE]: When endpoint routing or response decoding changes
*/

use std::borrow::Cow;

use serde::de::DeserializeOwned;

use crate::http::{GeminiClient, GeminiError, Params, Result};

/// Whether an endpoint needs a signed request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// GET with query parameters, no authentication
    Public,
    /// POST with signed headers
    Private,
}

/// One REST endpoint: where it lives, what it sends, what it returns
pub trait Endpoint {
    type Response: DeserializeOwned;

    const ACCESS: Access;

    fn path(&self) -> Cow<'_, str>;

    fn params(&self) -> Params {
        Params::new()
    }
}

/// Percent-encode a caller-supplied value used as one path segment, so `/`, `?` and `#`
/// cannot change the route or the signed `request` field
pub(crate) fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Parameters carrying the optional sub-account selector
pub(crate) fn account_params(account: &Option<String>) -> Params {
    Params::new().with_opt("account", account.as_ref())
}

impl GeminiClient {
    /// Execute an endpoint and decode its success payload
    pub async fn execute<E: Endpoint>(&self, endpoint: &E) -> Result<E::Response> {
        let path = endpoint.path();
        let mut params = endpoint.params();

        let body = match E::ACCESS {
            Access::Public => self.public_call(&path, &params).await?,
            Access::Private => self.private_call(&path, &mut params).await?,
        };

        serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!(path = %path, error = %e, "response did not match expected shape");
            GeminiError::Decode(e)
        })
    }
}
