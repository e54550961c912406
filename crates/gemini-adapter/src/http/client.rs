/*
[INPUT]:  HTTP configuration (environment, timeouts), credentials, nonce source
[OUTPUT]: Raw response bodies for public (GET) and private (signed POST) calls
[POS]:    HTTP layer - core client implementation and request dispatch
[UPDATE]: When adding connection options or changing dispatch behavior
*/

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, Url};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::auth::{ClockNonce, Credentials, NonceSource};
use crate::http::params::{NONCE_KEY, REQUEST_KEY};
use crate::http::{GeminiError, Params, RequestSigner, Result, envelope};

/// Base URLs for the Gemini API
pub const BASE_URL: &str = "https://api.gemini.com";
pub const SANDBOX_BASE_URL: &str = "https://api.sandbox.gemini.com";
/// WebSocket hosts; reserved, no streaming client is built on them
pub const WS_BASE_URL: &str = "wss://api.gemini.com";
pub const SANDBOX_WS_BASE_URL: &str = "wss://api.sandbox.gemini.com";

/// Which exchange instance to talk to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Production,
    Sandbox,
}

impl Environment {
    pub fn from_sandbox(sandbox: bool) -> Self {
        if sandbox {
            Environment::Sandbox
        } else {
            Environment::Production
        }
    }

    pub fn rest_base_url(self) -> &'static str {
        match self {
            Environment::Production => BASE_URL,
            Environment::Sandbox => SANDBOX_BASE_URL,
        }
    }

    pub fn ws_base_url(self) -> &'static str {
        match self {
            Environment::Production => WS_BASE_URL,
            Environment::Sandbox => SANDBOX_WS_BASE_URL,
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub environment: Environment,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Production,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: concat!("gemini-adapter/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    pub fn sandbox() -> Self {
        Self {
            environment: Environment::Sandbox,
            ..Self::default()
        }
    }
}

/// Main HTTP client for the Gemini REST API.
///
/// Configuration, credentials and base URL are fixed at construction; cloning shares the
/// underlying connection pool and nonce source.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http_client: Client,
    base_url: Url,
    signer: Option<RequestSigner>,
    nonce_source: Arc<dyn NonceSource>,
}

impl GeminiClient {
    /// Create a client for public endpoints only
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = config.environment.rest_base_url();
        Self::with_base_url(config, None, base_url)
    }

    /// Create a client able to call private endpoints
    pub fn with_credentials(config: ClientConfig, credentials: Credentials) -> Result<Self> {
        let base_url = config.environment.rest_base_url();
        Self::with_base_url(config, Some(credentials), base_url)
    }

    /// Create a client against an explicit base URL (mock servers, proxies)
    pub fn with_base_url(
        config: ClientConfig,
        credentials: Option<Credentials>,
        base_url: &str,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| GeminiError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            signer: credentials.as_ref().map(RequestSigner::new),
            nonce_source: Arc::new(ClockNonce::new()),
        })
    }

    /// Replace the nonce source
    pub fn with_nonce_source(mut self, source: impl NonceSource + 'static) -> Self {
        self.nonce_source = Arc::new(source);
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn has_credentials(&self) -> bool {
        self.signer.is_some()
    }

    /// API key of the configured credentials
    pub fn api_key(&self) -> Option<&str> {
        self.signer.as_ref().map(RequestSigner::api_key)
    }

    /// Full request URL: the endpoint path is appended to the base, keeping any base path prefix
    pub fn url(&self, path: &str) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }

    /// Issue one HTTP round-trip and return the full response body.
    ///
    /// GET renders `params` as query parameters (strings only). Any other method is always
    /// signed, with `params` (or an empty set) as the payload, and sends an empty body.
    pub async fn dispatch(&self, method: Method, path: &str, params: Option<&Params>) -> Result<Vec<u8>> {
        let url = self.url(path)?;
        let mut builder = self.http_client.request(method.clone(), url);

        if method == Method::GET {
            if let Some(params) = params {
                let pairs = params.to_query_pairs()?;
                if !pairs.is_empty() {
                    builder = builder.query(&pairs);
                }
            }
        } else {
            let signer = self.signer.as_ref().ok_or_else(|| GeminiError::MissingCredentials {
                path: path.to_string(),
            })?;
            let empty = Params::new();
            let headers = signer.build_auth_headers(params.unwrap_or(&empty))?;
            builder = headers.apply(builder).body(Vec::new());
        }

        let response = builder.send().await.map_err(GeminiError::Transport)?;
        let status = response.status();
        let body = response.bytes().await.map_err(GeminiError::Body)?;

        debug!(%method, path, status = status.as_u16(), len = body.len(), "response received");
        Ok(body.to_vec())
    }

    /// Call a public endpoint and classify the response envelope
    pub async fn public_call(&self, path: &str, query: &Params) -> Result<Vec<u8>> {
        debug!(path, params = query.len(), "dispatching public request");
        let body = self.dispatch(Method::GET, path, Some(query)).await?;
        envelope::decode(body)
    }

    /// Call a private endpoint.
    ///
    /// `params` gains `request` (the path) and a fresh `nonce` before it is signed; the
    /// caller sees the final set afterwards.
    pub async fn private_call(&self, path: &str, params: &mut Params) -> Result<Vec<u8>> {
        if self.signer.is_none() {
            return Err(GeminiError::MissingCredentials {
                path: path.to_string(),
            });
        }

        let nonce = self.nonce_source.next_nonce();
        params.insert(REQUEST_KEY, path);
        params.insert(NONCE_KEY, nonce);

        debug!(path, nonce, params = params.len(), "dispatching private request");
        let body = self.dispatch(Method::POST, path, Some(&*params)).await?;
        envelope::decode(body)
    }
}
