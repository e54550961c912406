/*
[INPUT]:  YAML configuration file and GEMINI_* environment variables
[OUTPUT]: Validated CLI configuration and a ready GeminiClient
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use gemini_adapter::auth::{API_KEY_ENV, API_SECRET_ENV, env_pair, non_blank_pair};
use gemini_adapter::{ClientConfig, Credentials, Environment, GeminiClient};
use serde::{Deserialize, Serialize};

/// Overrides `environment` when set to `sandbox` or `production`
pub const ENVIRONMENT_ENV: &str = "GEMINI_ENVIRONMENT";

/// Top-level configuration for the command line client
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CliConfig {
    /// Which exchange instance to talk to
    #[serde(default)]
    pub environment: Environment,
    /// API key pair for private commands
    #[serde(default)]
    pub credentials: Option<CredentialsConfig>,
    /// Explicit REST base URL (proxies, mock servers)
    #[serde(default)]
    pub base_url: Option<String>,
    /// Request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Clone, Deserialize, Serialize)]
pub struct CredentialsConfig {
    pub api_key: String,
    pub api_secret: String,
}

impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("parse config {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `GEMINI_*` environment overrides on top of the file values
    pub fn with_env_overrides(self) -> Result<Self> {
        let environment = std::env::var(ENVIRONMENT_ENV).ok();
        let credentials =
            env_pair().map(|(api_key, api_secret)| CredentialsConfig { api_key, api_secret });
        self.with_overrides(environment.as_deref(), credentials)
    }

    fn with_overrides(
        mut self,
        environment: Option<&str>,
        credentials: Option<CredentialsConfig>,
    ) -> Result<Self> {
        if let Some(name) = environment {
            self.environment = match name.trim().to_ascii_lowercase().as_str() {
                "sandbox" => Environment::Sandbox,
                "production" => Environment::Production,
                other => bail!("{ENVIRONMENT_ENV} must be sandbox or production, got {other:?}"),
            };
        }
        if credentials.is_some() {
            self.credentials = credentials;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if let Some(credentials) = &self.credentials {
            let pair = non_blank_pair(
                Some(credentials.api_key.clone()),
                Some(credentials.api_secret.clone()),
            );
            if pair.is_none() {
                bail!(
                    "credentials.api_key and credentials.api_secret must not be blank \
                     (or set {API_KEY_ENV} / {API_SECRET_ENV})"
                );
            }
        }
        if self.timeout_secs == Some(0) {
            bail!("timeout_secs must be greater than zero");
        }
        Ok(())
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig {
            environment: self.environment,
            ..ClientConfig::default()
        };
        if let Some(secs) = self.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        config
    }

    /// Build a client; no network traffic happens here
    pub fn build_client(&self) -> Result<GeminiClient> {
        let credentials = self
            .credentials
            .as_ref()
            .map(|c| Credentials::new(c.api_key.clone(), c.api_secret.clone()));
        let config = self.client_config();
        let base_url = self
            .base_url
            .clone()
            .unwrap_or_else(|| config.environment.rest_base_url().to_string());

        GeminiClient::with_base_url(config, credentials, &base_url).context("build Gemini client")
    }
}
