/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod client;
pub mod endpoint;
pub mod envelope;
pub mod error;
pub mod fund;
pub mod order;
pub mod params;
pub mod public;
pub mod signature;

pub use error::{GeminiError, Result};
pub use envelope::ApiError;
pub use params::{ParamValue, Params};
pub use signature::{RequestSigner, SignedHeaders};

pub use client::{
    BASE_URL, ClientConfig, Environment, GeminiClient, SANDBOX_BASE_URL, SANDBOX_WS_BASE_URL,
    WS_BASE_URL,
};
pub use endpoint::{Access, Endpoint};
