/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Gemini adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{ClockNonce, Credentials, HmacSigner, NonceSource, SequenceNonce};

// Re-export commonly used types from http
pub use http::{
    Access,
    ApiError,
    ClientConfig,
    Endpoint,
    Environment,
    GeminiClient,
    GeminiError,
    Params,
    ParamValue,
    RequestSigner,
    Result,
};

// Re-export all types
pub use types::*;
