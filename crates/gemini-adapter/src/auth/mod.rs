/*
[INPUT]:  API credentials and wall-clock time
[OUTPUT]: HMAC signatures and request nonces
[POS]:    Auth layer - primitives behind private endpoint authentication
[UPDATE]: When auth primitives or nonce policy change
*/

pub mod credentials;
pub mod nonce;
pub mod signer;

pub use credentials::{API_KEY_ENV, API_SECRET_ENV, Credentials, env_pair, non_blank_pair};
pub use nonce::{ClockNonce, NonceSource, SequenceNonce};
pub use signer::HmacSigner;
