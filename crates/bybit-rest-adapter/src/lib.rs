/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Bybit adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;

// Re-export commonly used types from auth
pub use auth::{Credentials, HmacSigner, SigningKeySource};

// Re-export commonly used types from http
pub use http::{
    BybitClient,
    BybitError,
    ClientConfig,
    Environment,
    RequestSigner,
    Result,
    SignedHeaders,
    encode_query,
};
