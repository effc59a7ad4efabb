/*
[INPUT]:  HTTP client configuration, credentials, and endpoint params
[OUTPUT]: Signed HTTP requests and raw response bodies
[POS]:    HTTP layer - REST API communication
[UPDATE]: When changing client behavior or request signing
*/

pub mod client;
pub mod error;
pub mod request;
pub mod signature;

pub use error::{BybitError, Result};
pub use request::encode_query;
pub use signature::{RequestSigner, SignedHeaders};

pub use client::{BybitClient, ClientConfig, Environment};
