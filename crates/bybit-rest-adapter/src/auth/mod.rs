/*
[INPUT]:  API key, API secret, and signing key selection
[OUTPUT]: Redacted credentials and hex HMAC-SHA256 signatures
[POS]:    Auth layer - handles Bybit API request authentication
[UPDATE]: When credential loading or signature methods change
*/

pub mod credentials;
pub mod signer;

pub use credentials::Credentials;
pub use signer::{HmacSigner, SigningKeySource, canonical_string};
