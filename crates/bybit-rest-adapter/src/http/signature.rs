/*
[INPUT]:  HMAC signer, recv window, timestamp, serialized params
[OUTPUT]: Signed X-BAPI-* request headers
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or header format
*/

use crate::auth::HmacSigner;
use crate::http::{BybitError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const HEADER_API_KEY: &str = "X-BAPI-API-KEY";
pub const HEADER_SIGN: &str = "X-BAPI-SIGN";
pub const HEADER_TIMESTAMP: &str = "X-BAPI-TIMESTAMP";
pub const HEADER_SIGN_TYPE: &str = "X-BAPI-SIGN-TYPE";
pub const HEADER_RECV_WINDOW: &str = "X-BAPI-RECV-WINDOW";

/// HMAC-SHA256 sign type
pub const SIGN_TYPE_HMAC: &str = "2";

/// Authentication values attached to one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    pub api_key: String,
    pub signature: String,
    pub timestamp: i64,
    pub recv_window: u64,
}

impl SignedHeaders {
    /// Header name/value pairs in wire order
    pub fn pairs(&self) -> [(&'static str, String); 6] {
        [
            (HEADER_CONTENT_TYPE, "application/json".to_string()),
            (HEADER_API_KEY, self.api_key.clone()),
            (HEADER_SIGN, self.signature.clone()),
            (HEADER_TIMESTAMP, self.timestamp.to_string()),
            (HEADER_SIGN_TYPE, SIGN_TYPE_HMAC.to_string()),
            (HEADER_RECV_WINDOW, self.recv_window.to_string()),
        ]
    }

    /// Encode into a header map, rejecting values that are not valid header text
    pub fn to_header_map(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::with_capacity(6);
        for (name, value) in self.pairs() {
            let invalid = |message: String| BybitError::InvalidHeader { name, message };
            let header = HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(e.to_string()))?;
            let value = HeaderValue::from_str(&value).map_err(|e| invalid(e.to_string()))?;
            headers.insert(header, value);
        }
        Ok(headers)
    }
}

/// Signs request params and produces the header set for one request
#[derive(Debug, Clone)]
pub struct RequestSigner {
    signer: HmacSigner,
    recv_window: u64,
}

impl RequestSigner {
    pub fn new(signer: HmacSigner, recv_window: u64) -> Self {
        Self {
            signer,
            recv_window,
        }
    }

    pub fn recv_window(&self) -> u64 {
        self.recv_window
    }

    pub fn api_key(&self) -> &str {
        self.signer.credentials().api_key()
    }

    /// Sign `params` (query string or JSON body) at `timestamp`
    pub fn sign_request(&self, timestamp: i64, params: &str) -> SignedHeaders {
        SignedHeaders {
            api_key: self.api_key().to_string(),
            signature: self.signer.sign_params(timestamp, self.recv_window, params),
            timestamp,
            recv_window: self.recv_window,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{Credentials, SigningKeySource};

    fn request_signer(api_key: &str) -> RequestSigner {
        let signer = HmacSigner::new(Credentials::new(api_key, "secret"), SigningKeySource::ApiKey);
        RequestSigner::new(signer, 5000)
    }

    #[test]
    fn test_sign_request_fields() {
        let signed = request_signer("my-key").sign_request(1_700_000_000_000, "category=spot");
        assert_eq!(signed.api_key, "my-key");
        assert_eq!(signed.timestamp, 1_700_000_000_000);
        assert_eq!(signed.recv_window, 5000);
        assert_eq!(signed.signature.len(), 64);
    }

    #[test]
    fn test_header_map_has_six_headers() {
        let headers = request_signer("my-key")
            .sign_request(1_700_000_000_000, "")
            .to_header_map()
            .unwrap();

        assert_eq!(headers.len(), 6);
        assert_eq!(headers["content-type"], "application/json");
        assert_eq!(headers["x-bapi-api-key"], "my-key");
        assert_eq!(headers["x-bapi-timestamp"], "1700000000000");
        assert_eq!(headers["x-bapi-sign-type"], "2");
        assert_eq!(headers["x-bapi-recv-window"], "5000");
    }

    #[test]
    fn test_header_map_rejects_newline_in_key() {
        let err = request_signer("bad\nkey")
            .sign_request(1, "")
            .to_header_map()
            .unwrap_err();

        assert!(matches!(
            err,
            BybitError::InvalidHeader {
                name: HEADER_API_KEY,
                ..
            }
        ));
    }
}
