/*
[INPUT]:  Credentials and HTTP configuration (base URL, recv window, timeouts)
[OUTPUT]: Configured client ready for signed API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use crate::auth::{Credentials, HmacSigner, SigningKeySource};
use crate::http::{RequestSigner, Result};
use reqwest::{Client, Url};
use std::time::Duration;

/// Base URLs for Bybit REST API
pub const TESTNET_BASE_URL: &str = "https://api-testnet.bybit.com";
pub const MAINNET_BASE_URL: &str = "https://api.bybit.com";

/// Default tolerance for clock skew, in milliseconds
pub const DEFAULT_RECV_WINDOW: u64 = 5000;

/// Bybit deployment the client talks to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Testnet,
    Mainnet,
}

impl Environment {
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Testnet => TESTNET_BASE_URL,
            Environment::Mainnet => MAINNET_BASE_URL,
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub recv_window: u64,
    /// Dump every request and response through tracing
    pub debug: bool,
    pub signing_key: SigningKeySource,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: TESTNET_BASE_URL.to_string(),
            recv_window: DEFAULT_RECV_WINDOW,
            debug: false,
            signing_key: SigningKeySource::default(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    pub fn for_environment(environment: Environment) -> Self {
        Self::default().with_base_url(environment.base_url())
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_recv_window(mut self, recv_window: u64) -> Self {
        self.recv_window = recv_window;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_signing_key(mut self, signing_key: SigningKeySource) -> Self {
        self.signing_key = signing_key;
        self
    }
}

/// Signed REST client for the Bybit API
#[derive(Debug)]
pub struct BybitClient {
    pub(crate) http_client: Client,
    base_url: String,
    pub(crate) signer: RequestSigner,
    pub(crate) debug: bool,
}

impl BybitClient {
    /// Create a new client that owns its transport
    pub fn new(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;
        Self::with_http_client(credentials, config, http_client)
    }

    /// Create a new client on top of an existing transport
    ///
    /// The transport's own timeouts apply; `config.timeout` is ignored.
    pub fn with_http_client(
        credentials: Credentials,
        config: ClientConfig,
        http_client: Client,
    ) -> Result<Self> {
        Url::parse(&config.base_url)?;

        let signer = HmacSigner::new(credentials, config.signing_key);
        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            signer: RequestSigner::new(signer, config.recv_window),
            debug: config.debug,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn recv_window(&self) -> u64 {
        self.signer.recv_window()
    }

    pub fn api_key(&self) -> &str {
        self.signer.api_key()
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Build full URL for an endpoint, appending `?query` when non-empty
    ///
    /// The query goes through the URL query encode set, so callers must sign
    /// `url.query()` rather than their input to match the wire bytes.
    pub(crate) fn endpoint_url(&self, endpoint: &str, query: Option<&str>) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, endpoint))?;
        if let Some(q) = query.filter(|q| !q.is_empty()) {
            url.set_query(Some(q));
        }
        Ok(url)
    }
}
