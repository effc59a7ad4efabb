/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and signature helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for bybit-rest-adapter tests

use bybit_rest_adapter::{BybitClient, ClientConfig, Credentials};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "XXXXXXXXXXXXXXXXXX";
pub const TEST_API_SECRET: &str = "YYYYYYYYYYYYYYYYYYYYYYYYYYYYYYYYYYYY";

/// Setup a mock HTTP server for testing
#[allow(dead_code)]
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn test_credentials() -> Credentials {
    Credentials::new(TEST_API_KEY, TEST_API_SECRET)
}

/// Client pointed at the mock server
#[allow(dead_code)]
pub fn client_for(server: &MockServer, config: ClientConfig) -> BybitClient {
    BybitClient::new(test_credentials(), config.with_base_url(server.uri()))
        .expect("client init")
}

/// Header value from a recorded request
#[allow(dead_code)]
pub fn header_str<'a>(request: &'a wiremock::Request, name: &str) -> &'a str {
    request
        .headers
        .get(name)
        .unwrap_or_else(|| panic!("missing header {name}"))
        .to_str()
        .expect("ascii header")
}

/// HMAC-SHA256 hex over `timestamp + api_key + recv_window + params`
#[allow(dead_code)]
pub fn expected_signature(key: &str, timestamp: &str, recv_window: &str, params: &str) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(key.as_bytes()).unwrap();
    mac.update(format!("{timestamp}{TEST_API_KEY}{recv_window}{params}").as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// In-memory tracing writer for asserting on emitted log lines
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

#[allow(dead_code)]
impl CapturedLogs {
    /// Install a thread-local fmt subscriber writing into this buffer
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(self.clone())
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        let buffer = self.0.lock().expect("log buffer poisoned");
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().expect("log buffer poisoned").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
