/*
[INPUT]:  Endpoint path plus query string (GET) or serializable params (POST)
[OUTPUT]: Raw response body bytes, regardless of HTTP status
[POS]:    HTTP layer - signed request execution
[UPDATE]: When changing request construction, dumps, or body handling
*/

use crate::http::{BybitClient, Result, SignedHeaders};
use chrono::Utc;
use reqwest::{Method, Request, Response};
use serde::Serialize;
use std::time::Instant;

const DUMP_TARGET: &str = "bybit_rest_adapter::dump";

/// URL-encode key/value pairs into a query string, keeping their order
pub fn encode_query<K, V>(pairs: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter().map(|(k, v)| (k.as_ref(), v.as_ref())))
        .finish()
}

fn timestamp_ms() -> i64 {
    Utc::now().timestamp_millis()
}

impl BybitClient {
    /// Send a signed GET request
    ///
    /// `query` should already be URL-encoded. Characters outside the URL
    /// query set (such as `'`) are percent-encoded, and the signature covers
    /// the query as sent.
    pub async fn get(&self, endpoint: &str, query: &str) -> Result<Vec<u8>> {
        let started = Instant::now();
        let url = self.endpoint_url(endpoint, Some(query))?;
        let signed = self
            .signer
            .sign_request(timestamp_ms(), url.query().unwrap_or_default());

        let request = self
            .http_client
            .request(Method::GET, url)
            .headers(signed.to_header_map()?)
            .build()?;
        self.execute(request, endpoint, &signed, started).await
    }

    /// Send a signed POST request with `params` serialized as the JSON body
    pub async fn post<T: Serialize + ?Sized>(&self, endpoint: &str, params: &T) -> Result<Vec<u8>> {
        let body = serde_json::to_string(params)?;
        self.post_raw(endpoint, &body).await
    }

    /// Send a signed POST request with a pre-serialized JSON body
    pub async fn post_raw(&self, endpoint: &str, body: &str) -> Result<Vec<u8>> {
        let started = Instant::now();
        let signed = self.signer.sign_request(timestamp_ms(), body);
        let url = self.endpoint_url(endpoint, None)?;

        let request = self
            .http_client
            .request(Method::POST, url)
            .headers(signed.to_header_map()?)
            .body(body.to_owned())
            .build()?;
        self.execute(request, endpoint, &signed, started).await
    }

    async fn execute(
        &self,
        request: Request,
        endpoint: &str,
        signed: &SignedHeaders,
        started: Instant,
    ) -> Result<Vec<u8>> {
        tracing::debug!(
            method = %request.method(),
            endpoint,
            timestamp = signed.timestamp,
            recv_window = signed.recv_window,
            "sending signed request"
        );
        if self.debug {
            dump_request(&request);
        }

        let response = self.http_client.execute(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = read_body(response).await?;

        if self.debug {
            tracing::info!(
                target: DUMP_TARGET,
                endpoint,
                elapsed_secs = started.elapsed().as_secs_f64(),
                status = %status,
                headers = ?headers,
                body = %String::from_utf8_lossy(&body),
                "response"
            );
        }

        Ok(body)
    }
}

async fn read_body(response: Response) -> Result<Vec<u8>> {
    Ok(response.bytes().await?.to_vec())
}

fn dump_request(request: &Request) {
    let body = request
        .body()
        .and_then(|body| body.as_bytes())
        .map(String::from_utf8_lossy)
        .unwrap_or_default();

    let mut dump = format!("{} {} HTTP/1.1\n", request.method(), request.url());
    for (name, value) in request.headers() {
        dump.push_str(&format!("{}: {}\n", name, String::from_utf8_lossy(value.as_bytes())));
    }
    dump.push('\n');
    dump.push_str(&body);

    tracing::info!(target: DUMP_TARGET, "request dump:\n{dump}");
}
