/*
[INPUT]:  BYBIT_API_KEY / BYBIT_API_SECRET environment variables
[OUTPUT]: Raw response bodies printed to stdout, dumps on stderr
[POS]:    Examples - signed GET and POST against testnet
[UPDATE]: When client construction or request API changes
*/

use bybit_rest_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: signed GET and POST against the Bybit testnet
///
/// Run with `RUST_LOG=info` to see request/response dumps.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let credentials = match Credentials::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load credentials: {}", e);
            return;
        }
    };

    let config = ClientConfig::for_environment(Environment::Testnet).with_debug(true);
    let client = match BybitClient::new(credentials, config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let query = encode_query(&[("accountType", "UNIFIED")]);
    match client.get("/v5/account/wallet-balance", &query).await {
        Ok(body) => println!("wallet-balance: {}", String::from_utf8_lossy(&body)),
        Err(e) => println!("wallet-balance failed: {} (retryable: {})", e, e.is_retryable()),
    }

    let order = serde_json::json!({
        "category": "spot",
        "symbol": "BTCUSDT",
        "side": "Buy",
        "orderType": "Market",
        "qty": "0.001",
    });
    match client.post("/v5/order/create", &order).await {
        Ok(body) => println!("order/create: {}", String::from_utf8_lossy(&body)),
        Err(e) => println!("order/create failed: {} (retryable: {})", e, e.is_retryable()),
    }
}
