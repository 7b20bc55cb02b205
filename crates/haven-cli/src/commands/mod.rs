pub mod config;
pub mod info;
pub mod report;
pub mod sos;

use haven_core::{ApiClient, Config};

/// Single-threaded runtime: every command is one sequential flow.
pub fn runtime() -> Result<tokio::runtime::Runtime, Box<dyn std::error::Error>> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

pub fn api_client(config: &Config) -> Result<ApiClient, Box<dyn std::error::Error>> {
    Ok(ApiClient::with_timeout(
        &config.api.base_url,
        config.request_timeout(),
    )?)
}
