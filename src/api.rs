use crate::config::FETCH_TIMEOUT;
use crate::models::RatesResponse;
use log::debug;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status: {0}")]
    Status(StatusCode),
}

/// Fetch the full rate table for `base` from the exchange rate API.
/// The endpoint is unauthenticated; the only tunable is the timeout.
pub async fn fetch_latest(api_base: &str, base: &str) -> Result<RatesResponse, FetchError> {
    let api_url = format!("{}{}", api_base, base);
    debug!("requesting {}", api_url);

    let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
    let response = client.get(&api_url).send().await?;

    match response.status() {
        StatusCode::OK => Ok(response.json().await?),
        status => Err(FetchError::Status(status)),
    }
}
