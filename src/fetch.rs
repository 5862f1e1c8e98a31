//! Single-GET page fetcher.
//!
//! Each extractor performs its own fetch with a fresh client; nothing is
//! cached or shared between extractors. A non-2xx response is an error
//! scoped to the calling extractor, never a process-level condition.

use std::time::Duration;

use reqwest::header::USER_AGENT;

use crate::errors::{Result, SiteReconError};

/// Raw response of one page fetch, discarded after the extractor consumes it.
#[derive(Debug)]
pub struct FetchResult {
    pub status: u16,
    pub body: String,
}

/// Issue one GET against `url` with the given User-Agent and timeout.
///
/// Returns `HttpStatus` for non-2xx responses, `FetchTimeout` when the
/// deadline elapses, and `Network` for any other transport failure.
pub async fn fetch_page(url: &str, user_agent: &str, timeout: Duration) -> Result<FetchResult> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| SiteReconError::network("client build", url, e))?;

    let response = client
        .get(url)
        .header(USER_AGENT, user_agent)
        .send()
        .await
        .map_err(|e| classify_transport_error(url, timeout, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(SiteReconError::http_status(url, status.as_u16()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| classify_transport_error(url, timeout, e))?;

    Ok(FetchResult {
        status: status.as_u16(),
        body,
    })
}

fn classify_transport_error(url: &str, timeout: Duration, e: reqwest::Error) -> SiteReconError {
    if e.is_timeout() {
        SiteReconError::fetch_timeout(url, timeout.as_secs())
    } else {
        SiteReconError::network("page fetch", url, e)
    }
}
