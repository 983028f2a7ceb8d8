use anyhow::{Context, Result, anyhow};
use reqwest::{Client, RequestBuilder, StatusCode};
use std::time::Duration;

pub const USER_AGENT: &str = concat!("i3blocks-weather/", env!("CARGO_PKG_VERSION"));

/// Shared client for every remote call of a run.
pub fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .context("Failed to build HTTP client")
}

/// Send `request` and return the body, failing on a non-2xx status.
pub(crate) async fn fetch_text(request: RequestBuilder, what: &str) -> Result<String> {
    let res = request
        .send()
        .await
        .with_context(|| format!("Failed to send request to {what}"))?;

    let status = res.status();
    let body = res
        .text()
        .await
        .with_context(|| format!("Failed to read {what} response body"))?;

    check_status(status, &body, what)?;

    Ok(body)
}

pub(crate) fn check_status(status: StatusCode, body: &str, what: &str) -> Result<()> {
    if !status.is_success() {
        return Err(anyhow!(
            "{what} request failed with status {}: {}",
            status,
            truncate_body(body),
        ));
    }
    Ok(())
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}
