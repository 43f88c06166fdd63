//! Synchronous HTTP GET used by the catalog fetcher and the commit stage.
//!
//! One request, no retries; redirects are followed and non-2xx responses are
//! errors. The GitHub API rejects requests without a User-Agent, so every
//! request carries one.

use anyhow::{Context, Result};
use std::time::Duration;

const USER_AGENT: &str = concat!("rcsel/", env!("CARGO_PKG_VERSION"));

/// Cleans a URL before a request: newlines stripped, spaces percent-encoded.
/// Variant names come straight from the catalog and may contain spaces.
pub fn sanitize_url(url: &str) -> String {
    url.replace('\n', "").replace(' ', "%20")
}

/// Performs one GET and returns the full response body.
pub fn http_get(url: &str) -> Result<Vec<u8>> {
    let url = sanitize_url(url);
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(&url).context("invalid URL")?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.useragent(USER_AGENT)?;
    easy.connect_timeout(Duration::from_secs(15))?;
    easy.timeout(Duration::from_secs(60))?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer
            .perform()
            .with_context(|| format!("GET {} failed", url))?;
    }

    let code = easy.response_code().context("no response code")?;
    if code < 200 || code >= 300 {
        anyhow::bail!("GET {} returned HTTP {}", url, code);
    }
    Ok(body)
}
