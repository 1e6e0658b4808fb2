use std::error::Error;
use std::time::Duration;
use url::Url;

/// User agent presented to the source site
const USER_AGENT: &str = "Mozilla/5.0 (compatible; toplist/0.1)";

/// Per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetch the raw bytes of a page with a single blocking GET.
///
/// Any transport failure or non-2xx status is an error; there is no
/// retry.
pub fn fetch_bytes(url: &str) -> Result<Vec<u8>, Box<dyn Error>> {
    let parsed = Url::parse(url).map_err(|e| format!("Invalid URL {}: {}", url, e))?;

    ::log::debug!("Fetching {}", parsed);

    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    let response = client.get(parsed).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(format!("Request to {} returned HTTP {}", url, status).into());
    }

    Ok(response.bytes()?.to_vec())
}

/// Fetch a page and return its body as text
pub fn fetch_text(url: &str) -> Result<String, Box<dyn Error>> {
    let bytes = fetch_bytes(url)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
