use crate::config::Config;
use crate::error::{QuotaError, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Build the shared HTTP client.
/// The Authorization header is injected per request so one client can
/// serve calls for different tokens.
pub fn build_client(cfg: &Config) -> reqwest::Result<Client> {
    let mut default_headers = HeaderMap::new();
    if let Ok(ua) = HeaderValue::from_str(&cfg.user_agent) {
        default_headers.insert(USER_AGENT, ua);
    }
    Client::builder()
        .default_headers(default_headers)
        .timeout(Duration::from_secs(cfg.timeout_secs))
        .use_rustls_tls()
        .build()
}

/// Percent-encode a single URL path segment. Reserved characters,
/// including `/`, are escaped so caller-supplied identifiers cannot
/// change the request path.
pub fn encode_path_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// Issue one authenticated GET and decode the JSON body.
///
/// A non-success status becomes [`QuotaError::Upstream`] carrying the
/// status and its reason text; an undecodable body becomes
/// [`QuotaError::Malformed`]. No retries.
pub async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    access_token: &str,
) -> Result<T> {
    let res = client
        .get(url)
        .header(AUTHORIZATION, format!("Bearer {}", access_token))
        .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        return Err(QuotaError::Upstream {
            status,
            message: status.canonical_reason().unwrap_or("unknown status").to_string(),
        });
    }

    let body = res.text().await?;
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_path_segment_encoding() {
        // Spaces, slash, percent and unicode should be percent-encoded
        assert_eq!(encode_path_segment("Prod Env/Blue%"), "Prod%20Env%2FBlue%25");
        // Unreserved characters remain as-is
        assert_eq!(encode_path_segment("abc-._~123"), "abc-._~123");
    }

    #[test]
    fn client_builds_with_defaults() {
        assert!(build_client(&Config::default()).is_ok());
    }
}
