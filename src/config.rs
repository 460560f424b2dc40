use std::env;

const DEFAULT_API_URL: &str = "https://cloudquotas.googleapis.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration for the Cloud Quotas API client.
/// Values are sourced from environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment.
    ///
    /// Env vars:
    /// - GEMINI_QUOTA_API_URL (default: https://cloudquotas.googleapis.com)
    /// - GEMINI_QUOTA_HTTP_TIMEOUT_SECS (default: 30)
    /// - GEMINI_QUOTA_USER_AGENT (default: gemini-quota/<version>)
    ///
    /// The access token and project ID are per-call arguments, not
    /// configuration, so nothing here is required to be set.
    pub fn from_env() -> Self {
        let api_url =
            env::var("GEMINI_QUOTA_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let timeout_secs = env::var("GEMINI_QUOTA_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let user_agent =
            env::var("GEMINI_QUOTA_USER_AGENT").unwrap_or_else(|_| default_user_agent());

        Self {
            api_url,
            user_agent,
            timeout_secs,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: default_user_agent(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn default_user_agent() -> String {
    format!("gemini-quota/{}", env!("CARGO_PKG_VERSION"))
}
