//! Quota reporting for Gemini Code Assist.
//!
//! Fetches the quota dimensions the Google Cloud Quotas API attributes to
//! the Cloud AI Companion service and renders them as a markdown table.
//! The host application supplies the project ID and OAuth access token and
//! decides what to do with the returned markdown.

pub mod config;
pub mod error;
pub mod format;
pub mod http;
pub mod quota;
pub mod types;

pub use config::Config;
pub use error::QuotaError;
pub use format::format_quota_markdown;
pub use quota::{fetch_gemini_quotas, fetch_gemini_quotas_or_empty};
pub use types::QuotaInfo;
