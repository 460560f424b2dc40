use crate::config::Config;
use crate::error::Result;
use crate::http;
use crate::types::{QuotaInfo, QuotaInfosResponse};
use log::warn;
use reqwest::Client;

/// Service name the Cloud Quotas API reports for Gemini Code Assist.
pub const TARGET_SERVICE: &str = "cloudaicompanion.googleapis.com";

/// Short-name fragment that identifies the service inside a quota ID.
const SERVICE_FRAGMENT: &str = "cloudaicompanion";

/// Quota infos are only published under the global location.
const LOCATION: &str = "global";

/// Fetch the Gemini Code Assist quotas visible to `project_id`.
///
/// Returns every quota dimension attributed to the service, in API
/// response order. An enabled service with no quotas is `Ok` with an
/// empty list; transport, HTTP and decode failures surface as
/// [`crate::QuotaError`].
pub async fn fetch_gemini_quotas(
    client: &Client,
    cfg: &Config,
    project_id: &str,
    access_token: &str,
) -> Result<Vec<QuotaInfo>> {
    let url = format!(
        "{}/v1/projects/{}/locations/{}/quotaInfos",
        cfg.api_url.trim_end_matches('/'),
        http::encode_path_segment(project_id),
        LOCATION
    );

    let response: QuotaInfosResponse = http::get_json(client, &url, access_token).await?;

    let quotas = response
        .quota_infos
        .into_iter()
        .filter(|q| q.service == TARGET_SERVICE || q.quota_id.contains(SERVICE_FRAGMENT))
        .map(|q| QuotaInfo {
            metric: q
                .metric_display_name
                .filter(|name| !name.is_empty())
                .unwrap_or(q.quota_id),
            limit: q.quota_value,
            usage: None,
            unit: q.metric_unit,
        })
        .collect();

    Ok(quotas)
}

/// Like [`fetch_gemini_quotas`], but converts every failure into an
/// empty list after logging it. Callers always get a renderable result,
/// at the cost of not being able to tell "no quotas" from "fetch
/// failed".
pub async fn fetch_gemini_quotas_or_empty(
    client: &Client,
    cfg: &Config,
    project_id: &str,
    access_token: &str,
) -> Vec<QuotaInfo> {
    match fetch_gemini_quotas(client, cfg, project_id, access_token).await {
        Ok(quotas) => quotas,
        Err(e) => {
            warn!("Error fetching Gemini stats: {}", e);
            Vec::new()
        }
    }
}
