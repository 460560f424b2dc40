use serde::{Deserialize, Serialize};

/// One quota dimension reported for the target service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuotaInfo {
    /// Human-readable name of the quota dimension; falls back to the
    /// quota ID when the API supplies no display name.
    pub metric: String,
    /// Enforced upper bound.
    pub limit: i64,
    /// Current consumption. The quotaInfos endpoint does not report
    /// usage, so the fetcher leaves this unset.
    pub usage: Option<i64>,
    /// Measurement unit, e.g. "count".
    pub unit: String,
}

// Wire format of GET /v1/projects/{project}/locations/global/quotaInfos.
// Fields are defaulted so sparse entries still decode.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaInfosResponse {
    #[serde(default)]
    pub quota_infos: Vec<QuotaInfoEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaInfoEntry {
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub quota_id: String,
    pub metric_display_name: Option<String>,
    #[serde(default)]
    pub quota_value: i64,
    #[serde(default)]
    pub metric_unit: String,
}
