use serde::{Deserialize, Deserializer, Serialize};

/// Fault envelope the registry embeds in otherwise-successful responses.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaultInfo {
    pub message: String,
    pub error_code: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FaultEnvelope {
    fault_info: Option<FaultInfo>,
}

/// Pull a `faultInfo` envelope out of a raw body, if one is present.
pub(crate) fn extract_fault(body: &str) -> Option<FaultInfo> {
    serde_json::from_str::<FaultEnvelope>(body)
        .ok()
        .and_then(|e| e.fault_info)
}

/// Whether a ranked entry is new on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankOldAndNew {
    #[serde(rename = "NEW")]
    New,
    #[serde(rename = "OLD")]
    Old,
}

/// One entry of the daily box-office chart.
///
/// The registry encodes every number as a JSON string ("rank":"1"), so the
/// numeric fields are decoded through [`int_from_string`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxOfficeEntry {
    /// Registry movie code.
    pub movie_cd: String,
    /// Title as registered nationally.
    pub movie_nm: String,
    #[serde(deserialize_with = "int_from_string")]
    pub rank: i64,
    /// Rank movement against the previous day.
    #[serde(deserialize_with = "int_from_string")]
    pub rank_inten: i64,
    pub rank_old_and_new: RankOldAndNew,
    /// Opening date; hyphenated, compact, or blank.
    pub open_dt: String,
    /// Cumulative audience count.
    #[serde(deserialize_with = "int_from_string")]
    pub audi_acc: i64,
    /// Cumulative sales amount.
    #[serde(deserialize_with = "int_from_string")]
    pub sales_acc: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxOfficeResult {
    #[serde(default)]
    pub daily_box_office_list: Vec<BoxOfficeEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyBoxOfficeResponse {
    pub box_office_result: BoxOfficeResult,
}

fn int_from_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.trim()
        .parse::<i64>()
        .map_err(|_| serde::de::Error::custom(format!("expected integer string, got {:?}", raw)))
}
