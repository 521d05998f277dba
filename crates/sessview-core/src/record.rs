//! Session records and derived display values.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One study session as served by the backend. Read-only on this side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub id: String,
    pub url: String,
    /// Missing or `null` titles read as "".
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    /// RFC 3339 string or milliseconds since the epoch.
    #[serde(deserialize_with = "rfc3339_or_millis")]
    pub created_at: DateTime<Utc>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireTimestamp {
    Text(DateTime<Utc>),
    Millis(i64),
}

fn rfc3339_or_millis<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    match WireTimestamp::deserialize(deserializer)? {
        WireTimestamp::Text(ts) => Ok(ts),
        WireTimestamp::Millis(ms) => Utc.timestamp_millis_opt(ms).single().ok_or_else(|| {
            serde::de::Error::custom(format!("createdAt out of range: {ms}"))
        }),
    }
}

/// What a list item shows as its preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDisplay {
    pub image_url: String,
    pub is_pdf: bool,
}
