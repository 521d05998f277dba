//! Session list sources.
//!
//! The pipeline only needs an ordered list of [`ContentRecord`]s; where they
//! come from is behind this trait.

mod file;
mod graphql;

pub use file::JsonFileSource;
pub use graphql::{GraphqlSource, SESSIONS_QUERY};

use crate::record::ContentRecord;

/// Supplies the session records to preview, in display order.
pub trait ContentSource {
    fn fetch_records(&self) -> anyhow::Result<Vec<ContentRecord>>;
}

/// Accepts either a bare array of records or an object with a `sessions` array.
///
/// Records are decoded one at a time; a record that does not decode is
/// dropped with a warning so the rest of the list still shows.
pub(crate) fn records_from_json(value: serde_json::Value) -> anyhow::Result<Vec<ContentRecord>> {
    use anyhow::Context;

    let list = match value {
        serde_json::Value::Array(_) => value,
        serde_json::Value::Object(mut map) => map
            .remove("sessions")
            .context("expected a JSON array or an object with a 'sessions' array")?,
        _ => anyhow::bail!("expected a JSON array or an object with a 'sessions' array"),
    };
    let items: Vec<serde_json::Value> =
        serde_json::from_value(list).context("'sessions' is not an array")?;

    let total = items.len();
    let records: Vec<ContentRecord> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let id = item
                .get("id")
                .and_then(|v| v.as_str())
                .map(str::to_string);
            match serde_json::from_value::<ContentRecord>(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(
                        index,
                        id = id.as_deref().unwrap_or("<none>"),
                        "skipping invalid session record: {}",
                        e
                    );
                    None
                }
            }
        })
        .collect();

    if records.len() < total {
        tracing::info!(kept = records.len(), total, "some session records were skipped");
    }
    Ok(records)
}
