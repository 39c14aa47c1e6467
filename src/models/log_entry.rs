//! Raw time entries as the detailed report returns them.

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

/// Represents one unprocessed time entry from the `details` endpoint. The projected fields (id, description, duration in milliseconds, start, end) are required; billing and project metadata are optional and unused downstream.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RawLogEntry {
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Duration in milliseconds.
    pub dur: i64,
    pub start: String,
    pub end: String,
    pub pid: Option<u64>,
    pub tid: Option<u64>,
    pub uid: Option<u64>,
    pub user: Option<String>,
    pub updated: Option<String>,
    pub use_stop: Option<bool>,
    pub client: Option<String>,
    pub project: Option<String>,
    pub project_color: Option<String>,
    pub project_hex_color: Option<String>,
    pub task: Option<String>,
    pub billable: Option<f64>,
    pub is_billable: Option<bool>,
    pub cur: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
