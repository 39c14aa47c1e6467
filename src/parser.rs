//! Reshapes raw report entries into the ticket/description table.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::RawLogEntry;

const MILLIS_PER_MINUTE: i64 = 60 * 1000;

/// Represents one normalized row: the entry id, the ticket split off the description, the remaining description text, duration in whole minutes and the untouched start/end timestamps.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub id: u64,
    pub ticket: String,
    pub desc: String,
    pub dur: i64,
    pub start: String,
    pub end: String,
}

impl LogRecord {
    pub fn from_raw(entry: &RawLogEntry) -> Self {
        let (ticket, desc) = extract_ticket(&entry.description);
        Self {
            id: entry.id,
            ticket,
            desc,
            dur: millis_to_minutes(entry.dur),
            start: entry.start.clone(),
            end: entry.end.clone(),
        }
    }
}

/// Ordered rows with columns `id, ticket, desc, dur, start, end`.
#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct LogTable {
    rows: Vec<LogRecord>,
}

impl LogTable {
    pub const COLUMNS: [&'static str; 6] = ["id", "ticket", "desc", "dur", "start", "end"];

    pub fn rows(&self) -> &[LogRecord] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<LogRecord> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LogRecord> {
        self.rows.iter()
    }

    pub fn total_minutes(&self) -> i64 {
        self.rows.iter().map(|row| row.dur).sum()
    }

    /// Minutes summed per ticket, keyed in ticket order.
    pub fn minutes_by_ticket(&self) -> BTreeMap<String, i64> {
        let mut totals = BTreeMap::new();
        for row in &self.rows {
            *totals.entry(row.ticket.clone()).or_insert(0) += row.dur;
        }
        totals
    }
}

impl From<Vec<LogRecord>> for LogTable {
    fn from(rows: Vec<LogRecord>) -> Self {
        Self { rows }
    }
}

impl IntoIterator for LogTable {
    type Item = LogRecord;
    type IntoIter = std::vec::IntoIter<LogRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a LogTable {
    type Item = &'a LogRecord;
    type IntoIter = std::slice::Iter<'a, LogRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Builds the normalized table. Pure: the same input always yields the same table.
pub fn parse_logs(logs: &[RawLogEntry]) -> LogTable {
    logs.iter().map(LogRecord::from_raw).collect::<Vec<_>>().into()
}

/// Splits a description into `(ticket, desc)`.
///
/// The ticket is the first whitespace-delimited token; the remaining tokens
/// are concatenated without a separator. A blank description yields two
/// empty strings.
pub fn extract_ticket(description: &str) -> (String, String) {
    let mut tokens = description.split_whitespace();
    match tokens.next() {
        Some(ticket) => (ticket.to_string(), tokens.collect()),
        None => (String::new(), String::new()),
    }
}

/// Converts milliseconds to whole minutes, rounding toward negative infinity.
pub fn millis_to_minutes(millis: i64) -> i64 {
    millis.div_euclid(MILLIS_PER_MINUTE)
}
