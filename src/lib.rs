//! Blocking Toggl reports client that fetches detailed time entries and splits ticket ids out of their descriptions.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod session;

pub use client::TogglClient;
pub use config::TogglConfig;
pub use error::{Result, TogglError};
pub use models::{DetailsPage, RawLogEntry, ReportSummary, Workspace};
pub use parser::{extract_ticket, parse_logs, LogRecord, LogTable};
pub use session::ReportSession;
