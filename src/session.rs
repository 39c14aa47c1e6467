//! Initialized report session: resolved workspace plus paginated fetches.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::client::TogglClient;
use crate::config::TogglConfig;
use crate::error::{Result, TogglError};
use crate::models::{DetailsPage, RawLogEntry, ReportSummary, Workspace};
use crate::parser::{parse_logs, LogTable};

/// Date format the reports API accepts for `start` and `end`.
pub const REPORT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Represents a ready-to-use reports accessor whose workspace id was resolved once at initialization and never changes afterwards.
#[derive(Clone, Debug)]
pub struct ReportSession {
    client: TogglClient,
    workspace_id: u64,
}

impl ReportSession {
    /// Looks up the caller's workspaces and keeps the first one.
    pub fn initialize(config: TogglConfig) -> Result<Self> {
        config.validate()?;
        let client = TogglClient::new(config)?;
        let workspaces: Vec<Workspace> = client.get_api("workspaces", "workspace list")?;
        let workspace = workspaces.first().ok_or(TogglError::NoWorkspace)?;
        info!(workspace_id = workspace.id, "resolved toggl workspace");
        Ok(Self {
            client,
            workspace_id: workspace.id,
        })
    }

    pub fn workspace_id(&self) -> u64 {
        self.workspace_id
    }

    pub fn client(&self) -> &TogglClient {
        &self.client
    }

    /// Fetches every raw entry between `start_day` and `end_day`, both inclusive.
    ///
    /// Pages are requested one after another and concatenated in page order.
    /// The first failing request aborts the whole fetch.
    pub fn get_log(&self, start_day: &str, end_day: &str) -> Result<Vec<RawLogEntry>> {
        let params = self.report_params(start_day, end_day);

        let summary: ReportSummary = self.client.get_report("detail", &params, "report summary")?;
        let total_pages = summary.total_pages()?;
        debug!(
            total_count = summary.total_count,
            per_page = summary.per_page,
            total_pages,
            "fetching detailed report"
        );

        let mut data = Vec::new();
        for page in 1..=total_pages {
            let mut page_params = params.clone();
            page_params.push(("page", page.to_string()));
            debug!(page, "requesting report page");
            let context = format!("report page {page}");
            let details: DetailsPage = self.client.get_report("details", &page_params, &context)?;
            data.extend(details.data);
        }

        info!(entries = data.len(), start_day, end_day, "fetched detailed report");
        Ok(data)
    }

    pub fn get_processed_log(&self, start_day: &str, end_day: &str) -> Result<LogTable> {
        let logs = self.get_log(start_day, end_day)?;
        Ok(parse_logs(&logs))
    }

    pub fn get_log_for_days(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<RawLogEntry>> {
        self.get_log(&format_day(start), &format_day(end))
    }

    pub fn get_processed_log_for_days(&self, start: NaiveDate, end: NaiveDate) -> Result<LogTable> {
        self.get_processed_log(&format_day(start), &format_day(end))
    }

    fn report_params(&self, start_day: &str, end_day: &str) -> Vec<(&'static str, String)> {
        vec![
            ("user_agent", self.client.config().agent.clone()),
            ("workspace_id", self.workspace_id.to_string()),
            ("start", start_day.to_string()),
            ("end", end_day.to_string()),
        ]
    }
}

pub fn format_day(day: NaiveDate) -> String {
    day.format(REPORT_DATE_FORMAT).to_string()
}
