mod log_entry;
mod report;
mod workspace;

pub use log_entry::RawLogEntry;
pub use report::{DetailsPage, ReportSummary};
pub use workspace::Workspace;
