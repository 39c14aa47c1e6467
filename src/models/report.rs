//! Envelope models returned by the detailed report endpoints.

use serde::Deserialize;

use crate::error::{Result, TogglError};
use crate::models::RawLogEntry;

/// Pagination metadata returned by the `detail` endpoint.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ReportSummary {
    pub total_count: u64,
    pub per_page: u64,
}

impl ReportSummary {
    /// Number of `details` pages to request.
    ///
    /// Always one more than the number of full pages, so an evenly divisible
    /// `total_count` requests a trailing page that comes back empty.
    pub fn total_pages(&self) -> Result<u64> {
        if self.per_page == 0 {
            return Err(TogglError::InvalidPagination {
                per_page: self.per_page,
            });
        }
        Ok(self.total_count / self.per_page + 1)
    }
}

/// One page of the `details` endpoint.
#[derive(Debug, Deserialize, Clone)]
pub struct DetailsPage {
    pub data: Vec<RawLogEntry>,
}
