use serde::{Deserialize, Serialize};

use super::job_summary::JobSummary;

/// One page of listings plus the total number of matching rows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPage {
    pub jobs: Vec<JobSummary>,

    /// Total matches across all pages, from the `Content-Range` header
    pub total: u64,
}
