use serde::{Deserialize, Serialize};

use super::company_ref::CompanyRef;
use super::salary_range::SalaryRange;

/// One job row as returned by the listing query.
///
/// Nested detail collections (responsibilities, benefits, skills…) are not
/// part of the listing select; see [`super::JobDetail`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,

    /// Legacy denormalized column, used when the company join is empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    /// Creation timestamp as stored by the backend
    pub created_at: Option<String>,

    /// Joined company row; null when the job has no company link
    #[serde(default)]
    pub companies: Option<CompanyRef>,

    /// Joined salary rows; in practice zero or one
    #[serde(default)]
    pub job_salaries: Vec<SalaryRange>,
}

impl JobSummary {
    /// Company display name, falling back to the legacy column
    pub fn company_display_name(&self) -> Option<&str> {
        self.companies
            .as_ref()
            .and_then(|c| c.name.as_deref())
            .or(self.company_name.as_deref())
    }

    /// First (and in practice only) salary row
    pub fn salary(&self) -> Option<&SalaryRange> {
        self.job_salaries.first()
    }
}
