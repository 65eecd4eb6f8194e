use serde::{Deserialize, Serialize};

use super::benefit::Benefit;
use super::company_ref::CompanyRef;
use super::education::Education;
use super::experience::Experience;
use super::responsibility::Responsibility;
use super::salary_range::SalaryRange;
use super::skill::Skill;

/// One job with every nested collection, as returned by the detail query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDetail {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,

    /// Legacy denormalized column, used when the company join is empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    pub created_at: Option<String>,

    /// Application link on the original posting site
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,

    #[serde(default)]
    pub companies: Option<CompanyRef>,

    #[serde(default)]
    pub job_salaries: Vec<SalaryRange>,

    #[serde(default)]
    pub job_responsibilities: Vec<Responsibility>,

    #[serde(default)]
    pub job_benefits: Vec<Benefit>,

    #[serde(default)]
    pub job_skills: Vec<Skill>,

    #[serde(default)]
    pub job_experience: Vec<Experience>,

    #[serde(default)]
    pub job_education: Vec<Education>,
}

impl JobDetail {
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
