//! Pure record → view-model transforms.
//!
//! Nothing here touches the terminal; the formatter decides how a view-model
//! is drawn. Keeping the mapping pure makes the display rules testable
//! without rendering anything.

use vaga_link::{JobDetail, JobSummary};

use crate::formatter::{format_currency, format_date, truncate_text};
use crate::state::PageState;
use crate::stats::Statistics;

/// Characters of the description shown on a list card
const CARD_SUMMARY_LEN: usize = 150;

/// Listing card for one job
#[derive(Debug, Clone, PartialEq)]
pub struct JobCardView {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub summary: String,
    pub posted: String,
}

impl JobCardView {
    pub fn from_summary(job: &JobSummary) -> Self {
        let salary = match job.salary() {
            Some(salary) => format!(
                "{} {} - {}",
                salary.currency.as_deref().unwrap_or("R$"),
                format_currency(salary.min_salary.unwrap_or(0.0)),
                format_currency(salary.max_salary.unwrap_or(0.0)),
            ),
            None => "Salary not listed".to_string(),
        };

        Self {
            id: job.id,
            title: job.title.clone(),
            company: job
                .company_display_name()
                .unwrap_or("Company not listed")
                .to_string(),
            location: job
                .location
                .as_deref()
                .unwrap_or("Location not listed")
                .to_string(),
            salary,
            summary: truncate_text(job.description.as_deref().unwrap_or(""), CARD_SUMMARY_LEN),
            posted: job
                .created_at
                .as_deref()
                .map(format_date)
                .unwrap_or_default(),
        }
    }
}

/// Full detail view for one job
#[derive(Debug, Clone, PartialEq)]
pub struct JobDetailView {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub experience: String,
    pub education: String,
    pub description: String,
    pub responsibilities: Vec<String>,
    pub benefits: Vec<String>,
    pub skills: Vec<String>,
    pub apply_url: Option<String>,
}

impl JobDetailView {
    pub fn from_detail(job: &JobDetail) -> Self {
        // A posting may list both bounds, only a floor, or nothing at all.
        let salary = match job.salary() {
            Some(salary) => match (salary.min_salary, salary.max_salary) {
                (Some(min), Some(max)) => {
                    format!("{} - {}", format_currency(min), format_currency(max))
                }
                (Some(min), None) => format!("From {}", format_currency(min)),
                _ => "Not listed".to_string(),
            },
            None => "Not listed".to_string(),
        };

        let experience = match job.job_experience.first() {
            Some(exp) => match (exp.min_years, exp.max_years) {
                (Some(min), Some(max)) => format!("{} - {} years", min, max),
                _ => "Not specified".to_string(),
            },
            None => "Not specified".to_string(),
        };

        let education = job
            .job_education
            .first()
            .and_then(|e| e.education_level.clone())
            .unwrap_or_else(|| "Not specified".to_string());

        Self {
            title: job.title.clone(),
            company: job
                .company_display_name()
                .unwrap_or("Not listed")
                .to_string(),
            location: job.location.as_deref().unwrap_or("Not listed").to_string(),
            salary,
            experience,
            education,
            description: job.description.clone().unwrap_or_default(),
            responsibilities: job
                .job_responsibilities
                .iter()
                .map(|r| r.responsibility.clone())
                .collect(),
            benefits: job.job_benefits.iter().map(|b| b.benefit.clone()).collect(),
            skills: job.job_skills.iter().map(|s| s.label()).collect(),
            apply_url: job.external_url.clone(),
        }
    }
}

/// One page button in the pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink {
    pub number: u64,
    pub current: bool,
}

/// Pagination control: previous/next plus a sliding window of page numbers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub previous: Option<u64>,
    pub pages: Vec<PageLink>,
    pub next: Option<u64>,
    pub total_pages: u64,
}

impl PaginationView {
    pub fn from_page_state(page: &PageState) -> Self {
        let total_pages = page.total_pages();
        let current = page.current_page;

        let previous = if current > 1 { Some(current - 1) } else { None };
        let next = if current < total_pages {
            Some(current + 1)
        } else {
            None
        };

        // Window of current±2, clipped to [1, total_pages]. With no results
        // the window is empty.
        let start = current.saturating_sub(2).max(1);
        let end = total_pages.min(current + 2);
        let pages = (start..=end)
            .map(|number| PageLink {
                number,
                current: number == current,
            })
            .collect();

        Self {
            previous,
            pages,
            next,
            total_pages,
        }
    }
}

/// Statistics banner values, already degraded to display strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsView {
    pub total_jobs: String,
    pub total_companies: String,
    pub average_salary: String,
}

impl StatsView {
    pub fn from_statistics(stats: &Statistics) -> Self {
        Self {
            total_jobs: stats.total_jobs.unwrap_or(0).to_string(),
            total_companies: stats.total_companies.unwrap_or(0).to_string(),
            average_salary: stats
                .average_salary
                .map(format_currency)
                .unwrap_or_else(|| "N/A".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vaga_link::{CompanyRef, JobDetail, JobSummary, SalaryRange, Skill};

    fn summary() -> JobSummary {
        JobSummary {
            id: 1,
            title: "Developer".to_string(),
            description: Some("Ship features".to_string()),
            location: Some("Remote".to_string()),
            company_name: None,
            created_at: Some("2025-06-01T12:00:00+00:00".to_string()),
            companies: Some(CompanyRef {
                name: Some("Acme".to_string()),
            }),
            job_salaries: vec![],
        }
    }

    fn detail() -> JobDetail {
        JobDetail {
            id: 1,
            title: "Developer".to_string(),
            description: Some("Ship features".to_string()),
            location: Some("Remote".to_string()),
            company_name: None,
            created_at: None,
            external_url: None,
            companies: None,
            job_salaries: vec![],
            job_responsibilities: vec![],
            job_benefits: vec![],
            job_skills: vec![],
            job_experience: vec![],
            job_education: vec![],
        }
    }

    #[test]
    fn test_card_without_salary() {
        let card = JobCardView::from_summary(&summary());
        assert_eq!(card.salary, "Salary not listed");
        assert_eq!(card.company, "Acme");
        assert_eq!(card.posted, "01/06/2025");
    }

    #[test]
    fn test_card_with_salary_uses_default_currency() {
        let mut job = summary();
        job.job_salaries = vec![SalaryRange {
            min_salary: Some(4000.0),
            max_salary: Some(6000.0),
            currency: None,
        }];
        let card = JobCardView::from_summary(&job);
        assert_eq!(card.salary, "R$ 4.000,00 - 6.000,00");
    }

    #[test]
    fn test_detail_salary_branches() {
        let mut job = detail();

        job.job_salaries = vec![SalaryRange {
            min_salary: Some(3000.0),
            max_salary: Some(5000.0),
            currency: None,
        }];
        assert_eq!(
            JobDetailView::from_detail(&job).salary,
            "3.000,00 - 5.000,00"
        );

        job.job_salaries = vec![SalaryRange {
            min_salary: Some(3000.0),
            max_salary: None,
            currency: None,
        }];
        assert_eq!(JobDetailView::from_detail(&job).salary, "From 3.000,00");

        job.job_salaries = vec![];
        assert_eq!(JobDetailView::from_detail(&job).salary, "Not listed");
    }

    #[test]
    fn test_detail_empty_collections_stay_empty() {
        let view = JobDetailView::from_detail(&detail());
        assert!(view.responsibilities.is_empty());
        assert!(view.benefits.is_empty());
        assert!(view.skills.is_empty());
    }

    #[test]
    fn test_detail_single_skill_tag() {
        let mut job = detail();
        job.job_skills = vec![Skill {
            skill_name: "Rust".to_string(),
            required_level: Some("senior".to_string()),
        }];
        let view = JobDetailView::from_detail(&job);
        assert_eq!(view.skills, vec!["Rust (senior)".to_string()]);
    }

    #[test]
    fn test_pagination_window_middle() {
        let page = PageState {
            current_page: 3,
            total_count: 97,
            page_size: 20,
        };
        let view = PaginationView::from_page_state(&page);

        assert_eq!(view.total_pages, 5);
        assert_eq!(view.previous, Some(2));
        assert_eq!(view.next, Some(4));
        let numbers: Vec<u64> = view.pages.iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
        assert!(view.pages[2].current);
    }

    #[test]
    fn test_pagination_first_page_has_no_previous() {
        let page = PageState {
            current_page: 1,
            total_count: 97,
            page_size: 20,
        };
        let view = PaginationView::from_page_state(&page);
        assert_eq!(view.previous, None);
        assert_eq!(view.next, Some(2));
        let numbers: Vec<u64> = view.pages.iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_pagination_last_page_has_no_next() {
        let page = PageState {
            current_page: 5,
            total_count: 97,
            page_size: 20,
        };
        let view = PaginationView::from_page_state(&page);
        assert_eq!(view.previous, Some(4));
        assert_eq!(view.next, None);
        let numbers: Vec<u64> = view.pages.iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec![3, 4, 5]);
    }

    #[test]
    fn test_pagination_empty_result_set() {
        let page = PageState {
            current_page: 1,
            total_count: 0,
            page_size: 20,
        };
        let view = PaginationView::from_page_state(&page);
        assert_eq!(view.previous, None);
        assert_eq!(view.next, None);
        assert!(view.pages.is_empty());
    }

    #[test]
    fn test_stats_view_degrades() {
        let view = StatsView::from_statistics(&Statistics::default());
        assert_eq!(view.total_jobs, "0");
        assert_eq!(view.total_companies, "0");
        assert_eq!(view.average_salary, "N/A");

        let view = StatsView::from_statistics(&Statistics {
            total_jobs: Some(120),
            total_companies: Some(14),
            average_salary: Some(3500.0),
        });
        assert_eq!(view.total_jobs, "120");
        assert_eq!(view.average_salary, "3.500,00");
    }
}
