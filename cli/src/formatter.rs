//! Terminal rendering for listing, detail, and statistics views.
//!
//! The formatter is the only place that turns view-models into strings for
//! the terminal; everything it consumes comes from `view.rs` untouched.

use colored::*;
use serde_json::json;
use vaga_link::{JobDetail, JobPage};

use crate::error::{CLIError, Result};
use crate::session::OutputFormat;
use crate::state::PageState;
use crate::stats::Statistics;
use crate::view::{JobCardView, JobDetailView, PaginationView, StatsView};

/// Widest separator/card line we draw, even on huge terminals
const MAX_RENDER_WIDTH: usize = 100;

/// Formats fetched records for display
pub struct OutputFormatter {
    format: OutputFormat,
    color: bool,
}

impl OutputFormatter {
    /// Create a new formatter
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self { format, color }
    }

    /// Switch the output format
    pub fn set_format(&mut self, format: OutputFormat) {
        self.format = format;
    }

    /// Get terminal width, defaulting to 80 if unavailable
    fn render_width() -> usize {
        let width = if let Some((w, _h)) = term_size::dimensions() {
            w
        } else {
            80
        };
        width.min(MAX_RENDER_WIDTH)
    }

    /// Format one page of listings plus the pagination control
    pub fn format_jobs(&self, page: &JobPage, state: &PageState) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(&page.jobs)
                .map_err(|e| CLIError::FormatError(e.to_string())),
            OutputFormat::Table => Ok(self.format_job_cards(page, state)),
        }
    }

    fn format_job_cards(&self, page: &JobPage, state: &PageState) -> String {
        if page.jobs.is_empty() {
            return "No jobs found.".to_string();
        }

        let width = Self::render_width();
        let separator = "─".repeat(width);
        let mut output = String::new();

        for job in &page.jobs {
            let card = JobCardView::from_summary(job);
            output.push_str(&self.render_card(&card, width));
            output.push_str(&separator);
            output.push('\n');
        }

        let pagination = PaginationView::from_page_state(state);
        output.push_str(&self.render_pagination(&pagination, state));
        output
    }

    fn render_card(&self, card: &JobCardView, width: usize) -> String {
        let heading = format!("#{}  {}", card.id, card.title);
        let heading = Self::fit(&heading, width);
        let mut output = String::new();

        if self.color {
            output.push_str(&format!("{}\n", heading.bold()));
            output.push_str(&format!("    {}\n", card.company.cyan()));
        } else {
            output.push_str(&format!("{}\n", heading));
            output.push_str(&format!("    {}\n", card.company));
        }

        output.push_str(&Self::fit(
            &format!("    {}  |  {}", card.location, card.salary),
            width,
        ));
        output.push('\n');

        if !card.summary.is_empty() {
            output.push_str(&Self::fit(&format!("    {}", card.summary), width));
            output.push('\n');
        }

        if !card.posted.is_empty() {
            if self.color {
                output.push_str(&format!("    {}\n", format!("Posted: {}", card.posted).dimmed()));
            } else {
                output.push_str(&format!("    Posted: {}\n", card.posted));
            }
        }

        output
    }

    fn render_pagination(&self, pagination: &PaginationView, state: &PageState) -> String {
        let mut parts: Vec<String> = Vec::new();

        if pagination.previous.is_some() {
            parts.push("« prev".to_string());
        }
        for link in &pagination.pages {
            if link.current {
                let label = format!("[{}]", link.number);
                if self.color {
                    parts.push(label.bold().to_string());
                } else {
                    parts.push(label);
                }
            } else {
                parts.push(link.number.to_string());
            }
        }
        if pagination.next.is_some() {
            parts.push("next »".to_string());
        }

        let job_label = if state.total_count == 1 { "job" } else { "jobs" };
        let summary = format!(
            "Page {} of {} ({} {})",
            state.current_page,
            pagination.total_pages.max(1),
            state.total_count,
            job_label
        );

        if parts.is_empty() {
            format!("{}\n", summary)
        } else {
            format!("{}\n{}\n", parts.join("  "), summary)
        }
    }

    /// Format the detail view of one job
    pub fn format_job_detail(&self, job: &JobDetail) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(job).map_err(|e| CLIError::FormatError(e.to_string()))
            }
            OutputFormat::Table => Ok(self.format_detail_sections(&JobDetailView::from_detail(job))),
        }
    }

    fn format_detail_sections(&self, view: &JobDetailView) -> String {
        let width = Self::render_width();
        let separator = "─".repeat(width);
        let mut output = String::new();

        if self.color {
            output.push_str(&format!("{}\n", view.title.bold()));
        } else {
            output.push_str(&format!("{}\n", view.title));
        }
        output.push_str(&separator);
        output.push('\n');

        output.push_str(&format!("Company:    {}\n", view.company));
        output.push_str(&format!("Location:   {}\n", view.location));
        output.push_str(&format!("Salary:     {}\n", view.salary));
        output.push_str(&format!("Experience: {}\n", view.experience));
        output.push_str(&format!("Education:  {}\n", view.education));

        if !view.description.is_empty() {
            output.push_str(&self.section_heading("Description"));
            output.push_str(&format!("{}\n", view.description));
        }

        if !view.responsibilities.is_empty() {
            output.push_str(&self.section_heading("Responsibilities"));
            for item in &view.responsibilities {
                output.push_str(&format!("  • {}\n", item));
            }
        }

        if !view.benefits.is_empty() {
            output.push_str(&self.section_heading("Benefits"));
            for item in &view.benefits {
                output.push_str(&format!("  • {}\n", item));
            }
        }

        if !view.skills.is_empty() {
            output.push_str(&self.section_heading("Required skills"));
            output.push_str(&format!("  {}\n", view.skills.join(", ")));
        }

        if let Some(ref url) = view.apply_url {
            output.push('\n');
            if self.color {
                output.push_str(&format!("Apply at: {}\n", url.underline()));
            } else {
                output.push_str(&format!("Apply at: {}\n", url));
            }
        }

        output
    }

    fn section_heading(&self, title: &str) -> String {
        if self.color {
            format!("\n{}\n", title.bold())
        } else {
            format!("\n{}\n", title)
        }
    }

    /// Format the statistics banner
    pub fn format_stats(&self, stats: &Statistics) -> Result<String> {
        let view = StatsView::from_statistics(stats);
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(&json!({
                "total_jobs": view.total_jobs,
                "total_companies": view.total_companies,
                "average_salary": view.average_salary,
            }))
            .map_err(|e| CLIError::FormatError(e.to_string())),
            OutputFormat::Table => Ok(format!(
                "Jobs: {}  |  Companies: {}  |  Average salary: {}",
                view.total_jobs, view.total_companies, view.average_salary
            )),
        }
    }

    /// Truncate a rendered line to the drawable width
    fn fit(value: &str, width: usize) -> String {
        if value.chars().count() <= width {
            value.to_string()
        } else if width <= 3 {
            value.chars().take(width).collect()
        } else {
            let take = width - 3;
            format!("{}...", value.chars().take(take).collect::<String>())
        }
    }
}

/// Format a monetary value with pt-BR grouping: `4.000,00`.
///
/// Zero renders as a bare "0", matching how missing bounds are displayed.
pub fn format_currency(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let formatted = format!("{},{:02}", grouped, frac);
    if negative {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

/// Format a backend timestamp as dd/mm/yyyy; unparseable input passes through
pub fn format_date(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(value) {
        return dt.format("%d/%m/%Y").to_string();
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%d/%m/%Y").to_string();
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.format("%d/%m/%Y").to_string();
    }
    value.to_string()
}

/// Truncate text to `max_len` characters, appending an ellipsis when cut
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        format!("{}...", text.chars().take(max_len).collect::<String>())
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vaga_link::{JobSummary, SalaryRange};

    fn plain() -> OutputFormatter {
        OutputFormatter::new(OutputFormat::Table, false)
    }

    fn job(id: i64) -> JobSummary {
        JobSummary {
            id,
            title: format!("Job {}", id),
            description: Some("Do things".to_string()),
            location: Some("Remote".to_string()),
            company_name: Some("Acme".to_string()),
            created_at: None,
            companies: None,
            job_salaries: vec![SalaryRange {
                min_salary: Some(1000.0),
                max_salary: Some(2000.0),
                currency: Some("R$".to_string()),
            }],
        }
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "0");
        assert_eq!(format_currency(125.0), "125,00");
        assert_eq!(format_currency(1234.5), "1.234,50");
        assert_eq!(format_currency(4000.0), "4.000,00");
        assert_eq!(format_currency(1_000_000.0), "1.000.000,00");
        assert_eq!(format_currency(-99.9), "-99,90");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("2025-06-01T12:00:00+00:00"), "01/06/2025");
        assert_eq!(format_date("2025-06-01T12:00:00"), "01/06/2025");
        assert_eq!(format_date("2025-06-01"), "01/06/2025");
        assert_eq!(format_date("yesterday"), "yesterday");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("exactly ten", 11), "exactly ten");
        assert_eq!(truncate_text("this is too long", 7), "this is...");
    }

    #[test]
    fn test_empty_page_renders_no_jobs_line() {
        let page = JobPage {
            jobs: vec![],
            total: 0,
        };
        let state = PageState::new(20);
        let output = plain().format_jobs(&page, &state).unwrap();
        assert_eq!(output, "No jobs found.");
    }

    #[test]
    fn test_listing_renders_cards_and_pagination() {
        let page = JobPage {
            jobs: vec![job(1), job(2)],
            total: 97,
        };
        let state = PageState {
            current_page: 1,
            total_count: 97,
            page_size: 20,
        };

        let output = plain().format_jobs(&page, &state).unwrap();
        assert!(output.contains("#1  Job 1"));
        assert!(output.contains("R$ 1.000,00 - 2.000,00"));
        assert!(output.contains("Page 1 of 5 (97 jobs)"));
        // First page: no previous control
        assert!(!output.contains("« prev"));
        assert!(output.contains("next »"));
        assert!(output.contains("[1]"));
    }

    #[test]
    fn test_detail_skips_empty_sections() {
        let detail: vaga_link::JobDetail = serde_json::from_str(
            r#"{
                "id": 5,
                "title": "Clerk",
                "description": "Files",
                "location": null,
                "created_at": null,
                "job_skills": [{"skill_name": "Excel", "required_level": "basic"}]
            }"#,
        )
        .unwrap();

        let output = plain().format_job_detail(&detail).unwrap();
        assert!(!output.contains("Responsibilities"));
        assert!(!output.contains("Benefits"));
        assert!(output.contains("Required skills"));
        assert!(output.contains("Excel (basic)"));
        assert!(output.contains("Location:   Not listed"));
    }

    #[test]
    fn test_stats_formats() {
        let stats = Statistics {
            total_jobs: Some(97),
            total_companies: None,
            average_salary: Some(125.0),
        };
        let output = plain().format_stats(&stats).unwrap();
        assert_eq!(output, "Jobs: 97  |  Companies: 0  |  Average salary: 125,00");
    }

    #[test]
    fn test_json_listing_is_machine_readable() {
        let formatter = OutputFormatter::new(OutputFormat::Json, false);
        let page = JobPage {
            jobs: vec![job(3)],
            total: 1,
        };
        let state = PageState::new(20);
        let output = formatter.format_jobs(&page, &state).unwrap();
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["id"], 3);
    }
}
