//! Board-wide statistics shown in the banner.

use vaga_link::SalaryRow;

/// Result of the three aggregate reads. Each metric degrades on its own:
/// a failed read leaves `None` and the view falls back to "0" / "N/A".
#[derive(Debug, Clone, Default)]
pub struct Statistics {
    pub total_jobs: Option<u64>,
    pub total_companies: Option<u64>,
    pub average_salary: Option<f64>,
}

/// Average of `(min + max) / 2` over rows that carry both bounds.
///
/// Rows with a missing bound are skipped; `None` when no row qualifies.
pub fn average_salary(rows: &[SalaryRow]) -> Option<f64> {
    let midpoints: Vec<f64> = rows
        .iter()
        .filter_map(|row| match (row.min_salary, row.max_salary) {
            (Some(min), Some(max)) => Some((min + max) / 2.0),
            _ => None,
        })
        .collect();

    if midpoints.is_empty() {
        return None;
    }
    Some(midpoints.iter().sum::<f64>() / midpoints.len() as f64)
}
