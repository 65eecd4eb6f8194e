use serde::{Deserialize, Serialize};

/// Bare salary bounds row, fetched in bulk for the average-salary statistic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRow {
    pub min_salary: Option<f64>,
    pub max_salary: Option<f64>,
}
