use serde::{Deserialize, Serialize};

/// Embedded salary row joined into a job record.
///
/// Either bound can be absent; postings frequently list only a floor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min_salary: Option<f64>,
    pub max_salary: Option<f64>,

    /// Currency symbol or code as stored by the backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}
