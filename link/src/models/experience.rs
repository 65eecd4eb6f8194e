use serde::{Deserialize, Serialize};

/// Experience range attached to a job, in years
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub min_years: Option<i32>,
    pub max_years: Option<i32>,
}
