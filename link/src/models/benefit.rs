use serde::{Deserialize, Serialize};

/// One benefit bullet attached to a job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Benefit {
    pub benefit: String,
}
