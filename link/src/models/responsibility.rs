use serde::{Deserialize, Serialize};

/// One responsibility bullet attached to a job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Responsibility {
    pub responsibility: String,
}
