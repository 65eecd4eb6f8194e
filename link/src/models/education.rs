use serde::{Deserialize, Serialize};

/// Required education level attached to a job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub education_level: Option<String>,
}
