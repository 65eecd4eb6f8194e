use serde::{Deserialize, Serialize};

/// Embedded company row joined into a job record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyRef {
    /// Company display name
    pub name: Option<String>,
}
