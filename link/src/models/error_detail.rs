use serde::{Deserialize, Serialize};

/// Structured error body returned by the backend on failed requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Human-readable error message
    pub message: String,

    /// Error code (e.g. `PGRST116`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    /// Optional remediation hint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}
