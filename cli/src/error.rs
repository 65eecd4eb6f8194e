//! Error types for vaga-cli.
//!
//! Provides user-friendly error messages and context for common CLI failures.

use std::fmt;
use vaga_link::VagaLinkError;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CLIError>;

/// Errors that can occur in the CLI
#[derive(Debug)]
pub enum CLIError {
    /// Error from the vaga-link library
    LinkError(VagaLinkError),

    /// Configuration file error
    ConfigurationError(String),

    /// Invalid command syntax
    ParseError(String),

    /// User cancelled operation
    Cancelled,

    /// Readline error
    ReadlineError(String),

    /// Format error
    FormatError(String),
}

impl CLIError {
    fn format_link_error(err: &VagaLinkError) -> String {
        match err {
            VagaLinkError::NetworkError(msg) => Self::clean_nested_message(msg),
            VagaLinkError::TimeoutError(msg) => msg.clone(),
            VagaLinkError::ConfigurationError(msg) => msg.clone(),
            VagaLinkError::SerializationError(msg) => msg.clone(),
            VagaLinkError::ServerError {
                status_code,
                message,
            } => format!("Server error ({}): {}", status_code, message),
            VagaLinkError::NotFound => "Job not found".to_string(),
        }
    }

    fn clean_nested_message(message: &str) -> String {
        let mut cleaned = message.trim();
        let prefixes = ["Network error:", "network error:", "error sending request:"];

        loop {
            let mut stripped = false;
            for prefix in &prefixes {
                if let Some(rest) = cleaned.strip_prefix(prefix) {
                    cleaned = rest.trim_start();
                    stripped = true;
                    break;
                }
            }

            if !stripped {
                break;
            }
        }

        cleaned.to_string()
    }
}

impl fmt::Display for CLIError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CLIError::LinkError(e) => write!(f, "{}", Self::format_link_error(e)),
            CLIError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
            CLIError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            CLIError::Cancelled => write!(f, "Operation cancelled"),
            CLIError::ReadlineError(msg) => write!(f, "Input error: {}", msg),
            CLIError::FormatError(msg) => write!(f, "Format error: {}", msg),
        }
    }
}

impl std::error::Error for CLIError {}

impl From<VagaLinkError> for CLIError {
    fn from(err: VagaLinkError) -> Self {
        CLIError::LinkError(err)
    }
}

impl From<rustyline::error::ReadlineError> for CLIError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        match err {
            rustyline::error::ReadlineError::Interrupted => CLIError::Cancelled,
            rustyline::error::ReadlineError::Eof => CLIError::Cancelled,
            e => CLIError::ReadlineError(e.to_string()),
        }
    }
}

impl From<std::io::Error> for CLIError {
    fn from(err: std::io::Error) -> Self {
        CLIError::ConfigurationError(err.to_string())
    }
}

impl From<toml::de::Error> for CLIError {
    fn from(err: toml::de::Error) -> Self {
        CLIError::ConfigurationError(format!("TOML parse error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CLIError::ParseError("bad page number".into());
        assert_eq!(err.to_string(), "Parse error: bad page number");

        let err = CLIError::Cancelled;
        assert_eq!(err.to_string(), "Operation cancelled");
    }

    #[test]
    fn test_not_found_reads_as_domain_message() {
        let err = CLIError::from(VagaLinkError::NotFound);
        assert_eq!(err.to_string(), "Job not found");
    }

    #[test]
    fn test_nested_network_prefix_is_stripped() {
        let err = CLIError::from(VagaLinkError::NetworkError(
            "Network error: connection refused".into(),
        ));
        assert_eq!(err.to_string(), "connection refused");
    }
}
