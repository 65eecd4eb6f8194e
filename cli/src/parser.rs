//! Command parser for the browse prompt.
//!
//! Plain input is treated as search text, the way the original search box
//! works; backslash commands drive filters, pagination, and views.

use crate::error::{CLIError, Result};

/// Parsed command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Free-text search (debounced)
    Search(String),

    /// Meta-commands (backslash commands)
    Location(String),
    Company(String),
    Salary { min: String, max: String },
    ShowFilters,
    ClearFilters,
    Next,
    Prev,
    Page(u64),
    View(i64),
    Stats,
    Refresh,
    SetFormat(String),
    Help,
    Quit,
    Unknown(String),
}

/// Command parser
pub struct CommandParser;

impl CommandParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Parse a command line
    pub fn parse(&self, line: &str) -> Result<Command> {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            return Err(CLIError::ParseError("Empty command".into()));
        }

        // Check for backslash commands
        if trimmed.starts_with('\\') {
            return self.parse_meta_command(trimmed);
        }

        // Otherwise, treat as search text
        Ok(Command::Search(trimmed.to_string()))
    }

    /// Parse meta-commands (backslash commands)
    fn parse_meta_command(&self, line: &str) -> Result<Command> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            return Err(CLIError::ParseError("Invalid command".into()));
        }

        let command = parts[0];
        let args = parts.get(1..).unwrap_or(&[]);

        match command {
            "\\quit" | "\\q" => Ok(Command::Quit),
            "\\help" | "\\?" => Ok(Command::Help),
            "\\stats" => Ok(Command::Stats),
            "\\refresh" | "\\r" => Ok(Command::Refresh),
            "\\filters" => Ok(Command::ShowFilters),
            "\\clear" | "\\reset" => Ok(Command::ClearFilters),
            "\\next" | "\\n" => Ok(Command::Next),
            "\\prev" | "\\p" => Ok(Command::Prev),
            // No argument clears the filter, mirroring an emptied input box
            "\\location" | "\\loc" => Ok(Command::Location(args.join(" "))),
            "\\company" => Ok(Command::Company(args.join(" "))),
            "\\salary" => Ok(Command::Salary {
                min: args.first().unwrap_or(&"").to_string(),
                max: args.get(1).unwrap_or(&"").to_string(),
            }),
            "\\page" => match args.first().map(|a| a.parse::<u64>()) {
                Some(Ok(page)) => Ok(Command::Page(page)),
                Some(Err(_)) => Err(CLIError::ParseError(format!(
                    "'{}' is not a page number",
                    args[0]
                ))),
                None => Err(CLIError::ParseError("\\page requires a page number".into())),
            },
            "\\view" | "\\v" | "\\open" => match args.first().map(|a| a.parse::<i64>()) {
                Some(Ok(id)) => Ok(Command::View(id)),
                Some(Err(_)) => Err(CLIError::ParseError(format!(
                    "'{}' is not a job id",
                    args[0]
                ))),
                None => Err(CLIError::ParseError("\\view requires a job id".into())),
            },
            "\\format" => {
                if args.is_empty() {
                    Err(CLIError::ParseError("\\format requires: table or json".into()))
                } else {
                    Ok(Command::SetFormat(args[0].to_string()))
                }
            }
            _ => Ok(Command::Unknown(command.to_string())),
        }
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_text_is_search() {
        let parser = CommandParser::new();
        let cmd = parser.parse("enfermeiro noturno").unwrap();
        assert_eq!(cmd, Command::Search("enfermeiro noturno".to_string()));
    }

    #[test]
    fn test_parse_quit() {
        let parser = CommandParser::new();
        assert_eq!(parser.parse("\\quit").unwrap(), Command::Quit);
        assert_eq!(parser.parse("\\q").unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_location_with_and_without_args() {
        let parser = CommandParser::new();
        assert_eq!(
            parser.parse("\\location Sao Paulo").unwrap(),
            Command::Location("Sao Paulo".to_string())
        );
        assert_eq!(
            parser.parse("\\location").unwrap(),
            Command::Location(String::new())
        );
    }

    #[test]
    fn test_parse_salary() {
        let parser = CommandParser::new();
        assert_eq!(
            parser.parse("\\salary 1000 5000").unwrap(),
            Command::Salary {
                min: "1000".to_string(),
                max: "5000".to_string()
            }
        );
        assert_eq!(
            parser.parse("\\salary").unwrap(),
            Command::Salary {
                min: String::new(),
                max: String::new()
            }
        );
    }

    #[test]
    fn test_parse_page() {
        let parser = CommandParser::new();
        assert_eq!(parser.parse("\\page 4").unwrap(), Command::Page(4));
        assert!(parser.parse("\\page four").is_err());
        assert!(parser.parse("\\page").is_err());
    }

    #[test]
    fn test_parse_view() {
        let parser = CommandParser::new();
        assert_eq!(parser.parse("\\view 42").unwrap(), Command::View(42));
        assert_eq!(parser.parse("\\v 42").unwrap(), Command::View(42));
        assert!(parser.parse("\\view abc").is_err());
    }

    #[test]
    fn test_parse_unknown() {
        let parser = CommandParser::new();
        let cmd = parser.parse("\\bogus").unwrap();
        assert_eq!(cmd, Command::Unknown("\\bogus".to_string()));
    }

    #[test]
    fn test_empty_command() {
        let parser = CommandParser::new();
        assert!(parser.parse("").is_err());
        assert!(parser.parse("   ").is_err());
    }
}
