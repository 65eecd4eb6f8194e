//! Configuration file management for ~/.vaga/config.toml
//!
//! # Configuration Format
//!
//! ```toml
//! [server]
//! url = "https://project.example.co"   # Backend project URL
//! api_key = "eyJhbGc..."               # Project anon key
//! timeout = 10                         # Request timeout in seconds
//! connection_timeout = 10              # Connect timeout in seconds
//!
//! [ui]
//! format = "table"      # table, json
//! color = true
//! page_size = 20        # Listings per page
//! debounce_ms = 300     # Quiet period before a search fires
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CLIError, Result};

/// CLI configuration loaded from TOML file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CLIConfiguration {
    /// Backend connection settings
    pub server: Option<ServerConfig>,

    /// UI preferences
    pub ui: Option<UIConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Backend project URL (e.g. https://project.example.co)
    pub url: Option<String>,

    /// Project API key (anon role)
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Connect timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,

    /// Maximum retry attempts for connect/timeout failures
    #[serde(default = "default_retries")]
    pub max_retries: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UIConfig {
    /// Output format: table, json
    #[serde(default = "default_format")]
    pub format: String,

    /// Enable colored output
    #[serde(default = "default_color")]
    pub color: bool,

    /// Listings per page
    #[serde(default = "default_page_size")]
    pub page_size: u64,

    /// Quiet period before a search fires, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_timeout() -> u64 {
    10
}

fn default_connection_timeout() -> u64 {
    10
}

fn default_retries() -> u32 {
    3
}

fn default_format() -> String {
    "table".to_string()
}

fn default_color() -> bool {
    true
}

fn default_page_size() -> u64 {
    20
}

fn default_debounce_ms() -> u64 {
    300
}

impl Default for CLIConfiguration {
    fn default() -> Self {
        Self {
            server: Some(ServerConfig {
                url: Some("http://localhost:54321".to_string()),
                api_key: None,
                timeout: default_timeout(),
                connection_timeout: default_connection_timeout(),
                max_retries: default_retries(),
            }),
            ui: Some(UIConfig {
                format: default_format(),
                color: default_color(),
                page_size: default_page_size(),
                debounce_ms: default_debounce_ms(),
            }),
        }
    }
}

pub fn expand_config_path(path: &Path) -> PathBuf {
    let path_str = path.to_str().unwrap_or("~/.vaga/config.toml");
    if let Some(rest) = path_str.strip_prefix("~/") {
        if let Some(home_dir) = dirs::home_dir() {
            return home_dir.join(rest);
        }
    }
    path.to_path_buf()
}

pub fn default_config_path() -> PathBuf {
    expand_config_path(Path::new("~/.vaga/config.toml"))
}

impl CLIConfiguration {
    /// Load configuration from file
    ///
    /// Returns default configuration if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        let expanded_path = expand_config_path(path);
        let path = &expanded_path;

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            CLIError::ConfigurationError(format!("Failed to read config file: {}", e))
        })?;

        let config: CLIConfiguration = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let expanded_path = expand_config_path(path);
        let path = &expanded_path;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CLIError::ConfigurationError(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn resolved_server(&self) -> ServerConfig {
        self.server.clone().unwrap_or(ServerConfig {
            url: None,
            api_key: None,
            timeout: default_timeout(),
            connection_timeout: default_connection_timeout(),
            max_retries: default_retries(),
        })
    }

    pub fn resolved_ui(&self) -> UIConfig {
        self.ui.clone().unwrap_or(UIConfig {
            format: default_format(),
            color: default_color(),
            page_size: default_page_size(),
            debounce_ms: default_debounce_ms(),
        })
    }
}
