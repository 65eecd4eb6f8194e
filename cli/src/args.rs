use clap::Parser;
use std::path::PathBuf;
use vaga_cli::OutputFormat;

// Macro to create the version string at compile time
macro_rules! version_string {
    () => {
        concat!(
            env!("CARGO_PKG_VERSION"),
            "\nCommit: ",
            env!("GIT_COMMIT_HASH"),
            " (",
            env!("GIT_BRANCH"),
            ")\nBuilt: ",
            env!("BUILD_DATE")
        )
    };
}

/// Vaga - Terminal viewer for the Vagas job board
#[derive(Parser, Debug)]
#[command(name = "vaga")]
#[command(version = version_string!())]
#[command(about = "Browse job listings from the terminal", long_about = None)]
pub struct Cli {
    /// Backend project URL (e.g. https://project.example.co)
    #[arg(short = 'u', long = "url")]
    pub url: Option<String>,

    /// Project API key (anon role)
    #[arg(short = 'k', long = "key")]
    pub key: Option<String>,

    /// Print one page of listings and exit
    #[arg(long = "list")]
    pub list: bool,

    /// Show full details of one job and exit
    #[arg(long = "job", value_name = "ID")]
    pub job: Option<i64>,

    /// Show board statistics and exit
    #[arg(long = "stats")]
    pub stats: bool,

    /// Initial search text
    #[arg(short = 's', long = "search")]
    pub search: Option<String>,

    /// Initial location filter
    #[arg(long = "location")]
    pub location: Option<String>,

    /// Initial company filter (exact name)
    #[arg(long = "company")]
    pub company: Option<String>,

    /// Initial minimum salary
    #[arg(long = "min-salary")]
    pub min_salary: Option<String>,

    /// Initial maximum salary
    #[arg(long = "max-salary")]
    pub max_salary: Option<String>,

    /// Page to fetch in --list mode
    #[arg(long = "page", default_value_t = 1)]
    pub page: u64,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Enable JSON output (shorthand for --format=json)
    #[arg(long = "json", conflicts_with = "format")]
    pub json: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Disable spinners/animations
    #[arg(long = "no-spinner")]
    pub no_spinner: bool,

    /// Loading indicator threshold in ms (0 to always show)
    #[arg(long = "loading-threshold-ms", default_value_t = 200)]
    pub loading_threshold_ms: u64,

    /// Configuration file path
    #[arg(long = "config", default_value = "~/.vaga/config.toml")]
    pub config: PathBuf,

    /// Enable verbose logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// HTTP request timeout in seconds (default: 10)
    #[arg(long = "timeout", value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Connection timeout in seconds (TCP + TLS handshake)
    #[arg(long = "connection-timeout", value_name = "SECONDS")]
    pub connection_timeout: Option<u64>,

    /// Use fast timeout preset (optimized for local development)
    #[arg(long = "fast-timeouts")]
    pub fast_timeouts: bool,

    /// Use relaxed timeout preset (optimized for high-latency networks)
    #[arg(long = "relaxed-timeouts")]
    pub relaxed_timeouts: bool,
}
