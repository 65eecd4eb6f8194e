//! Browse session: state, loaders, and the interactive loop.
//!
//! The session owns the link client, the filter/page state, and the
//! formatter. Loads are sequence-numbered so a stale response can never
//! overwrite state written by a newer load, and the loading flag is cleared
//! on the success and failure paths alike.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use clap::ValueEnum;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use vaga_link::{JobQuery, VagaLinkClient};

use crate::{
    config::CLIConfiguration,
    debounce::Debouncer,
    error::{CLIError, Result},
    formatter::OutputFormatter,
    parser::{Command, CommandParser},
    state::BrowseState,
    stats::{average_salary, Statistics},
};

/// Output format for fetched records
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Delayed spinner shown while a request is in flight.
///
/// The spinner only appears once the request has been slow for the
/// configured threshold, so fast responses never flicker.
struct LoadingIndicator {
    spinner: Arc<Mutex<Option<ProgressBar>>>,
    task: Option<tokio::task::JoinHandle<()>>,
}

impl LoadingIndicator {
    fn start(message: &'static str, threshold: Duration, enabled: bool) -> Self {
        let spinner = Arc::new(Mutex::new(None::<ProgressBar>));
        let task = if enabled {
            let slot = Arc::clone(&spinner);
            Some(tokio::spawn(async move {
                tokio::time::sleep(threshold).await;
                let pb = Self::create_spinner(message);
                *slot.lock().unwrap() = Some(pb);
            }))
        } else {
            None
        };

        Self {
            spinner,
            task,
        }
    }

    fn finish(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        if let Some(pb) = self.spinner.lock().unwrap().take() {
            pb.finish_and_clear();
        }
    }

    fn create_spinner(message: &'static str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    }
}

/// Browse session state
pub struct BrowseSession {
    /// Backend client
    client: VagaLinkClient,

    /// Command parser
    parser: CommandParser,

    /// Output formatter
    formatter: OutputFormatter,

    /// Active filters plus pagination
    state: BrowseState,

    /// Coalesces rapid search input
    debouncer: Debouncer,

    /// A load is currently in flight
    loading: bool,

    /// Sequence number of the newest issued load
    load_seq: u64,

    /// Threshold for showing the loading indicator (milliseconds)
    loading_threshold_ms: u64,

    /// Enable spinners/animations
    animations: bool,

    /// Enable colored output
    color: bool,
}

impl BrowseSession {
    /// Create a new browse session
    pub fn new(
        client: VagaLinkClient,
        config: &CLIConfiguration,
        format: OutputFormat,
        color: bool,
        animations: bool,
        loading_threshold_ms: u64,
    ) -> Self {
        let ui = config.resolved_ui();

        Self {
            client,
            parser: CommandParser::new(),
            formatter: OutputFormatter::new(format, color),
            state: BrowseState::new(ui.page_size),
            debouncer: Debouncer::new(Duration::from_millis(ui.debounce_ms)),
            loading: false,
            load_seq: 0,
            loading_threshold_ms,
            animations,
            color,
        }
    }

    /// Current filter and page state
    pub fn state(&self) -> &BrowseState {
        &self.state
    }

    /// Mutable filter and page state
    pub fn state_mut(&mut self) -> &mut BrowseState {
        &mut self.state
    }

    /// True while a load is in flight
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Load one page of listings and display it.
    ///
    /// On success the page state takes the returned total and the requested
    /// page; on failure both are left untouched so the previous listing
    /// stays meaningful. The loading flag clears on both paths.
    pub async fn load_jobs(&mut self, page: u64) -> Result<()> {
        self.load_seq += 1;
        let seq = self.load_seq;

        self.loading = true;
        let query = JobQuery::build(&self.state.filters, page, self.state.page.page_size);
        let indicator = self.start_indicator("Loading jobs...");

        let result = self.client.fetch_jobs(&query).await;

        indicator.finish();
        self.loading = false;

        match result {
            Ok(page_data) => {
                if seq != self.load_seq {
                    // A newer load was issued while this one was in flight;
                    // its result owns the state now.
                    return Ok(());
                }

                self.state.page.total_count = page_data.total;
                self.state.page.current_page = query.page();

                let output = self.formatter.format_jobs(&page_data, &self.state.page)?;
                println!("{}", output);
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Reload the current page with the current filters
    pub async fn reload(&mut self) -> Result<()> {
        self.load_jobs(self.state.page.current_page).await
    }

    /// Update the search text and reload once the input goes quiet
    pub async fn search(&mut self, text: impl Into<String>) -> Result<()> {
        self.state.set_search(text);
        if self.debouncer.trigger().await {
            self.reload().await
        } else {
            Ok(())
        }
    }

    /// Fetch one job with its nested collections and display it
    pub async fn open_job(&mut self, id: i64) -> Result<()> {
        self.loading = true;
        let indicator = self.start_indicator("Loading job details...");

        let result = self.client.fetch_job(id).await;

        indicator.finish();
        self.loading = false;

        match result {
            Ok(job) => {
                let output = self.formatter.format_job_detail(&job)?;
                println!("{}", output);
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Run the three aggregate reads concurrently.
    ///
    /// Each metric degrades independently: a failed read logs and leaves
    /// `None`, it never blocks the other metrics.
    pub async fn load_statistics(&self) -> Statistics {
        let (jobs, companies, salaries) = tokio::join!(
            self.client.count_jobs(),
            self.client.count_companies(),
            self.client.fetch_salary_rows()
        );

        if let Err(ref e) = jobs {
            warn!("[STATS] job count failed: {}", e);
        }
        if let Err(ref e) = companies {
            warn!("[STATS] company count failed: {}", e);
        }
        if let Err(ref e) = salaries {
            warn!("[STATS] salary rows failed: {}", e);
        }

        Statistics {
            total_jobs: jobs.ok(),
            total_companies: companies.ok(),
            average_salary: salaries.ok().and_then(|rows| average_salary(&rows)),
        }
    }

    /// Load and display the statistics banner
    pub async fn show_statistics(&mut self) -> Result<()> {
        let indicator = self.start_indicator("Loading statistics...");
        let stats = self.load_statistics().await;
        indicator.finish();

        let output = self.formatter.format_stats(&stats)?;
        println!("{}", output);
        Ok(())
    }

    /// Switch the output format
    pub fn set_format(&mut self, name: &str) -> Result<()> {
        let format = match name.to_lowercase().as_str() {
            "table" => OutputFormat::Table,
            "json" => OutputFormat::Json,
            _ => {
                return Err(CLIError::ParseError(format!(
                    "Unknown format '{}'; expected table or json",
                    name
                )))
            }
        };
        self.formatter.set_format(format);
        println!("Output format: {}", name.to_lowercase());
        Ok(())
    }

    /// Run the interactive prompt loop
    pub async fn run_interactive(&mut self) -> Result<()> {
        self.print_banner();

        // Startup mirrors opening the page: first listing plus statistics
        if let Err(e) = self.load_jobs(1).await {
            self.print_error(&e);
        }
        if let Err(e) = self.show_statistics().await {
            self.print_error(&e);
        }

        let mut rl = DefaultEditor::new()?;
        let prompt = self.prompt();

        loop {
            match rl.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim().to_string();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line.as_str());

                    let command = match self.parser.parse(&line) {
                        Ok(command) => command,
                        Err(e) => {
                            self.print_error(&e);
                            continue;
                        }
                    };

                    if command == Command::Quit {
                        break;
                    }

                    if let Err(e) = self.handle_command(command).await {
                        self.print_error(&e);
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            }
        }

        Ok(())
    }

    async fn handle_command(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Search(text) => self.search(text).await,
            Command::Location(location) => {
                self.state.set_location(location);
                self.reload().await
            }
            Command::Company(company) => {
                self.state.set_company(company);
                self.reload().await
            }
            Command::Salary { min, max } => {
                self.state.set_salary(min, max);
                self.reload().await
            }
            Command::ClearFilters => {
                self.state.clear_filters();
                self.reload().await
            }
            Command::ShowFilters => {
                self.print_filters();
                Ok(())
            }
            Command::Next => {
                if self.state.page.current_page < self.state.page.total_pages() {
                    self.load_jobs(self.state.page.current_page + 1).await
                } else {
                    println!("Already on the last page.");
                    Ok(())
                }
            }
            Command::Prev => {
                if self.state.page.current_page > 1 {
                    self.load_jobs(self.state.page.current_page - 1).await
                } else {
                    println!("Already on the first page.");
                    Ok(())
                }
            }
            Command::Page(page) => {
                let target = self.state.page.clamp_page(page);
                self.load_jobs(target).await
            }
            Command::View(id) => self.open_job(id).await,
            Command::Stats => self.show_statistics().await,
            Command::Refresh => self.reload().await,
            Command::SetFormat(format) => self.set_format(&format),
            Command::Help => {
                self.print_help();
                Ok(())
            }
            // Quit is handled by the loop before dispatch
            Command::Quit => Ok(()),
            Command::Unknown(command) => {
                println!("Unknown command: {}. Try \\help.", command);
                Ok(())
            }
        }
    }

    fn start_indicator(&self, message: &'static str) -> LoadingIndicator {
        LoadingIndicator::start(
            message,
            Duration::from_millis(self.loading_threshold_ms),
            self.animations,
        )
    }

    fn prompt(&self) -> String {
        "vaga> ".to_string()
    }

    fn print_banner(&self) {
        println!();
        if self.color {
            println!("{}", "Vagas — job board viewer".bold());
            println!("Server: {}", self.client.base_url().cyan());
        } else {
            println!("Vagas — job board viewer");
            println!("Server: {}", self.client.base_url());
        }
        println!("Type to search, \\help for commands, \\q to quit.");
        println!();
    }

    fn print_filters(&self) {
        let filters = &self.state.filters;
        let show = |value: &str| {
            if value.is_empty() {
                "(not set)".to_string()
            } else {
                value.to_string()
            }
        };

        println!("Active filters:");
        println!("  search:     {}", show(&filters.search));
        println!("  location:   {}", show(&filters.location));
        println!("  company:    {}", show(&filters.company));
        println!("  min salary: {}", show(&filters.min_salary));
        println!("  max salary: {}", show(&filters.max_salary));
    }

    fn print_help(&self) {
        println!("Commands:");
        println!("  <text>              search title and description");
        println!("  \\location [text]    filter by location");
        println!("  \\company [name]     filter by exact company name");
        println!("  \\salary [min] [max] set the salary range");
        println!("  \\filters            show active filters");
        println!("  \\clear              reset all filters");
        println!("  \\next, \\prev        move between pages");
        println!("  \\page <n>           jump to a page");
        println!("  \\view <id>          show full details of a job");
        println!("  \\stats              show board statistics");
        println!("  \\refresh            reload the current page");
        println!("  \\format <table|json> switch output format");
        println!("  \\help               this help");
        println!("  \\quit               exit");
    }

    fn print_error(&self, error: &CLIError) {
        if self.color {
            eprintln!("{} {}", "Error:".red().bold(), error);
        } else {
            eprintln!("Error: {}", error);
        }
    }
}
