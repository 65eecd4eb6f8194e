use crate::args::Cli;
use vaga_cli::{BrowseSession, CLIConfiguration, CLIError, OutputFormat, Result};
use vaga_link::{VagaLinkClient, VagaLinkTimeouts};

/// Build timeouts configuration from CLI arguments and config file
fn build_timeouts(cli: &Cli, config: &CLIConfiguration) -> VagaLinkTimeouts {
    // Check for preset flags first
    if cli.fast_timeouts {
        return VagaLinkTimeouts::fast();
    }
    if cli.relaxed_timeouts {
        return VagaLinkTimeouts::relaxed();
    }

    let server = config.resolved_server();
    VagaLinkTimeouts::builder()
        .request_timeout_secs(cli.timeout.unwrap_or(server.timeout))
        .connection_timeout_secs(cli.connection_timeout.unwrap_or(server.connection_timeout))
        .build()
}

pub fn create_session(cli: &Cli, config: &CLIConfiguration) -> Result<BrowseSession> {
    // Determine output format
    let format = if cli.json {
        OutputFormat::Json
    } else {
        cli.format
    };

    let server = config.resolved_server();

    // CLI args win over the config file
    let server_url = cli
        .url
        .clone()
        .or_else(|| server.url.clone())
        .ok_or_else(|| {
            CLIError::ConfigurationError(
                "no server URL; pass --url or set server.url in ~/.vaga/config.toml".into(),
            )
        })?;

    let mut builder = VagaLinkClient::builder()
        .base_url(server_url)
        .timeouts(build_timeouts(cli, config))
        .max_retries(server.max_retries);

    if let Some(key) = cli.key.clone().or_else(|| server.api_key.clone()) {
        builder = builder.api_key(key);
    }

    let client = builder.build()?;

    let ui = config.resolved_ui();
    let mut session = BrowseSession::new(
        client,
        config,
        format,
        !cli.no_color && ui.color,
        !cli.no_spinner,
        cli.loading_threshold_ms,
    );

    // Seed filters from one-shot flags; each setter leaves the session on
    // page 1, so --page still decides the first fetch in --list mode.
    let state = session.state_mut();
    if let Some(ref search) = cli.search {
        state.set_search(search.clone());
    }
    if let Some(ref location) = cli.location {
        state.set_location(location.clone());
    }
    if let Some(ref company) = cli.company {
        state.set_company(company.clone());
    }
    if cli.min_salary.is_some() || cli.max_salary.is_some() {
        state.set_salary(
            cli.min_salary.clone().unwrap_or_default(),
            cli.max_salary.clone().unwrap_or_default(),
        );
    }

    Ok(session)
}
