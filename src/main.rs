//! Exchange Rates MCP Server entry point.
//!
//! Loads configuration, applies command-line flags, initializes logging and
//! starts the server on the selected transport.

use anyhow::Result;
use clap::Parser;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use exchange_rates_mcp_server::core::{Cli, Config, McpServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Environment first, flags on top
    let mut config = Config::from_env();
    cli.apply(&mut config)?;

    init_logging(&config.logging.level, config.transport.is_stdio());

    info!("Starting {} v{}", config.server.name, config.server.version);
    if !config.has_api_key() {
        warn!(
            "EXCHANGE_RATES_API_KEY is not set. Tool calls will be rejected \
             by the upstream API until a key is configured"
        );
    }

    let server = McpServer::new(config.clone())?;

    info!("Server initialized");

    let transport = TransportService::new(config.transport);
    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs always go to stderr; in STDIO mode stdout is reserved for protocol
/// messages and stderr usually ends up in the client's log file, so colours
/// are turned off.
fn init_logging(level: &str, stdio: bool) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(!stdio)
        .with_writer(std::io::stderr)
        .init();
}
