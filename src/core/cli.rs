//! Command-line arguments.
//!
//! Flags override whatever the environment selected in [`Config::from_env`].

use clap::Parser;

use super::config::Config;
use super::error::Result;
use super::transport::TransportConfig;

#[cfg(feature = "http")]
use super::transport::HttpConfig;

#[derive(Debug, Parser)]
#[command(name = "exchange-rates-mcp-server")]
#[command(about = "MCP server exposing the Exchange Rates Data API", version)]
pub struct Cli {
    /// Serve MCP over standard input/output instead of HTTP
    #[arg(long)]
    pub stdio: bool,

    /// HTTP port (default: $PORT or 3000)
    #[arg(short, long, conflicts_with = "stdio")]
    pub port: Option<u16>,

    /// HTTP bind address (default: $MCP_HTTP_HOST or 127.0.0.1, which only
    /// accepts local connections; pass 0.0.0.0 to listen on all interfaces)
    #[arg(long, conflicts_with = "stdio")]
    pub host: Option<String>,

    /// Log level filter: trace, debug, info, warn or error
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Apply the parsed flags on top of `config`.
    pub fn apply(&self, config: &mut Config) -> Result<()> {
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }

        if self.stdio {
            config.transport = stdio_transport()?;
        } else if self.port.is_some() || self.host.is_some() {
            config.transport = self.http_transport(&config.transport)?;
        }

        Ok(())
    }

    #[cfg(feature = "http")]
    fn http_transport(&self, current: &TransportConfig) -> Result<TransportConfig> {
        #[allow(unreachable_patterns)]
        let mut http = match current {
            TransportConfig::Http(cfg) => cfg.clone(),
            _ => HttpConfig::from_env(),
        };
        if let Some(port) = self.port {
            http.port = port;
        }
        if let Some(host) = &self.host {
            http.host = host.clone();
        }
        Ok(TransportConfig::Http(http))
    }

    #[cfg(not(feature = "http"))]
    fn http_transport(&self, _current: &TransportConfig) -> Result<TransportConfig> {
        Err(super::error::Error::config("this build does not include the HTTP transport"))
    }
}

#[cfg(feature = "stdio")]
fn stdio_transport() -> Result<TransportConfig> {
    Ok(TransportConfig::stdio())
}

#[cfg(not(feature = "stdio"))]
fn stdio_transport() -> Result<TransportConfig> {
    Err(super::error::Error::config("this build does not include the STDIO transport"))
}
