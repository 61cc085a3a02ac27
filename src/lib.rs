//! Exchange Rates MCP Server Library
//!
//! A Model Context Protocol (MCP) server that exposes the Exchange Rates Data
//! API as six tools: currency symbols, latest rates, conversion, historical
//! rates, time series and fluctuation.
//!
//! # Architecture
//!
//! - **core**: configuration, CLI, error handling, the MCP server handler and
//!   the STDIO/HTTP transports
//! - **domains**: business logic organized by bounded contexts
//!   - **upstream**: HTTP client for the Exchange Rates Data API
//!   - **tools**: tool definitions, argument validation and result formatting
//!   - **resources**: read-only documents clients can fetch by URI
//!
//! # Example
//!
//! ```rust,no_run
//! use exchange_rates_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
