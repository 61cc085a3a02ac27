//! Domains module containing business logic organized by bounded contexts.
//!
//! - **tools**: exchange-rate tools callable by MCP clients
//! - **resources**: read-only documents served to MCP clients
//! - **upstream**: the Exchange Rates Data API client the tools call

pub mod resources;
pub mod tools;
pub mod upstream;
