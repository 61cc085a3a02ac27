//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are the exchange-rate operations MCP clients can call.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `kind.rs` - Closed set of tools and name lookup
//! - `registry.rs` - Tool listing and dispatch, shared by every transport
//! - `error.rs` - Tool-specific error types

pub mod definitions;
mod error;
mod kind;
mod registry;

pub use definitions::ExchangeTool;
pub use error::ToolError;
pub use kind::ToolKind;
pub use registry::ToolRegistry;
