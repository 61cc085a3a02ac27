//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The catalog of available tools (single source of truth for both transports)
//! - Dispatch of tool calls to the matching definition
//!
//! Dispatch is one stateless round trip: validate arguments, issue one
//! upstream GET through the injected [`RatesClient`], format the result.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, JsonObject, Tool};
use tracing::{debug, info, instrument, warn};

use super::ToolError;
use super::definitions::{
    ConvertCurrencyTool, ExchangeTool, FluctuationTool, HistoricalRatesTool, LatestRatesTool,
    SymbolsTool, TimeseriesTool,
};
use super::kind::ToolKind;
use crate::domains::upstream::RatesClient;

/// Tool registry - manages all available tools.
#[derive(Clone)]
pub struct ToolRegistry {
    client: Arc<dyn RatesClient>,
}

impl ToolRegistry {
    /// Create a new tool registry backed by the given upstream client.
    pub fn new(client: Arc<dyn RatesClient>) -> Self {
        Self { client }
    }

    /// Get all tool names, in listing order.
    pub fn tool_names() -> Vec<&'static str> {
        ToolKind::ALL.iter().map(|kind| kind.name()).collect()
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// Both HTTP and STDIO transports use this to list tools.
    pub fn get_all_tools() -> Vec<Tool> {
        ToolKind::ALL.iter().map(|kind| kind.descriptor()).collect()
    }

    /// List the tools served by this registry.
    pub fn list(&self) -> Vec<Tool> {
        Self::get_all_tools()
    }

    /// Dispatch a tool call to the appropriate definition.
    ///
    /// Unknown names and invalid arguments are rejected before any upstream
    /// request is made. Absent arguments are treated as an empty object.
    #[instrument(skip(self, arguments))]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        let Some(kind) = ToolKind::from_name(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::not_found(name));
        };

        info!("Calling tool: {}", name);
        let arguments = arguments.unwrap_or_default();

        match kind {
            ToolKind::Symbols => self.run::<SymbolsTool>(arguments).await,
            ToolKind::LatestRates => self.run::<LatestRatesTool>(arguments).await,
            ToolKind::ConvertCurrency => self.run::<ConvertCurrencyTool>(arguments).await,
            ToolKind::HistoricalRates => self.run::<HistoricalRatesTool>(arguments).await,
            ToolKind::Timeseries => self.run::<TimeseriesTool>(arguments).await,
            ToolKind::Fluctuation => self.run::<FluctuationTool>(arguments).await,
        }
    }

    async fn run<T: ExchangeTool>(
        &self,
        arguments: JsonObject,
    ) -> Result<CallToolResult, ToolError> {
        let params = T::parse(arguments)?;
        let query = T::query(&params);
        debug!(path = %query.path, "Dispatching {} upstream", T::NAME);

        let data = self.client.fetch(&query).await?;
        let text = T::format(&params, &data)?;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}
