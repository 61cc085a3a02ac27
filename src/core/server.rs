//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to domain-specific services.
//!
//! Tool calls from both transports go through the same [`ToolRegistry`],
//! so listing, validation and error reporting are identical over STDIO and
//! HTTP.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    model::*,
    service::RequestContext,
};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use super::config::Config;
use super::error::Result;
use crate::domains::{
    resources::ResourceService,
    tools::{ToolError, ToolRegistry},
    upstream::{HttpRatesClient, RatesClient},
};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and coordinates
/// between the domain services to handle MCP protocol messages.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool dispatcher, shared by both transports.
    tools: ToolRegistry,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,
}

impl McpServer {
    /// Usage hint sent to clients on initialize.
    pub const INSTRUCTIONS: &'static str =
        "Exchange rate server backed by the Exchange Rates Data API. \
         Use get_symbols to discover currency codes, get_latest_rates and convert_currency \
         for current data, and get_historical_rates, get_timeseries or get_fluctuation \
         for past dates (YYYY-MM-DD).";

    /// Create a new MCP server talking to the real Exchange Rates API.
    pub fn new(config: Config) -> Result<Self> {
        let client = HttpRatesClient::new(&config.upstream)?;
        Ok(Self::with_client(config, Arc::new(client)))
    }

    /// Create a server with an explicit upstream client.
    pub fn with_client(config: Config, client: Arc<dyn RatesClient>) -> Self {
        let config = Arc::new(config);
        let resource_service = Arc::new(ResourceService::new(config.upstream.clone()));

        Self {
            tools: ToolRegistry::new(client),
            config,
            resource_service,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    // ========================================================================
    // Transport-neutral operations
    // ========================================================================

    /// List all available tools.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tools.list()
    }

    /// Call a tool by name.
    ///
    /// Every failure, unknown tool included, is reported as a protocol error
    /// whose message starts with `Error calling tool: `.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> std::result::Result<CallToolResult, McpError> {
        self.tools
            .call_tool(name, arguments)
            .await
            .map_err(tool_error_to_mcp)
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resource_service.list_resources().await
    }

    /// Read a resource by URI.
    pub async fn read_resource(
        &self,
        uri: &str,
    ) -> std::result::Result<ReadResourceResult, McpError> {
        self.resource_service
            .read_resource(uri)
            .await
            .map_err(|e| McpError::resource_not_found(e.to_string(), None))
    }
}

/// Map a tool failure onto the JSON-RPC error returned to clients.
pub fn tool_error_to_mcp(err: ToolError) -> McpError {
    if err.is_upstream() {
        warn!("Upstream call failed: {}", err);
    } else {
        error!("MCP Error: {}", err);
    }
    McpError::internal_error(format!("Error calling tool: {err}"), None)
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo {
            instructions: Some(Self::INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            ..Default::default()
        };
        info.server_info.name = self.name().to_string();
        info.server_info.version = self.version().to_string();
        info
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.list_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, request, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        McpServer::call_tool(self, &request.name, request.arguments).await
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        Ok(ListResourcesResult {
            resources: McpServer::list_resources(self).await,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        McpServer::read_resource(self, &request.uri).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::upstream::UpstreamError;
    use crate::domains::upstream::stub::StubClient;
    use serde_json::json;

    fn server(stub: Arc<StubClient>) -> McpServer {
        McpServer::with_client(Config::default(), stub)
    }

    #[test]
    fn test_get_info_advertises_tools_and_resources() {
        let info = server(StubClient::ok(json!({}))).get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
        assert!(info.capabilities.prompts.is_none());
        assert_eq!(info.server_info.name, "exchange-rates-mcp-server");
    }

    #[test]
    fn test_list_tools_matches_registry() {
        let names: Vec<String> = server(StubClient::ok(json!({})))
            .list_tools()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        assert_eq!(names, ToolRegistry::tool_names());
    }

    #[tokio::test]
    async fn test_unknown_tool_maps_to_internal_error() {
        let err = server(StubClient::ok(json!({})))
            .call_tool("nope", None)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
        assert_eq!(err.message, "Error calling tool: Unknown tool: nope");
    }

    #[test]
    fn test_tool_error_to_mcp_keeps_upstream_message() {
        let err = tool_error_to_mcp(ToolError::from(UpstreamError::network("connection reset")));
        assert_eq!(err.message, "Error calling tool: Network error: connection reset");
    }

    #[tokio::test]
    async fn test_read_unknown_resource() {
        let err = server(StubClient::ok(json!({})))
            .read_resource("exchangerates://missing")
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RESOURCE_NOT_FOUND);
    }
}
