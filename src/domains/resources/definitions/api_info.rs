//! Exchange Rates API information resource.

use super::ResourceDefinition;
use crate::core::config::UpstreamConfig;
use crate::domains::resources::service::{DynamicResourceType, ResourceContent};
use crate::domains::tools::ToolRegistry;

/// Describes the upstream API and the tools this server exposes (dynamic).
pub struct ApiInfoResource;

impl ResourceDefinition for ApiInfoResource {
    const URI: &'static str = "exchangerates://info";
    const NAME: &'static str = "Exchange Rates API Info";
    const DESCRIPTION: &'static str =
        "Information about the Exchange Rates Data API and the tools this server provides";
    const MIME_TYPE: &'static str = "text/plain";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::ApiInfo)
    }
}

impl ApiInfoResource {
    /// Render the document for the given upstream configuration.
    pub fn render(upstream: &UpstreamConfig) -> String {
        let tools: String = ToolRegistry::get_all_tools()
            .iter()
            .map(|tool| {
                format!(
                    "- {}: {}\n",
                    tool.name,
                    tool.description.as_deref().unwrap_or_default()
                )
            })
            .collect();

        let key_status = if upstream.api_key.is_some() {
            "configured"
        } else {
            "missing (set EXCHANGE_RATES_API_KEY)"
        };

        format!(
            "Exchange Rates Data API\n\
             \n\
             This MCP server provides access to real-time and historical exchange rate \
             data for 170+ world currencies.\n\
             \n\
             Available Tools:\n\
             {tools}\
             \n\
             Data Source: {base_url}\n\
             API key: {key_status}\n",
            base_url = upstream.base_url,
        )
    }
}
