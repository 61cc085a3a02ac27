//! Tool definitions module.
//!
//! Each tool is defined in its own file with:
//! - a parameters struct (deserialized from the call arguments, schema via schemars)
//! - the projection of those parameters onto an [`UpstreamQuery`]
//! - the formatting of the upstream JSON into text
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file (e.g., `my_tool.rs`)
//! 2. Implement the `ExchangeTool` trait
//! 3. Export it here
//! 4. Add a variant to `ToolKind` in `kind.rs`

pub mod common;
pub mod convert;
pub mod fluctuation;
pub mod historical;
pub mod latest;
pub mod symbols;
pub mod timeseries;

pub use convert::{ConvertCurrencyParams, ConvertCurrencyTool};
pub use fluctuation::{FluctuationParams, FluctuationTool};
pub use historical::{HistoricalRatesParams, HistoricalRatesTool};
pub use latest::{LatestRatesParams, LatestRatesTool};
pub use symbols::{SymbolsParams, SymbolsTool};
pub use timeseries::{TimeseriesParams, TimeseriesTool};

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::ToolError;
use crate::domains::upstream::UpstreamQuery;

/// Trait for tool definitions.
///
/// A tool turns validated parameters into exactly one upstream GET and turns
/// the JSON answer into a single block of text.
pub trait ExchangeTool {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Typed call arguments. The input schema is generated from this type.
    type Params: DeserializeOwned + JsonSchema + Send + Sync + 'static;

    /// Checks serde cannot express (non-empty strings, date formats).
    fn validate(_params: &Self::Params) -> Result<(), ToolError> {
        Ok(())
    }

    /// Project the parameters onto the upstream request.
    fn query(params: &Self::Params) -> UpstreamQuery;

    /// Format the upstream response.
    fn format(params: &Self::Params, data: &Value) -> Result<String, ToolError>;

    /// Deserialize and validate raw call arguments.
    fn parse(arguments: JsonObject) -> Result<Self::Params, ToolError> {
        let params: Self::Params = serde_json::from_value(Value::Object(arguments))
            .map_err(|e| ToolError::invalid_arguments(format!("{}: {}", Self::NAME, e)))?;
        Self::validate(&params)?;
        Ok(params)
    }

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<Self::Params>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
