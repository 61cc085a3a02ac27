//! Fluctuation tool.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::ExchangeTool;
use super::common::{pretty_field, validate_range};
use crate::domains::tools::ToolError;
use crate::domains::upstream::UpstreamQuery;

/// Parameters for `get_fluctuation`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FluctuationParams {
    #[schemars(description = "Start date (YYYY-MM-DD)")]
    pub start_date: String,

    #[schemars(description = "End date (YYYY-MM-DD)")]
    pub end_date: String,

    #[schemars(description = "Base currency (default: EUR)")]
    #[serde(default)]
    pub base: Option<String>,

    #[schemars(description = "Comma separated currency codes to track fluctuation for")]
    #[serde(default)]
    pub symbols: Option<String>,
}

/// How much each rate moved between two dates.
#[derive(Debug, Clone)]
pub struct FluctuationTool;

impl ExchangeTool for FluctuationTool {
    const NAME: &'static str = "get_fluctuation";
    const DESCRIPTION: &'static str =
        "Get rate fluctuation (start rate, end rate, change, change percent) between two dates.";

    type Params = FluctuationParams;

    fn validate(params: &FluctuationParams) -> Result<(), ToolError> {
        validate_range(&params.start_date, &params.end_date)
    }

    fn query(params: &FluctuationParams) -> UpstreamQuery {
        UpstreamQuery::new("/fluctuation")
            .param("start_date", params.start_date.as_str())
            .param("end_date", params.end_date.as_str())
            .optional_param("base", params.base.as_deref())
            .optional_param("symbols", params.symbols.as_deref())
    }

    fn format(params: &FluctuationParams, data: &Value) -> Result<String, ToolError> {
        Ok(format!(
            "Biến động tỷ giá từ {} đến {}:\n{}",
            params.start_date,
            params.end_date,
            pretty_field(data, "rates")?
        ))
    }
}
