//! Latest exchange rates tool.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::ExchangeTool;
use super::common::{display_value, field, pretty_field};
use crate::domains::tools::ToolError;
use crate::domains::upstream::UpstreamQuery;

/// Parameters for `get_latest_rates`.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct LatestRatesParams {
    /// Base currency code.
    #[schemars(description = "Base currency (default: EUR)")]
    #[serde(default)]
    pub base: Option<String>,

    /// Comma separated list of currency codes.
    #[schemars(description = "Comma separated currency codes to return rates for")]
    #[serde(default)]
    pub symbols: Option<String>,
}

/// Real-time rates for all or selected currencies.
#[derive(Debug, Clone)]
pub struct LatestRatesTool;

impl ExchangeTool for LatestRatesTool {
    const NAME: &'static str = "get_latest_rates";
    const DESCRIPTION: &'static str =
        "Get the latest exchange rates for all currencies or a comma separated subset.";

    type Params = LatestRatesParams;

    fn query(params: &LatestRatesParams) -> UpstreamQuery {
        UpstreamQuery::new("/latest")
            .optional_param("base", params.base.as_deref())
            .optional_param("symbols", params.symbols.as_deref())
    }

    fn format(_params: &LatestRatesParams, data: &Value) -> Result<String, ToolError> {
        Ok(format!(
            "Tỷ giá hối đoái mới nhất ({}):\n{}",
            display_value(field(data, "date")?),
            pretty_field(data, "rates")?
        ))
    }
}
