//! Time series tool.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::ExchangeTool;
use super::common::{pretty_field, validate_range};
use crate::domains::tools::ToolError;
use crate::domains::upstream::UpstreamQuery;

/// Parameters for `get_timeseries`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TimeseriesParams {
    #[schemars(description = "Start date (YYYY-MM-DD)")]
    pub start_date: String,

    #[schemars(description = "End date (YYYY-MM-DD)")]
    pub end_date: String,

    #[schemars(description = "Base currency (default: EUR)")]
    #[serde(default)]
    pub base: Option<String>,

    #[schemars(description = "Comma separated currency codes to return rates for")]
    #[serde(default)]
    pub symbols: Option<String>,
}

/// Daily rates between two dates.
#[derive(Debug, Clone)]
pub struct TimeseriesTool;

impl ExchangeTool for TimeseriesTool {
    const NAME: &'static str = "get_timeseries";
    const DESCRIPTION: &'static str = "Get daily historical exchange rates between two dates.";

    type Params = TimeseriesParams;

    fn validate(params: &TimeseriesParams) -> Result<(), ToolError> {
        validate_range(&params.start_date, &params.end_date)
    }

    fn query(params: &TimeseriesParams) -> UpstreamQuery {
        UpstreamQuery::new("/timeseries")
            .param("start_date", params.start_date.as_str())
            .param("end_date", params.end_date.as_str())
            .optional_param("base", params.base.as_deref())
            .optional_param("symbols", params.symbols.as_deref())
    }

    fn format(params: &TimeseriesParams, data: &Value) -> Result<String, ToolError> {
        Ok(format!(
            "Dữ liệu tỷ giá từ {} đến {}:\n{}",
            params.start_date,
            params.end_date,
            pretty_field(data, "rates")?
        ))
    }
}
