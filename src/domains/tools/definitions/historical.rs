//! Historical exchange rates tool.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::ExchangeTool;
use super::common::{parse_date, pretty_field};
use crate::domains::tools::ToolError;
use crate::domains::upstream::UpstreamQuery;

/// Parameters for `get_historical_rates`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct HistoricalRatesParams {
    /// The date to fetch rates for. Goes into the path, not the query string.
    #[schemars(description = "Date to fetch rates for (YYYY-MM-DD)")]
    pub date: String,

    #[schemars(description = "Base currency (default: EUR)")]
    #[serde(default)]
    pub base: Option<String>,

    #[schemars(description = "Comma separated currency codes to return rates for")]
    #[serde(default)]
    pub symbols: Option<String>,
}

/// Rates as they were on a given day.
#[derive(Debug, Clone)]
pub struct HistoricalRatesTool;

impl ExchangeTool for HistoricalRatesTool {
    const NAME: &'static str = "get_historical_rates";
    const DESCRIPTION: &'static str = "Get historical exchange rates for a specific date.";

    type Params = HistoricalRatesParams;

    fn validate(params: &HistoricalRatesParams) -> Result<(), ToolError> {
        parse_date("date", &params.date).map(|_| ())
    }

    fn query(params: &HistoricalRatesParams) -> UpstreamQuery {
        UpstreamQuery::new(format!("/{}", params.date))
            .optional_param("base", params.base.as_deref())
            .optional_param("symbols", params.symbols.as_deref())
    }

    fn format(params: &HistoricalRatesParams, data: &Value) -> Result<String, ToolError> {
        Ok(format!(
            "Tỷ giá lịch sử ngày {}:\n{}",
            params.date,
            pretty_field(data, "rates")?
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(args: Value) -> Result<HistoricalRatesParams, ToolError> {
        HistoricalRatesTool::parse(args.as_object().cloned().unwrap())
    }

    #[test]
    fn test_historical_date_goes_into_path() {
        let params = parse(json!({ "date": "2023-01-01" })).unwrap();
        let query = HistoricalRatesTool::query(&params);
        assert_eq!(query.path, "/2023-01-01");
        assert!(query.get("date").is_none());
        assert!(query.params.is_empty());
    }

    #[test]
    fn test_historical_with_filters() {
        let params =
            parse(json!({ "date": "2023-01-01", "base": "GBP", "symbols": "USD" })).unwrap();
        let query = HistoricalRatesTool::query(&params);
        assert_eq!(query.param_names(), vec!["base", "symbols"]);
    }

    #[test]
    fn test_historical_requires_valid_date() {
        assert!(matches!(parse(json!({})), Err(ToolError::InvalidArguments(_))));
        assert!(matches!(
            parse(json!({ "date": "latest" })),
            Err(ToolError::InvalidArguments(_))
        ));
    }

    #[test]
    fn test_historical_format() {
        let params = parse(json!({ "date": "2023-01-01" })).unwrap();
        let data = json!({ "rates": { "USD": 1.07 } });
        let text = HistoricalRatesTool::format(&params, &data).unwrap();
        assert_eq!(text, "Tỷ giá lịch sử ngày 2023-01-01:\n{\n  \"USD\": 1.07\n}");
    }
}
