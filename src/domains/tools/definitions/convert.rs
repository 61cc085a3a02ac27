//! Currency conversion tool.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Number, Value};

use super::ExchangeTool;
use super::common::{display_value, field, number_or_string, parse_optional_date, require_non_empty};
use crate::domains::tools::ToolError;
use crate::domains::upstream::{UpstreamError, UpstreamQuery};

/// Parameters for `convert_currency`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ConvertCurrencyParams {
    /// Source currency code.
    #[schemars(description = "Currency to convert from")]
    pub from: String,

    /// Target currency code.
    #[schemars(description = "Currency to convert to")]
    pub to: String,

    /// Amount in the source currency. Kept as a JSON number so it is
    /// forwarded and displayed as given, minus any `.0` on whole values.
    #[schemars(description = "Amount to convert", with = "f64")]
    #[serde(deserialize_with = "number_or_string")]
    pub amount: Number,

    /// Historical date for the rate.
    #[schemars(description = "Rate date (YYYY-MM-DD, default: today)")]
    #[serde(default)]
    pub date: Option<String>,
}

/// Converts an amount between two currencies.
#[derive(Debug, Clone)]
pub struct ConvertCurrencyTool;

impl ExchangeTool for ConvertCurrencyTool {
    const NAME: &'static str = "convert_currency";
    const DESCRIPTION: &'static str =
        "Convert an amount from one currency to another, optionally at a historical date.";

    type Params = ConvertCurrencyParams;

    fn validate(params: &ConvertCurrencyParams) -> Result<(), ToolError> {
        require_non_empty("from", &params.from)?;
        require_non_empty("to", &params.to)?;
        parse_optional_date("date", params.date.as_deref())
    }

    fn query(params: &ConvertCurrencyParams) -> UpstreamQuery {
        UpstreamQuery::new("/convert")
            .param("from", params.from.as_str())
            .param("to", params.to.as_str())
            .param("amount", params.amount.to_string())
            .optional_param("date", params.date.as_deref())
    }

    fn format(params: &ConvertCurrencyParams, data: &Value) -> Result<String, ToolError> {
        let result = field(data, "result")?;
        // APILayer nests the rate under `info`; accept both shapes.
        let rate = data
            .get("rate")
            .or_else(|| data.pointer("/info/rate"))
            .ok_or_else(|| UpstreamError::invalid_response("missing `rate` field"))?;

        Ok(format!(
            "Kết quả chuyển đổi: {} {} = {} {} (tỷ giá: {})",
            params.amount,
            params.from,
            display_value(result),
            params.to,
            display_value(rate)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(args: Value) -> Result<ConvertCurrencyParams, ToolError> {
        ConvertCurrencyTool::parse(args.as_object().cloned().unwrap())
    }

    #[test]
    fn test_convert_query_projection() {
        let params = parse(json!({ "from": "USD", "to": "EUR", "amount": 100 })).unwrap();
        let query = ConvertCurrencyTool::query(&params);
        assert_eq!(query.path, "/convert");
        assert_eq!(query.param_names(), vec!["from", "to", "amount"]);
        assert_eq!(query.get("amount"), Some("100"));

        let params = parse(json!({
            "from": "USD",
            "to": "EUR",
            "amount": "2.5",
            "date": "2022-05-01"
        }))
        .unwrap();
        let query = ConvertCurrencyTool::query(&params);
        assert_eq!(query.get("amount"), Some("2.5"));
        assert_eq!(query.get("date"), Some("2022-05-01"));
    }

    #[test]
    fn test_convert_format() {
        let params = parse(json!({ "from": "USD", "to": "EUR", "amount": 100 })).unwrap();
        let data = json!({ "result": 85, "rate": 0.85 });
        let text = ConvertCurrencyTool::format(&params, &data).unwrap();
        assert_eq!(text, "Kết quả chuyển đổi: 100 USD = 85 EUR (tỷ giá: 0.85)");
    }

    #[test]
    fn test_convert_whole_floats_print_as_integers() {
        let params = parse(json!({ "from": "USD", "to": "EUR", "amount": 100.0 })).unwrap();
        assert_eq!(ConvertCurrencyTool::query(&params).get("amount"), Some("100"));

        let data = json!({ "result": 85.0, "rate": 1.0 });
        let text = ConvertCurrencyTool::format(&params, &data).unwrap();
        assert_eq!(text, "Kết quả chuyển đổi: 100 USD = 85 EUR (tỷ giá: 1)");

        let params = parse(json!({ "from": "USD", "to": "EUR", "amount": "250.0" })).unwrap();
        assert_eq!(ConvertCurrencyTool::query(&params).get("amount"), Some("250"));
    }

    #[test]
    fn test_convert_format_reads_nested_rate() {
        let params = parse(json!({ "from": "USD", "to": "JPY", "amount": 2 })).unwrap();
        let data = json!({ "info": { "rate": 150.5, "timestamp": 1 }, "result": 301 });
        let text = ConvertCurrencyTool::format(&params, &data).unwrap();
        assert_eq!(text, "Kết quả chuyển đổi: 2 USD = 301 JPY (tỷ giá: 150.5)");
    }

    #[test]
    fn test_convert_missing_required_argument() {
        let err = parse(json!({ "from": "USD", "amount": 1 })).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
        assert!(err.to_string().contains("to"));
    }

    #[test]
    fn test_convert_rejects_bad_values() {
        assert!(parse(json!({ "from": "", "to": "EUR", "amount": 1 })).is_err());
        assert!(parse(json!({ "from": "USD", "to": "EUR", "amount": "lots" })).is_err());
        assert!(
            parse(json!({ "from": "USD", "to": "EUR", "amount": 1, "date": "yesterday" })).is_err()
        );
    }
}
