//! Currency symbols tool.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::ExchangeTool;
use super::common::pretty_field;
use crate::domains::tools::ToolError;
use crate::domains::upstream::UpstreamQuery;

/// `get_symbols` takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct SymbolsParams {}

/// Lists every currency code supported by the upstream API.
#[derive(Debug, Clone)]
pub struct SymbolsTool;

impl ExchangeTool for SymbolsTool {
    const NAME: &'static str = "get_symbols";
    const DESCRIPTION: &'static str =
        "List all supported currencies as a mapping from currency code to currency name.";

    type Params = SymbolsParams;

    fn query(_params: &SymbolsParams) -> UpstreamQuery {
        UpstreamQuery::new("/symbols")
    }

    fn format(_params: &SymbolsParams, data: &Value) -> Result<String, ToolError> {
        Ok(format!(
            "Danh sách các loại tiền tệ được hỗ trợ:\n{}",
            pretty_field(data, "symbols")?
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_symbols_query_has_no_params() {
        let params = SymbolsTool::parse(Default::default()).unwrap();
        let query = SymbolsTool::query(&params);
        assert_eq!(query.path, "/symbols");
        assert!(query.params.is_empty());
    }

    #[test]
    fn test_symbols_format() {
        let data = json!({
            "success": true,
            "symbols": { "EUR": "Euro", "USD": "United States Dollar" }
        });
        let text = SymbolsTool::format(&SymbolsParams {}, &data).unwrap();
        assert!(text.starts_with("Danh sách các loại tiền tệ được hỗ trợ:\n{"));
        assert!(text.contains("  \"EUR\": \"Euro\""));
    }

    #[test]
    fn test_symbols_ignores_unknown_arguments() {
        let mut args = rmcp::model::JsonObject::new();
        args.insert("base".to_string(), json!("USD"));
        let params = SymbolsTool::parse(args).unwrap();
        assert!(SymbolsTool::query(&params).params.is_empty());
    }
}
