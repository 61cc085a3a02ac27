//! Closed set of tools known to the server.

use rmcp::model::Tool;

use super::definitions::{
    ConvertCurrencyTool, ExchangeTool, FluctuationTool, HistoricalRatesTool, LatestRatesTool,
    SymbolsTool, TimeseriesTool,
};

/// One variant per registered tool.
///
/// Every lookup goes through an exhaustive `match`, so adding a variant
/// forces name, metadata and dispatch to be wired up together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    Symbols,
    LatestRates,
    ConvertCurrency,
    HistoricalRates,
    Timeseries,
    Fluctuation,
}

impl ToolKind {
    /// All tools, in listing order.
    pub const ALL: [ToolKind; 6] = [
        ToolKind::Symbols,
        ToolKind::LatestRates,
        ToolKind::ConvertCurrency,
        ToolKind::HistoricalRates,
        ToolKind::Timeseries,
        ToolKind::Fluctuation,
    ];

    /// The MCP tool name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Symbols => SymbolsTool::NAME,
            Self::LatestRates => LatestRatesTool::NAME,
            Self::ConvertCurrency => ConvertCurrencyTool::NAME,
            Self::HistoricalRates => HistoricalRatesTool::NAME,
            Self::Timeseries => TimeseriesTool::NAME,
            Self::Fluctuation => FluctuationTool::NAME,
        }
    }

    /// Resolve a tool name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Tool metadata (name, description, input schema).
    pub fn descriptor(self) -> Tool {
        match self {
            Self::Symbols => SymbolsTool::to_tool(),
            Self::LatestRates => LatestRatesTool::to_tool(),
            Self::ConvertCurrency => ConvertCurrencyTool::to_tool(),
            Self::HistoricalRates => HistoricalRatesTool::to_tool(),
            Self::Timeseries => TimeseriesTool::to_tool(),
            Self::Fluctuation => FluctuationTool::to_tool(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for kind in ToolKind::ALL {
            assert_eq!(ToolKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(ToolKind::from_name("get_weather"), None);
        assert_eq!(ToolKind::from_name("GET_SYMBOLS"), None);
    }
}
