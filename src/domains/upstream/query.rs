//! Outbound request description.

use serde::{Deserialize, Serialize};

/// A single GET against the upstream API: a path below the base URL plus
/// its query parameters, in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamQuery {
    /// Endpoint path, always starting with `/`.
    pub path: String,

    /// Query parameters as `(name, value)` pairs.
    pub params: Vec<(String, String)>,
}

impl UpstreamQuery {
    /// Create a query for `path` with no parameters.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
        }
    }

    /// Add a parameter that is always sent.
    pub fn param(mut self, name: &str, value: impl Into<String>) -> Self {
        self.params.push((name.to_string(), value.into()));
        self
    }

    /// Add a parameter only when a non-empty value is present.
    pub fn optional_param(self, name: &str, value: Option<&str>) -> Self {
        match value.filter(|v| !v.is_empty()) {
            Some(v) => self.param(name, v),
            None => self,
        }
    }

    /// Look up a parameter value by name.
    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Names of all parameters, in order.
    #[cfg(test)]
    pub fn param_names(&self) -> Vec<&str> {
        self.params.iter().map(|(k, _)| k.as_str()).collect()
    }
}
