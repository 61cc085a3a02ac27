//! Upstream domain module.
//!
//! Everything needed to talk to the Exchange Rates Data API:
//!
//! - `query.rs` - the [`UpstreamQuery`] a tool projects its arguments into
//! - `client.rs` - the [`RatesClient`] capability and its reqwest implementation
//! - `error.rs` - upstream error types

mod client;
mod error;
mod query;

#[cfg(test)]
pub(crate) mod stub;

pub use client::{API_KEY_HEADER, HttpRatesClient, RatesClient};
pub use error::UpstreamError;
pub use query::UpstreamQuery;
