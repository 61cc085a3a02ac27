//! In-memory [`RatesClient`] for tests.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex};

use super::{RatesClient, UpstreamError, UpstreamQuery};

type Responder = Box<dyn Fn(&UpstreamQuery) -> Result<Value, UpstreamError> + Send + Sync>;

/// Upstream stub that records every query and replays a canned answer.
pub struct StubClient {
    calls: Mutex<Vec<UpstreamQuery>>,
    respond: Responder,
}

impl StubClient {
    /// Always answer with `body`.
    pub fn ok(body: Value) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            respond: Box::new(move |_| Ok(body.clone())),
        })
    }

    /// Always fail with an HTTP status error.
    pub fn failing(status: u16, message: &'static str) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            respond: Box::new(move |_| Err(UpstreamError::status(status, message))),
        })
    }

    /// Every query received so far.
    pub fn calls(&self) -> Vec<UpstreamQuery> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RatesClient for StubClient {
    async fn fetch(&self, query: &UpstreamQuery) -> Result<Value, UpstreamError> {
        self.calls.lock().unwrap().push(query.clone());
        (self.respond)(query)
    }
}
