//! Mock implementations for testing

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::graphql::executor::{FetchError, QueryExecutor};
use crate::graphql::queries::QueryRequest;

/// What the mock executor answers to one request
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub result: Result<Value, String>,
    pub delay: Duration,
}

impl MockResponse {
    pub fn ok(data: Value) -> Self {
        Self {
            result: Ok(data),
            delay: Duration::ZERO,
        }
    }

    pub fn fail(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
            delay: Duration::ZERO,
        }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

type Responder = dyn Fn(&QueryRequest) -> MockResponse + Send + Sync;

/// Executor answering from a closure and recording every request
pub struct MockExecutor {
    responder: Box<Responder>,
    calls: Arc<Mutex<Vec<QueryRequest>>>,
}

impl MockExecutor {
    pub fn new(responder: impl Fn(&QueryRequest) -> MockResponse + Send + Sync + 'static) -> Self {
        Self {
            responder: Box::new(responder),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Requests received so far, in arrival order
    pub fn calls(&self) -> Vec<QueryRequest> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Number of requests with the given name
    pub fn call_count(&self, name: &str) -> usize {
        self.calls().iter().filter(|r| r.name() == name).count()
    }
}

#[async_trait]
impl QueryExecutor for MockExecutor {
    async fn execute(&self, request: &QueryRequest) -> Result<Value, FetchError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(request.clone());
        }

        let response = (self.responder)(request);
        if !response.delay.is_zero() {
            tokio::time::sleep(response.delay).await;
        }

        response.result.map_err(FetchError::NetworkError)
    }
}
