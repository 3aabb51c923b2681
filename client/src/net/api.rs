//! Query service client.
//!
//! Client-side (hydrate): a real `POST` via `gloo-net`, raced against a
//! deadline from `gloo-timers`.
//! Server-side (SSR): a stub that reports [`QueryError::Unavailable`], since
//! queries are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as a typed [`QueryError`]; the widget decides
//! what the user sees. Non-2xx responses are never decoded.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::pin::pin;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::{Either, select};

#[cfg(feature = "hydrate")]
use super::types::{check_status, decode_response};
use super::types::{QueryError, QueryRequest, QueryResponse};
use crate::widget::config::WidgetConfig;

/// The widget's only outbound dependency.
///
/// Futures are `?Send`: the widget runs on the browser's single UI thread.
#[async_trait(?Send)]
pub trait QueryService {
    /// Ask the service one question.
    async fn query(&self, request: &QueryRequest) -> Result<QueryResponse, QueryError>;
}

/// HTTP implementation of [`QueryService`] with a per-request deadline.
#[derive(Clone, Debug)]
pub struct HttpQueryService {
    endpoint: String,
    timeout: Duration,
}

impl HttpQueryService {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self { endpoint: endpoint.into(), timeout }
    }

    pub fn from_config(config: &WidgetConfig) -> Self {
        Self::new(config.endpoint.clone(), config.timeout)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait(?Send)]
impl QueryService for HttpQueryService {
    async fn query(&self, request: &QueryRequest) -> Result<QueryResponse, QueryError> {
        #[cfg(feature = "hydrate")]
        {
            with_deadline(post_query(&self.endpoint, request), gloo_timers::future::sleep(self.timeout)).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::warn!("query to {} skipped outside the browser ({} chars)", self.endpoint, request.query.len());
            Err(QueryError::Unavailable)
        }
    }
}

/// Race a request against a deadline future.
///
/// Whichever completes first decides the result; the loser is dropped. When
/// both are ready on the same poll the request wins.
pub async fn with_deadline<F, D>(send: F, deadline: D) -> Result<QueryResponse, QueryError>
where
    F: Future<Output = Result<QueryResponse, QueryError>>,
    D: Future<Output = ()>,
{
    match select(pin!(send), pin!(deadline)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(QueryError::Timeout),
    }
}

#[cfg(feature = "hydrate")]
async fn post_query(endpoint: &str, request: &QueryRequest) -> Result<QueryResponse, QueryError> {
    let resp = gloo_net::http::Request::post(endpoint)
        .json(request)
        .map_err(|e| QueryError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| QueryError::Network(e.to_string()))?;
    check_status(resp.status())?;
    let body = resp.text().await.map_err(|e| QueryError::Network(e.to_string()))?;
    decode_response(&body)
}
