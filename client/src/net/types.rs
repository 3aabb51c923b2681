//! Wire types for the query endpoint.
//!
//! DESIGN
//! ======
//! One request shape out, one response shape in. `sources` may be missing or
//! `null` in the response; both decode to `None`. `null` entries inside the
//! list are dropped. A body without `answer` is malformed and surfaces as
//! [`QueryError::Decode`].

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Body posted to the query endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

impl QueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self { query: query.into() }
    }
}

/// Successful answer from the query service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub answer: String,
    #[serde(default, deserialize_with = "sources_without_nulls")]
    pub sources: Option<Vec<String>>,
}

fn sources_without_nulls<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Option<String>>>::deserialize(deserializer)?;
    Ok(raw.map(|entries| entries.into_iter().flatten().collect()))
}

/// Why a query did not produce an answer.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// The service answered with a non-success HTTP status.
    #[error("HTTP {status}")]
    Status { status: u16 },

    /// The widget's request deadline elapsed first.
    #[error("request timed out")]
    Timeout,

    /// The request never completed at the network level.
    #[error("network error: {0}")]
    Network(String),

    /// The request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),

    /// The response body was not a valid answer.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// No transport exists in this environment (server-side rendering).
    #[error("query transport unavailable")]
    Unavailable,
}

impl QueryError {
    /// Whether the service itself reported a failure (5xx).
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Status { status: 500..=599 })
    }
}

/// Map a response status to an error unless it is 2xx.
///
/// # Errors
///
/// Returns [`QueryError::Status`] for any status outside `200..300`.
pub fn check_status(status: u16) -> Result<(), QueryError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(QueryError::Status { status }) }
}

/// Decode a success body into a [`QueryResponse`].
///
/// # Errors
///
/// Returns [`QueryError::Decode`] if the body is not JSON or lacks `answer`.
pub fn decode_response(body: &str) -> Result<QueryResponse, QueryError> {
    serde_json::from_str(body).map_err(|e| QueryError::Decode(e.to_string()))
}
