//! Session records from the GraphQL backend.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;

use super::{records_from_json, ContentSource};
use crate::record::ContentRecord;

/// Query for the fields the preview pipeline needs.
pub const SESSIONS_QUERY: &str = "query Sessions { sessions { id url title createdAt } }";

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("HTTP request failed: {0}")]
    Curl(#[from] curl::Error),

    #[error("GraphQL endpoint returned an error: {status}")]
    ServerError { status: u32 },

    #[error("GraphQL errors: {0}")]
    Graphql(String),
}

#[derive(Debug, Clone)]
pub struct GraphqlSource {
    endpoint: String,
    bearer_token: Option<String>,
    timeout: Duration,
}

impl GraphqlSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            bearer_token: None,
            timeout,
        }
    }

    /// Send `Authorization: Bearer <token>` with the query.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    fn post(&self, payload: &[u8]) -> Result<Vec<u8>, RequestError> {
        let mut body = Vec::new();
        let mut easy = curl::easy::Easy::new();
        easy.url(&self.endpoint)?;
        easy.post(true)?;
        easy.post_fields_copy(payload)?;
        easy.timeout(self.timeout)?;

        let mut list = curl::easy::List::new();
        list.append("Content-Type: application/json")?;
        list.append("Accept: application/json")?;
        if let Some(token) = &self.bearer_token {
            list.append(&format!("Authorization: Bearer {}", token.trim()))?;
        }
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        if !(200..300).contains(&status) {
            return Err(RequestError::ServerError { status });
        }
        Ok(body)
    }
}

/// Pull `data.sessions` out of a GraphQL response, failing on `errors`.
pub(crate) fn sessions_from_response(body: &Value) -> Result<Vec<ContentRecord>> {
    if let Some(errors) = body.get("errors").and_then(|e| e.as_array()) {
        if !errors.is_empty() {
            let messages: Vec<&str> = errors
                .iter()
                .filter_map(|e| e.get("message").and_then(|m| m.as_str()))
                .collect();
            return Err(RequestError::Graphql(messages.join("; ")).into());
        }
    }
    let sessions = body
        .get("data")
        .and_then(|d| d.get("sessions"))
        .context("no data.sessions in GraphQL response")?;
    records_from_json(sessions.clone())
}

impl ContentSource for GraphqlSource {
    fn fetch_records(&self) -> Result<Vec<ContentRecord>> {
        let payload = json!({ "query": SESSIONS_QUERY }).to_string();
        let bytes = self
            .post(payload.as_bytes())
            .context("Failed to send GraphQL request")?;
        let body: Value =
            serde_json::from_slice(&bytes).context("GraphQL response body is not JSON")?;
        let records = sessions_from_response(&body)?;
        tracing::debug!(count = records.len(), endpoint = %self.endpoint, "fetched sessions");
        Ok(records)
    }
}
