//! HTTP client for the remote completion endpoint.
//!
//! One POST per send: a system entry carrying the instruction and a user
//! entry carrying only the newest utterance — the prior thread is not
//! replayed. The endpoint answers `{ "completion": "<raw reply>" }`.

use serde::{Deserialize, Serialize};

use super::CompletionError;
use crate::config;

/// Seam for the completion round trip, so chat flow tests can run against
/// a scripted implementation instead of the network.
pub trait CompletionApi {
    /// Send one exchange and return the raw reply text.
    fn complete(&self, system: &str, user: &str) -> Result<String, CompletionError>;
}

/// Production client over `reqwest::blocking`.
pub struct CompletionClient {
    endpoint: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl CompletionClient {
    pub fn new(endpoint: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        }
    }

    /// Client for the configured remote endpoint with the default timeout.
    pub fn default_remote() -> Self {
        Self::new(config::COMPLETION_ENDPOINT, config::COMPLETION_TIMEOUT_SECS)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// One `{role, content}` entry in the request payload.
#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Request body for the completion endpoint.
#[derive(Serialize)]
struct CompletionRequest<'a> {
    messages: Vec<WireMessage<'a>>,
}

/// Response body from the completion endpoint.
#[derive(Deserialize)]
struct CompletionResponse {
    completion: String,
}

impl CompletionApi for CompletionClient {
    fn complete(&self, system: &str, user: &str) -> Result<String, CompletionError> {
        let body = CompletionRequest {
            messages: vec![
                WireMessage { role: "system", content: system },
                WireMessage { role: "user", content: user },
            ],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    CompletionError::Connection(self.endpoint.clone())
                } else if e.is_timeout() {
                    CompletionError::Timeout(self.timeout_secs)
                } else {
                    CompletionError::ResponseParsing(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(CompletionError::Endpoint {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: CompletionResponse = response
            .json()
            .map_err(|e| CompletionError::ResponseParsing(e.to_string()))?;

        Ok(parsed.completion)
    }
}

/// Scripted completion API for tests — returns a configured reply or error.
pub struct MockCompletionApi {
    outcome: Result<String, String>,
}

impl MockCompletionApi {
    /// Mock that replies with the given raw text.
    pub fn replying(reply: &str) -> Self {
        Self {
            outcome: Ok(reply.to_string()),
        }
    }

    /// Mock whose round trip fails at the transport layer.
    pub fn failing() -> Self {
        Self {
            outcome: Err("connection refused".to_string()),
        }
    }
}

impl CompletionApi for MockCompletionApi {
    fn complete(&self, _system: &str, _user: &str) -> Result<String, CompletionError> {
        match &self.outcome {
            Ok(reply) => Ok(reply.clone()),
            Err(e) => Err(CompletionError::Connection(e.clone())),
        }
    }
}
