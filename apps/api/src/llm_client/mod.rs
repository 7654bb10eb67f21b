/// LLM client: the oracle boundary for every generation flow in CareerCompass.
///
/// ARCHITECTURAL RULE: No other module may call the Anthropic API directly.
/// Flows talk to the `Oracle` trait; `LlmClient` is the production implementation.
///
/// Model: claude-sonnet-4-5 (hardcoded)
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

pub const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for all oracle calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 4096;

#[derive(Debug, Error)]
pub enum OracleError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// A document attached to an instruction, sent as base64 rather than interpolated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub media_type: String,
    /// Base64-encoded payload.
    pub data: String,
}

/// Everything the oracle receives for one call.
#[derive(Debug, Clone)]
pub struct Instruction {
    pub system: String,
    pub prompt: String,
    pub document: Option<Document>,
}

/// The external text-generation oracle. Returns the raw text of its reply.
///
/// Carried in the gateway as `Arc<dyn Oracle>` so tests can swap in canned replies.
#[async_trait]
pub trait Oracle: Send + Sync {
    async fn complete(&self, instruction: &Instruction) -> Result<String, OracleError>;
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: Vec<ContentPart<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart<'a> {
    Document { source: DocumentSource<'a> },
    Text { text: &'a str },
}

#[derive(Debug, Serialize)]
struct DocumentSource<'a> {
    #[serde(rename = "type")]
    source_type: &'a str,
    media_type: &'a str,
    data: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Extracts the text content from the first text block.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Wraps the Anthropic Messages API. One attempt per call unless `max_retries` is raised.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    api_url: String,
    max_retries: u32,
}

impl LlmClient {
    pub fn new(
        api_key: String,
        api_url: String,
        timeout: Duration,
        max_retries: u32,
    ) -> Result<Self, OracleError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            api_url,
            max_retries,
        })
    }

    /// Makes a raw call to the Claude API, returning the full response object.
    /// Retries on 429 (rate limit) and 5xx errors with exponential backoff when
    /// `max_retries` is non-zero.
    pub async fn call(&self, instruction: &Instruction) -> Result<LlmResponse, OracleError> {
        let request_body = build_request(instruction);

        let mut attempt: u32 = 0;

        loop {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s, ...
                let delay = Duration::from_millis(1000 * (1 << (attempt - 1).min(6)));
                warn!(
                    "Oracle call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }
            let final_attempt = attempt >= self.max_retries;
            attempt += 1;

            let response = self
                .client
                .post(&self.api_url)
                .header("x-api-key", &self.api_key)
                .header("anthropic-version", ANTHROPIC_VERSION)
                .header("content-type", "application/json")
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) if final_attempt => return Err(OracleError::Http(e)),
                Err(e) => {
                    warn!("Oracle transport error: {e}");
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Oracle API returned {}: {}", status, body);
                if final_attempt {
                    return Err(retries_exhausted(
                        status.as_u16(),
                        api_error_message(body),
                        self.max_retries,
                    ));
                }
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(OracleError::Api {
                    status: status.as_u16(),
                    message: api_error_message(body),
                });
            }

            let llm_response: LlmResponse = response.json().await?;

            debug!(
                "Oracle call succeeded: input_tokens={}, output_tokens={}",
                llm_response.usage.input_tokens, llm_response.usage.output_tokens
            );

            return Ok(llm_response);
        }
    }
}

/// The error for a retryable status once no attempts remain.
fn retries_exhausted(status: u16, message: String, retries: u32) -> OracleError {
    if status == 429 {
        OracleError::RateLimited { retries }
    } else {
        OracleError::Api { status, message }
    }
}

#[async_trait]
impl Oracle for LlmClient {
    async fn complete(&self, instruction: &Instruction) -> Result<String, OracleError> {
        let response = self.call(instruction).await?;
        response
            .text()
            .filter(|t| !t.trim().is_empty())
            .map(str::to_owned)
            .ok_or(OracleError::EmptyContent)
    }
}

fn build_request(instruction: &Instruction) -> AnthropicRequest<'_> {
    let mut content = Vec::with_capacity(2);
    // Documents go first so the text prompt can refer to them.
    if let Some(doc) = &instruction.document {
        content.push(ContentPart::Document {
            source: DocumentSource {
                source_type: "base64",
                media_type: &doc.media_type,
                data: &doc.data,
            },
        });
    }
    content.push(ContentPart::Text {
        text: &instruction.prompt,
    });

    AnthropicRequest {
        model: MODEL,
        max_tokens: MAX_TOKENS,
        system: &instruction.system,
        messages: vec![AnthropicMessage {
            role: "user",
            content,
        }],
    }
}

/// Pulls `error.message` out of an API error body, falling back to the raw body.
fn api_error_message(body: String) -> String {
    serde_json::from_str::<AnthropicError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
