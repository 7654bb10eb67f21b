//! Structured-Generation Gateway: one typed request in, one validated typed response out.
//!
//! Flow: precondition/attachment → render template → append declared shape →
//!       single oracle round-trip → strip fences → deserialize into the declared type.
//!
//! The gateway never retries, caches, or returns a partially-populated response.

pub mod data_uri;

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, OUTPUT_SHAPE_INSTRUCTION};
use crate::llm_client::{strip_json_fences, Document, Instruction, Oracle, OracleError};

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Request rejected before any oracle call was attempted.
    #[error("Precondition failed for {flow}: {reason}")]
    Precondition { flow: &'static str, reason: String },

    /// The oracle could not be reached or refused the call.
    #[error("Oracle transport failed for {flow}: {source}")]
    Transport {
        flow: &'static str,
        #[source]
        source: OracleError,
    },

    /// The oracle replied, but the reply does not match the declared shape.
    #[error("Oracle reply for {flow} does not match the declared shape: {reason}")]
    Validation { flow: &'static str, reason: String },
}

/// Static configuration of one generation flow.
///
/// A flow is a template, a request shape, and a declared response shape; the
/// gateway supplies everything else.
pub trait Flow {
    /// Stable kebab-case identifier, used in routes and logs.
    const NAME: &'static str;
    /// One-line description for the flow catalog.
    const DESCRIPTION: &'static str;
    /// Persona the oracle is asked to adopt. JSON-only rules are appended by the gateway.
    const SYSTEM: &'static str;

    type Request: DeserializeOwned + Serialize + Send + Sync;
    type Response: DeserializeOwned + Serialize + Send;

    /// Fills the flow's prompt template with request fields.
    fn render(request: &Self::Request) -> String;

    /// The declared output shape, sent to the oracle and published in the catalog.
    fn output_shape() -> Value;

    /// Required text fields as (wire name, value). Checked by callers before `generate`.
    fn required_fields(request: &Self::Request) -> Vec<(&'static str, &str)>;

    /// Precondition check plus optional document attachment.
    /// An `Err` rejects the request before the oracle is contacted.
    fn attachment(_request: &Self::Request) -> Result<Option<Document>, String> {
        Ok(None)
    }

    /// Hook for logging soft expectations (e.g. target counts) on a valid reply.
    fn inspect(_response: &Self::Response) {}
}

/// Shared handle to the oracle. Cheap to clone; holds no mutable state.
#[derive(Clone)]
pub struct Gateway {
    oracle: Arc<dyn Oracle>,
}

impl Gateway {
    pub fn new(oracle: Arc<dyn Oracle>) -> Self {
        Self { oracle }
    }

    /// Runs one flow: a single, at-most-once oracle round-trip.
    pub async fn generate<F: Flow>(&self, request: &F::Request) -> Result<F::Response, GatewayError> {
        let instruction = build_instruction::<F>(request)?;

        info!(
            flow = F::NAME,
            has_document = instruction.document.is_some(),
            "Dispatching flow to oracle"
        );

        let raw = self
            .oracle
            .complete(&instruction)
            .await
            .map_err(|source| {
                warn!(flow = F::NAME, "Oracle transport failed: {source}");
                GatewayError::Transport {
                    flow: F::NAME,
                    source,
                }
            })?;

        let response = parse_reply::<F>(&raw)?;
        F::inspect(&response);
        Ok(response)
    }
}

/// Builds the full instruction for a flow, running its precondition first.
pub fn build_instruction<F: Flow>(request: &F::Request) -> Result<Instruction, GatewayError> {
    let document = F::attachment(request).map_err(|reason| GatewayError::Precondition {
        flow: F::NAME,
        reason,
    })?;

    let shape = serde_json::to_string_pretty(&F::output_shape()).map_err(|e| {
        GatewayError::Precondition {
            flow: F::NAME,
            reason: format!("declared shape is not serializable: {e}"),
        }
    })?;

    let prompt = format!(
        "{}\n\n{}",
        F::render(request).trim_end(),
        render_template(OUTPUT_SHAPE_INSTRUCTION, &[("schema", shape.as_str())])
    );

    Ok(Instruction {
        system: format!("{} {}", F::SYSTEM, JSON_ONLY_SYSTEM),
        prompt,
        document,
    })
}

/// Coerces a raw oracle reply into the flow's declared response type.
pub fn parse_reply<F: Flow>(raw: &str) -> Result<F::Response, GatewayError> {
    let text = strip_json_fences(raw);
    serde_json::from_str::<F::Response>(text).map_err(|e| {
        warn!(flow = F::NAME, "Oracle reply failed shape validation: {e}");
        GatewayError::Validation {
            flow: F::NAME,
            reason: e.to_string(),
        }
    })
}

/// Single-pass `{name}` placeholder substitution.
///
/// Values are inserted verbatim and never re-scanned, so user text containing
/// `{...}` cannot pull in other fields. Unknown placeholders are left as-is.
pub fn render_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let key_end = after.find(|c: char| c == '}' || c == '{' || c.is_whitespace());

        match key_end {
            Some(end) if after[end..].starts_with('}') => {
                let key = &after[..end];
                match vars.iter().find(|(name, _)| *name == key) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(key);
                        out.push('}');
                    }
                }
                rest = &after[end + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
pub(crate) mod testing {
    //! Canned oracles shared by flow and handler tests.

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::llm_client::{Instruction, Oracle, OracleError};

    pub enum Reply {
        Text(String),
        Unreachable,
    }

    /// Returns the same reply on every call and records what it was sent.
    pub struct CannedOracle {
        reply: Reply,
        calls: AtomicUsize,
        last: Mutex<Option<Instruction>>,
    }

    impl CannedOracle {
        pub fn replying(text: impl Into<String>) -> Self {
            Self::new(Reply::Text(text.into()))
        }

        pub fn unreachable() -> Self {
            Self::new(Reply::Unreachable)
        }

        fn new(reply: Reply) -> Self {
            Self {
                reply,
                calls: AtomicUsize::new(0),
                last: Mutex::new(None),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn last_instruction(&self) -> Option<Instruction> {
            self.last.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Oracle for CannedOracle {
        async fn complete(&self, instruction: &Instruction) -> Result<String, OracleError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some(instruction.clone());
            match &self.reply {
                Reply::Text(text) => Ok(text.clone()),
                Reply::Unreachable => Err(OracleError::Api {
                    status: 503,
                    message: "service unavailable".to_string(),
                }),
            }
        }
    }
}
