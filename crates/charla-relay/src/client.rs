//! The relay client itself.

use std::time::Duration;

use charla_core::text::cap_chars;
use charla_core::{Lang, PromptMessage};
use tracing::{debug, warn};

use crate::error::RelayError;
use crate::fallback;
use crate::wire::{ChatCompletionRequest, ChatCompletionResponse};

/// How much of a non-2xx response body lands in the fallback diagnostics.
const SNIPPET_CHARS: usize = 200;

/// Relay configuration, constructed once at startup and passed in; there is
/// no ambient environment access in this crate.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Provider base URL, e.g. `https://api.openai.com`.
    pub base_url: String,

    /// Bearer credential. `None` (or blank) keeps the service interactive
    /// with a placeholder answer instead of failing.
    pub api_key: Option<String>,

    /// Model identifier sent with every request.
    pub model: String,

    /// Sampling temperature, fixed per deployment, never user-controlled.
    pub temperature: Option<f32>,

    /// Whole-request deadline. Production default is 30s; tests shrink it.
    pub timeout: Duration,

    /// Brand line appended to every locally-generated fallback answer.
    pub signature: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            temperature: None,
            timeout: Duration::from_secs(30),
            signature: String::new(),
        }
    }
}

/// Client for the provider's chat-completions endpoint.
///
/// One POST per call, no retries. The public entry point [`Relay::ask`]
/// always resolves to text; see [`crate::fallback`] for the failure catalog.
pub struct Relay {
    http: reqwest::Client,
    config: RelayConfig,
}

impl Relay {
    /// Create a new relay.
    pub fn new(config: RelayConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Relay an assembled prompt upstream and resolve to an answer string.
    ///
    /// Never errors and never hangs past the configured timeout: every
    /// failure mode resolves to a localized fallback.
    pub async fn ask(&self, messages: &[PromptMessage], lang: Lang) -> String {
        match self.call(messages).await {
            Ok(answer) => answer,
            Err(err) => {
                warn!(error = %err, %lang, "Upstream call failed, answering with fallback");
                fallback::for_error(&err, lang, &self.config.signature)
            }
        }
    }

    async fn call(&self, messages: &[PromptMessage]) -> Result<String, RelayError> {
        let key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(RelayError::MissingCredential)?;

        let url = format!(
            "{}/v1/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );
        let body = ChatCompletionRequest {
            model: &self.config.model,
            messages,
            temperature: self.config.temperature,
        };

        debug!(url = %url, model = %self.config.model, messages = messages.len(), "Relaying prompt upstream");

        let response = self
            .http
            .post(&url)
            .bearer_auth(key)
            .timeout(self.config.timeout)
            .json(&body)
            .send()
            .await
            .map_err(classify_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(RelayError::UpstreamStatus {
                status: status.as_u16(),
                snippet: cap_chars(&body_text, SNIPPET_CHARS).to_string(),
            });
        }

        let parsed: ChatCompletionResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                RelayError::Timeout
            } else {
                RelayError::Parse(e.to_string())
            }
        })?;

        let first = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| RelayError::Parse("empty choices array".to_string()))?;
        if first.message.content.is_empty() {
            return Err(RelayError::Parse("empty message content".to_string()));
        }
        Ok(first.message.content)
    }
}

fn classify_reqwest_error(err: reqwest::Error) -> RelayError {
    if err.is_timeout() {
        RelayError::Timeout
    } else {
        RelayError::Transport(err.to_string())
    }
}
