use std::time::Duration;

use reqwest::Client;
use serde::Serialize;

use crate::config::constants::{
    request_timeout, CHAT_CODE_SNIPPET_LIMIT, CHAT_TIMEOUT_SECS, DOCUMENTATION_TIMEOUT_SECS,
    DEFAULT_MIN_RESPONSE_LENGTH, EMPTY_GENERATE_RESPONSE, FALLBACK_RESPONSE,
    GENERATE_TIMEOUT_SECS,
};
use crate::enums::backend_error::BackendError;
use crate::structs::api::chat_request::ChatRequest;
use crate::structs::api::chat_response::ChatResponse;
use crate::structs::api::documentation_request::DocumentationRequest;
use crate::structs::api::documentation_response::DocumentationResponse;
use crate::structs::api::generate_request::GenerateRequest;
use crate::structs::api::generate_response::GenerateResponse;
use crate::structs::config::documentation_config::DocumentationConfig;

/// Client for the three remote inference operations. One request per user
/// action, bearer auth on every call, no retries.
#[derive(Clone)]
pub struct BackendClient {
    base_url: String,
    api_key: String,
    client: Client,
    min_response_length: usize,
    timeout_override: Option<Duration>,
}

impl BackendClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client: Client::new(),
            min_response_length: DEFAULT_MIN_RESPONSE_LENGTH,
            timeout_override: None,
        }
    }

    pub fn with_min_response_length(mut self, min_response_length: usize) -> Self {
        self.min_response_length = min_response_length;
        self
    }

    /// Replaces the per-operation deadlines with a single fixed one.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_override = Some(timeout);
        self
    }

    pub async fn generate(&self, prompt: &str, max_length: u32) -> Result<String, BackendError> {
        let request = GenerateRequest {
            prompt: prompt.to_string(),
            max_length,
        };

        let response = self.post_json("generate", &request, GENERATE_TIMEOUT_SECS).await?;
        let parsed: GenerateResponse = Self::parse_body(response).await?;

        if parsed.response.trim().is_empty() {
            return Ok(EMPTY_GENERATE_RESPONSE.to_string());
        }

        Ok(parsed.response.trim().to_string())
    }

    pub async fn chat(
        &self,
        message: &str,
        code_content: &str,
        language: &str,
    ) -> Result<String, BackendError> {
        // Limit code size to prevent token issues. Character-based, so a
        // multi-byte code point is never split.
        let snippet: String = code_content.chars().take(CHAT_CODE_SNIPPET_LIMIT).collect();

        let request = ChatRequest {
            message: message.to_string(),
            code_content: snippet,
            language: language.to_string(),
        };

        let response = self.post_json("chat", &request, CHAT_TIMEOUT_SECS).await?;
        let parsed: ChatResponse = Self::parse_body(response).await?;

        Ok(self.normalize(&parsed.response))
    }

    pub async fn documentation(
        &self,
        code_content: &str,
        filename: &str,
        language: &str,
        options: &DocumentationConfig,
    ) -> Result<DocumentationResponse, BackendError> {
        let request = DocumentationRequest {
            code_content: code_content.to_string(),
            filename: filename.to_string(),
            language: language.to_string(),
            max_length: options.max_length,
            include_examples: options.include_examples,
            detailed: options.detailed,
        };

        let response = self
            .post_json("documentation", &request, DOCUMENTATION_TIMEOUT_SECS)
            .await?;
        let mut parsed: DocumentationResponse = Self::parse_body(response).await?;

        parsed.documentation = self.normalize(&parsed.documentation);
        Ok(parsed)
    }

    async fn post_json<T: Serialize>(
        &self,
        endpoint: &str,
        body: &T,
        timeout_secs: u64,
    ) -> Result<reqwest::Response, BackendError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let timeout = self
            .timeout_override
            .unwrap_or_else(|| request_timeout(timeout_secs));

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(body)
            .timeout(timeout)
            .send()
            .await
            .map_err(Self::classify_transport_error)?;

        Self::check_status(response).await
    }

    fn classify_transport_error(error: reqwest::Error) -> BackendError {
        if error.is_timeout() {
            BackendError::Timeout
        } else if error.is_connect() {
            BackendError::Connection
        } else {
            BackendError::Unknown(error.to_string())
        }
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        Err(match status.as_u16() {
            401 => BackendError::Authentication,
            code => BackendError::Remote { status: code, body },
        })
    }

    async fn parse_body<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, BackendError> {
        response
            .json::<T>()
            .await
            .map_err(|e| BackendError::Unknown(format!("Failed to parse backend response: {}", e)))
    }

    /// An empty or implausibly short reply is not an error; the backend
    /// answered, just not usefully. Substitute the fixed placeholder so the
    /// transcript never shows a blank assistant entry.
    fn normalize(&self, text: &str) -> String {
        let trimmed = text.trim();
        // Character count, not bytes: a short multibyte reply is still short.
        if trimmed.is_empty() || trimmed.chars().count() < self.min_response_length {
            return FALLBACK_RESPONSE.to_string();
        }
        trimmed.to_string()
    }
}
