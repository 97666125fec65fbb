//! Text-generation API client
//!
//! Posts a structured prompt to an Anthropic-compatible messages endpoint
//! and parses the model's JSON reply into [`EventContent`].

use crate::{
    error::ContentError,
    types::{ContentRequest, EventContent},
};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1";
const DEFAULT_MODEL: &str = "claude-3-5-haiku-latest";
const MAX_TOKENS: u32 = 1024;

/// Text-generation API client
#[derive(Clone, Debug)]
pub struct GenerationClient {
    client: Client,
    api_key: String,
    api_url: String,
    model: String,
}

/// Request body for the messages endpoint
#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<Message>,
}

/// A single chat message
#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

/// Response body from the messages endpoint
#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

/// One block of a messages response
#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

impl GenerationClient {
    /// Create a new client with API key from environment
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::MissingApiKey`] if `ANTHROPIC_API_KEY` is not set
    pub fn from_env() -> Result<Self, ContentError> {
        let api_key =
            std::env::var("ANTHROPIC_API_KEY").map_err(|_| ContentError::MissingApiKey)?;

        Ok(Self::new(api_key))
    }

    /// Create a new client with explicit API key
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Override the API base URL (used by tests against a mock server)
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Override the model name
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Generate event content
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, API errors, or parsing failures
    pub async fn generate(&self, request: &ContentRequest) -> Result<EventContent, ContentError> {
        let body = MessagesRequest {
            model: self.model.clone(),
            max_tokens: MAX_TOKENS,
            messages: vec![Message {
                role: "user",
                content: Self::prompt(request),
            }],
        };

        let response = self
            .client
            .post(format!("{}/messages", self.api_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ContentError::RequestFailed(e.to_string()))?;

        match response.status() {
            StatusCode::OK => {
                let parsed = response
                    .json::<MessagesResponse>()
                    .await
                    .map_err(|e| ContentError::ResponseParseFailed(e.to_string()))?;

                Self::content_from_response(&parsed)
            },
            StatusCode::TOO_MANY_REQUESTS => Err(ContentError::RateLimited),
            StatusCode::UNAUTHORIZED => Err(ContentError::Unauthorized),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(ContentError::ApiError {
                    status: status.as_u16(),
                    message: body,
                })
            },
        }
    }

    /// Build the generation prompt
    fn prompt(request: &ContentRequest) -> String {
        format!(
            "Create detailed event content for an event titled \"{}\".\n\
             Context notes: {}\n\
             Date: {}\n\
             Location: {}\n\n\
             Reply with a single JSON object with:\n\
             1. description: a compelling marketing description (2-3 paragraphs)\n\
             2. tags: 3-5 relevant category tags\n\
             3. agenda: array of 3-5 items with 'time' and 'activity'\n\
             Reply with the JSON object only, no surrounding text.",
            request.title, request.notes, request.date, request.location
        )
    }

    /// Extract the model's text and parse it as [`EventContent`]
    fn content_from_response(response: &MessagesResponse) -> Result<EventContent, ContentError> {
        let text = response
            .content
            .iter()
            .map(|block| block.text.as_str())
            .collect::<String>();

        if text.is_empty() {
            return Err(ContentError::ResponseParseFailed(
                "empty response text".to_string(),
            ));
        }

        serde_json::from_str(&text).map_err(|e| ContentError::ResponseParseFailed(e.to_string()))
    }
}
