use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::TextInference;
use crate::domain::DomainError;

/// Default target: the demo backend running locally on its standard port.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";
pub const TEXT_PATH: &str = "/api/text";

#[derive(Serialize)]
struct TextRequest<'a> {
    message: &'a str,
}

#[derive(Deserialize)]
struct TextResponse {
    #[serde(default)]
    response: Option<String>,
}

/// HTTP client for a text inference endpoint.
///
/// Sends `POST {"message": ...}` and reads the optional `response` field.
/// Applies no timeout of its own; the chat use case bounds each call.
pub struct HttpTextInference {
    client: reqwest::Client,
    url: String,
}

impl HttpTextInference {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Builds the endpoint URL from a base URL (e.g. `http://localhost:3001`).
    pub fn with_base_url(base_url: &str) -> Self {
        Self::new(format!("{}{}", base_url.trim_end_matches('/'), TEXT_PATH))
    }
}

#[async_trait]
impl TextInference for HttpTextInference {
    async fn generate(&self, message: &str) -> Result<Option<String>, DomainError> {
        let response = self
            .client
            .post(&self.url)
            .json(&TextRequest { message })
            .send()
            .await
            .map_err(|e| DomainError::transport(format!("HttpTextInference: request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("HttpTextInference: endpoint returned {status}: {body}");
            return Err(DomainError::Status(status.as_u16()));
        }

        let text_response: TextResponse = response.json().await.map_err(|e| {
            DomainError::malformed(format!("HttpTextInference: failed to parse response: {e}"))
        })?;

        debug!(
            "HttpTextInference: response field present={}",
            text_response.response.is_some()
        );

        Ok(text_response.response)
    }

    fn endpoint(&self) -> &str {
        &self.url
    }
}
