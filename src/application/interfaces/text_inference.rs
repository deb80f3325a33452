use async_trait::async_trait;

use crate::domain::DomainError;

/// Sends a chat message to a text inference endpoint.
///
/// Implementors encapsulate transport and serialization. A successful call
/// whose payload lacks the `response` field yields `Ok(None)`; transport
/// failures, non-success statuses and undecodable bodies are errors.
#[async_trait]
pub trait TextInference: Send + Sync {
    async fn generate(&self, message: &str) -> Result<Option<String>, DomainError>;

    /// Endpoint description for logging.
    fn endpoint(&self) -> &str;
}
