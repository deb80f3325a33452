use async_trait::async_trait;

use crate::domain::DomainError;

/// Sends a prompt to an image inference endpoint and returns the image
/// reference from its `image_url` field (`Ok(None)` when absent).
#[async_trait]
pub trait ImageInference: Send + Sync {
    async fn generate_image(&self, prompt: &str) -> Result<Option<String>, DomainError>;

    fn endpoint(&self) -> &str;
}

/// Checks whether an image reference can actually be loaded for display.
#[async_trait]
pub trait ImageProbe: Send + Sync {
    async fn is_loadable(&self, url: &str) -> bool;
}
