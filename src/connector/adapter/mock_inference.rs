use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use async_trait::async_trait;
use tracing::debug;

use crate::application::{ImageInference, ImageProbe, TextInference};
use crate::domain::DomainError;

/// Offline stand-in for both inference endpoints.
///
/// Replies are derived from the input so repeated calls are reproducible.
pub struct MockInference;

impl MockInference {
    pub fn new() -> Self {
        Self
    }

    fn seed(text: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        hasher.finish()
    }
}

impl Default for MockInference {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextInference for MockInference {
    async fn generate(&self, message: &str) -> Result<Option<String>, DomainError> {
        debug!("Generating mock reply for {} chars", message.len());
        Ok(Some(format!("Mock reply to '{}'.", message.trim())))
    }

    fn endpoint(&self) -> &str {
        "mock"
    }
}

#[async_trait]
impl ImageInference for MockInference {
    async fn generate_image(&self, prompt: &str) -> Result<Option<String>, DomainError> {
        Ok(Some(format!(
            "https://picsum.photos/seed/{:016x}/512/512",
            Self::seed(prompt)
        )))
    }

    fn endpoint(&self) -> &str {
        "mock"
    }
}

#[async_trait]
impl ImageProbe for MockInference {
    async fn is_loadable(&self, _url: &str) -> bool {
        true
    }
}
