use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::debug;

use crate::application::{ImageInference, ImageProbe, TextInference};
use crate::domain::DomainError;
use crate::{
    GenerateImageUseCase, HttpImageInference, HttpTextInference, MockInference,
    SendChatMessageUseCase, IMAGE_PATH, TEXT_PATH,
};

pub struct ContainerConfig {
    /// Base URL of the inference backend, e.g. `http://localhost:3001`.
    pub base_url: String,
    /// Full text endpoint URL; derived from `base_url` when absent.
    pub text_url: Option<String>,
    /// Full image endpoint URL; derived from `base_url` when absent.
    pub image_url: Option<String>,
    /// Client-side bound on each chat request.
    pub chat_timeout: Duration,
    /// Answer locally with [`MockInference`] instead of calling any endpoint.
    pub mock_backend: bool,
}

pub struct Container {
    text_endpoint: Arc<dyn TextInference>,
    image_endpoint: Arc<dyn ImageInference>,
    image_probe: Arc<dyn ImageProbe>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        if config.chat_timeout.is_zero() {
            return Err(DomainError::invalid_config("chat timeout must be greater than zero").into());
        }

        let (text_endpoint, image_endpoint, image_probe): (
            Arc<dyn TextInference>,
            Arc<dyn ImageInference>,
            Arc<dyn ImageProbe>,
        ) = if config.mock_backend {
            debug!("Using mock inference backend");
            let mock = Arc::new(MockInference::new());
            (mock.clone(), mock.clone(), mock)
        } else {
            let base = config.base_url.trim_end_matches('/');
            let text_url = config
                .text_url
                .clone()
                .unwrap_or_else(|| format!("{base}{TEXT_PATH}"));
            let image_url = config
                .image_url
                .clone()
                .unwrap_or_else(|| format!("{base}{IMAGE_PATH}"));
            validate_url(&text_url)?;
            validate_url(&image_url)?;

            debug!("Text endpoint: {}", text_url);
            debug!("Image endpoint: {}", image_url);

            let image = Arc::new(HttpImageInference::new(image_url));
            (
                Arc::new(HttpTextInference::new(text_url)),
                image.clone(),
                image,
            )
        };

        Ok(Self {
            text_endpoint,
            image_endpoint,
            image_probe,
            config,
        })
    }

    pub fn chat_use_case(&self) -> SendChatMessageUseCase {
        SendChatMessageUseCase::new(self.text_endpoint.clone()).with_timeout(self.config.chat_timeout)
    }

    /// With `verify`, results are probed before display.
    pub fn image_use_case(&self, verify: bool) -> GenerateImageUseCase {
        let use_case = GenerateImageUseCase::new(self.image_endpoint.clone());

        if verify {
            use_case.with_probe(self.image_probe.clone())
        } else {
            use_case
        }
    }

    pub fn text_endpoint(&self) -> &str {
        self.text_endpoint.endpoint()
    }

    pub fn image_endpoint(&self) -> &str {
        self.image_endpoint.endpoint()
    }

}

fn validate_url(url: &str) -> Result<(), DomainError> {
    let parsed = reqwest::Url::parse(url)
        .map_err(|e| DomainError::invalid_config(format!("invalid endpoint URL '{url}': {e}")))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(DomainError::invalid_config(format!(
            "unsupported scheme '{other}' in endpoint URL '{url}'"
        ))),
    }
}
