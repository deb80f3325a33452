use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::{ImageInference, ImageProbe};
use crate::domain::DomainError;

pub const IMAGE_PATH: &str = "/api/image";
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Serialize)]
struct ImageGenRequest<'a> {
    prompt: &'a str,
}

#[derive(Deserialize)]
struct ImageGenResponse {
    #[serde(default)]
    image_url: Option<String>,
}

/// HTTP client for an image inference endpoint.
///
/// Sends `POST {"prompt": ...}` and reads the `image_url` field. Also acts as
/// an [`ImageProbe`]: a short `GET` on the returned reference tells whether it
/// can be displayed.
pub struct HttpImageInference {
    client: reqwest::Client,
    /// Short timeout, used only to check that a result can be loaded.
    probe_client: reqwest::Client,
    url: String,
}

impl HttpImageInference {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            probe_client: build_probe_client(),
            url: url.into(),
        }
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self::new(format!("{}{}", base_url.trim_end_matches('/'), IMAGE_PATH))
    }
}

fn build_probe_client() -> reqwest::Client {
    match reqwest::Client::builder()
        .connect_timeout(PROBE_TIMEOUT)
        .timeout(PROBE_TIMEOUT)
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            warn!("HttpImageInference: failed to build probe client, probing without a timeout: {e}");
            reqwest::Client::new()
        }
    }
}

#[async_trait]
impl ImageInference for HttpImageInference {
    async fn generate_image(&self, prompt: &str) -> Result<Option<String>, DomainError> {
        let response = self
            .client
            .post(&self.url)
            .json(&ImageGenRequest { prompt })
            .send()
            .await
            .map_err(|e| DomainError::transport(format!("HttpImageInference: request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("HttpImageInference: endpoint returned {status}: {body}");
            return Err(DomainError::Status(status.as_u16()));
        }

        let image_response: ImageGenResponse = response.json().await.map_err(|e| {
            DomainError::malformed(format!("HttpImageInference: failed to parse response: {e}"))
        })?;

        Ok(image_response.image_url)
    }

    fn endpoint(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ImageProbe for HttpImageInference {
    async fn is_loadable(&self, url: &str) -> bool {
        match self.probe_client.get(url).send().await {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                debug!("HttpImageInference: probe of {url} returned {}", response.status());
                false
            }
            Err(e) => {
                debug!("HttpImageInference: probe of {url} failed: {e}");
                false
            }
        }
    }
}
