use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::application::{ImageInference, ImageProbe};
use crate::domain::{ImageRequest, ImageTicket, InferenceOutcome, BROKEN_IMAGE_URL};

pub struct GenerateImageUseCase {
    endpoint: Arc<dyn ImageInference>,
    probe: Option<Arc<dyn ImageProbe>>,
}

impl GenerateImageUseCase {
    pub fn new(endpoint: Arc<dyn ImageInference>) -> Self {
        Self {
            endpoint,
            probe: None,
        }
    }

    pub fn with_probe(mut self, probe: Arc<dyn ImageProbe>) -> Self {
        self.probe = Some(probe);
        self
    }

    /// Performs the single endpoint call for an accepted submission.
    ///
    /// No timeout beyond the transport's own; never retries.
    pub async fn dispatch(&self, ticket: &ImageTicket) -> InferenceOutcome {
        debug!(
            "Requesting image for prompt ({} chars) from {}",
            ticket.prompt().len(),
            self.endpoint.endpoint()
        );

        let start_time = Instant::now();
        let outcome = self.endpoint.generate_image(ticket.prompt()).await;

        info!(
            "Image request finished in {:.2}s (ok={})",
            start_time.elapsed().as_secs_f64(),
            outcome.is_ok()
        );

        outcome
    }

    /// Runs one full cycle on `request`: submit, dispatch, complete.
    ///
    /// Returns `false` if the submission was rejected.
    pub async fn execute(&self, request: &mut ImageRequest, prompt: &str) -> bool {
        let Some(ticket) = request.submit(prompt) else {
            return false;
        };
        let outcome = self.dispatch(&ticket).await;
        request.complete(outcome)
    }

    /// The reference to display for `request`.
    ///
    /// Substitutes the broken-image notice when a probe is configured and the
    /// result cannot be loaded. Does not modify the request.
    pub async fn display_url(&self, request: &ImageRequest) -> Option<String> {
        let url = request.result_url()?;

        if let Some(ref probe) = self.probe {
            if !probe.is_loadable(url).await {
                info!("Image at {} could not be loaded; showing notice", url);
                return Some(BROKEN_IMAGE_URL.to_string());
            }
        }

        Some(url.to_string())
    }
}
