use std::sync::atomic::{AtomicI64, Ordering};

use tracing::{debug, warn};

use super::message::current_timestamp_millis;
use super::{usable_field, InferenceOutcome};

/// Notice shown whenever the placeholder image is substituted.
pub const FALLBACK_NOTICE: &str = "API connection failed. Showing placeholder image for demo.";

/// Static image shown when a result reference cannot be loaded for display.
pub const BROKEN_IMAGE_URL: &str =
    "https://via.placeholder.com/512x512/f3f4f6/6b7280?text=Image+Not+Found";

const PLACEHOLDER_BASE_URL: &str = "https://picsum.photos/512/512";

static LAST_PLACEHOLDER_KEY: AtomicI64 = AtomicI64::new(0);

/// Returns a placeholder image reference keyed by the current time.
///
/// Keys are strictly increasing within the process, so two placeholders
/// generated in the same millisecond still differ.
pub fn placeholder_url() -> String {
    let now = current_timestamp_millis();
    let previous = LAST_PLACEHOLDER_KEY
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(now.max(last + 1))
        })
        .unwrap_or(now);
    let key = now.max(previous + 1);
    format!("{}?random={}", PLACEHOLDER_BASE_URL, key)
}

/// The request an [`ImageRequest`] wants sent after an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageTicket {
    prompt: String,
}

impl ImageTicket {
    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

/// Single-shot prompt to image reference cycle.
///
/// Every completed cycle leaves either a real result or the placeholder plus
/// an error notice; only [`reset`](Self::reset) returns to the blank state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageRequest {
    prompt: String,
    result_url: Option<String>,
    pending: bool,
    error_message: Option<String>,
}

impl ImageRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn result_url(&self) -> Option<&str> {
        self.result_url.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn has_result(&self) -> bool {
        self.result_url.is_some()
    }

    pub fn is_fallback(&self) -> bool {
        self.error_message.is_some()
    }

    /// Reset is offered once a cycle has produced something to clear.
    pub fn can_reset(&self) -> bool {
        !self.pending && (self.result_url.is_some() || self.error_message.is_some())
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    /// Starts a generation cycle for `prompt`.
    ///
    /// Returns `None` without touching any state when `prompt` is blank or a
    /// request is already pending.
    pub fn submit(&mut self, prompt: impl Into<String>) -> Option<ImageTicket> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() || self.pending {
            debug!(pending = self.pending, "Ignoring image submission");
            return None;
        }

        self.prompt = prompt.clone();
        self.pending = true;
        self.result_url = None;
        self.error_message = None;

        Some(ImageTicket { prompt })
    }

    /// Resolves the in-flight request with the endpoint outcome.
    ///
    /// Returns `false` when nothing was pending.
    pub fn complete(&mut self, outcome: InferenceOutcome) -> bool {
        if !self.pending {
            warn!("Image completion arrived with no request in flight; ignoring");
            return false;
        }

        match outcome.map(usable_field) {
            Ok(Some(url)) => {
                self.result_url = Some(url);
                self.error_message = None;
            }
            Ok(None) => {
                warn!("Image endpoint returned no image_url. Using placeholder.");
                self.apply_fallback();
            }
            Err(e) => {
                warn!("Image request failed: {}. Using placeholder.", e);
                self.apply_fallback();
            }
        }

        self.pending = false;
        true
    }

    /// Clears the prompt, result and error. Unavailable while pending.
    pub fn reset(&mut self) -> bool {
        if self.pending {
            debug!("Ignoring reset while image request is pending");
            return false;
        }

        self.prompt.clear();
        self.result_url = None;
        self.error_message = None;
        true
    }

    fn apply_fallback(&mut self) {
        self.error_message = Some(FALLBACK_NOTICE.to_string());
        self.result_url = Some(placeholder_url());
    }
}
