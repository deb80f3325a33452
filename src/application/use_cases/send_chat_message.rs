use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::application::TextInference;
use crate::domain::{ChatSession, ChatTicket, DomainError, InferenceOutcome, Message};

/// Default client-side bound on a chat request.
pub const DEFAULT_CHAT_TIMEOUT: Duration = Duration::from_secs(30);

pub struct SendChatMessageUseCase {
    endpoint: Arc<dyn TextInference>,
    timeout: Duration,
}

impl SendChatMessageUseCase {
    pub fn new(endpoint: Arc<dyn TextInference>) -> Self {
        Self {
            endpoint,
            timeout: DEFAULT_CHAT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Performs the single endpoint call for an accepted submission.
    ///
    /// The call is dropped if it does not finish within the timeout. The
    /// timer is owned by the returned future, so it is released on every
    /// path. Never retries.
    pub async fn dispatch(&self, ticket: &ChatTicket) -> InferenceOutcome {
        debug!(
            "Sending chat message ({} chars) to {}",
            ticket.message().len(),
            self.endpoint.endpoint()
        );

        let start_time = Instant::now();
        let outcome =
            match tokio::time::timeout(self.timeout, self.endpoint.generate(ticket.message())).await
            {
                Ok(result) => result,
                Err(_) => Err(DomainError::Timeout(self.timeout)),
            };

        info!(
            "Chat request finished in {:.2}s (ok={})",
            start_time.elapsed().as_secs_f64(),
            outcome.is_ok()
        );

        outcome
    }

    /// Runs one full cycle on `session`: submit, dispatch, complete.
    ///
    /// Returns the assistant reply, or `None` if the submission was rejected.
    pub async fn execute(&self, session: &mut ChatSession, text: &str) -> Option<Message> {
        let ticket = session.submit(text)?;
        let outcome = self.dispatch(&ticket).await;
        session.complete(outcome).cloned()
    }
}
