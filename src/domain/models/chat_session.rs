use tracing::{debug, warn};

use super::{InferenceOutcome, Message};

/// Reply used when the endpoint answers with a missing or empty `response`.
pub const UNPROCESSED_REPLY: &str = "Sorry, I couldn't process your request.";

/// Reply used when the request was cancelled by the client-side timeout.
pub const TIMEOUT_REPLY: &str = "The request timed out. Please try again.";

/// Reply used for every other failure. Echoes the submitted text.
pub fn demo_reply(text: &str) -> String {
    format!(
        "I'm a demo response! Your message was: \"{}\". In a real app, this would connect to your AI backend.",
        text
    )
}

/// The request a [`ChatSession`] wants sent after an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTicket {
    message: String,
}

impl ChatTicket {
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A chat conversation driving one request/response cycle per submission.
///
/// The session is `Idle` or `Pending`. A valid [`submit`](Self::submit) moves
/// it to `Pending` and appends the user message right away; the matching
/// [`complete`](Self::complete) appends exactly one assistant message and
/// returns it to `Idle`. At most one request is ever in flight.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    transcript: Vec<Message>,
    draft_input: String,
    /// Text of the in-flight submission. `Some` exactly while pending.
    in_flight: Option<String>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn draft_input(&self) -> &str {
        &self.draft_input
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.transcript.is_empty()
    }

    pub fn len(&self) -> usize {
        self.transcript.len()
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft_input = text.into();
    }

    /// Whether a submission of `text` would be accepted right now.
    pub fn can_submit(&self, text: &str) -> bool {
        !text.trim().is_empty() && !self.is_pending()
    }

    /// Submits the current draft.
    pub fn submit_draft(&mut self) -> Option<ChatTicket> {
        let text = self.draft_input.clone();
        self.submit(text)
    }

    /// Starts a request cycle for `text`.
    ///
    /// Returns `None` without touching any state when `text` is blank or a
    /// request is already pending.
    pub fn submit(&mut self, text: impl Into<String>) -> Option<ChatTicket> {
        let text = text.into();
        if !self.can_submit(&text) {
            debug!(pending = self.is_pending(), "Ignoring chat submission");
            return None;
        }

        self.transcript.push(Message::user(text.clone()));
        self.draft_input.clear();
        self.in_flight = Some(text.clone());

        Some(ChatTicket { message: text })
    }

    /// Resolves the in-flight request with the endpoint outcome.
    ///
    /// Returns the appended assistant message, or `None` when nothing was
    /// pending.
    pub fn complete(&mut self, outcome: InferenceOutcome) -> Option<&Message> {
        let Some(sent) = self.in_flight.take() else {
            warn!("Chat completion arrived with no request in flight; ignoring");
            return None;
        };

        let reply = match outcome {
            Ok(response) => response.filter(|r| !r.is_empty()).unwrap_or_else(|| {
                warn!("Text endpoint returned an empty response");
                UNPROCESSED_REPLY.to_string()
            }),
            Err(e) if e.is_timeout() => {
                warn!("Chat request timed out: {}", e);
                TIMEOUT_REPLY.to_string()
            }
            Err(e) => {
                warn!("Chat request failed: {}. Using demo reply.", e);
                demo_reply(&sent)
            }
        };

        self.transcript.push(Message::assistant(reply));
        self.transcript.last()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::domain::{DomainError, MessageRole};

    #[test]
    fn test_submit_appends_user_message_synchronously() {
        let mut session = ChatSession::new();
        session.set_draft("hello");

        let ticket = session.submit_draft().expect("accepted");

        assert_eq!(ticket.message(), "hello");
        assert!(session.is_pending());
        assert_eq!(session.len(), 1);
        assert_eq!(session.transcript()[0].role(), MessageRole::User);
        assert_eq!(session.draft_input(), "");
    }

    #[test]
    fn test_blank_submission_is_ignored() {
        let mut session = ChatSession::new();
        session.set_draft("   ");

        assert!(session.submit("   ").is_none());
        assert!(session.is_empty());
        assert!(!session.is_pending());
        assert_eq!(session.draft_input(), "   ");
    }

    #[test]
    fn test_submission_while_pending_is_ignored() {
        let mut session = ChatSession::new();
        session.submit("first").unwrap();

        session.set_draft("second");
        assert!(session.submit("second").is_none());
        assert_eq!(session.len(), 1);
        assert!(session.is_pending());
        assert_eq!(session.draft_input(), "second");
    }

    #[test]
    fn test_complete_with_response() {
        let mut session = ChatSession::new();
        session.submit("ping").unwrap();

        let reply = session.complete(Ok(Some("hi".to_string()))).unwrap();

        assert_eq!(reply.text(), "hi");
        assert!(reply.is_assistant());
        assert!(!session.is_pending());
    }

    #[test]
    fn test_complete_without_response_field() {
        let mut session = ChatSession::new();
        session.submit("ping").unwrap();

        let reply = session.complete(Ok(None)).unwrap();
        assert_eq!(reply.text(), UNPROCESSED_REPLY);
    }

    #[test]
    fn test_complete_with_empty_response_field() {
        let mut session = ChatSession::new();
        session.submit("ping").unwrap();

        let reply = session.complete(Ok(Some(String::new()))).unwrap();
        assert_eq!(reply.text(), UNPROCESSED_REPLY);
    }

    #[test]
    fn test_complete_keeps_whitespace_response() {
        let mut session = ChatSession::new();
        session.submit("ping").unwrap();

        let reply = session.complete(Ok(Some("  ".to_string()))).unwrap();
        assert_eq!(reply.text(), "  ");
        assert!(reply.is_assistant());
    }

    #[test]
    fn test_transport_failure_echoes_input() {
        let mut session = ChatSession::new();
        session.submit("  what is rust?").unwrap();

        let reply = session
            .complete(Err(DomainError::transport("connection refused")))
            .unwrap();

        assert_eq!(reply.text(), demo_reply("  what is rust?"));
        assert!(reply.text().contains("\"  what is rust?\""));
        assert!(!session.is_pending());
    }

    #[test]
    fn test_timeout_has_distinct_reply() {
        let mut session = ChatSession::new();
        session.submit("slow").unwrap();

        let reply = session
            .complete(Err(DomainError::Timeout(Duration::from_secs(1))))
            .unwrap();
        assert_eq!(reply.text(), TIMEOUT_REPLY);
    }

    #[test]
    fn test_complete_when_idle_is_ignored() {
        let mut session = ChatSession::new();

        assert!(session.complete(Ok(Some("stray".to_string()))).is_none());
        assert!(session.is_empty());
    }

    #[test]
    fn test_session_is_reusable() {
        let mut session = ChatSession::new();

        for i in 0..3 {
            session.submit(format!("message {}", i)).unwrap();
            session.complete(Ok(Some(format!("reply {}", i))));
        }

        assert_eq!(session.len(), 6);
        let roles: Vec<_> = session.transcript().iter().map(|m| m.role()).collect();
        assert_eq!(
            roles,
            vec![
                MessageRole::User,
                MessageRole::Assistant,
                MessageRole::User,
                MessageRole::Assistant,
                MessageRole::User,
                MessageRole::Assistant,
            ]
        );
    }
}
