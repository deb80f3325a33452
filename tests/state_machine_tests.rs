//! Behavioral tests for the chat and image request cycles.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Notify;

use ai_studio::{
    ChatSession, DomainError, GenerateImageUseCase, ImageInference, ImageRequest, MessageRole,
    SendChatMessageUseCase, TextInference, FALLBACK_NOTICE,
};

/// Endpoint that holds every call until released and counts calls.
struct GatedEndpoint {
    gate: Notify,
    calls: AtomicUsize,
    reply: Option<&'static str>,
}

impl GatedEndpoint {
    fn new(reply: Option<&'static str>) -> Arc<Self> {
        Arc::new(Self {
            gate: Notify::new(),
            calls: AtomicUsize::new(0),
            reply,
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextInference for GatedEndpoint {
    async fn generate(&self, _message: &str) -> Result<Option<String>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;
        Ok(self.reply.map(String::from))
    }

    fn endpoint(&self) -> &str {
        "gated"
    }
}

#[async_trait]
impl ImageInference for GatedEndpoint {
    async fn generate_image(&self, _prompt: &str) -> Result<Option<String>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;
        Ok(self.reply.map(String::from))
    }

    fn endpoint(&self) -> &str {
        "gated"
    }
}

#[tokio::test]
async fn test_chat_second_submit_while_pending_is_dropped() {
    let endpoint = GatedEndpoint::new(Some("first reply"));
    let mut session = ChatSession::new();

    let ticket = session.submit("first").expect("first accepted");
    assert!(session.is_pending());
    assert_eq!(session.len(), 1);

    let in_flight = tokio::spawn({
        let endpoint = endpoint.clone();
        async move {
            let use_case = SendChatMessageUseCase::new(endpoint);
            use_case.dispatch(&ticket).await
        }
    });
    tokio::task::yield_now().await;

    assert!(session.submit("second").is_none());
    assert_eq!(session.len(), 1);
    assert!(session.is_pending());

    endpoint.gate.notify_one();
    let outcome = in_flight.await.expect("dispatch task");
    session.complete(outcome);

    assert_eq!(endpoint.calls(), 1);
    assert_eq!(session.len(), 2);
    assert_eq!(session.transcript()[0].text(), "first");
    assert_eq!(session.transcript()[1].text(), "first reply");
    assert!(!session.is_pending());

    // The session accepts new submissions once idle again.
    assert!(session.submit("third").is_some());
}

#[tokio::test]
async fn test_chat_transcript_grows_by_one_assistant_message_per_cycle() {
    let endpoint = GatedEndpoint::new(None);
    let use_case = SendChatMessageUseCase::new(endpoint.clone());
    let mut session = ChatSession::new();

    for i in 0..3 {
        let ticket = session.submit(format!("question {i}")).unwrap();
        endpoint.gate.notify_one();
        let outcome = use_case.dispatch(&ticket).await;
        session.complete(outcome);
    }

    let assistant_count = session
        .transcript()
        .iter()
        .filter(|m| m.role() == MessageRole::Assistant)
        .count();
    assert_eq!(assistant_count, 3);
    assert_eq!(session.len(), 6);
}

#[tokio::test]
async fn test_whitespace_submission_changes_neither_component() {
    let mut session = ChatSession::new();
    let mut request = ImageRequest::new();

    assert!(session.submit("   ").is_none());
    assert!(request.submit("   ").is_none());

    assert!(session.is_empty());
    assert!(!session.is_pending());
    assert_eq!(request, ImageRequest::new());
}

#[tokio::test]
async fn test_image_second_submit_while_pending_is_dropped() {
    let endpoint = GatedEndpoint::new(Some("http://x/first.png"));
    let use_case = GenerateImageUseCase::new(endpoint.clone());
    let mut request = ImageRequest::new();

    let ticket = request.submit("first prompt").expect("first accepted");
    assert!(request.submit("second prompt").is_none());
    assert_eq!(request.prompt(), "first prompt");

    endpoint.gate.notify_one();
    let outcome = use_case.dispatch(&ticket).await;
    request.complete(outcome);

    assert_eq!(endpoint.calls(), 1);
    assert_eq!(request.result_url(), Some("http://x/first.png"));
    assert_eq!(request.prompt(), "first prompt");
}

#[tokio::test]
async fn test_image_cycle_always_leaves_result_or_error() {
    let endpoint = GatedEndpoint::new(None);
    let use_case = GenerateImageUseCase::new(endpoint.clone());
    let mut request = ImageRequest::new();

    endpoint.gate.notify_one();
    use_case.execute(&mut request, "a quiet harbor").await;

    assert!(!request.is_pending());
    assert_eq!(request.error_message(), Some(FALLBACK_NOTICE));
    assert!(request.result_url().is_some());

    assert!(request.reset());
    assert_eq!(request.prompt(), "");
    assert_eq!(request.result_url(), None);
    assert_eq!(request.error_message(), None);
    assert!(!request.is_pending());
}

#[tokio::test]
async fn test_consecutive_fallbacks_use_distinct_placeholders() {
    let endpoint = GatedEndpoint::new(None);
    let use_case = GenerateImageUseCase::new(endpoint.clone());
    let mut request = ImageRequest::new();

    endpoint.gate.notify_one();
    use_case.execute(&mut request, "one").await;
    let first = request.result_url().map(String::from);

    endpoint.gate.notify_one();
    use_case.execute(&mut request, "two").await;
    let second = request.result_url().map(String::from);

    assert!(first.is_some());
    assert_ne!(first, second);
}
