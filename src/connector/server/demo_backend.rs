use std::net::SocketAddr;

use axum::routing::{get, post};
use axum::{Json, Router};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{debug, info};

use crate::domain::DomainError;

pub const DEFAULT_PORT: u16 = 3001;

const IMAGE_SIZES: [u32; 3] = [512, 768, 1024];
const PROMPT_TEXT_CHARS: usize = 20;

#[derive(Debug, Deserialize)]
pub struct TextPayload {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct TextReply {
    pub response: String,
}

#[derive(Debug, Deserialize)]
pub struct ImagePayload {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct ImageReply {
    pub image_url: String,
}

#[derive(Debug, Serialize)]
struct StatusReply {
    message: &'static str,
}

/// Builds the demo backend's routes.
///
/// Both endpoints answer with canned content; no inference happens here.
pub fn router() -> Router {
    Router::new()
        .route("/", get(status))
        .route("/api/text", post(generate_text))
        .route("/api/image", post(generate_image))
        .layer(CorsLayer::permissive())
}

/// Binds `addr` and serves the demo backend until the task is dropped.
///
/// Returns the bound address, which differs from `addr` when port 0 was
/// requested.
pub async fn bind(
    addr: SocketAddr,
) -> Result<(SocketAddr, impl std::future::Future<Output = std::io::Result<()>>), DomainError> {
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    info!("Demo backend listening on http://{}", local_addr);

    Ok((local_addr, async move { axum::serve(listener, router()).await }))
}

async fn status() -> Json<StatusReply> {
    Json(StatusReply {
        message: "AI Backend API is running",
    })
}

async fn generate_text(Json(payload): Json<TextPayload>) -> Json<TextReply> {
    debug!("Demo backend: text request ({} chars)", payload.message.len());
    Json(TextReply {
        response: pick_text_response(&payload.message),
    })
}

async fn generate_image(Json(payload): Json<ImagePayload>) -> Json<ImageReply> {
    debug!("Demo backend: image request ({} chars)", payload.prompt.len());
    Json(ImageReply {
        image_url: pick_image_url(&payload.prompt),
    })
}

fn text_responses(message: &str) -> [String; 5] {
    [
        format!("That's an interesting point about '{message}'. Let me elaborate on that concept."),
        format!("I understand you're asking about '{message}'. Here's my perspective on this topic."),
        format!("Regarding '{message}', I think there are several important aspects to consider."),
        format!("Your message about '{message}' reminds me of similar concepts in AI and technology."),
        format!("Thank you for sharing '{message}'. This is a fascinating area to explore further."),
    ]
}

pub fn pick_text_response(message: &str) -> String {
    let mut rng = rand::thread_rng();
    let mut responses = text_responses(message);
    let idx = rng.gen_range(0..responses.len());
    std::mem::take(&mut responses[idx])
}

fn image_urls(prompt: &str, width: u32, height: u32, seed: u32) -> [String; 3] {
    let label: String = prompt
        .chars()
        .take(PROMPT_TEXT_CHARS)
        .map(|c| if c == ' ' { '+' } else { c })
        .collect();

    [
        format!("https://picsum.photos/{width}/{height}?random={seed}"),
        format!("https://via.placeholder.com/{width}x{height}/4338ca/ffffff?text=AI+Generated+Image"),
        format!("https://dummyimage.com/{width}x{height}/6366f1/ffffff.png&text={label}"),
    ]
}

pub fn pick_image_url(prompt: &str) -> String {
    let mut rng = rand::thread_rng();
    let width = *IMAGE_SIZES.choose(&mut rng).unwrap_or(&IMAGE_SIZES[0]);
    let height = *IMAGE_SIZES.choose(&mut rng).unwrap_or(&IMAGE_SIZES[0]);
    let seed = rng.gen_range(1..=1000);

    let mut urls = image_urls(prompt, width, height, seed);
    let idx = rng.gen_range(0..urls.len());
    std::mem::take(&mut urls[idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_response_quotes_message() {
        for _ in 0..10 {
            let response = pick_text_response("quantum kittens");
            assert!(response.contains("'quantum kittens'"));
        }
    }

    #[test]
    fn test_image_label_truncates_and_replaces_spaces() {
        let urls = image_urls("a very long prompt about mountains at dawn", 512, 768, 7);

        assert_eq!(urls[0], "https://picsum.photos/512/768?random=7");
        assert!(urls[2].ends_with("&text=a+very+long+prompt+a"));
    }

    #[test]
    fn test_image_url_uses_known_sizes() {
        for _ in 0..10 {
            let url = pick_image_url("cat");
            assert!(IMAGE_SIZES.iter().any(|s| url.contains(&s.to_string())));
        }
    }
}
