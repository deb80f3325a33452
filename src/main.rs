use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ai_studio::connector::api::{Container, ContainerConfig, Router};
use ai_studio::{Commands, DEFAULT_BASE_URL, DEFAULT_CHAT_TIMEOUT};

#[derive(Parser)]
#[command(name = "ai-studio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Inference backend base URL [env: AI_STUDIO_BASE_URL] [default: http://localhost:3001]
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Full text endpoint URL, overrides the base URL [env: AI_STUDIO_TEXT_URL]
    #[arg(long, global = true)]
    text_url: Option<String>,

    /// Full image endpoint URL, overrides the base URL [env: AI_STUDIO_IMAGE_URL]
    #[arg(long, global = true)]
    image_url: Option<String>,

    /// Chat request timeout in seconds [env: AI_STUDIO_TIMEOUT_SECS] [default: 30]
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Answer locally instead of calling any endpoint
    #[arg(long, global = true)]
    mock_backend: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let chat_timeout = match cli.timeout_secs {
        Some(secs) => Duration::from_secs(secs),
        None => match std::env::var("AI_STUDIO_TIMEOUT_SECS") {
            Ok(value) => Duration::from_secs(
                value
                    .trim()
                    .parse::<u64>()
                    .with_context(|| format!("invalid AI_STUDIO_TIMEOUT_SECS '{value}'"))?,
            ),
            Err(_) => DEFAULT_CHAT_TIMEOUT,
        },
    };

    let config = ContainerConfig {
        base_url: cli
            .base_url
            .or_else(|| std::env::var("AI_STUDIO_BASE_URL").ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        text_url: cli
            .text_url
            .or_else(|| std::env::var("AI_STUDIO_TEXT_URL").ok()),
        image_url: cli
            .image_url
            .or_else(|| std::env::var("AI_STUDIO_IMAGE_URL").ok()),
        chat_timeout,
        mock_backend: cli.mock_backend,
    };

    let container = Container::new(config)?;
    let router = Router::new(&container);

    let output = router.route(cli.command).await?;
    println!("{}", output);

    Ok(())
}
