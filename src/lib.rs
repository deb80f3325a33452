pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    GenerateImageUseCase, ImageInference, ImageProbe, SendChatMessageUseCase, TextInference,
    DEFAULT_CHAT_TIMEOUT,
};

pub use cli::Commands;

pub use connector::{
    HttpImageInference, HttpTextInference, MockInference, DEFAULT_BASE_URL, DEFAULT_PORT,
    IMAGE_PATH, TEXT_PATH,
};

pub use domain::{
    ChatSession, ChatTicket, DomainError, ImageRequest, ImageTicket, InferenceOutcome, Message,
    MessageRole, BROKEN_IMAGE_URL, FALLBACK_NOTICE, TIMEOUT_REPLY, UNPROCESSED_REPLY,
};
