mod chat_session;
mod image_request;
mod message;
mod outcome;

pub use chat_session::*;
pub use image_request::*;
pub use message::*;
pub use outcome::*;
