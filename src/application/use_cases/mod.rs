mod generate_image;
mod send_chat_message;

pub use generate_image::*;
pub use send_chat_message::*;
