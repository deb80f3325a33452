pub mod chat_controller;
pub mod image_controller;
pub mod serve_controller;
mod spinner;

pub use chat_controller::ChatController;
pub use image_controller::ImageController;
pub use serve_controller::ServeController;
