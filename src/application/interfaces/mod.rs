mod image_inference;
mod text_inference;

pub use image_inference::*;
pub use text_inference::*;
