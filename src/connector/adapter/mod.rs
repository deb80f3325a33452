mod http_image_inference;
mod http_text_inference;
mod mock_inference;

pub use http_image_inference::*;
pub use http_text_inference::*;
pub use mock_inference::*;
