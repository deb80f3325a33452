use anyhow::Result;

use crate::ImageRequest;

use super::super::Container;
use super::spinner::pending_spinner;

pub struct ImageController<'a> {
    container: &'a Container,
}

impl<'a> ImageController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn generate(&self, prompt: String, verify: bool) -> Result<String> {
        let use_case = self.container.image_use_case(verify);
        let mut request = ImageRequest::new();

        let spinner = pending_spinner("Generating image...");
        let accepted = use_case.execute(&mut request, &prompt).await;
        spinner.finish_and_clear();

        if !accepted {
            return Ok("Nothing to generate: prompt is empty.".to_string());
        }

        let display_url = use_case.display_url(&request).await;
        Ok(self.format_result(&request, display_url.as_deref()))
    }

    fn format_result(&self, request: &ImageRequest, display_url: Option<&str>) -> String {
        let mut output = String::new();

        if let Some(error) = request.error_message() {
            output.push_str(&format!("{}\n", error));
        }

        if let Some(url) = display_url {
            output.push_str(&format!("Image:  {}\n", url));
        }

        output.push_str(&format!("Prompt: {}", request.prompt()));
        output
    }
}
