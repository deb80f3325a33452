use anyhow::Result;
use tokio::io::BufReader;

use crate::Commands;

use super::container::Container;
use super::controller::{ChatController, ImageController, ServeController};

pub struct Router<'a> {
    chat_controller: ChatController<'a>,
    image_controller: ImageController<'a>,
    serve_controller: ServeController,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            chat_controller: ChatController::new(container),
            image_controller: ImageController::new(container),
            serve_controller: ServeController::new(),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Chat => {
                let stdin = BufReader::new(tokio::io::stdin());
                let mut stdout = std::io::stdout();
                self.chat_controller.interactive(stdin, &mut stdout).await
            }
            Commands::Ask { text } => self.chat_controller.ask(text.join(" ")).await,
            Commands::Image { prompt, verify } => {
                self.image_controller.generate(prompt.join(" "), verify).await
            }
            Commands::Serve { port, public } => self.serve_controller.serve(port, public).await,
        }
    }
}
