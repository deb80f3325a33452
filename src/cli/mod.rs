use clap::Subcommand;

use crate::DEFAULT_PORT;

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session reading messages from stdin
    Chat,

    /// Send a single chat message and print the reply
    Ask {
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Generate an image from a text prompt
    Image {
        #[arg(required = true)]
        prompt: Vec<String>,

        /// Check that the resulting image can be loaded before showing it
        #[arg(long)]
        verify: bool,
    },

    /// Run the demo inference backend serving /api/text and /api/image
    Serve {
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the server on all network interfaces
        #[arg(long)]
        public: bool,
    },
}
