use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::ChatSession;

use super::super::Container;
use super::spinner::pending_spinner;

const QUIT_COMMAND: &str = "/quit";

pub struct ChatController<'a> {
    container: &'a Container,
}

impl<'a> ChatController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// One chat cycle on a fresh session; returns the assistant reply.
    pub async fn ask(&self, text: String) -> Result<String> {
        let use_case = self.container.chat_use_case();
        let mut session = ChatSession::new();

        let spinner = pending_spinner("Thinking...");
        let reply = use_case.execute(&mut session, &text).await;
        spinner.finish_and_clear();

        Ok(match reply {
            Some(message) => message.text().to_string(),
            None => "Nothing to send: message is empty.".to_string(),
        })
    }

    /// Reads lines from `input` until EOF or `/quit`, submitting each one to
    /// a single session and writing replies to `output`.
    pub async fn interactive<R, W>(&self, input: R, output: &mut W) -> Result<String>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let use_case = self.container.chat_use_case();
        let mut session = ChatSession::new();
        let mut lines = input.lines();

        writeln!(
            output,
            "Chatting with {} (type {} to exit)",
            self.container.text_endpoint(),
            QUIT_COMMAND
        )?;

        while let Some(line) = lines.next_line().await? {
            if line.trim() == QUIT_COMMAND {
                break;
            }

            session.set_draft(line);
            let Some(ticket) = session.submit_draft() else {
                continue;
            };

            let spinner = pending_spinner("Thinking...");
            let outcome = use_case.dispatch(&ticket).await;
            spinner.finish_and_clear();

            if let Some(reply) = session.complete(outcome) {
                writeln!(output, "{}", reply.display_line())?;
            }
            output.flush()?;
        }

        Ok(format!("Chat ended after {} messages.", session.len()))
    }
}
