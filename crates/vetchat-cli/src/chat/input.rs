//! Async readline input handling for the chat loop.
//!
//! Wraps `rustyline_async::Readline` so the blocking terminal read runs
//! off the receive path: the receiver task keeps processing inbound
//! frames while the user types (or doesn't).

use rustyline_async::{Readline, ReadlineError, ReadlineEvent, SharedWriter};

/// Events produced by the input handler.
#[derive(Debug)]
pub enum InputEvent {
    /// User submitted a line (trimmed).
    Line(String),
    /// End of input (Ctrl+D).
    Eof,
    /// Interrupt signal (Ctrl+C).
    Interrupted,
}

/// Async input handler for the chat prompt.
pub struct ChatInput {
    rl: Readline,
}

impl ChatInput {
    /// Create the input handler with the given prompt.
    ///
    /// Also returns the `SharedWriter` other tasks must print through so
    /// streamed output does not interleave with the live prompt.
    pub fn new(prompt: String) -> Result<(Self, SharedWriter), ReadlineError> {
        let (rl, writer) = Readline::new(prompt)?;
        Ok((Self { rl }, writer))
    }

    /// Read one line of input.
    pub async fn read_line(&mut self) -> InputEvent {
        match self.rl.readline().await {
            Ok(ReadlineEvent::Line(line)) => InputEvent::Line(line.trim().to_string()),
            Ok(ReadlineEvent::Eof) => InputEvent::Eof,
            Ok(ReadlineEvent::Interrupted) => InputEvent::Interrupted,
            Err(_) => InputEvent::Eof,
        }
    }
}
