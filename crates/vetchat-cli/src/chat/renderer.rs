//! Terminal rendering for streamed server output.
//!
//! Streamed chunks are printed raw with no trailing newline and flushed
//! immediately, so partial assistant text appears as it arrives. Status,
//! error, and end-of-conversation lines get their own styled blocks.

use std::io::Write;

use console::style;

use vetchat_core::ServerUpdate;

/// Renders server updates and client notices to a writer.
///
/// Generic over the writer so the receiver task can print through the
/// readline `SharedWriter` while tests capture output in a buffer.
pub struct StreamRenderer<W: Write> {
    out: W,
}

impl<W: Write> StreamRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Access the underlying writer (used for multi-line help output).
    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    /// Render one server update.
    pub fn render(&mut self, update: &ServerUpdate) {
        match update {
            ServerUpdate::Chunk(text) => {
                let _ = write!(self.out, "{text}");
                let _ = self.out.flush();
            }
            ServerUpdate::Status(status) => {
                let _ = writeln!(
                    self.out,
                    "\n\n  {}",
                    style(format!("[Status: {status}]")).cyan()
                );
                let _ = self.out.flush();
            }
            ServerUpdate::Error(error) => {
                self.report_error(&format!("Error: {error}"));
            }
            ServerUpdate::Ended { message, status } => {
                let _ = writeln!(
                    self.out,
                    "\n\n  {}",
                    style("[Conversation Ended]").cyan().bold()
                );
                if let Some(message) = message {
                    let _ = writeln!(self.out, "  Message: {message}");
                }
                if let Some(status) = status {
                    let _ = writeln!(self.out, "  Status: {status}");
                }
                let _ = self.out.flush();
            }
            ServerUpdate::Unrecognized(kind) => {
                let _ = writeln!(
                    self.out,
                    "\n  {} Unknown message type: {kind}",
                    style("?").yellow().bold()
                );
                let _ = self.out.flush();
            }
        }
    }

    /// Dim informational line.
    pub fn notice(&mut self, text: &str) {
        let _ = writeln!(self.out, "\n  {}", style(text).dim());
        let _ = self.out.flush();
    }

    /// Guidance line for protocol misuse (nothing was sent).
    pub fn warn(&mut self, text: &str) {
        let _ = writeln!(self.out, "\n  {} {text}", style("!").yellow().bold());
        let _ = self.out.flush();
    }

    /// Failure line.
    pub fn report_error(&mut self, text: &str) {
        let _ = writeln!(self.out, "\n  {} {text}", style("\u{2717}").red().bold());
        let _ = self.out.flush();
    }

    pub fn farewell(&mut self) {
        self.notice("Goodbye!");
    }
}
